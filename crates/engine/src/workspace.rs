//! Workspace provisioning: root resolution, path derivation, and scoped
//! temporary directories.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;

use stencil_action::{ActionError, ConfigSource, TempDirProvider};

use crate::config::WORKING_DIR_KEY;
use crate::error::{EngineError, Result, UnavailableReason};

/// Resolve the root directory under which workspaces are derived.
///
/// A directory configured under [`WORKING_DIR_KEY`] must already exist
/// and accept writes; either check failing aborts the execution. With no
/// configuration the system temp directory is used as-is.
pub async fn resolve_root_dir(config: &dyn ConfigSource) -> Result<PathBuf> {
    let Some(configured) = config.get_string(WORKING_DIR_KEY) else {
        let fallback = std::env::temp_dir();
        tracing::debug!(
            path = %fallback.display(),
            "No working directory configured, falling back to system temp"
        );
        return Ok(fallback);
    };

    let path = PathBuf::from(configured);
    if let Err(source) = tokio::fs::metadata(&path).await {
        let reason = if source.kind() == std::io::ErrorKind::NotFound {
            UnavailableReason::DoesNotExist
        } else {
            UnavailableReason::NotWritable
        };
        tracing::error!(path = %path.display(), %reason, "Working directory is unavailable");
        return Err(EngineError::WorkingDirectory {
            path,
            reason,
            source,
        });
    }

    if let Err(source) = probe_writable(&path) {
        tracing::error!(path = %path.display(), "Working directory is not writable");
        return Err(EngineError::WorkingDirectory {
            path,
            reason: UnavailableReason::NotWritable,
            source,
        });
    }

    tracing::info!(path = %path.display(), "Using configured working directory");
    Ok(path)
}

/// Probe with an anonymous temp file; the file is unlinked on drop so
/// nothing is left behind.
fn probe_writable(path: &Path) -> std::io::Result<()> {
    tempfile::tempfile_in(path).map(drop)
}

/// Derive the workspace path for one execution.
///
/// The same `instance_id` always yields the same path; with no id each
/// call yields a fresh collision-resistant path. Pure derivation, no
/// filesystem access.
pub fn derive_workspace_path(root: &Path, instance_id: Option<&str>) -> Result<PathBuf> {
    let name = match instance_id {
        Some(id) => {
            validate_instance_id(id)?;
            id.to_owned()
        }
        None => uuid::Uuid::new_v4().to_string(),
    };
    Ok(root.join(name))
}

/// Instance ids become a single path component under the root; anything
/// that could escape it is rejected before touching disk.
fn validate_instance_id(id: &str) -> Result<()> {
    let mut components = Path::new(id).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if single_normal {
        Ok(())
    } else {
        Err(EngineError::invalid_instance_id(id))
    }
}

/// Create the workspace directory itself.
///
/// Creation is the provisioner's responsibility, not the handler's: a
/// successful execution always leaves the workspace directory on disk.
pub async fn provision(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| EngineError::Provision {
            path: path.to_owned(),
            source,
        })
}

/// Temporary-directory factory scoped to one execution's workspace.
///
/// Every directory is created under the workspace with a unique
/// `step-` prefixed name, kept on disk, and appended to an ordered
/// bookkeeping list the executor reads back after the handler returns.
/// The engine never deletes these; workspace lifetime belongs to the
/// caller.
pub struct ScopedTempDirs {
    workspace: PathBuf,
    created: Mutex<Vec<PathBuf>>,
}

impl ScopedTempDirs {
    /// Factory rooted at the given workspace directory.
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
            created: Mutex::new(Vec::new()),
        }
    }

    /// Paths handed out so far, in creation order.
    pub fn created(&self) -> Vec<PathBuf> {
        self.created.lock().clone()
    }
}

#[async_trait]
impl TempDirProvider for ScopedTempDirs {
    async fn create_temp_dir(&self) -> std::result::Result<PathBuf, ActionError> {
        let dir = tempfile::Builder::new()
            .prefix("step-")
            .tempdir_in(&self.workspace)
            .map_err(|source| ActionError::io(self.workspace.clone(), source))?;
        let path = dir.keep();
        self.created.lock().push(path.clone());
        Ok(path)
    }
}

impl std::fmt::Debug for ScopedTempDirs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedTempDirs")
            .field("workspace", &self.workspace)
            .field("created", &self.created.lock().len())
            .finish()
    }
}
