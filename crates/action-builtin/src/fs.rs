//! The `fs:delete` action.

use async_trait::async_trait;

use stencil_action::{Action, ActionContext, ActionError, ActionMetadata};

use crate::input;
use crate::paths;

/// Removes workspace-relative `files`, directories included.
///
/// Paths are resolved through the workspace guard, so nothing outside
/// the workspace can be named. Entries that are already gone are
/// skipped; symlinks are removed as links, never followed. Records no
/// outputs.
#[derive(Debug)]
pub struct FsDeleteAction {
    metadata: ActionMetadata,
}

impl FsDeleteAction {
    /// Identifier this action registers under.
    pub const ID: &'static str = "fs:delete";

    /// New `fs:delete` action.
    pub fn new() -> Self {
        Self {
            metadata: ActionMetadata::new(Self::ID, "Deletes files from the workspace")
                .with_input_schema(serde_json::json!({
                    "type": "object",
                    "required": ["files"],
                    "properties": {
                        "files": {
                            "type": "array",
                            "items": { "type": "string" },
                        },
                    },
                })),
        }
    }
}

impl Default for FsDeleteAction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for FsDeleteAction {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }

    async fn handler(&self, ctx: &ActionContext) -> Result<(), ActionError> {
        let files = input::require_str_array(&ctx.input, "files")?;
        for file in files {
            let target = paths::resolve_in_workspace(ctx.workspace_path(), file)?;
            let metadata = match tokio::fs::symlink_metadata(&target).await {
                Ok(metadata) => metadata,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    ctx.log_debug(&format!("Nothing to delete at {file:?}"));
                    continue;
                }
                Err(source) => return Err(ActionError::io(target, source)),
            };

            let removed = if metadata.is_dir() {
                tokio::fs::remove_dir_all(&target).await
            } else {
                tokio::fs::remove_file(&target).await
            };
            removed.map_err(|source| ActionError::io(target, source))?;
            ctx.log_debug(&format!("Deleted {file:?}"));
        }
        Ok(())
    }
}
