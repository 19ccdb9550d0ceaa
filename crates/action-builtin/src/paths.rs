//! Workspace-relative path resolution for filesystem-touching actions.

use std::path::{Component, Path, PathBuf};

use stencil_action::ActionError;

/// Resolve a caller-supplied relative path inside the workspace.
///
/// Only normal components and `.` are allowed; absolute paths and any
/// `..` are rejected, so the result always stays under `workspace`.
pub(crate) fn resolve_in_workspace(
    workspace: &Path,
    relative: &str,
) -> Result<PathBuf, ActionError> {
    if relative.is_empty() {
        return Err(ActionError::invalid_input("path must not be empty"));
    }
    let candidate = Path::new(relative);
    let escapes = candidate
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ActionError::invalid_input(format!(
            "path {relative:?} escapes the workspace"
        )));
    }
    Ok(workspace.join(candidate))
}
