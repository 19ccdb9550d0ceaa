//! The `debug:log` action.

use std::path::Path;

use async_trait::async_trait;

use stencil_action::{Action, ActionContext, ActionError, ActionMetadata};

use crate::input;

/// Writes the `message` input to the execution log.
///
/// With `list_workspace` set, also logs the workspace's contents, which
/// makes it a handy probe for what earlier runs left behind. Records no
/// outputs.
#[derive(Debug)]
pub struct DebugLogAction {
    metadata: ActionMetadata,
}

impl DebugLogAction {
    /// Identifier this action registers under.
    pub const ID: &'static str = "debug:log";

    /// New `debug:log` action.
    pub fn new() -> Self {
        Self {
            metadata: ActionMetadata::new(Self::ID, "Writes a message to the execution log")
                .with_input_schema(serde_json::json!({
                    "type": "object",
                    "required": ["message"],
                    "properties": {
                        "message": { "type": "string" },
                        "list_workspace": { "type": "boolean" },
                    },
                })),
        }
    }
}

impl Default for DebugLogAction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for DebugLogAction {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }

    async fn handler(&self, ctx: &ActionContext) -> Result<(), ActionError> {
        let message = input::require_str(&ctx.input, "message")?;
        ctx.log_info(message);
        ctx.write_log(message.as_bytes());

        if input::flag(&ctx.input, "list_workspace")? {
            let entries = list_workspace(ctx.workspace_path()).await?;
            let line = format!("Workspace contents: {}", entries.join(", "));
            ctx.write_log(line.as_bytes());
        }
        Ok(())
    }
}

/// Workspace-relative paths of everything under `root`, sorted.
async fn list_workspace(root: &Path) -> Result<Vec<String>, ActionError> {
    let mut entries = Vec::new();
    let mut pending = vec![root.to_owned()];
    while let Some(dir) = pending.pop() {
        let mut listing = tokio::fs::read_dir(&dir)
            .await
            .map_err(|source| ActionError::io(dir.clone(), source))?;
        while let Some(entry) = listing
            .next_entry()
            .await
            .map_err(|source| ActionError::io(dir.clone(), source))?
        {
            let path = entry.path();
            if entry
                .file_type()
                .await
                .map_err(|source| ActionError::io(path.clone(), source))?
                .is_dir()
            {
                pending.push(path.clone());
            }
            entries.push(relative_name(root, &path));
        }
    }
    entries.sort();
    Ok(entries)
}

fn relative_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
