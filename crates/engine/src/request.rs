//! Execution request type.

use serde::{Deserialize, Serialize};

/// A request to execute one registered action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Identifier of the action to run.
    pub action_id: String,

    /// Optional caller-supplied token making the workspace path
    /// reproducible: the same id always derives the same path. Must be a
    /// single path component. Omitted, every execution gets a fresh
    /// workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    /// Input payload handed to the action handler.
    #[serde(default)]
    pub input: serde_json::Map<String, serde_json::Value>,
}

impl ExecutionRequest {
    /// Request with an empty input payload and no instance id.
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            instance_id: None,
            input: serde_json::Map::new(),
        }
    }

    /// Set the instance id.
    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }

    /// Set the input payload.
    pub fn with_input(mut self, input: serde_json::Map<String, serde_json::Value>) -> Self {
        self.input = input;
        self
    }
}
