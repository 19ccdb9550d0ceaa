use std::fmt;

use serde::{Deserialize, Serialize};

/// Interface version of an action — changes only when the input/output
/// contract changes.
///
/// Two versions are compatible when the major numbers match and the
/// provider's minor number is at least the consumer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceVersion {
    /// Incremented on breaking contract changes.
    pub major: u32,
    /// Incremented on backwards-compatible additions.
    pub minor: u32,
}

impl InterfaceVersion {
    /// Create a version from its parts.
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Whether this version can serve a consumer expecting `required`.
    pub fn is_compatible_with(&self, required: &Self) -> bool {
        self.major == required.major && self.minor >= required.minor
    }
}

impl fmt::Display for InterfaceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Static metadata describing an action.
///
/// Used for discovery, listing, and schema documentation. The `id` is the
/// registry key callers pass to the executor (e.g. `"fetch:plain"`).
#[derive(Debug, Clone)]
pub struct ActionMetadata {
    /// Unique identifier used for registration and lookup.
    pub id: String,
    /// Short description of what this action does.
    pub description: String,
    /// Interface version of the input/output contract.
    pub version: InterfaceVersion,
    /// JSON Schema for the input payload (optional).
    pub input_schema: Option<serde_json::Value>,
    /// JSON Schema for the recorded outputs (optional).
    pub output_schema: Option<serde_json::Value>,
}

impl ActionMetadata {
    /// Create metadata with the minimum required fields.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            version: InterfaceVersion::new(1, 0),
            input_schema: None,
            output_schema: None,
        }
    }

    /// Set the interface version (major, minor).
    pub fn with_version(mut self, major: u32, minor: u32) -> Self {
        self.version = InterfaceVersion::new(major, minor);
        self
    }

    /// Set the JSON Schema for the input payload.
    pub fn with_input_schema(mut self, schema: serde_json::Value) -> Self {
        self.input_schema = Some(schema);
        self
    }

    /// Set the JSON Schema for the recorded outputs.
    pub fn with_output_schema(mut self, schema: serde_json::Value) -> Self {
        self.output_schema = Some(schema);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_version_one() {
        let meta = ActionMetadata::new("fs:delete", "Delete workspace files");
        assert_eq!(meta.id, "fs:delete");
        assert_eq!(meta.version, InterfaceVersion::new(1, 0));
        assert!(meta.input_schema.is_none());
        assert!(meta.output_schema.is_none());
    }

    #[test]
    fn builders_set_fields() {
        let meta = ActionMetadata::new("fetch:plain", "Fetch content")
            .with_version(2, 1)
            .with_input_schema(serde_json::json!({"type": "object"}))
            .with_output_schema(serde_json::json!({"type": "object"}));

        assert_eq!(meta.version, InterfaceVersion::new(2, 1));
        assert!(meta.input_schema.is_some());
        assert!(meta.output_schema.is_some());
    }

    #[test]
    fn version_display() {
        assert_eq!(InterfaceVersion::new(1, 4).to_string(), "1.4");
    }

    #[test]
    fn version_compatibility() {
        let provider = InterfaceVersion::new(1, 3);
        assert!(provider.is_compatible_with(&InterfaceVersion::new(1, 0)));
        assert!(provider.is_compatible_with(&InterfaceVersion::new(1, 3)));
        assert!(!provider.is_compatible_with(&InterfaceVersion::new(1, 4)));
        assert!(!provider.is_compatible_with(&InterfaceVersion::new(2, 0)));
    }
}
