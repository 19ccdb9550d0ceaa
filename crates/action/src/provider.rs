//! Dependency-injection port traits for actions and the engine.
//!
//! These traits decouple action handlers and the executor from concrete
//! runtime services (configuration, logging, catalog lookup, content
//! fetching, temp-dir creation) so both can be tested and embedded in
//! different environments without modification.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::action::Action;
use crate::error::ActionError;

/// Port trait for read-only configuration lookup.
///
/// The engine reads plain string values by dotted key; loading and
/// layering of configuration stays outside the core.
pub trait ConfigSource: Send + Sync {
    /// Whether a value is configured under `key`.
    fn has(&self, key: &str) -> bool;

    /// Read a string value by key.
    fn get_string(&self, key: &str) -> Option<String>;
}

/// Port trait for action-level logging.
///
/// Handlers use this to emit human-readable messages that are captured
/// by the runtime's logging infrastructure. Write-only.
pub trait ActionLogger: Send + Sync {
    /// Log a debug message.
    fn debug(&self, message: &str);
    /// Log an info message.
    fn info(&self, message: &str);
    /// Log a warning.
    fn warn(&self, message: &str);
    /// Log an error.
    fn error(&self, message: &str);
}

/// Port trait for the raw log byte stream attached to an execution.
///
/// Carries unstructured handler output (subprocess stdout, rendered
/// progress) alongside the structured [`ActionLogger`]. Write-only.
pub trait LogSink: Send + Sync {
    /// Append raw bytes to the execution log stream.
    fn write(&self, bytes: &[u8]);
}

/// Port trait for resolving catalog entities by reference.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch an entity by its reference string.
    ///
    /// Returns `Ok(None)` when the reference resolves to nothing.
    async fn entity(&self, entity_ref: &str) -> Result<Option<serde_json::Value>, ActionError>;
}

/// Port trait for fetching remote content as raw bytes.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch the content behind `url`.
    async fn fetch(&self, url: &str) -> Result<bytes::Bytes, ActionError>;
}

/// Port trait for scoped temporary-directory creation.
///
/// Implemented by the engine. Every directory handed out lives under the
/// workspace of the current execution and stays on disk after the
/// handler returns; cleanup belongs to whoever owns the workspace tree.
#[async_trait]
pub trait TempDirProvider: Send + Sync {
    /// Create a new unique temporary directory and return its path.
    async fn create_temp_dir(&self) -> Result<PathBuf, ActionError>;
}

/// Port trait supplying the action set used to populate a registry.
pub trait ActionSource: Send + Sync {
    /// Produce the actions to register.
    fn actions(&self) -> Vec<Arc<dyn Action>>;
}
