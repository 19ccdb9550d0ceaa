use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ActionError;
use crate::output::OutputSink;
use crate::provider::{ActionLogger, LogSink, TempDirProvider};

/// Runtime context provided to every action during execution.
///
/// Constructed by the executor before invoking a handler. Carries the
/// input payload, the provisioned workspace path, and thin views over
/// per-execution state: the output sink the executor later snapshots and
/// the temp-dir factory scoped to the workspace.
///
/// A context built with [`new`](Self::new) alone is fully usable in
/// tests; the logging ports and the temp-dir provider are attached with
/// the `with_*` builders and degrade to no-ops or capability errors when
/// absent.
#[non_exhaustive]
pub struct ActionContext {
    /// Input payload for this execution.
    pub input: serde_json::Map<String, serde_json::Value>,
    /// Root directory provisioned for this execution.
    pub workspace_path: PathBuf,
    /// Shared output accumulator; writes land in the executor's copy.
    outputs: OutputSink,
    /// Factory for workspace-scoped temporary directories.
    temp_dirs: Option<Arc<dyn TempDirProvider>>,
    /// Optional logger for human-readable handler messages.
    logger: Option<Arc<dyn ActionLogger>>,
    /// Optional raw byte stream for unstructured handler output.
    log_sink: Option<Arc<dyn LogSink>>,
}

impl ActionContext {
    /// Create a context over an input payload and workspace path.
    pub fn new(
        input: serde_json::Map<String, serde_json::Value>,
        workspace_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input,
            workspace_path: workspace_path.into(),
            outputs: OutputSink::new(),
            temp_dirs: None,
            logger: None,
            log_sink: None,
        }
    }

    /// Replace the output sink with a shared one.
    ///
    /// The executor passes its own handle here so recorded outputs are
    /// visible to it after the handler returns.
    pub fn with_outputs(mut self, outputs: OutputSink) -> Self {
        self.outputs = outputs;
        self
    }

    /// Attach a temp-dir provider.
    pub fn with_temp_dirs(mut self, provider: Arc<dyn TempDirProvider>) -> Self {
        self.temp_dirs = Some(provider);
        self
    }

    /// Attach a logger.
    pub fn with_logger(mut self, logger: Arc<dyn ActionLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Attach a raw log sink.
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// The provisioned workspace path.
    pub fn workspace_path(&self) -> &Path {
        &self.workspace_path
    }

    /// Record a named output.
    ///
    /// Overwrites any output previously recorded under the same name.
    /// Recorded values survive the handler and become the execution
    /// result; a handler that records nothing yields an empty map.
    pub fn output(&self, name: impl Into<String>, value: serde_json::Value) {
        self.outputs.record(name, value);
    }

    /// Create a unique temporary directory under the workspace.
    ///
    /// Each call returns a distinct directory. Directories are tracked by
    /// the executor and left on disk after the handler returns.
    ///
    /// # Errors
    ///
    /// Returns a capability error if no provider is attached, or the
    /// provider's own error if creation fails.
    pub async fn create_temp_dir(&self) -> Result<PathBuf, ActionError> {
        match &self.temp_dirs {
            Some(provider) => provider.create_temp_dir().await,
            None => Err(ActionError::capability(
                "temp_dirs",
                "no temporary-directory provider configured",
            )),
        }
    }

    /// Log a debug message. No-op if no logger is attached.
    pub fn log_debug(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.debug(message);
        }
    }

    /// Log an info message. No-op if no logger is attached.
    pub fn log_info(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.info(message);
        }
    }

    /// Log a warning. No-op if no logger is attached.
    pub fn log_warn(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.warn(message);
        }
    }

    /// Log an error. No-op if no logger is attached.
    pub fn log_error(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.error(message);
        }
    }

    /// Append raw bytes to the execution log stream. No-op if no sink is
    /// attached.
    pub fn write_log(&self, bytes: &[u8]) {
        if let Some(sink) = &self.log_sink {
            sink.write(bytes);
        }
    }
}

impl std::fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContext")
            .field("workspace_path", &self.workspace_path)
            .field("input_keys", &self.input.len())
            .field("outputs", &self.outputs.len())
            .finish_non_exhaustive()
    }
}
