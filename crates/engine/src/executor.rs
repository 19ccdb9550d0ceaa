//! The single-action executor.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use stencil_action::{
    Action, ActionContext, ActionLogger, ActionMetadata, ActionRegistry, ActionSource,
    ConfigSource, LogSink, OutputSink, StepOutput,
};

use crate::error::{EngineError, Result};
use crate::logging::{TracingLogger, TracingLogSink};
use crate::request::ExecutionRequest;
use crate::workspace::{self, ScopedTempDirs};

/// Executes single actions against provisioned workspaces.
///
/// Owns the registry and populates it lazily from the injected
/// [`ActionSource`] on first use. One call drives one handler start to
/// finish with no internal parallelism; concurrent calls are isolated
/// from each other by their workspace subpaths.
pub struct ActionExecutor {
    registry: RwLock<ActionRegistry>,
    source: Arc<dyn ActionSource>,
    config: Arc<dyn ConfigSource>,
    logger: Arc<dyn ActionLogger>,
    log_sink: Arc<dyn LogSink>,
}

impl ActionExecutor {
    /// Executor over the given configuration and action source.
    ///
    /// Handler logging defaults to the `tracing` drivers; swap them with
    /// [`with_logger`](Self::with_logger) and
    /// [`with_log_sink`](Self::with_log_sink).
    pub fn new(config: Arc<dyn ConfigSource>, source: Arc<dyn ActionSource>) -> Self {
        Self {
            registry: RwLock::new(ActionRegistry::new()),
            source,
            config,
            logger: Arc::new(TracingLogger),
            log_sink: Arc::new(TracingLogSink),
        }
    }

    /// Replace the logger handed to action handlers.
    pub fn with_logger(mut self, logger: Arc<dyn ActionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Replace the raw log sink handed to action handlers.
    pub fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = sink;
        self
    }

    /// Register every action from the source, overwriting matching ids.
    ///
    /// Safe to call repeatedly; a reload re-registers the same ids in
    /// place and the registry ends up in the same state.
    pub fn load_actions(&self) {
        let mut registry = self.registry.write();
        for action in self.source.actions() {
            tracing::debug!(action_id = %action.metadata().id, "Registered action");
            registry.register(action);
        }
    }

    /// Look up a registered action by id.
    ///
    /// Pure lookup: no lazy population happens here.
    pub fn get_action(&self, action_id: &str) -> Result<Arc<dyn Action>> {
        self.registry
            .read()
            .get(action_id)
            .cloned()
            .ok_or_else(|| EngineError::action_not_found(action_id))
    }

    /// Metadata for every registered action, in registration order.
    pub fn list_actions(&self) -> Vec<ActionMetadata> {
        self.registry.read().list().into_iter().cloned().collect()
    }

    /// Populate the registry from the source if it is still empty.
    ///
    /// The whole check-and-load runs under the write lock: concurrent
    /// first calls serialize here, and losers of the race find a
    /// populated registry and register nothing twice.
    fn ensure_loaded(&self) {
        let mut registry = self.registry.write();
        if registry.is_empty() {
            for action in self.source.actions() {
                registry.register(action);
            }
        }
    }

    /// Execute one action and return its recorded outputs.
    ///
    /// Resolution happens before anything touches disk; an unknown
    /// action id leaves no workspace behind. Handler failures pass
    /// through unwrapped.
    ///
    /// # Errors
    ///
    /// [`EngineError::ActionNotFound`] for unknown ids,
    /// [`EngineError::WorkingDirectory`] / [`EngineError::Provision`] /
    /// [`EngineError::InvalidInstanceId`] for workspace failures;
    /// handler failures surface as [`EngineError::Handler`] with the
    /// handler's own message.
    pub async fn execute(&self, request: ExecutionRequest) -> Result<StepOutput> {
        self.ensure_loaded();
        let action = self.get_action(&request.action_id)?;

        let root = workspace::resolve_root_dir(self.config.as_ref()).await?;
        let workspace_path =
            workspace::derive_workspace_path(&root, request.instance_id.as_deref())?;
        workspace::provision(&workspace_path).await?;

        let outputs = OutputSink::new();
        let temp_dirs = Arc::new(ScopedTempDirs::new(workspace_path.clone()));
        let ctx = ActionContext::new(request.input, workspace_path.clone())
            .with_outputs(outputs.clone())
            .with_temp_dirs(temp_dirs.clone())
            .with_logger(self.logger.clone())
            .with_log_sink(self.log_sink.clone());

        tracing::debug!(
            action_id = %request.action_id,
            workspace = %workspace_path.display(),
            "Invoking action handler"
        );
        action.handler(&ctx).await?;

        let retained = temp_dirs.created();
        if !retained.is_empty() {
            tracing::debug!(
                action_id = %request.action_id,
                count = retained.len(),
                "Temporary directories retained under workspace"
            );
        }

        Ok(outputs.snapshot())
    }
}

impl fmt::Debug for ActionExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionExecutor")
            .field("registered", &self.registry.read().len())
            .finish_non_exhaustive()
    }
}
