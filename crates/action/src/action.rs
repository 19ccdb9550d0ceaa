use async_trait::async_trait;

use crate::context::ActionContext;
use crate::error::ActionError;
use crate::metadata::ActionMetadata;

/// Base trait implemented by every executable action.
///
/// An action is a named, versioned unit of work. The engine resolves it
/// by `metadata().id` and drives it through [`handler`](Self::handler);
/// everything the handler needs at runtime arrives through the context.
///
/// # Object Safety
///
/// This trait is object-safe and is stored as `Arc<dyn Action>` in the
/// registry, shared across executions.
#[async_trait]
pub trait Action: Send + Sync + 'static {
    /// Static metadata describing this action.
    fn metadata(&self) -> &ActionMetadata;

    /// Run the action against the given execution context.
    ///
    /// Outputs are reported through [`ActionContext::output`]; the return
    /// value carries only success or failure. Handlers may suspend on
    /// asynchronous work and may call the context capabilities any number
    /// of times before returning.
    async fn handler(&self, ctx: &ActionContext) -> Result<(), ActionError>;
}
