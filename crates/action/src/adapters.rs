//! Adapters bridging plain closures into the [`Action`] trait.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;

use crate::action::Action;
use crate::context::ActionContext;
use crate::error::ActionError;
use crate::metadata::ActionMetadata;

/// Boxed future returned by [`FnAction`] handlers.
///
/// The lifetime ties the future to the context borrow, so handlers can
/// read input and record outputs without cloning the context.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<(), ActionError>> + Send + 'a>>;

type BoxedHandler =
    Box<dyn for<'a> Fn(&'a ActionContext) -> HandlerFuture<'a> + Send + Sync + 'static>;

/// An [`Action`] backed by a closure.
///
/// Lets embedders and tests define actions without a dedicated type.
/// Annotate the closure's return type so the async block coerces:
///
/// ```rust,ignore
/// let echo = FnAction::new(
///     ActionMetadata::new("test:echo", "Echo a fixed value"),
///     |ctx: &ActionContext| -> HandlerFuture<'_> {
///         Box::pin(async move {
///             ctx.output("value", serde_json::json!(42));
///             Ok(())
///         })
///     },
/// );
/// ```
pub struct FnAction {
    metadata: ActionMetadata,
    handler: BoxedHandler,
}

impl FnAction {
    /// Wrap `handler` under the given metadata.
    pub fn new<F>(metadata: ActionMetadata, handler: F) -> Self
    where
        F: for<'a> Fn(&'a ActionContext) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        Self {
            metadata,
            handler: Box::new(handler),
        }
    }
}

#[async_trait]
impl Action for FnAction {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }

    async fn handler(&self, ctx: &ActionContext) -> Result<(), ActionError> {
        (self.handler)(ctx).await
    }
}

impl fmt::Debug for FnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAction")
            .field("id", &self.metadata.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::output::OutputSink;

    fn echo_action() -> FnAction {
        FnAction::new(
            ActionMetadata::new("test:echo", "Echo a fixed value"),
            |ctx: &ActionContext| -> HandlerFuture<'_> {
                Box::pin(async move {
                    ctx.output("value", serde_json::json!(42));
                    Ok(())
                })
            },
        )
    }

    #[test]
    fn metadata_passes_through() {
        let action = echo_action();
        assert_eq!(action.metadata().id, "test:echo");
    }

    #[tokio::test]
    async fn handler_runs_closure() {
        let sink = OutputSink::new();
        let ctx = ActionContext::new(serde_json::Map::new(), "/work/area")
            .with_outputs(sink.clone());

        echo_action().handler(&ctx).await.unwrap();

        assert_eq!(sink.snapshot()["value"], serde_json::json!(42));
    }

    #[tokio::test]
    async fn handler_propagates_errors() {
        let failing = FnAction::new(
            ActionMetadata::new("test:fail", "Always fails"),
            |_ctx: &ActionContext| -> HandlerFuture<'_> {
                Box::pin(async move { Err(ActionError::failed("boom")) })
            },
        );

        let ctx = ActionContext::new(serde_json::Map::new(), "/work/area");
        let err = failing.handler(&ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[tokio::test]
    async fn handler_reads_input() {
        let doubler = FnAction::new(
            ActionMetadata::new("test:double", "Double the input"),
            |ctx: &ActionContext| -> HandlerFuture<'_> {
                Box::pin(async move {
                    let n = ctx.input["n"].as_i64().ok_or_else(|| {
                        ActionError::invalid_input("`n` must be an integer")
                    })?;
                    ctx.output("doubled", serde_json::json!(n * 2));
                    Ok(())
                })
            },
        );

        let mut input = serde_json::Map::new();
        input.insert("n".into(), serde_json::json!(21));
        let sink = OutputSink::new();
        let ctx = ActionContext::new(input, "/work/area").with_outputs(sink.clone());

        doubler.handler(&ctx).await.unwrap();
        assert_eq!(sink.snapshot()["doubled"], serde_json::json!(42));
    }

    #[test]
    fn debug_format_shows_id() {
        let debug = format!("{:?}", echo_action());
        assert!(debug.contains("FnAction"));
        assert!(debug.contains("test:echo"));
    }
}
