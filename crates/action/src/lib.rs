//! # Stencil Action System
//!
//! Defines **what** actions are and **how they communicate** with the
//! execution engine, but not how the engine drives them. It follows the
//! Ports & Drivers architecture: core types live here, concrete runtime
//! services (configuration, logging, catalog access, content fetching)
//! are injected through the port traits in [`provider`].
//!
//! ## Core Types
//!
//! - [`Action`] — base trait: identity plus an async handler
//! - [`ActionMetadata`] — static descriptor (id, version, schemas)
//! - [`ActionContext`] — per-execution capability bundle
//! - [`ActionRegistry`] — type-erased discovery and lookup by id
//! - [`OutputSink`] / [`StepOutput`] — output accumulation for one run
//! - [`ActionError`] — error type shared by handlers and ports
//! - [`FnAction`] — closure adapter for embedders and tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use stencil_action::{Action, ActionContext, ActionError, ActionMetadata};
//!
//! struct Greet {
//!     meta: ActionMetadata,
//! }
//!
//! #[async_trait]
//! impl Action for Greet {
//!     fn metadata(&self) -> &ActionMetadata {
//!         &self.meta
//!     }
//!
//!     async fn handler(&self, ctx: &ActionContext) -> Result<(), ActionError> {
//!         ctx.log_info("saying hello");
//!         ctx.output("greeting", serde_json::json!("hello"));
//!         Ok(())
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Base action trait defining identity and the async handler.
pub mod action;
/// Adapters bridging closures to [`Action`].
pub mod adapters;
/// Runtime context provided to actions during execution.
pub mod context;
/// Error type shared by handlers and ports.
pub mod error;
/// Static metadata and interface versioning.
pub mod metadata;
/// Output accumulation for a single execution.
pub mod output;
/// Dependency-injection port traits (config, logging, catalog, fetching).
pub mod provider;
/// Action registry for type-erased discovery and lookup.
pub mod registry;

// ── Public re-exports ───────────────────────────────────────────────────────

pub use action::Action;
pub use adapters::{FnAction, HandlerFuture};
pub use context::ActionContext;
pub use error::ActionError;
pub use metadata::{ActionMetadata, InterfaceVersion};
pub use output::{OutputSink, StepOutput};
pub use provider::{
    ActionLogger, ActionSource, CatalogClient, ConfigSource, ContentFetcher, LogSink,
    TempDirProvider,
};
pub use registry::ActionRegistry;
