//! # Stencil Engine
//!
//! Single-action execution engine: resolves a registered action by id,
//! provisions an isolated workspace directory, assembles the execution
//! context, runs the handler, and returns its recorded outputs.
//!
//! The engine consumes the port traits defined in `stencil-action`
//! ([`ConfigSource`](stencil_action::ConfigSource),
//! [`ActionSource`](stencil_action::ActionSource)) and ships `tracing`
//! drivers for the context logging ports.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stencil_engine::{ActionExecutor, ExecutionRequest, MemoryConfig, WORKING_DIR_KEY};
//!
//! let config = MemoryConfig::new().with(WORKING_DIR_KEY, "/srv/work");
//! let executor = ActionExecutor::new(Arc::new(config), action_source);
//!
//! let outputs = executor
//!     .execute(ExecutionRequest::new("debug:log").with_instance_id("abc"))
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Configuration keys and the in-memory config source.
pub mod config;
/// Engine error types.
pub mod error;
/// The single-action executor.
pub mod executor;
/// `tracing` drivers for the context logging ports.
pub mod logging;
/// Execution request type.
pub mod request;
/// Workspace provisioning and scoped temporary directories.
pub mod workspace;

// ── Public re-exports ───────────────────────────────────────────────────────

pub use config::{MemoryConfig, WORKING_DIR_KEY};
pub use error::{EngineError, Result, UnavailableReason};
pub use executor::ActionExecutor;
pub use logging::{TracingLogSink, TracingLogger};
pub use request::ExecutionRequest;
pub use workspace::ScopedTempDirs;
