//! # Stencil Builtin Actions
//!
//! First-party actions the engine loads by default. Each action
//! exercises exactly one capability of the action system: `debug:log`
//! the log ports, `fetch:plain` the content fetcher, `fs:delete` the
//! workspace filesystem, `catalog:fetch` the catalog client.
//!
//! [`BuiltinActions`] bundles them behind the
//! [`ActionSource`](stencil_action::ActionSource) port, wired with the
//! external services the individual actions need:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stencil_action_builtin::BuiltinActions;
//!
//! let source = BuiltinActions::new(catalog_client, content_fetcher);
//! let executor = ActionExecutor::new(config, Arc::new(source));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Catalog entity lookup.
pub mod catalog;
/// Log-line emission and workspace inspection.
pub mod debug;
/// Remote content download into the workspace.
pub mod fetch;
/// Workspace file deletion.
pub mod fs;

mod input;
mod paths;

// ── Public re-exports ───────────────────────────────────────────────────────

pub use catalog::CatalogFetchAction;
pub use debug::DebugLogAction;
pub use fetch::FetchPlainAction;
pub use fs::FsDeleteAction;

use std::sync::Arc;

use stencil_action::{Action, ActionSource, CatalogClient, ContentFetcher};

/// The builtin action set, wired with its external services.
///
/// Implements [`ActionSource`] so the executor can populate its registry
/// from it. Each call to [`actions`](ActionSource::actions) yields fresh
/// action instances sharing the same underlying clients.
pub struct BuiltinActions {
    catalog: Arc<dyn CatalogClient>,
    fetcher: Arc<dyn ContentFetcher>,
}

impl BuiltinActions {
    /// Bundle the builtin actions over the given clients.
    pub fn new(catalog: Arc<dyn CatalogClient>, fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self { catalog, fetcher }
    }
}

impl ActionSource for BuiltinActions {
    fn actions(&self) -> Vec<Arc<dyn Action>> {
        vec![
            Arc::new(DebugLogAction::new()),
            Arc::new(FetchPlainAction::new(self.fetcher.clone())),
            Arc::new(FsDeleteAction::new()),
            Arc::new(CatalogFetchAction::new(self.catalog.clone())),
        ]
    }
}

impl std::fmt::Debug for BuiltinActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinActions").finish_non_exhaustive()
    }
}
