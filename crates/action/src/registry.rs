use std::sync::Arc;

use indexmap::IndexMap;

use crate::action::Action;
use crate::metadata::ActionMetadata;

/// Type-erased registry for discovering and retrieving actions by id.
///
/// The executor populates this from an action source and uses it to
/// resolve execution requests to concrete implementations. Actions are
/// stored as `Arc<dyn Action>` to allow shared ownership across
/// concurrent executions.
///
/// Insertion order is preserved and re-registering an id keeps its slot,
/// so listings stay stable across reloads.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use stencil_action::{Action, ActionContext, ActionError, ActionMetadata, ActionRegistry};
///
/// struct NoOp(ActionMetadata);
///
/// #[async_trait]
/// impl Action for NoOp {
///     fn metadata(&self) -> &ActionMetadata { &self.0 }
///     async fn handler(&self, _ctx: &ActionContext) -> Result<(), ActionError> { Ok(()) }
/// }
///
/// let mut registry = ActionRegistry::new();
/// registry.register(Arc::new(NoOp(ActionMetadata::new("noop", "Does nothing"))));
///
/// assert!(registry.get("noop").is_some());
/// assert!(registry.get("unknown").is_none());
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default)]
pub struct ActionRegistry {
    actions: IndexMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action. Overwrites any existing action with the same id.
    pub fn register(&mut self, action: Arc<dyn Action>) {
        let id = action.metadata().id.clone();
        self.actions.insert(id, action);
    }

    /// Look up an action by its id.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Action>> {
        self.actions.get(id)
    }

    /// Check whether an action with the given id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.actions.contains_key(id)
    }

    /// Return metadata for all registered actions, in registration order.
    pub fn list(&self) -> Vec<&ActionMetadata> {
        self.actions.values().map(|a| a.metadata()).collect()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no actions are registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Remove an action by id. Returns the removed action, if any.
    pub fn unregister(&mut self, id: &str) -> Option<Arc<dyn Action>> {
        self.actions.shift_remove(id)
    }

    /// Iterate over all registered `(id, action)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Action>)> {
        self.actions.iter().map(|(id, action)| (id.as_str(), action))
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("count", &self.actions.len())
            .field("ids", &self.actions.keys().collect::<Vec<_>>())
            .finish()
    }
}
