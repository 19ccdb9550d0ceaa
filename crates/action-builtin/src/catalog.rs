//! The `catalog:fetch` action.

use std::sync::Arc;

use async_trait::async_trait;

use stencil_action::{Action, ActionContext, ActionError, ActionMetadata, CatalogClient};

use crate::input;

/// Resolves `entity_ref` through the catalog client.
///
/// Outputs `entity`, the full entity document. A reference the catalog
/// does not know fails the execution.
pub struct CatalogFetchAction {
    metadata: ActionMetadata,
    catalog: Arc<dyn CatalogClient>,
}

impl CatalogFetchAction {
    /// Identifier this action registers under.
    pub const ID: &'static str = "catalog:fetch";

    /// New `catalog:fetch` action over the given catalog client.
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self {
            metadata: ActionMetadata::new(Self::ID, "Fetches an entity from the catalog")
                .with_input_schema(serde_json::json!({
                    "type": "object",
                    "required": ["entity_ref"],
                    "properties": {
                        "entity_ref": { "type": "string" },
                    },
                }))
                .with_output_schema(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "entity": { "type": "object" },
                    },
                })),
            catalog,
        }
    }
}

#[async_trait]
impl Action for CatalogFetchAction {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }

    async fn handler(&self, ctx: &ActionContext) -> Result<(), ActionError> {
        let entity_ref = input::require_str(&ctx.input, "entity_ref")?;
        match self.catalog.entity(entity_ref).await? {
            Some(entity) => {
                ctx.output("entity", entity);
                Ok(())
            }
            None => Err(ActionError::failed(format!(
                "entity not found: {entity_ref}"
            ))),
        }
    }
}

impl std::fmt::Debug for CatalogFetchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogFetchAction")
            .field("id", &self.metadata.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use stencil_action::OutputSink;

    use super::*;

    struct OneEntityCatalog;

    #[async_trait]
    impl CatalogClient for OneEntityCatalog {
        async fn entity(&self, entity_ref: &str) -> Result<Option<serde_json::Value>, ActionError> {
            if entity_ref == "component:default/website" {
                Ok(Some(serde_json::json!({
                    "kind": "Component",
                    "metadata": { "name": "website" },
                })))
            } else {
                Ok(None)
            }
        }
    }

    fn payload(entity_ref: &str) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("entity_ref".into(), serde_json::json!(entity_ref));
        map
    }

    #[tokio::test]
    async fn known_reference_outputs_the_entity() {
        let outputs = OutputSink::new();
        let ctx = ActionContext::new(payload("component:default/website"), "/work")
            .with_outputs(outputs.clone());

        CatalogFetchAction::new(Arc::new(OneEntityCatalog))
            .handler(&ctx)
            .await
            .unwrap();

        assert_eq!(
            outputs.snapshot()["entity"]["metadata"]["name"],
            serde_json::json!("website")
        );
    }

    #[tokio::test]
    async fn unknown_reference_fails_the_execution() {
        let ctx = ActionContext::new(payload("component:default/ghost"), "/work");

        let err = CatalogFetchAction::new(Arc::new(OneEntityCatalog))
            .handler(&ctx)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "entity not found: component:default/ghost");
        assert!(matches!(err, ActionError::Failed(_)));
    }

    #[tokio::test]
    async fn missing_reference_is_invalid_input() {
        let ctx = ActionContext::new(serde_json::Map::new(), "/work");
        let err = CatalogFetchAction::new(Arc::new(OneEntityCatalog))
            .handler(&ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidInput(_)));
    }
}
