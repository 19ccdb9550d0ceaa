//! Concrete implementations of the action-system ports the builtin
//! actions need: an HTTP content fetcher and a file-backed catalog.

use std::path::Path;

use anyhow::Context as _;
use async_trait::async_trait;

use stencil_action::{ActionError, CatalogClient, ContentFetcher};

/// Content fetcher over HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<bytes::Bytes, ActionError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| {
                ActionError::capability("fetcher", format!("request to {url} failed: {err}"))
            })?;
        response.bytes().await.map_err(|err| {
            ActionError::capability("fetcher", format!("reading body from {url} failed: {err}"))
        })
    }
}

/// Catalog client over a JSON file mapping entity refs to entity
/// documents, e.g. `{ "component:default/website": { ... } }`.
///
/// Stands in for a live catalog service; `stencil run catalog:fetch`
/// points at it with `--catalog`.
#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    entities: serde_json::Map<String, serde_json::Value>,
}

impl FileCatalog {
    /// Catalog with no entities; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load entities from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog file {}", path.display()))?;
        let parsed: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("parsing catalog file {}", path.display()))?;
        let serde_json::Value::Object(entities) = parsed else {
            anyhow::bail!("catalog file {} must contain a JSON object", path.display());
        };
        Ok(Self { entities })
    }
}

#[async_trait]
impl CatalogClient for FileCatalog {
    async fn entity(&self, entity_ref: &str) -> Result<Option<serde_json::Value>, ActionError> {
        Ok(self.entities.get(entity_ref).cloned())
    }
}
