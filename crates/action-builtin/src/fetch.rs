//! The `fetch:plain` action.

use std::sync::Arc;

use async_trait::async_trait;

use stencil_action::{Action, ActionContext, ActionError, ActionMetadata, ContentFetcher};

use crate::input;
use crate::paths;

/// Downloads `url` through the content fetcher and writes the body
/// under the workspace.
///
/// `target_path` names the destination relative to the workspace; when
/// omitted the last path segment of the URL is used. Parent directories
/// are created as needed. Outputs `path`, the absolute destination.
pub struct FetchPlainAction {
    metadata: ActionMetadata,
    fetcher: Arc<dyn ContentFetcher>,
}

impl FetchPlainAction {
    /// Identifier this action registers under.
    pub const ID: &'static str = "fetch:plain";

    /// New `fetch:plain` action over the given fetcher.
    pub fn new(fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self {
            metadata: ActionMetadata::new(Self::ID, "Downloads content into the workspace")
                .with_input_schema(serde_json::json!({
                    "type": "object",
                    "required": ["url"],
                    "properties": {
                        "url": { "type": "string" },
                        "target_path": { "type": "string" },
                    },
                }))
                .with_output_schema(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "path": { "type": "string" },
                    },
                })),
            fetcher,
        }
    }
}

#[async_trait]
impl Action for FetchPlainAction {
    fn metadata(&self) -> &ActionMetadata {
        &self.metadata
    }

    async fn handler(&self, ctx: &ActionContext) -> Result<(), ActionError> {
        let url = input::require_str(&ctx.input, "url")?;
        let target = match input::optional_str(&ctx.input, "target_path")? {
            Some(path) => path.to_owned(),
            None => default_target(url)?,
        };
        let destination = paths::resolve_in_workspace(ctx.workspace_path(), &target)?;

        ctx.log_info(&format!("Fetching {url}"));
        let body = self.fetcher.fetch(url).await?;

        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ActionError::io(parent.to_owned(), source))?;
        }
        tokio::fs::write(&destination, &body)
            .await
            .map_err(|source| ActionError::io(destination.clone(), source))?;

        ctx.output("path", serde_json::json!(destination.to_string_lossy()));
        Ok(())
    }
}

impl std::fmt::Debug for FetchPlainAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchPlainAction")
            .field("id", &self.metadata.id)
            .finish_non_exhaustive()
    }
}

/// Last path segment of the URL, used when `target_path` is omitted.
fn default_target(url: &str) -> Result<String, ActionError> {
    let parsed = url::Url::parse(url).map_err(|err| {
        ActionError::invalid_input(format!("field `url` is not a valid URL: {err}"))
    })?;
    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| {
            ActionError::invalid_input("cannot derive `target_path` from a URL with no file name")
        })
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    use stencil_action::OutputSink;

    use super::*;

    struct StubFetcher {
        body: &'static [u8],
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn new(body: &'static [u8]) -> Arc<Self> {
            Arc::new(Self {
                body,
                requested: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ContentFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<bytes::Bytes, ActionError> {
            self.requested.lock().push(url.to_owned());
            Ok(bytes::Bytes::from_static(self.body))
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl ContentFetcher for FailingFetcher {
        async fn fetch(&self, _url: &str) -> Result<bytes::Bytes, ActionError> {
            Err(ActionError::capability("fetcher", "connection refused"))
        }
    }

    fn payload(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn writes_the_body_to_the_target_path() {
        let workspace = tempfile::tempdir().unwrap();
        let fetcher = StubFetcher::new(b"fetched bytes");
        let outputs = OutputSink::new();
        let ctx = ActionContext::new(
            payload(serde_json::json!({
                "url": "https://example.com/files/template.yaml",
                "target_path": "nested/template.yaml",
            })),
            workspace.path(),
        )
        .with_outputs(outputs.clone());

        FetchPlainAction::new(fetcher.clone()).handler(&ctx).await.unwrap();

        let destination = workspace.path().join("nested/template.yaml");
        assert_eq!(std::fs::read(&destination).unwrap(), b"fetched bytes");
        assert_eq!(
            *fetcher.requested.lock(),
            vec!["https://example.com/files/template.yaml"]
        );
        assert_eq!(
            outputs.snapshot()["path"],
            serde_json::json!(destination.to_string_lossy())
        );
    }

    #[tokio::test]
    async fn target_path_defaults_to_the_url_file_name() {
        let workspace = tempfile::tempdir().unwrap();
        let ctx = ActionContext::new(
            payload(serde_json::json!({ "url": "https://example.com/a/b/readme.md" })),
            workspace.path(),
        );

        FetchPlainAction::new(StubFetcher::new(b"content"))
            .handler(&ctx)
            .await
            .unwrap();

        assert!(workspace.path().join("readme.md").is_file());
    }

    #[tokio::test]
    async fn url_without_a_file_name_needs_an_explicit_target() {
        let ctx = ActionContext::new(
            payload(serde_json::json!({ "url": "https://example.com/" })),
            "/work",
        );

        let err = FetchPlainAction::new(StubFetcher::new(b""))
            .handler(&ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn escaping_target_path_is_rejected_before_fetching() {
        let fetcher = StubFetcher::new(b"");
        let ctx = ActionContext::new(
            payload(serde_json::json!({
                "url": "https://example.com/x.txt",
                "target_path": "../outside.txt",
            })),
            "/work",
        );

        let err = FetchPlainAction::new(fetcher.clone())
            .handler(&ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, ActionError::InvalidInput(_)));
        assert!(fetcher.requested.lock().is_empty());
    }

    #[tokio::test]
    async fn fetcher_failures_pass_through() {
        let workspace = tempfile::tempdir().unwrap();
        let ctx = ActionContext::new(
            payload(serde_json::json!({ "url": "https://example.com/x.txt" })),
            workspace.path(),
        );

        let err = FetchPlainAction::new(Arc::new(FailingFetcher))
            .handler(&ctx)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "capability `fetcher` failed: connection refused"
        );
    }
}
