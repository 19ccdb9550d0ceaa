use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// Named outputs produced by one action execution.
pub type StepOutput = serde_json::Map<String, serde_json::Value>;

/// Shared accumulator for the outputs of a single execution.
///
/// Cloning is cheap and every clone writes to the same map, so the
/// executor keeps one handle while the context holds another. The sink
/// is write-mostly: handlers record values, the executor snapshots the
/// result once the handler has returned.
#[derive(Clone, Default)]
pub struct OutputSink {
    outputs: Arc<RwLock<StepOutput>>,
}

impl OutputSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a named output.
    ///
    /// Overwrites any existing value recorded under the same name.
    pub fn record(&self, name: impl Into<String>, value: serde_json::Value) {
        self.outputs.write().insert(name.into(), value);
    }

    /// Clone of everything recorded so far.
    pub fn snapshot(&self) -> StepOutput {
        self.outputs.read().clone()
    }

    /// Number of distinct output names recorded.
    pub fn len(&self) -> usize {
        self.outputs.read().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.outputs.read().is_empty()
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink")
            .field("count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_empty() {
        let sink = OutputSink::new();
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
        assert!(sink.snapshot().is_empty());
    }

    #[test]
    fn records_and_snapshots() {
        let sink = OutputSink::new();
        sink.record("value", serde_json::json!(42));
        sink.record("name", serde_json::json!("stencil"));

        let snapshot = sink.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot["value"], serde_json::json!(42));
        assert_eq!(snapshot["name"], serde_json::json!("stencil"));
    }

    #[test]
    fn same_name_overwrites() {
        let sink = OutputSink::new();
        sink.record("value", serde_json::json!(1));
        sink.record("value", serde_json::json!(2));

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.snapshot()["value"], serde_json::json!(2));
    }

    #[test]
    fn clones_share_the_map() {
        let sink = OutputSink::new();
        let handle = sink.clone();
        handle.record("via_clone", serde_json::json!(true));

        assert_eq!(sink.snapshot()["via_clone"], serde_json::json!(true));
    }

    #[test]
    fn snapshot_is_detached() {
        let sink = OutputSink::new();
        sink.record("a", serde_json::json!(1));
        let snapshot = sink.snapshot();
        sink.record("b", serde_json::json!(2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn debug_format() {
        let sink = OutputSink::new();
        sink.record("x", serde_json::json!(null));
        let debug = format!("{sink:?}");
        assert!(debug.contains("OutputSink"));
        assert!(debug.contains("count: 1"));
    }
}
