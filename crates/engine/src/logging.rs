//! `tracing` drivers for the context logging ports.

use stencil_action::{ActionLogger, LogSink};

/// [`ActionLogger`] driver emitting through the `tracing` facade.
///
/// Events carry the `action` target so subscribers can route handler
/// output separately from engine internals.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ActionLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "action", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "action", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "action", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "action", "{message}");
    }
}

/// [`LogSink`] driver forwarding raw log bytes to `tracing` line by line.
///
/// Bytes are decoded lossily as UTF-8; empty lines are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn write(&self, bytes: &[u8]) {
        let text = String::from_utf8_lossy(bytes);
        for line in text.lines().filter(|line| !line.is_empty()) {
            tracing::info!(target: "action", "{line}");
        }
    }
}
