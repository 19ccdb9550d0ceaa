use std::path::PathBuf;

/// Error type for action handlers and the ports they call.
///
/// Handler failures are surfaced to callers of the engine unchanged, so
/// messages should stand on their own without engine context around them.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ActionError {
    /// The input payload is missing a field or carries the wrong shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A filesystem operation inside the workspace failed.
    #[error("io failure at {}", .path.display())]
    Io {
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// A context capability failed or is not configured.
    ///
    /// Raised by the port implementations behind the context (catalog
    /// lookup, content fetching, temp-dir creation) and by the context
    /// itself when a required port was never attached.
    #[error("capability `{capability}` failed: {message}")]
    Capability {
        /// Name of the capability, e.g. `"fetcher"`.
        capability: String,
        /// What went wrong.
        message: String,
    },

    /// Action-specific failure with no further structure.
    #[error("{0}")]
    Failed(String),
}

impl ActionError {
    /// Create an invalid-input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an io error tied to the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a capability failure.
    pub fn capability(capability: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Capability {
            capability: capability.into(),
            message: message.into(),
        }
    }

    /// Create an action-specific failure.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}
