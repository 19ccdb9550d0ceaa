//! Engine error types.

use std::fmt;
use std::path::PathBuf;

use stencil_action::ActionError;
use thiserror::Error;

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Why a configured working directory cannot host workspaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The directory does not exist on disk.
    DoesNotExist,
    /// The directory exists but rejects writes.
    NotWritable,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoesNotExist => f.write_str("does not exist"),
            Self::NotWritable => f.write_str("is not writable"),
        }
    }
}

/// Errors that can occur while executing a single action.
///
/// Every variant aborts the whole call; there are no retries and no
/// partial results.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested action is not present in the registry.
    #[error("action not found: {action_id}")]
    ActionNotFound {
        /// Identifier the caller asked for.
        action_id: String,
    },

    /// The configured working directory cannot be used.
    ///
    /// Raised before anything touches disk under it; the reason
    /// distinguishes a missing directory from an unwritable one.
    #[error("working directory {} {reason}", .path.display())]
    WorkingDirectory {
        /// The configured directory.
        path: PathBuf,
        /// Why it cannot be used.
        reason: UnavailableReason,
        /// Underlying io error from the check that failed.
        #[source]
        source: std::io::Error,
    },

    /// The workspace directory could not be created.
    #[error("failed to provision workspace at {}", .path.display())]
    Provision {
        /// The derived workspace path.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// The caller-supplied instance identifier is not usable as a single
    /// path component.
    #[error("invalid instance id: {instance_id:?}")]
    InvalidInstanceId {
        /// The rejected identifier.
        instance_id: String,
    },

    /// The action handler failed; its error passes through unwrapped.
    #[error(transparent)]
    Handler(#[from] ActionError),
}

impl EngineError {
    /// Create an action-not-found error.
    pub fn action_not_found(action_id: impl Into<String>) -> Self {
        Self::ActionNotFound {
            action_id: action_id.into(),
        }
    }

    /// Create an invalid-instance-id error.
    pub fn invalid_instance_id(instance_id: impl Into<String>) -> Self {
        Self::InvalidInstanceId {
            instance_id: instance_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_not_found_display() {
        let err = EngineError::action_not_found("publish:github");
        assert_eq!(err.to_string(), "action not found: publish:github");
    }

    #[test]
    fn working_directory_display_distinguishes_reasons() {
        let missing = EngineError::WorkingDirectory {
            path: PathBuf::from("/srv/work"),
            reason: UnavailableReason::DoesNotExist,
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(missing.to_string(), "working directory /srv/work does not exist");

        let readonly = EngineError::WorkingDirectory {
            path: PathBuf::from("/srv/work"),
            reason: UnavailableReason::NotWritable,
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(readonly.to_string(), "working directory /srv/work is not writable");
    }

    #[test]
    fn provision_display() {
        let err = EngineError::Provision {
            path: PathBuf::from("/srv/work/abc"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to provision workspace at /srv/work/abc"
        );
    }

    #[test]
    fn invalid_instance_id_display() {
        let err = EngineError::invalid_instance_id("../escape");
        assert_eq!(err.to_string(), "invalid instance id: \"../escape\"");
    }

    #[test]
    fn handler_error_passes_through_transparently() {
        let inner = ActionError::failed("template rendering exploded");
        let err = EngineError::from(inner);

        // Transparent: the handler's own message, no engine wrapping.
        assert_eq!(err.to_string(), "template rendering exploded");
        assert!(matches!(err, EngineError::Handler(_)));
    }
}
