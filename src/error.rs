//! Custom error types for rulegate.
//!
//! Missing or stale rule files are not errors: they are recorded as
//! [`Violation`](crate::validator::Violation)s and reported. The variants
//! here cover the failures that abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rulegate operations
#[derive(Error, Debug)]
pub enum GateError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    // =========================================================================
    // Rule File Errors
    // =========================================================================
    /// Metadata for a rule file could not be read (other than "not found")
    #[error("Failed to read metadata for {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Tool Errors
    // =========================================================================
    /// Git operation failed
    #[error("Git operation failed: {operation} - {message}")]
    Git { operation: String, message: String },

    /// Hook installation failed
    #[error("Hook '{name}' failed: {message}")]
    Hook { name: String, message: String },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GateError {
    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a git error
    pub fn git(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Git {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a hook error
    pub fn hook(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Hook {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Get error code for exit status.
    ///
    /// Every internal failure fails the gate.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Type alias for rulegate results
pub type Result<T> = std::result::Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GateError::invalid_config("stale_after_days", "must be non-negative");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: stale_after_days - must be non-negative"
        );
    }

    #[test]
    fn test_metadata_error_display() {
        let err = GateError::Metadata {
            path: PathBuf::from(".clinerules/05-security.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains(".clinerules/05-security.md"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(GateError::invalid_config("keywords[0]", "empty").exit_code(), 1);
        assert_eq!(GateError::git("log", "no commits").exit_code(), 1);
    }

    #[test]
    fn test_config_with_path() {
        let path = PathBuf::from("/test/.rulegate.json");
        let err = GateError::config_with_path("failed to parse", path.clone());
        if let GateError::Config {
            message,
            path: opt_path,
        } = err
        {
            assert_eq!(message, "failed to parse");
            assert_eq!(opt_path, Some(path));
        } else {
            panic!("Wrong error variant");
        }
    }

    #[test]
    fn test_git_error() {
        let err = GateError::git("diff --cached", "not a git repository");
        if let GateError::Git { operation, message } = err {
            assert_eq!(operation, "diff --cached");
            assert_eq!(message, "not a git repository");
        } else {
            panic!("Wrong error variant");
        }
    }

    #[test]
    fn test_hook_error() {
        let err = GateError::hook("pre-commit", "hook already exists");
        assert!(err.to_string().contains("pre-commit"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let gate_err: GateError = io_err.into();
        assert!(matches!(gate_err, GateError::Io(_)));
        assert!(gate_err.to_string().contains("access denied"));
    }
}
