//! Error types and exit codes for campusnav
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (invalid map document, structural invariant violation)
//!
//! Missing locations and unreachable destinations are not errors: traversal
//! operations report them as `None`.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the campusnav binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid map or rejected edit (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campusnav operations
#[derive(Error, Debug)]
pub enum NavError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("map not found: {path:?}")]
    MapNotFound { path: PathBuf },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("unknown location: {id}")]
    UnknownLocation { id: String },

    #[error("path from {id} to itself is not allowed")]
    SelfLoop { id: String },

    #[error("path already exists between {start} and {end}")]
    DuplicatePath { start: String, end: String },

    #[error("no path between {start} and {end}")]
    PathNotFound { start: String, end: String },

    #[error("map is inconsistent: {count} issue(s) found")]
    Inconsistent { count: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl NavError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NavError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        NavError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        NavError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a failed IO operation on a file
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        NavError::FailedOperation {
            operation: format!("{} {}", operation, path),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NavError::UnknownFormat(_)
            | NavError::UsageError(_)
            | NavError::InvalidValue { .. }
            | NavError::Unsupported { .. } => ExitCode::Usage,

            NavError::MapNotFound { .. }
            | NavError::AlreadyExists { .. }
            | NavError::UnknownLocation { .. }
            | NavError::SelfLoop { .. }
            | NavError::DuplicatePath { .. }
            | NavError::PathNotFound { .. }
            | NavError::Inconsistent { .. } => ExitCode::Data,

            NavError::Io(_)
            | NavError::Json(_)
            | NavError::Toml(_)
            | NavError::FailedOperation { .. }
            | NavError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NavError::UnknownFormat(_) => "unknown_format",
            NavError::UsageError(_) => "usage_error",
            NavError::InvalidValue { .. } => "invalid_value",
            NavError::Unsupported { .. } => "unsupported",
            NavError::MapNotFound { .. } => "map_not_found",
            NavError::AlreadyExists { .. } => "already_exists",
            NavError::UnknownLocation { .. } => "unknown_location",
            NavError::SelfLoop { .. } => "self_loop",
            NavError::DuplicatePath { .. } => "duplicate_path",
            NavError::PathNotFound { .. } => "path_not_found",
            NavError::Inconsistent { .. } => "inconsistent",
            NavError::Io(_) => "io_error",
            NavError::Json(_) => "json_error",
            NavError::Toml(_) => "toml_error",
            NavError::FailedOperation { .. } => "failed_operation",
            NavError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for campusnav operations
pub type Result<T> = std::result::Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_errors_are_data_errors() {
        let err = NavError::SelfLoop {
            id: "lib".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);

        let err = NavError::DuplicatePath {
            start: "a".to_string(),
            end: "b".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "path already exists between a and b");
    }

    #[test]
    fn test_unsupported_is_usage_error() {
        let err = NavError::unsupported("algorithm", "astar", "shortest-path, breadth-first");
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert_eq!(
            err.to_string(),
            "unsupported algorithm: astar (supported: shortest-path, breadth-first)"
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = NavError::UnknownLocation {
            id: "gym".to_string(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_location");
        assert_eq!(json["error"]["message"], "unknown location: gym");
    }

    #[test]
    fn test_io_error_is_failure() {
        let err: NavError = std::io::Error::other("boom").into();
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(err.exit_code()), 1);
    }
}
