//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown strategy or format)
//! - 3: Data error (unknown node)

use std::fmt;

use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfind operations
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {name} (expected: bfs or dfs)")]
    UnknownAlgorithm { name: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfindError {
    /// Create an `UnknownNode` error naming the offending node.
    pub fn unknown_node(node: &impl fmt::Debug) -> Self {
        WayfindError::UnknownNode {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl fmt::Display) -> Self {
        WayfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownFormat(_)
            | WayfindError::UnknownAlgorithm { .. }
            | WayfindError::InvalidValue { .. }
            | WayfindError::UsageError(_) => ExitCode::Usage,

            WayfindError::UnknownNode { .. } => ExitCode::Data,

            WayfindError::Io(_) | WayfindError::Json(_) | WayfindError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::UnknownAlgorithm { .. } => "unknown_algorithm",
            WayfindError::InvalidValue { .. } => "invalid_value",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::UnknownNode { .. } => "unknown_node",
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Other(_) => "other",
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

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;
