//! Error types and exit codes for netspan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid graph file, unknown node, no route)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the netspan CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph file, unknown node, no route (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during netspan operations
#[derive(Error, Debug)]
pub enum NetspanError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: iterative or frontier)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("edge references unknown node id(s): {}", .ids.join(", "))]
    UnknownEndpoints { ids: Vec<String> },

    #[error("duplicate node id(s): {}", .ids.join(", "))]
    DuplicateNodes { ids: Vec<String> },

    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("engine fault: {0}")]
    Engine(String),

    #[error("{0}")]
    Other(String),
}

impl NetspanError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NetspanError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed_operation(operation: &str, reason: impl std::fmt::Display) -> Self {
        NetspanError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NetspanError::UnknownFormat(_)
            | NetspanError::UnknownAlgorithm(_)
            | NetspanError::UsageError(_)
            | NetspanError::InvalidValue { .. } => ExitCode::Usage,

            NetspanError::UnknownEndpoints { .. }
            | NetspanError::DuplicateNodes { .. }
            | NetspanError::GraphNotFound { .. }
            | NetspanError::NodeNotFound { .. }
            | NetspanError::NoRoute { .. } => ExitCode::Data,

            NetspanError::Io(_)
            | NetspanError::Json(_)
            | NetspanError::Toml(_)
            | NetspanError::Image(_)
            | NetspanError::FailedOperation { .. }
            | NetspanError::Engine(_)
            | NetspanError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NetspanError::UnknownFormat(_) => "unknown_format",
            NetspanError::UnknownAlgorithm(_) => "unknown_algorithm",
            NetspanError::UsageError(_) => "usage_error",
            NetspanError::InvalidValue { .. } => "invalid_value",
            NetspanError::UnknownEndpoints { .. } => "unknown_endpoints",
            NetspanError::DuplicateNodes { .. } => "duplicate_nodes",
            NetspanError::GraphNotFound { .. } => "graph_not_found",
            NetspanError::NodeNotFound { .. } => "node_not_found",
            NetspanError::NoRoute { .. } => "no_route",
            NetspanError::Io(_) => "io_error",
            NetspanError::Json(_) => "json_error",
            NetspanError::Toml(_) => "toml_error",
            NetspanError::Image(_) => "image_error",
            NetspanError::FailedOperation { .. } => "failed_operation",
            NetspanError::Engine(_) => "engine_fault",
            NetspanError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for netspan operations
pub type Result<T> = std::result::Result<T, NetspanError>;
