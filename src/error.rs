//! Custom error types for the budget optimizer
//!
//! The evaluator itself never fails. These errors belong to the layers around
//! it: settings, history, financial state object handling and export.

use thiserror::Error;

/// The main error type for budget optimizer operations
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Financial state object could not be read or merged
    #[error("Financial state error: {0}")]
    Fso(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors for caller-supplied arguments
    #[error("Validation error: {0}")]
    Validation(String),
}

impl OptimizerError {
    /// Create an error for a required financial state field that is absent
    pub fn missing_field(field: &str) -> Self {
        Self::Fso(format!("missing numeric field '{}'", field))
    }

    /// Check if this is a financial state error
    pub fn is_fso(&self) -> bool {
        matches!(self, Self::Fso(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for OptimizerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OptimizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for OptimizerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for budget optimizer operations
pub type OptimizerResult<T> = Result<T, OptimizerError>;
