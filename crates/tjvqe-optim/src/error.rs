//! Error types for optimizer construction and updates.

use thiserror::Error;

/// Errors raised by optimizers and their configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptimError {
    /// Parameter and gradient vectors differ in length.
    #[error("dimension mismatch: {params} parameters but {gradient} gradient components")]
    DimensionMismatch { params: usize, gradient: usize },

    /// A strategy proposed a vector with a different length than its input.
    #[error("strategy returned {actual} parameters, expected {expected}")]
    StepDimension { expected: usize, actual: usize },

    /// Convergence threshold is not a positive finite number.
    #[error("invalid gradient convergence threshold: {0} (must be positive and finite)")]
    InvalidThreshold(f64),

    /// The requested operation is designed but has no implementation.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Configuration text could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for optimizer operations.
pub type OptimResult<T> = Result<T, OptimError>;

impl From<serde_json::Error> for OptimError {
    fn from(e: serde_json::Error) -> Self {
        OptimError::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for OptimError {
    fn from(e: serde_yaml::Error) -> Self {
        OptimError::Config(e.to_string())
    }
}
