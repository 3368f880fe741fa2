//! Error types for the adaptive driver.

use thiserror::Error;
use tjvqe_optim::OptimError;

/// Errors raised by the ADAPT-VQE driver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdaptError {
    #[error("optimizer error: {0}")]
    Optim(#[from] OptimError),

    /// Designed but not built.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("operator pool is empty")]
    EmptyPool,

    /// Ansatz parameters must match its operators one to one.
    #[error("ansatz has {expected} operators but {actual} parameters were given")]
    ParameterCount { expected: usize, actual: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for driver operations.
pub type AdaptResult<T> = Result<T, AdaptError>;

impl From<serde_json::Error> for AdaptError {
    fn from(e: serde_json::Error) -> Self {
        AdaptError::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for AdaptError {
    fn from(e: serde_yaml::Error) -> Self {
        AdaptError::Config(e.to_string())
    }
}
