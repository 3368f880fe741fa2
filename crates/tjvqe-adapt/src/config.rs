//! Driver configuration.

use serde::{Deserialize, Serialize};
use tjvqe_optim::OptimizerConfig;

use crate::error::{AdaptError, AdaptResult};

/// Upper bound on ansatz-growth iterations when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// ADAPT-VQE settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptConfig {
    /// Maximum number of operators appended before giving up.
    pub max_iterations: usize,
    /// Settings for the optimizer testing convergence and re-optimizing.
    pub optimizer: OptimizerConfig,
}

impl Default for AdaptConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl AdaptConfig {
    /// Set the iteration bound.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the optimizer settings.
    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn validate(&self) -> AdaptResult<()> {
        if self.max_iterations == 0 {
            return Err(AdaptError::Config(
                "max_iterations must be at least 1".into(),
            ));
        }
        self.optimizer.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> AdaptResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> AdaptResult<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
