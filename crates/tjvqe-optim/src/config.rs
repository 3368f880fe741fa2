//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{OptimError, OptimResult};

/// Threshold used when none is configured.
pub const DEFAULT_GRADIENT_CONVERGENCE_THRESHOLD: f64 = 0.01;

/// Settings shared by every optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Every gradient component must fall strictly below this value for the
    /// default convergence test to pass. Ignored by strategies that override
    /// [`crate::Optimizer::is_converged`].
    pub gradient_convergence_threshold: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            gradient_convergence_threshold: DEFAULT_GRADIENT_CONVERGENCE_THRESHOLD,
        }
    }
}

impl OptimizerConfig {
    /// Create a validated configuration with the given threshold.
    pub fn new(gradient_convergence_threshold: f64) -> OptimResult<Self> {
        let config = Self {
            gradient_convergence_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the threshold is a positive finite real.
    pub fn validate(&self) -> OptimResult<()> {
        let t = self.gradient_convergence_threshold;
        if t.is_finite() && t > 0.0 {
            Ok(())
        } else {
            Err(OptimError::InvalidThreshold(t))
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> OptimResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> OptimResult<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
