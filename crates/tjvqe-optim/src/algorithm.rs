//! Named optimization algorithms and construction-time selection.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::OptimizerConfig;
use crate::error::{OptimError, OptimResult};
use crate::kind::OptimizerKind;
use crate::optimizer::Optimizer;

/// Named strategies known to the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Adam,
    Cobyla,
    Lbfgs,
    Sgd,
    TrustRegion,
}

impl Algorithm {
    /// All named algorithms.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Adam,
        Algorithm::Cobyla,
        Algorithm::Lbfgs,
        Algorithm::Sgd,
        Algorithm::TrustRegion,
    ];

    /// Capability tag the algorithm belongs to.
    pub fn kind(&self) -> OptimizerKind {
        match self {
            Algorithm::Adam | Algorithm::Lbfgs | Algorithm::Sgd => OptimizerKind::Gradient,
            Algorithm::Cobyla => OptimizerKind::GradientFree,
            Algorithm::TrustRegion => OptimizerKind::Hybrid,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Adam => "Adam",
            Algorithm::Cobyla => "COBYLA",
            Algorithm::Lbfgs => "L-BFGS",
            Algorithm::Sgd => "SGD",
            Algorithm::TrustRegion => "trust-region",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Selects a named algorithm and its settings at construction time.
///
/// ```yaml
/// algorithm: adam
/// gradient_convergence_threshold: 0.001
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizerSpec {
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub config: OptimizerConfig,
}

impl OptimizerSpec {
    /// Spec for `algorithm` with default settings.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            config: OptimizerConfig::default(),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> OptimResult<Self> {
        let spec: Self = serde_json::from_str(s)?;
        spec.config.validate()?;
        Ok(spec)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> OptimResult<Self> {
        let spec: Self = serde_yaml::from_str(s)?;
        spec.config.validate()?;
        Ok(spec)
    }

    /// Construct the selected optimizer.
    ///
    /// # Errors
    /// [`OptimError::InvalidThreshold`] for a bad configuration, otherwise
    /// [`OptimError::NotImplemented`]: none of the named numerical methods
    /// ship with this crate. Use [`crate::FunctionalOptimizer`] or implement
    /// [`Optimizer`] directly to supply an update rule.
    pub fn build(&self) -> OptimResult<Box<dyn Optimizer>> {
        self.config.validate()?;
        warn!(algorithm = %self.algorithm, "requested optimizer has no implementation");
        Err(OptimError::NotImplemented(format!(
            "{} optimizer ({})",
            self.algorithm,
            self.algorithm.kind()
        )))
    }
}
