//! Capability tags for optimizers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a strategy uses the gradient it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerKind {
    /// Consumes exact or estimated gradients.
    Gradient,
    /// Relies on function values only; the gradient may be ignored.
    GradientFree,
    /// Alternates gradient and gradient-free phases.
    Hybrid,
    /// Wraps a user-supplied update function.
    Functional,
}

impl OptimizerKind {
    /// Whether the gradient argument drives the update.
    pub fn uses_gradient(&self) -> bool {
        !matches!(self, OptimizerKind::GradientFree)
    }
}

impl fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptimizerKind::Gradient => "gradient",
            OptimizerKind::GradientFree => "gradient-free",
            OptimizerKind::Hybrid => "hybrid",
            OptimizerKind::Functional => "functional",
        };
        f.write_str(name)
    }
}
