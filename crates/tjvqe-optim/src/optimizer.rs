//! The optimizer contract.
//!
//! Every strategy turns `(params, gradient)` into a proposed next iterate.
//! Inputs are borrowed as read-only views and the result is always a fresh
//! vector, so callers keep their own copies intact across steps.

use ndarray::{Array1, ArrayView1};
use tracing::{debug, trace};

use crate::config::OptimizerConfig;
use crate::error::{OptimError, OptimResult};
use crate::kind::OptimizerKind;

/// Current values of the tunable circuit parameters.
pub type ParameterVector = Array1<f64>;

/// One gradient component per parameter.
pub type GradientVector = Array1<f64>;

/// Trait for classical optimizers driving a variational loop.
pub trait Optimizer {
    /// Shared settings, including the convergence threshold.
    fn config(&self) -> &OptimizerConfig;

    /// Capability tag of this strategy.
    fn kind(&self) -> OptimizerKind;

    /// Apply the strategy's update rule.
    ///
    /// Called only with `params.len() == gradient.len()`. Must return a
    /// vector of the same length.
    fn propose(
        &mut self,
        params: ArrayView1<'_, f64>,
        gradient: ArrayView1<'_, f64>,
    ) -> ParameterVector;

    /// Perform a single optimization step, returning the new parameters.
    ///
    /// # Errors
    /// [`OptimError::DimensionMismatch`] if the inputs differ in length (the
    /// strategy is not invoked), [`OptimError::StepDimension`] if the
    /// strategy returns a vector of the wrong length.
    fn update(
        &mut self,
        params: ArrayView1<'_, f64>,
        gradient: ArrayView1<'_, f64>,
    ) -> OptimResult<ParameterVector> {
        check_dimensions(params, gradient)?;

        let expected = params.len();
        let next = self.propose(params, gradient);
        if next.len() != expected {
            return Err(OptimError::StepDimension {
                expected,
                actual: next.len(),
            });
        }

        debug!(dim = expected, kind = %self.kind(), "optimizer step");
        Ok(next)
    }

    /// The configured gradient convergence threshold.
    fn gradient_convergence_threshold(&self) -> f64 {
        self.config().gradient_convergence_threshold
    }

    /// Whether the optimization has converged.
    ///
    /// The naive criterion: every gradient component is strictly below the
    /// threshold in absolute value.
    fn is_converged(&self, gradient: ArrayView1<'_, f64>) -> bool {
        all_below(gradient, self.gradient_convergence_threshold())
    }
}

/// Reject parameter and gradient vectors of different lengths.
pub fn check_dimensions(
    params: ArrayView1<'_, f64>,
    gradient: ArrayView1<'_, f64>,
) -> OptimResult<()> {
    if params.len() != gradient.len() {
        return Err(OptimError::DimensionMismatch {
            params: params.len(),
            gradient: gradient.len(),
        });
    }
    Ok(())
}

/// True iff every `|g_i| < threshold`. NaN components never pass.
pub fn all_below(gradient: ArrayView1<'_, f64>, threshold: f64) -> bool {
    let converged = gradient.iter().all(|g| g.abs() < threshold);
    trace!(
        max_abs = gradient.iter().fold(0.0_f64, |m, g| m.max(g.abs())),
        threshold,
        converged,
        "convergence check"
    );
    converged
}
