//! Optimization loop runner.
//!
//! Drives any [`Optimizer`] against a gradient oracle: measure the gradient,
//! stop if converged, otherwise take a step. This is the inner loop the
//! ADAPT-VQE driver delegates to after each ansatz growth.

use ndarray::{Array1, ArrayView1};
use tjvqe_optim::{OptimResult, Optimizer};
use tracing::{debug, warn};

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct DescentResult {
    /// Final parameters.
    pub optimal_params: Array1<f64>,
    /// Number of optimizer steps taken.
    pub iterations: usize,
    /// Number of gradient evaluations.
    pub gradient_evaluations: usize,
    /// Largest absolute gradient component at each evaluation.
    pub gradient_history: Vec<f64>,
    /// Whether the optimizer reported convergence.
    pub converged: bool,
}

/// Runner configuration.
pub struct DescentRunner {
    /// Maximum optimizer steps.
    pub maxiter: usize,
}

impl Default for DescentRunner {
    fn default() -> Self {
        Self { maxiter: 100 }
    }
}

impl DescentRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum iterations.
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    /// Run until convergence or `maxiter` steps.
    ///
    /// `on_step` is called after every step with the step index.
    pub fn run<O, G, S>(
        &self,
        optimizer: &mut O,
        mut gradient_fn: G,
        initial_params: Array1<f64>,
        mut on_step: S,
    ) -> OptimResult<DescentResult>
    where
        O: Optimizer + ?Sized,
        G: FnMut(ArrayView1<'_, f64>) -> Array1<f64>,
        S: FnMut(usize),
    {
        let mut params = initial_params;
        let mut gradient_history = Vec::new();
        let mut iterations = 0;

        loop {
            let gradient = gradient_fn(params.view());
            gradient_history.push(gradient.iter().fold(0.0_f64, |m, g| m.max(g.abs())));

            if optimizer.is_converged(gradient.view()) {
                debug!(iterations, "converged");
                return Ok(DescentResult {
                    optimal_params: params,
                    iterations,
                    gradient_evaluations: gradient_history.len(),
                    gradient_history,
                    converged: true,
                });
            }

            if iterations >= self.maxiter {
                warn!(maxiter = self.maxiter, "iteration limit reached before convergence");
                return Ok(DescentResult {
                    optimal_params: params,
                    iterations,
                    gradient_evaluations: gradient_history.len(),
                    gradient_history,
                    converged: false,
                });
            }

            params = optimizer.update(params.view(), gradient.view())?;
            iterations += 1;
            on_step(iterations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::Quadratic;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use tjvqe_optim::{FunctionalOptimizer, OptimError};

    #[test]
    fn test_runner_creation() {
        let runner = DescentRunner::new().with_maxiter(10);
        assert_eq!(runner.maxiter, 10);
    }

    #[test]
    fn test_descent_converges() {
        let problem = Quadratic::isotropic(array![0.5, -0.25]);
        let mut opt = FunctionalOptimizer::new(|p, g| &p - &(&g * 0.25));

        let result = DescentRunner::new()
            .with_maxiter(200)
            .run(&mut opt, |p| problem.gradient(p), array![0.0, 0.0], |_| {})
            .unwrap();

        assert!(result.converged);
        assert!(result.iterations > 0);
        assert_eq!(result.gradient_evaluations, result.iterations + 1);
        assert_abs_diff_eq!(result.optimal_params[0], 0.5, epsilon = 0.01);
        assert_abs_diff_eq!(result.optimal_params[1], -0.25, epsilon = 0.01);
    }

    #[test]
    fn test_already_converged() {
        let problem = Quadratic::isotropic(array![1.0]);
        let mut opt = FunctionalOptimizer::new(|p, _g| p.to_owned());
        let result = DescentRunner::new()
            .run(&mut opt, |p| problem.gradient(p), array![1.0], |_| {})
            .unwrap();
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_iteration_limit() {
        let problem = Quadratic::isotropic(array![1.0]);
        let mut opt = FunctionalOptimizer::new(|p, _g| p.to_owned());
        let mut steps = 0;
        let result = DescentRunner::new()
            .with_maxiter(3)
            .run(&mut opt, |p| problem.gradient(p), array![0.0], |_| steps += 1)
            .unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_bad_gradient_oracle() {
        let mut opt = FunctionalOptimizer::new(|p, _g| p.to_owned());
        let err = DescentRunner::new()
            .run(&mut opt, |_p| array![1.0, 1.0, 1.0], array![0.0, 0.0], |_| {})
            .unwrap_err();
        assert_eq!(
            err,
            OptimError::DimensionMismatch {
                params: 2,
                gradient: 3
            }
        );
    }
}
