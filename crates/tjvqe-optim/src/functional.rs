//! Optimizer wrapping a user-supplied update function.

use std::fmt;

use ndarray::ArrayView1;

use crate::config::OptimizerConfig;
use crate::error::OptimResult;
use crate::kind::OptimizerKind;
use crate::optimizer::{Optimizer, ParameterVector, all_below};

type ConvergenceFn = Box<dyn Fn(ArrayView1<'_, f64>) -> bool>;

/// Optimizer whose update rule is an arbitrary closure.
///
/// The closure receives read-only views of the parameters and gradient and
/// returns the next parameter vector. Dimension checks are applied by
/// [`Optimizer::update`] before the closure runs.
pub struct FunctionalOptimizer<F> {
    config: OptimizerConfig,
    update_fn: F,
    convergence_fn: Option<ConvergenceFn>,
}

impl<F> FunctionalOptimizer<F>
where
    F: FnMut(ArrayView1<'_, f64>, ArrayView1<'_, f64>) -> ParameterVector,
{
    /// Wrap `update_fn` with the default configuration.
    pub fn new(update_fn: F) -> Self {
        Self {
            config: OptimizerConfig::default(),
            update_fn,
            convergence_fn: None,
        }
    }

    /// Wrap `update_fn` with an explicit configuration.
    pub fn with_config(config: OptimizerConfig, update_fn: F) -> OptimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            update_fn,
            convergence_fn: None,
        })
    }

    /// Set the convergence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> OptimResult<Self> {
        self.config = OptimizerConfig::new(threshold)?;
        Ok(self)
    }

    /// Replace the default convergence test.
    pub fn with_convergence<C>(mut self, convergence_fn: C) -> Self
    where
        C: Fn(ArrayView1<'_, f64>) -> bool + 'static,
    {
        self.convergence_fn = Some(Box::new(convergence_fn));
        self
    }
}

impl<F> Optimizer for FunctionalOptimizer<F>
where
    F: FnMut(ArrayView1<'_, f64>, ArrayView1<'_, f64>) -> ParameterVector,
{
    fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    fn kind(&self) -> OptimizerKind {
        OptimizerKind::Functional
    }

    fn propose(
        &mut self,
        params: ArrayView1<'_, f64>,
        gradient: ArrayView1<'_, f64>,
    ) -> ParameterVector {
        (self.update_fn)(params, gradient)
    }

    fn is_converged(&self, gradient: ArrayView1<'_, f64>) -> bool {
        match &self.convergence_fn {
            Some(f) => f(gradient),
            None => all_below(gradient, self.config.gradient_convergence_threshold),
        }
    }
}

impl<F> fmt::Debug for FunctionalOptimizer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionalOptimizer")
            .field("config", &self.config)
            .field("custom_convergence", &self.convergence_fn.is_some())
            .finish()
    }
}
