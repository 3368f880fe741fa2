//! Bookkeeping for a growing ansatz.

use ndarray::{Array1, ArrayView1};
use tjvqe_optim::{Optimizer, ParameterVector};
use tracing::debug;

use crate::error::{AdaptError, AdaptResult};

/// Operators appended so far and one parameter per operator.
///
/// The parameter vector is replaced, never mutated in place: each growth
/// step and each optimizer step installs a new vector.
#[derive(Debug, Clone, PartialEq)]
pub struct AnsatzState<Op> {
    operators: Vec<Op>,
    params: ParameterVector,
}

impl<Op> Default for AnsatzState<Op> {
    fn default() -> Self {
        Self {
            operators: Vec::new(),
            params: Array1::zeros(0),
        }
    }
}

impl<Op> AnsatzState<Op> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operators(&self) -> &[Op] {
        &self.operators
    }

    pub fn parameters(&self) -> ArrayView1<'_, f64> {
        self.params.view()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Append `operator` with a zero-initialized parameter.
    pub fn push_operator(&mut self, operator: Op) {
        self.operators.push(operator);
        self.params = self
            .params
            .iter()
            .copied()
            .chain(std::iter::once(0.0))
            .collect();
        debug!(num_operators = self.operators.len(), "ansatz grown");
    }

    /// Install a new parameter vector.
    pub fn replace_parameters(&mut self, params: ParameterVector) -> AdaptResult<()> {
        if params.len() != self.operators.len() {
            return Err(AdaptError::ParameterCount {
                expected: self.operators.len(),
                actual: params.len(),
            });
        }
        self.params = params;
        Ok(())
    }

    /// Run one optimizer step against `gradient` and install the result.
    ///
    /// On error the current parameters are left untouched.
    pub fn apply_step<O>(&mut self, optimizer: &mut O, gradient: ArrayView1<'_, f64>) -> AdaptResult<()>
    where
        O: Optimizer + ?Sized,
    {
        let next = optimizer.update(self.params.view(), gradient)?;
        self.replace_parameters(next)
    }
}
