//! External collaborators of the adaptive driver.
//!
//! The driver never inspects circuits or operators. It only asks these
//! services for candidates, gradients and a selection.

use ndarray::{Array1, ArrayView1};
use tjvqe_optim::GradientVector;

/// A collection of candidate operators the ansatz can grow from.
pub trait OperatorPool {
    /// Opaque circuit fragment.
    type Operator: Clone;
    /// Opaque parameterized circuit.
    type Ansatz;

    /// Enumerate the candidate operators in a stable order.
    fn candidates(&self) -> Vec<Self::Operator>;

    /// Gradient of the cost with respect to appending `operator` to `ansatz`.
    fn gradient_of(
        &self,
        operator: &Self::Operator,
        ansatz: &Self::Ansatz,
        params: ArrayView1<'_, f64>,
    ) -> f64;

    fn len(&self) -> usize {
        self.candidates().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One gradient per candidate, in [`OperatorPool::candidates`] order.
    fn gradients(&self, ansatz: &Self::Ansatz, params: ArrayView1<'_, f64>) -> GradientVector {
        self.candidates()
            .iter()
            .map(|op| self.gradient_of(op, ansatz, params))
            .collect::<Array1<f64>>()
    }
}

/// Measures the parameter gradient of the current ansatz.
pub trait GradientSource<A> {
    fn measure_gradient(&mut self, ansatz: &A, params: ArrayView1<'_, f64>) -> GradientVector;
}

/// Picks the next operator given per-candidate gradients.
///
/// Tie-breaking between equal magnitudes is up to the implementation.
pub trait OperatorSelector<P: OperatorPool> {
    fn select_next(&self, pool: &P, gradients: ArrayView1<'_, f64>) -> Option<P::Operator>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Pool of scalar "operators" whose gradient is `op * sum(params)`.
    struct ScalarPool(Vec<f64>);

    impl OperatorPool for ScalarPool {
        type Operator = f64;
        type Ansatz = ();

        fn candidates(&self) -> Vec<f64> {
            self.0.clone()
        }

        fn gradient_of(&self, operator: &f64, _ansatz: &(), params: ArrayView1<'_, f64>) -> f64 {
            operator * params.sum()
        }
    }

    #[test]
    fn test_gradients_follow_candidate_order() {
        let pool = ScalarPool(vec![1.0, -2.0, 0.5]);
        let g = pool.gradients(&(), array![1.0, 1.0].view());
        assert_eq!(g, array![2.0, -4.0, 1.0]);
        assert_eq!(pool.len(), 3);
    }

    /// Picks the last candidate with the largest magnitude.
    struct LastMax;

    impl OperatorSelector<ScalarPool> for LastMax {
        fn select_next(&self, pool: &ScalarPool, gradients: ArrayView1<'_, f64>) -> Option<f64> {
            let candidates = pool.candidates();
            gradients
                .iter()
                .enumerate()
                .fold(None, |best: Option<(usize, f64)>, (i, g)| match best {
                    Some((_, b)) if g.abs() < b => best,
                    _ => Some((i, g.abs())),
                })
                .map(|(i, _)| candidates[i])
        }
    }

    /// Returns a fixed gradient and counts measurements.
    struct Fixed {
        gradient: GradientVector,
        measurements: usize,
    }

    impl GradientSource<()> for Fixed {
        fn measure_gradient(&mut self, _ansatz: &(), _params: ArrayView1<'_, f64>) -> GradientVector {
            self.measurements += 1;
            self.gradient.clone()
        }
    }

    #[test]
    fn test_selector_sees_pool_gradients() {
        let pool = ScalarPool(vec![1.0, -3.0, 3.0, 0.5]);
        let g = pool.gradients(&(), array![1.0].view());
        assert_eq!(LastMax.select_next(&pool, g.view()), Some(3.0));
        assert_eq!(LastMax.select_next(&pool, Array1::<f64>::zeros(0).view()), None);
    }

    #[test]
    fn test_gradient_source() {
        let mut source = Fixed {
            gradient: array![0.1, 0.2],
            measurements: 0,
        };
        let g = source.measure_gradient(&(), array![0.0, 0.0].view());
        assert_eq!(g, array![0.1, 0.2]);
        assert_eq!(source.measurements, 1);
    }

    #[test]
    fn test_empty_pool() {
        let pool = ScalarPool(vec![]);
        assert!(pool.is_empty());
        assert!(pool.gradients(&(), array![1.0].view()).is_empty());
    }
}
