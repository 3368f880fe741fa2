//! Property tests for the optimizer contract.

use ndarray::Array1;
use proptest::prelude::*;
use tjvqe_optim::{FunctionalOptimizer, OptimError, Optimizer, OptimizerConfig};

fn vector(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, len)
}

fn equal_length_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..16).prop_flat_map(|n| (vector(n), vector(n)))
}

proptest! {
    #[test]
    fn update_preserves_length_and_inputs((p, g) in equal_length_pair(), lr in 0.0f64..1.0) {
        let mut opt = FunctionalOptimizer::new(move |p, g| &p - &(&g * lr));
        let params = Array1::from(p.clone());
        let gradient = Array1::from(g.clone());

        let next = opt.update(params.view(), gradient.view()).unwrap();

        prop_assert_eq!(next.len(), params.len());
        prop_assert_eq!(params.to_vec(), p);
        prop_assert_eq!(gradient.to_vec(), g);
    }

    #[test]
    fn mismatched_lengths_rejected(p in vector(3), g in prop::collection::vec(-1.0f64..1.0, 0..3)) {
        let mut opt = FunctionalOptimizer::new(|p, _g| p.to_owned());
        let err = opt
            .update(Array1::from(p).view(), Array1::from(g.clone()).view())
            .unwrap_err();
        prop_assert_eq!(err, OptimError::DimensionMismatch { params: 3, gradient: g.len() });
    }

    #[test]
    fn converged_iff_all_strictly_below(g in prop::collection::vec(-1.0f64..1.0, 0..12), t in 1e-6f64..1.0) {
        let config = OptimizerConfig::new(t).unwrap();
        let opt = FunctionalOptimizer::with_config(config, |p, _g| p.to_owned()).unwrap();
        let expected = g.iter().all(|x| x.abs() < t);
        prop_assert_eq!(opt.is_converged(Array1::from(g).view()), expected);
    }

    #[test]
    fn zero_gradient_always_converged(n in 0usize..32, t in 1e-12f64..10.0) {
        let opt = FunctionalOptimizer::new(|p, _g| p.to_owned()).with_threshold(t).unwrap();
        prop_assert!(opt.is_converged(Array1::<f64>::zeros(n).view()));
    }

    #[test]
    fn component_at_threshold_not_converged(n in 1usize..8, idx in 0usize..8, t in 1e-6f64..1.0, negative: bool) {
        let opt = FunctionalOptimizer::new(|p, _g| p.to_owned()).with_threshold(t).unwrap();
        let mut g = Array1::<f64>::zeros(n);
        g[idx % n] = if negative { -t } else { t };
        prop_assert!(!opt.is_converged(g.view()));
    }
}

#[test]
fn scenario_default_threshold() {
    let opt = FunctionalOptimizer::new(|p, _g| p.to_owned());
    assert_eq!(opt.gradient_convergence_threshold(), 0.01);
}

#[test]
fn scenario_converged() {
    let opt = FunctionalOptimizer::new(|p, _g| p.to_owned());
    assert!(opt.is_converged(ndarray::array![0.001, -0.005, 0.009].view()));
}

#[test]
fn scenario_not_converged() {
    let opt = FunctionalOptimizer::new(|p, _g| p.to_owned());
    assert!(!opt.is_converged(ndarray::array![0.001, -0.02, 0.009].view()));
}
