//! Cost functions with analytic gradients.

use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Separable quadratic `f(x) = Σ sᵢ (xᵢ - cᵢ)²`.
///
/// The minimum is at `c` with value 0. Stands in for an energy landscape
/// whose gradient would otherwise be measured on a backend.
#[derive(Debug, Clone)]
pub struct Quadratic {
    pub center: Array1<f64>,
    pub scales: Array1<f64>,
}

impl Quadratic {
    /// Bowl centered at `center` with unit curvature.
    pub fn isotropic(center: Array1<f64>) -> Self {
        let scales = Array1::ones(center.len());
        Self { center, scales }
    }

    /// Bowl with random center and curvatures in `[0.5, 2.0)`.
    pub fn random(dim: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let center = (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let scales = (0..dim).map(|_| rng.gen_range(0.5..2.0)).collect();
        Self { center, scales }
    }

    pub fn dim(&self) -> usize {
        self.center.len()
    }

    pub fn value(&self, params: ArrayView1<'_, f64>) -> f64 {
        let diff = &params - &self.center;
        (&self.scales * &diff * &diff).sum()
    }

    pub fn gradient(&self, params: ArrayView1<'_, f64>) -> Array1<f64> {
        let diff = &params - &self.center;
        &self.scales * &diff * 2.0
    }
}

/// Uniform random starting point in `[-π/2, π/2)`.
pub fn random_initial_params(dim: usize, seed: u64) -> Array1<f64> {
    use std::f64::consts::FRAC_PI_2;
    let mut rng = StdRng::seed_from_u64(seed);
    (0..dim).map(|_| rng.gen_range(-FRAC_PI_2..FRAC_PI_2)).collect()
}
