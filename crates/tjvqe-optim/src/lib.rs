//! Classical optimizers for the variational loop.
//!
//! This crate defines the contract every parameter-update strategy used by
//! the VQE drivers must satisfy:
//!
//! - **Update**: consume a parameter vector and a gradient vector of equal
//!   length, return a new parameter vector of the same length
//! - **Convergence**: a default gradient-threshold test that strategies may
//!   override
//!
//! Strategies are tagged by capability ([`OptimizerKind`]) and named
//! algorithms are selected at construction time through [`OptimizerSpec`].
//!
//! # Example
//!
//! ```ignore
//! use ndarray::array;
//! use tjvqe_optim::{FunctionalOptimizer, Optimizer};
//!
//! let mut opt = FunctionalOptimizer::new(|p, g| &p - &(&g * 0.1));
//! let next = opt.update(array![1.0, 2.0].view(), array![0.5, -0.5].view())?;
//! assert!(!opt.is_converged(array![0.5, -0.5].view()));
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod functional;
pub mod kind;
pub mod optimizer;

pub use algorithm::{Algorithm, OptimizerSpec};
pub use config::{DEFAULT_GRADIENT_CONVERGENCE_THRESHOLD, OptimizerConfig};
pub use error::{OptimError, OptimResult};
pub use functional::FunctionalOptimizer;
pub use kind::OptimizerKind;
pub use optimizer::{GradientVector, Optimizer, ParameterVector, all_below, check_dimensions};
