//! ADAPT-VQE driver surface.
//!
//! ADAPT-VQE grows its ansatz one operator at a time. The loop goes:
//!
//! 1. Measure the gradient of every pool operator against the current ansatz
//! 2. Stop if the optimizer reports convergence
//! 3. Select the operator with the largest gradient magnitude
//! 4. Append it to the ansatz with a fresh zero parameter
//! 5. Re-optimize all parameters, then go to 1
//!
//! Circuit representation, gradient measurement and pool ranking are external
//! collaborators expressed as traits in [`pool`]. The ansatz construction and
//! the main loop are designed but not built: they fail with
//! [`AdaptError::NotImplemented`].

pub mod ansatz;
pub mod config;
pub mod driver;
pub mod error;
pub mod pool;

pub use ansatz::AnsatzState;
pub use config::{AdaptConfig, DEFAULT_MAX_ITERATIONS};
pub use driver::{AdaptVqe, Vqe};
pub use error::{AdaptError, AdaptResult};
pub use pool::{GradientSource, OperatorPool, OperatorSelector};
