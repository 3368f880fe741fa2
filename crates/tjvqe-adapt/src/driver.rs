//! The ADAPT-VQE driver.

use tracing::{info, warn};

use crate::ansatz::AnsatzState;
use crate::config::AdaptConfig;
use crate::error::{AdaptError, AdaptResult};
use crate::pool::OperatorPool;

/// Common surface of variational eigensolvers.
pub trait Vqe {
    type Ansatz;

    /// Build the parameterized circuit to optimize.
    fn make_ansatz(&mut self) -> AdaptResult<Self::Ansatz>;
}

/// ADAPT-VQE runner configuration.
pub struct AdaptVqe<P: OperatorPool> {
    pool: P,
    config: AdaptConfig,
    state: AnsatzState<P::Operator>,
}

impl<P: OperatorPool> AdaptVqe<P> {
    /// Create a driver over `pool` with default settings.
    ///
    /// # Errors
    /// [`AdaptError::EmptyPool`] if the pool has no candidates.
    pub fn new(pool: P) -> AdaptResult<Self> {
        if pool.is_empty() {
            return Err(AdaptError::EmptyPool);
        }
        info!(candidates = pool.len(), "ADAPT-VQE driver created");
        Ok(Self {
            pool,
            config: AdaptConfig::default(),
            state: AnsatzState::new(),
        })
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, config: AdaptConfig) -> AdaptResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    pub fn config(&self) -> &AdaptConfig {
        &self.config
    }

    /// Operators and parameters accumulated so far.
    pub fn state(&self) -> &AnsatzState<P::Operator> {
        &self.state
    }

    /// Run the adaptive loop until convergence or `max_iterations`.
    ///
    /// Not built yet: always fails with [`AdaptError::NotImplemented`].
    pub fn run(&mut self) -> AdaptResult<&AnsatzState<P::Operator>> {
        warn!(
            max_iterations = self.config.max_iterations,
            "ADAPT-VQE main loop invoked"
        );
        Err(AdaptError::NotImplemented("ADAPT-VQE main loop"))
    }
}

impl<P: OperatorPool> Vqe for AdaptVqe<P> {
    type Ansatz = P::Ansatz;

    /// Not built yet: always fails with [`AdaptError::NotImplemented`].
    fn make_ansatz(&mut self) -> AdaptResult<P::Ansatz> {
        warn!(operators = self.state.len(), "ADAPT-VQE ansatz construction invoked");
        Err(AdaptError::NotImplemented("ADAPT-VQE ansatz construction"))
    }
}
