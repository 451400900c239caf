//! Builder for [`TriageScheduler`].

use crate::config::EngineConfig;
use crate::core::{SharedScheduler, TriageError, TriageScheduler};

/// Assembles a [`TriageScheduler`] from configuration.
#[derive(Debug, Clone, Default)]
pub struct SchedulerBuilder {
    config: EngineConfig,
    seed: Option<u64>,
}

impl SchedulerBuilder {
    /// Start from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config`.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the demo generator for reproducible demo data.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configuration the builder will use.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate configuration and build the scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Config`] when validation fails.
    pub fn build(self) -> Result<TriageScheduler, TriageError> {
        self.config.validate().map_err(TriageError::Config)?;
        let scheduler = match self.seed {
            Some(seed) => TriageScheduler::with_seed(self.config, seed),
            None => TriageScheduler::new(self.config),
        };
        tracing::debug!(config = ?scheduler.config(), "scheduler built");
        Ok(scheduler)
    }

    /// Build and wrap in a [`SharedScheduler`].
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Config`] when validation fails.
    pub fn build_shared(self) -> Result<SharedScheduler, TriageError> {
        self.build().map(TriageScheduler::into_shared)
    }
}
