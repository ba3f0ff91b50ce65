//! SA configuration.

use crate::error::{SearchError, SearchResult};

/// Configuration for the Simulated Annealing runner.
///
/// # Examples
///
/// ```
/// use uphill::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_iterations(10_000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Total number of annealing iterations. Must be positive.
    pub iterations: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SearchResult<()> {
        if self.iterations == 0 {
            return Err(SearchError::ZeroIterations);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.iterations, 1000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = SaConfig::default().with_iterations(500).with_seed(123);
        assert_eq!(config.iterations, 500);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = SaConfig::default().with_iterations(0);
        assert_eq!(config.validate().unwrap_err(), SearchError::ZeroIterations);
    }
}
