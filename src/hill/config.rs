//! Hill climbing configuration.

use crate::error::{SearchError, SearchResult};

/// Configuration for the hill climbing runner.
///
/// # Examples
///
/// ```
/// use uphill::hill::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_step_size(0.05)
///     .with_iterations(5_000);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimbConfig {
    /// Magnitude of each single-coordinate perturbation.
    pub step_size: f64,

    /// Number of perturbation attempts. Zero is valid and returns the
    /// start unchanged.
    pub iterations: usize,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            step_size: 0.01,
            iterations: 1000,
        }
    }
}

impl HillClimbConfig {
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SearchResult<()> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(SearchError::InvalidConfig {
                message: format!("step_size must be positive, got {}", self.step_size),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HillClimbConfig::default();
        assert!((config.step_size - 0.01).abs() < 1e-15);
        assert_eq!(config.iterations, 1000);
    }

    #[test]
    fn test_validate_ok() {
        assert!(HillClimbConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_step() {
        assert!(HillClimbConfig::default()
            .with_step_size(0.0)
            .validate()
            .is_err());
        assert!(HillClimbConfig::default()
            .with_step_size(-0.01)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_step() {
        assert!(HillClimbConfig::default()
            .with_step_size(f64::NAN)
            .validate()
            .is_err());
        assert!(HillClimbConfig::default()
            .with_step_size(f64::INFINITY)
            .validate()
            .is_err());
    }
}
