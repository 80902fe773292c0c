use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::age::{self, AgeConfig};

/// Configuration for the CHIME refinement.
///
/// The refinement stops once the regression intercept is within
/// `intercept_tol_ppm` of zero, or fails after `max_passes` regressions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChimeConfig {
    /// Config for the per-sample ages of the first pass.
    pub age: AgeConfig,

    /// Largest intercept magnitude (ppm Pb) accepted as zero.
    pub intercept_tol_ppm: f64,

    /// Maximum number of regression passes, including the first.
    pub max_passes: usize,
}

/// Errors that can occur when validating a [`ChimeConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid age config: {0}")]
    Age(#[from] age::ConfigError),

    #[error("intercept_tol_ppm must be finite and positive")]
    InterceptTol,

    #[error("max_passes must be at least 1")]
    MaxPasses,
}

impl Default for ChimeConfig {
    fn default() -> Self {
        Self {
            age: AgeConfig::default(),
            intercept_tol_ppm: 1e-6,
            max_passes: 50,
        }
    }
}

impl ChimeConfig {
    /// Validates the nested age config and the refinement limits.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.age.validate()?;
        if !self.intercept_tol_ppm.is_finite() || self.intercept_tol_ppm <= 0.0 {
            return Err(ConfigError::InterceptTol);
        }
        if self.max_passes == 0 {
            return Err(ConfigError::MaxPasses);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(ChimeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn nested_age_errors_surface() {
        let config = ChimeConfig {
            age: AgeConfig {
                decimals: 99,
                ..AgeConfig::default()
            },
            ..ChimeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Age(age::ConfigError::Decimals))
        );
    }

    #[test]
    fn rejects_bad_limits() {
        let config = ChimeConfig {
            intercept_tol_ppm: f64::INFINITY,
            ..ChimeConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InterceptTol));

        let config = ChimeConfig {
            max_passes: 0,
            ..ChimeConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MaxPasses));
    }
}
