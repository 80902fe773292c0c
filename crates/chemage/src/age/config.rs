use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::YEARS_PER_MA;

/// Configuration for single-sample age solves.
///
/// The defaults search 0–5000 Ma, accept an age once the predicted Pb is
/// within 0.1 ppm of the measured Pb, give up after 100 guesses, and round
/// the reported age to one decimal place in Ma.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgeConfig {
    /// Youngest age searched, in years.
    pub min_age_yr: f64,

    /// Oldest age searched, in years.
    pub max_age_yr: f64,

    /// Absolute Pb tolerance, in ppm.
    pub residual_tol_ppm: f64,

    /// Maximum number of bisection guesses.
    pub max_guesses: usize,

    /// Decimal places kept in the reported age (Ma).
    pub decimals: u32,
}

/// Errors that can occur when validating an [`AgeConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("age window must be finite with 0 <= min_age_yr < max_age_yr")]
    AgeWindow,

    #[error("residual_tol_ppm must be finite and positive")]
    ResidualTol,

    #[error("decimals must be at most 12")]
    Decimals,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            min_age_yr: 0.0,
            max_age_yr: 5000.0 * YEARS_PER_MA,
            residual_tol_ppm: 0.1,
            max_guesses: 100,
            decimals: 1,
        }
    }
}

impl AgeConfig {
    /// Largest supported number of decimal places.
    pub const MAX_DECIMALS: u32 = 12;

    /// Validates the age window, tolerance and rounding.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_age_yr.is_finite()
            || !self.max_age_yr.is_finite()
            || self.min_age_yr < 0.0
            || self.min_age_yr >= self.max_age_yr
        {
            return Err(ConfigError::AgeWindow);
        }
        if !self.residual_tol_ppm.is_finite() || self.residual_tol_ppm <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if self.decimals > Self::MAX_DECIMALS {
            return Err(ConfigError::Decimals);
        }
        Ok(())
    }

    /// Rounds an age in Ma to the configured number of decimals.
    #[must_use]
    pub fn round_ma(&self, age_ma: f64) -> f64 {
        let factor = 10_f64.powi(self.decimals.min(Self::MAX_DECIMALS).cast_signed());
        (age_ma * factor).round() / factor
    }
}
