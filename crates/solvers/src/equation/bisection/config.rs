use thiserror::Error;

/// Configuration for the bisection solver.
///
/// The solver stops as soon as a probe's residual magnitude is strictly below
/// `residual_tol`, or after `max_iters` midpoint probes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is not finite and positive.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of midpoint probes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute residual tolerance.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, -1.0), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::ResidualTol));
    }

    #[test]
    fn accepts_positive_tolerance() {
        let config = Config::new(7, 0.1).expect("valid config");
        assert_eq!(config.max_iters(), 7);
        assert!((config.residual_tol() - 0.1).abs() < f64::EPSILON);
    }
}
