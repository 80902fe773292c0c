use thiserror::Error;

use chemage_solvers::equation::bisection;

use super::ConfigError;

/// Errors that can occur when solving for a chemical age.
#[derive(Debug, Error)]
pub enum AgeError {
    /// The measured Pb lies outside the Pb the sample's Th and U can produce
    /// anywhere in the age window, so no guess was made.
    #[error(
        "Pb = {pb_ppm} ppm is outside the {min_pb_ppm:.3}..{max_pb_ppm:.3} ppm reachable in the \
         age window; check the inputs"
    )]
    Unbracketed {
        pb_ppm: f64,
        min_pb_ppm: f64,
        max_pb_ppm: f64,
    },

    /// Every guess was used without matching the measured Pb.
    #[error(
        "no age matched Pb = {pb_ppm} ppm within {tolerance_ppm} ppm after {guesses} guesses \
         (closest: {best_age_ma} Ma, off by {residual_ppm} ppm); check the inputs"
    )]
    NoConvergence {
        pb_ppm: f64,
        tolerance_ppm: f64,
        guesses: usize,
        best_age_ma: f64,
        residual_ppm: f64,
    },

    #[error("invalid age config: {0}")]
    Config(#[from] ConfigError),

    #[error("bisection failed")]
    Solver(#[source] bisection::Error),
}

impl AgeError {
    /// Returns true if no age in the window reproduces the measured Pb.
    ///
    /// This covers both [`AgeError::Unbracketed`] and
    /// [`AgeError::NoConvergence`].
    #[must_use]
    pub fn is_no_convergence(&self) -> bool {
        matches!(self, Self::Unbracketed { .. } | Self::NoConvergence { .. })
    }
}
