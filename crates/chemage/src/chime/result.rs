use chemage_solvers::regression::LinearFit;

use crate::constants::{ATOMIC_WEIGHT_PB, LAMBDA_TH232, MASS_TH232, YEARS_PER_MA};

/// Indicates how a CHIME refinement finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The regression intercept fell within tolerance of zero.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The outcome of a CHIME refinement.
#[derive(Debug, Clone, PartialEq)]
pub struct ChimeResult {
    pub status: Status,

    /// Isochron age from the final regression, in Ma.
    pub age_ma: f64,

    /// Final regression of Pb on equivalent Th.
    pub fit: LinearFit,

    /// First regression, built from the per-sample ages.
    pub initial_fit: LinearFit,

    /// Number of regression passes performed.
    pub passes: usize,

    /// Per-sample chemical ages of the first pass, in Ma.
    pub sample_ages_ma: Vec<f64>,

    /// Per-sample equivalent Th of the first pass, in ppm.
    pub th_equiv_ppm: Vec<f64>,

    /// Measured Pb, in ppm.
    pub pb_ppm: Vec<f64>,
}

impl ChimeResult {
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.fit.slope
    }

    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.fit.intercept
    }

    /// Two standard errors of the final slope.
    #[must_use]
    pub fn slope_two_sigma(&self) -> f64 {
        2.0 * self.fit.std_err
    }

    /// Two standard errors of the age, in Ma, propagated from the slope.
    #[must_use]
    pub fn age_two_sigma_ma(&self) -> f64 {
        let d_age_d_slope = MASS_TH232 / ATOMIC_WEIGHT_PB / (LAMBDA_TH232 * (1.0 + self.fit.slope));
        d_age_d_slope * self.slope_two_sigma() / YEARS_PER_MA
    }
}
