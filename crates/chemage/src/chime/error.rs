use thiserror::Error;

use chemage_solvers::regression::RegressionError;

use crate::{AgeError, ShapeError};

use super::ConfigError;

/// Errors that can occur during a CHIME refinement.
#[derive(Debug, Error)]
pub enum ChimeError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("CHIME needs at least two samples, got {0}")]
    TooFewSamples(usize),

    #[error("invalid CHIME config: {0}")]
    Config(#[from] ConfigError),

    /// A per-sample age of the first pass could not be solved.
    #[error("sample {index}: {source}")]
    SampleAge {
        index: usize,
        #[source]
        source: AgeError,
    },

    /// A grain dated to 0 Ma has no equivalent Th.
    #[error("sample {index} dates to 0 Ma (Pb {pb_ppm} ppm)")]
    ZeroAge { index: usize, pb_ppm: f64 },

    #[error("regression failed on pass {pass}: {source}")]
    Regression {
        pass: usize,
        #[source]
        source: RegressionError,
    },

    /// The isochron slope does not map to a finite age.
    #[error("slope {slope} on pass {pass} gives no finite age")]
    InvalidSlope { pass: usize, slope: f64 },

    /// The intercept was still non-zero after the last allowed pass.
    #[error("intercept still {intercept} ppm after {passes} passes")]
    TooManyPasses { passes: usize, intercept: f64 },
}
