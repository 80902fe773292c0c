//! Ordinary least-squares straight-line fits.
//!
//! [`fit_line`] regresses `y` on `x` and reports the same statistics as the
//! usual scientific `linregress` routines: slope, intercept, Pearson
//! correlation, and the standard errors of slope and intercept.

use thiserror::Error;

/// Errors that can occur when fitting a line.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RegressionError {
    #[error("x has {x} values but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("at least two points are required, got {0}")]
    TooFewPoints(usize),

    #[error("point {index} is not finite: ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    #[error("all x values are identical, slope is undefined")]
    ZeroVariance,
}

/// Result of an ordinary least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,

    /// Pearson correlation coefficient, clamped to `[-1, 1]`.
    pub r: f64,

    /// Standard error of the slope.
    pub std_err: f64,

    /// Standard error of the intercept.
    pub intercept_std_err: f64,

    /// Number of points in the fit.
    pub n: usize,
}

impl LinearFit {
    /// Returns the coefficient of determination.
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.r * self.r
    }
}

/// Fits `y` against `x` by ordinary least squares.
///
/// With exactly two points the line passes through both and the standard
/// errors are reported as zero.
///
/// # Errors
///
/// Returns an error if the slices differ in length, hold fewer than two
/// points, contain a non-finite value, or if every `x` is the same.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<LinearFit, RegressionError> {
    if x.len() != y.len() {
        return Err(RegressionError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    let n = x.len();
    if n < 2 {
        return Err(RegressionError::TooFewPoints(n));
    }

    if let Some((index, (&xi, &yi))) = x
        .iter()
        .zip(y)
        .enumerate()
        .find(|(_, (xi, yi))| !xi.is_finite() || !yi.is_finite())
    {
        return Err(RegressionError::NonFinite {
            index,
            x: xi,
            y: yi,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let len = n as f64;
    let x_mean = x.iter().sum::<f64>() / len;
    let y_mean = y.iter().sum::<f64>() / len;

    // Population (1/n) moments.
    let (mut ssxm, mut ssym, mut ssxym) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        ssxm += dx * dx;
        ssym += dy * dy;
        ssxym += dx * dy;
    }
    ssxm /= len;
    ssym /= len;
    ssxym /= len;

    #[allow(clippy::float_cmp)]
    if ssxm == 0.0 {
        return Err(RegressionError::ZeroVariance);
    }

    #[allow(clippy::float_cmp)]
    let r = if ssym == 0.0 {
        0.0
    } else {
        (ssxym / (ssxm * ssym).sqrt()).clamp(-1.0, 1.0)
    };

    let slope = ssxym / ssxm;
    let intercept = y_mean - slope * x_mean;

    let (std_err, intercept_std_err) = if n == 2 {
        (0.0, 0.0)
    } else {
        let dof = len - 2.0;
        let std_err = ((1.0 - r * r) * ssym / ssxm / dof).sqrt();
        (std_err, std_err * (ssxm + x_mean * x_mean).sqrt())
    };

    Ok(LinearFit {
        slope,
        intercept,
        r,
        std_err,
        intercept_std_err,
        n,
    })
}
