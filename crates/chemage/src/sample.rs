use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::radiogenic_pb;

/// One microprobe analysis: Th, U and Pb concentrations in ppm.
///
/// All Pb is assumed radiogenic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    pub th_ppm: f64,
    pub u_ppm: f64,
    pub pb_ppm: f64,
}

/// The Th, U and Pb columns of a batch differ in length.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("column lengths differ: Th has {th}, U has {u}, Pb has {pb}")]
pub struct ShapeError {
    pub th: usize,
    pub u: usize,
    pub pb: usize,
}

impl Sample {
    #[must_use]
    pub const fn new(th_ppm: f64, u_ppm: f64, pb_ppm: f64) -> Self {
        Self {
            th_ppm,
            u_ppm,
            pb_ppm,
        }
    }

    /// Builds samples from parallel Th, U and Pb columns.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] if the columns differ in length.
    pub fn zip(th_ppm: &[f64], u_ppm: &[f64], pb_ppm: &[f64]) -> Result<Vec<Self>, ShapeError> {
        if th_ppm.len() != u_ppm.len() || th_ppm.len() != pb_ppm.len() {
            return Err(ShapeError {
                th: th_ppm.len(),
                u: u_ppm.len(),
                pb: pb_ppm.len(),
            });
        }

        Ok(th_ppm
            .iter()
            .zip(u_ppm)
            .zip(pb_ppm)
            .map(|((&th, &u), &pb)| Self::new(th, u, pb))
            .collect())
    }

    /// Radiogenic Pb (ppm) this sample's Th and U would produce in `age_yr` years.
    #[must_use]
    pub fn predicted_pb(&self, age_yr: f64) -> f64 {
        radiogenic_pb(age_yr, self.th_ppm, self.u_ppm)
    }
}
