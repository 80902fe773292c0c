//! Equivalent Th (Th*) for the CHIME regression.

use crate::constants::{LAMBDA_TH232, MASS_PB208, MASS_TH232, YEARS_PER_MA};

/// Th (ppm) that, with no U, would produce `pb_ppm` of radiogenic Pb in
/// `age_ma` million years.
///
/// Undefined (infinite) at `age_ma == 0`.
#[must_use]
pub fn equivalent_th(pb_ppm: f64, age_ma: f64) -> f64 {
    (MASS_TH232 / MASS_PB208) * pb_ppm / (LAMBDA_TH232 * age_ma * YEARS_PER_MA).exp_m1()
}
