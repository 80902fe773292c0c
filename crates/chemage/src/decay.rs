//! The Th-U-total Pb decay equation.

use std::convert::Infallible;

use chemage_core::Model;

use crate::{
    Sample,
    constants::{
        ABUNDANCE_U235, ABUNDANCE_U238, LAMBDA_TH232, LAMBDA_U235, LAMBDA_U238, MASS_PB206,
        MASS_PB207, MASS_PB208, MASS_TH232, MASS_U235, MASS_U238,
    },
};

/// Radiogenic Pb (ppm) accumulated after `age_yr` years from Th and U (ppm).
///
/// Sums the ²⁰⁸Pb, ²⁰⁶Pb and ²⁰⁷Pb produced by ²³²Th, ²³⁸U and ²³⁵U. Strictly
/// increasing in `age_yr` for `age_yr >= 0` whenever `th_ppm + u_ppm > 0`.
#[must_use]
pub fn radiogenic_pb(age_yr: f64, th_ppm: f64, u_ppm: f64) -> f64 {
    let from_th232 = th_ppm / MASS_TH232 * (LAMBDA_TH232 * age_yr).exp_m1() * MASS_PB208;
    let from_u238 =
        u_ppm / MASS_U238 * ABUNDANCE_U238 * (LAMBDA_U238 * age_yr).exp_m1() * MASS_PB206;
    let from_u235 =
        u_ppm / MASS_U235 * ABUNDANCE_U235 * (LAMBDA_U235 * age_yr).exp_m1() * MASS_PB207;

    from_th232 + from_u238 + from_u235
}

/// Maps an age in years to the radiogenic Pb (ppm) of a fixed Th/U budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayModel {
    pub th_ppm: f64,
    pub u_ppm: f64,
}

impl DecayModel {
    #[must_use]
    pub fn new(th_ppm: f64, u_ppm: f64) -> Self {
        Self { th_ppm, u_ppm }
    }
}

impl From<&Sample> for DecayModel {
    fn from(sample: &Sample) -> Self {
        Self::new(sample.th_ppm, sample.u_ppm)
    }
}

impl Model for DecayModel {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, age_yr: &f64) -> Result<f64, Infallible> {
        Ok(radiogenic_pb(*age_yr, self.th_ppm, self.u_ppm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn no_time_means_no_lead() {
        assert_relative_eq!(radiogenic_pb(0.0, 1000.0, 50.0), 0.0);
    }

    #[test]
    fn thorium_only_term() {
        // 1000 ppm Th for 500 Ma, by hand: 1000/232 * (e^0.02475 - 1) * 208.
        let expected = 1000.0 / 232.0 * (0.02475_f64.exp() - 1.0) * 208.0;
        assert_relative_eq!(
            radiogenic_pb(500e6, 1000.0, 0.0),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn uranium_contributes_both_isotopes() {
        let t: f64 = 1e9;
        let u238 = 100.0 / 238.0 * 0.9928 * (1.55e-10 * t).exp_m1() * 206.0;
        let u235 = 100.0 / 235.0 * 0.0072 * (9.85e-10 * t).exp_m1() * 207.0;
        assert_relative_eq!(
            radiogenic_pb(t, 0.0, 100.0),
            u238 + u235,
            max_relative = 1e-12
        );
    }

    #[test]
    fn model_wraps_equation() {
        let sample = Sample::new(2000.0, 150.0, 0.0);
        let model = DecayModel::from(&sample);

        let pb = model.call(&750e6).unwrap();

        assert_relative_eq!(pb, radiogenic_pb(750e6, 2000.0, 150.0));
    }
}
