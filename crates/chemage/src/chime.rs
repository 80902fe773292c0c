//! CHIME (Chemical Th-U-total Pb Isochron Method) ages of cogenetic suites.
//!
//! # Procedure
//!
//! 1. Solve a chemical age for every sample with [`find_ages`](crate::find_ages).
//! 2. Convert each sample's Pb to equivalent Th (Th*) at its own age.
//! 3. Regress Pb on Th* and convert the slope to an age with
//!    [`age_from_slope`].
//! 4. While the intercept is not within [`ChimeConfig::intercept_tol_ppm`] of
//!    zero, recompute Th* for every sample at the latest isochron age and
//!    regress again.
//!
//! The intercept test uses a tolerance rather than exact equality with zero,
//! which a floating-point intercept may never reach.
//!
//! Each pass is reported to the observer as an [`Event`] and logged at
//! `debug` level.

mod config;
mod error;
mod result;

pub use config::{ChimeConfig, ConfigError};
pub use error::ChimeError;
pub use result::{ChimeResult, Status};

use chemage_core::Observer;
use chemage_solvers::regression::{LinearFit, fit_line};

use crate::{
    Sample,
    age::find_ages,
    constants::{ATOMIC_WEIGHT_PB, LAMBDA_TH232, MASS_TH232, YEARS_PER_MA},
    equivalent_th,
};

/// Control actions supported by the CHIME refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after this pass and report its regression.
    StopEarly,
}

/// Regression pass emitted by the CHIME refinement.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Pass counter, starting at 1.
    pub pass: usize,

    /// Equivalent Th used by this pass, in ppm.
    pub th_equiv_ppm: &'a [f64],

    /// Regression of Pb on `th_equiv_ppm`.
    pub fit: &'a LinearFit,

    /// Isochron age from this pass, in Ma.
    pub age_ma: f64,
}

/// Isochron age (years) from the slope of Pb against equivalent Th.
///
/// `age = ln(1 + slope) / λ(²³²Th) · 232 / 207.2`
#[must_use]
pub fn age_from_slope(slope: f64) -> f64 {
    slope.ln_1p() / LAMBDA_TH232 * (MASS_TH232 / ATOMIC_WEIGHT_PB)
}

/// Inverse of [`age_from_slope`].
#[must_use]
pub fn slope_from_age(age_yr: f64) -> f64 {
    (age_yr * LAMBDA_TH232 * (ATOMIC_WEIGHT_PB / MASS_TH232)).exp_m1()
}

/// Dates a cogenetic suite from parallel Th, U and Pb columns (ppm).
///
/// # Errors
///
/// Returns a [`ChimeError`] if the columns differ in length or for any of the
/// reasons listed on [`refine`].
pub fn refine_columns(
    th_ppm: &[f64],
    u_ppm: &[f64],
    pb_ppm: &[f64],
    config: &ChimeConfig,
) -> Result<ChimeResult, ChimeError> {
    let samples = Sample::zip(th_ppm, u_ppm, pb_ppm)?;
    refine(&samples, config)
}

/// Dates a cogenetic suite with the CHIME method.
///
/// # Errors
///
/// Returns a [`ChimeError`] if the config is invalid, fewer than two samples
/// are given, a per-sample age cannot be solved or is 0 Ma, a regression
/// fails, or the intercept is not within tolerance after
/// [`ChimeConfig::max_passes`].
pub fn refine(samples: &[Sample], config: &ChimeConfig) -> Result<ChimeResult, ChimeError> {
    refine_observed(samples, config, |event: &Event<'_>| {
        log::debug!(
            "pass {}: age = {:.1} Ma, intercept = {:e} ppm, r² = {:.4}",
            event.pass,
            event.age_ma,
            event.fit.intercept,
            event.fit.r_squared(),
        );
        None::<Action>
    })
    .inspect(|result| {
        log::debug!(
            "CHIME age = {:.1} ± {:.1} Ma (2σ) after {} passes; slope = {}, intercept = {}",
            result.age_ma,
            result.age_two_sigma_ma(),
            result.passes,
            result.slope(),
            result.intercept(),
        );
    })
    .inspect_err(|err| log::warn!("CHIME refinement failed: {err}"))
}

/// Dates a cogenetic suite, reporting every regression pass to `observer`.
///
/// # Errors
///
/// See [`refine`].
pub fn refine_observed<Obs>(
    samples: &[Sample],
    config: &ChimeConfig,
    mut observer: Obs,
) -> Result<ChimeResult, ChimeError>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;
    if samples.len() < 2 {
        return Err(ChimeError::TooFewSamples(samples.len()));
    }

    let sample_ages_ma = find_ages(samples, &config.age)
        .into_iter()
        .enumerate()
        .map(|(index, age)| {
            age.map(|age| age.age_ma)
                .map_err(|source| ChimeError::SampleAge { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(index) = sample_ages_ma.iter().position(|&age_ma| age_ma <= 0.0) {
        return Err(ChimeError::ZeroAge {
            index,
            pb_ppm: samples[index].pb_ppm,
        });
    }

    let pb_ppm: Vec<f64> = samples.iter().map(|sample| sample.pb_ppm).collect();
    let th_equiv_ppm: Vec<f64> = pb_ppm
        .iter()
        .zip(&sample_ages_ma)
        .map(|(&pb, &age_ma)| equivalent_th(pb, age_ma))
        .collect();

    let mut pass = 1;
    let initial = Pass::run(pass, &th_equiv_ppm, &pb_ppm)?;
    let mut latest = initial;
    let mut th_equiv = th_equiv_ppm.clone();

    let status = loop {
        if let Some(status) = latest.observe(&th_equiv, &mut observer, config) {
            break status;
        }
        if pass >= config.max_passes {
            return Err(ChimeError::TooManyPasses {
                passes: pass,
                intercept: latest.fit.intercept,
            });
        }

        pass += 1;
        th_equiv = pb_ppm
            .iter()
            .map(|&pb| equivalent_th(pb, latest.age_ma))
            .collect();
        latest = Pass::run(pass, &th_equiv, &pb_ppm)?;
    };

    Ok(ChimeResult {
        status,
        age_ma: latest.age_ma,
        fit: latest.fit,
        initial_fit: initial.fit,
        passes: pass,
        sample_ages_ma,
        th_equiv_ppm,
        pb_ppm,
    })
}

/// One regression of Pb on equivalent Th and the age it implies.
#[derive(Debug, Clone, Copy)]
struct Pass {
    number: usize,
    fit: LinearFit,
    age_ma: f64,
}

impl Pass {
    fn run(number: usize, th_equiv_ppm: &[f64], pb_ppm: &[f64]) -> Result<Self, ChimeError> {
        let fit = fit_line(th_equiv_ppm, pb_ppm).map_err(|source| ChimeError::Regression {
            pass: number,
            source,
        })?;

        let age_yr = age_from_slope(fit.slope);
        if !age_yr.is_finite() {
            return Err(ChimeError::InvalidSlope {
                pass: number,
                slope: fit.slope,
            });
        }

        Ok(Self {
            number,
            fit,
            age_ma: age_yr / YEARS_PER_MA,
        })
    }

    /// Reports the pass and returns a status if the refinement should end.
    fn observe<Obs>(
        &self,
        th_equiv_ppm: &[f64],
        observer: &mut Obs,
        config: &ChimeConfig,
    ) -> Option<Status>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let event = Event {
            pass: self.number,
            th_equiv_ppm,
            fit: &self.fit,
            age_ma: self.age_ma,
        };

        match observer.observe(&event) {
            Some(Action::StopEarly) => Some(Status::StoppedByObserver),
            None if self.fit.intercept.abs() < config.intercept_tol_ppm => Some(Status::Converged),
            None => None,
        }
    }
}
