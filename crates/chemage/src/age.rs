//! Single-sample chemical ages by bisection.
//!
//! The decay equation is strictly increasing in age, so the age whose
//! predicted Pb matches the measured Pb is found by halving the age window
//! until the predicted Pb is within tolerance. A measured Pb already matched
//! by an endpoint of the window (for example Pb = 0 at age 0) is returned
//! without any guess.

mod config;
mod error;

pub use config::{AgeConfig, ConfigError};
pub use error::AgeError;

use std::convert::Infallible;

use chemage_core::{EquationProblem, Observer};
use chemage_solvers::equation::bisection::{self, Action, BracketError, Event, Status};

use crate::{Sample, constants::YEARS_PER_MA, decay::DecayModel};

/// A solved chemical age.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChemicalAge {
    /// Age in Ma, rounded to [`AgeConfig::decimals`].
    pub age_ma: f64,

    /// Unrounded age of the accepted guess, in years.
    pub age_yr: f64,

    /// Number of bisection guesses taken.
    pub guesses: usize,

    /// Predicted minus measured Pb at the accepted guess, in ppm.
    pub residual_ppm: f64,
}

/// Drives the decay equation toward a measured Pb concentration.
///
/// The solver variable is the age in years; the residual is predicted minus
/// measured Pb in ppm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredLead {
    pub pb_ppm: f64,
}

impl EquationProblem<1> for MeasuredLead {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _age_yr: &f64, pb_ppm: &f64) -> Result<[f64; 1], Infallible> {
        Ok([pb_ppm - self.pb_ppm])
    }
}

/// Bisection event emitted while solving a chemical age.
pub type AgeEvent<'a> = Event<'a, DecayModel, MeasuredLead>;

/// Finds the chemical age of one sample.
///
/// Guesses are logged at `trace` level and the result at `debug` level.
///
/// # Errors
///
/// Returns an [`AgeError`] if the config is invalid or no age in the window
/// reproduces the measured Pb.
pub fn find_age(sample: &Sample, config: &AgeConfig) -> Result<ChemicalAge, AgeError> {
    let result = find_age_observed(sample, config, |event: &AgeEvent<'_>| {
        if let Event::Midpoint { iter, bracket, .. } = event
            && let Some(residual) = event.residual()
        {
            log::trace!(
                "guess {iter}: {:.2} Ma ± {:.2} Ma, Pb estimate {:.1} ppm",
                event.x() / YEARS_PER_MA,
                bracket.width() / 2.0 / YEARS_PER_MA,
                residual + sample.pb_ppm,
            );
        }
        None::<Action>
    });

    match &result {
        Ok(age) => log::debug!("age = {} Ma (after {} guesses)", age.age_ma, age.guesses),
        Err(err) => log::warn!("{sample:?}: {err}"),
    }
    result
}

/// Finds the chemical age of one sample, reporting each evaluation to `observer`.
///
/// The observer may return [`Action::StopEarly`]; the solve then reports
/// [`AgeError::NoConvergence`] unless the stopping guess already matched.
///
/// # Errors
///
/// See [`find_age`].
pub fn find_age_observed<Obs>(
    sample: &Sample,
    config: &AgeConfig,
    observer: Obs,
) -> Result<ChemicalAge, AgeError>
where
    Obs: for<'a> Observer<AgeEvent<'a>, Action>,
{
    config.validate()?;

    let model = DecayModel::from(sample);
    let problem = MeasuredLead {
        pb_ppm: sample.pb_ppm,
    };
    let solver_config = bisection::Config::new(config.max_guesses, config.residual_tol_ppm)
        .map_err(|err| AgeError::Solver(err.into()))?;

    let solution = match bisection::solve(
        &model,
        &problem,
        [config.min_age_yr, config.max_age_yr],
        &solver_config,
        observer,
    ) {
        Ok(solution) => solution,
        Err(bisection::Error::InvalidBracket(BracketError::NoSignChange)) => {
            return Err(AgeError::Unbracketed {
                pb_ppm: sample.pb_ppm,
                min_pb_ppm: sample.predicted_pb(config.min_age_yr),
                max_pb_ppm: sample.predicted_pb(config.max_age_yr),
            });
        }
        Err(err) => return Err(AgeError::Solver(err)),
    };

    let converged =
        solution.status == Status::Converged || solution.residual.abs() < config.residual_tol_ppm;
    if !converged {
        return Err(AgeError::NoConvergence {
            pb_ppm: sample.pb_ppm,
            tolerance_ppm: config.residual_tol_ppm,
            guesses: solution.iters,
            best_age_ma: solution.x / YEARS_PER_MA,
            residual_ppm: solution.residual,
        });
    }

    Ok(ChemicalAge {
        age_ma: config.round_ma(solution.x / YEARS_PER_MA),
        age_yr: solution.x,
        guesses: solution.iters,
        residual_ppm: solution.residual,
    })
}

/// Finds the chemical age of every sample, in order.
///
/// Each sample is solved independently; a failure is reported in its own slot
/// and does not affect the others.
#[must_use]
pub fn find_ages(samples: &[Sample], config: &AgeConfig) -> Vec<Result<ChemicalAge, AgeError>> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| solve_indexed(index, sample, config))
        .collect()
}

/// Parallel version of [`find_ages`]; output order matches input order.
#[cfg(feature = "rayon")]
#[must_use]
pub fn par_find_ages(samples: &[Sample], config: &AgeConfig) -> Vec<Result<ChemicalAge, AgeError>> {
    use rayon::prelude::*;

    samples
        .par_iter()
        .enumerate()
        .map(|(index, sample)| solve_indexed(index, sample, config))
        .collect()
}

fn solve_indexed(
    index: usize,
    sample: &Sample,
    config: &AgeConfig,
) -> Result<ChemicalAge, AgeError> {
    find_age_observed(sample, config, ()).inspect_err(|err| {
        log::warn!("sample {index}: {err}");
    })
}
