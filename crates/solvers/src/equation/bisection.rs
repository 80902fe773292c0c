//! Bisection search for a single root of a scalar equation.
//!
//! # Algorithm
//!
//! Both bracket endpoints are evaluated first. If either residual is already
//! within tolerance the solver returns it without probing. Otherwise the
//! endpoint residuals must differ in sign, and the solver repeatedly probes
//! the midpoint, replacing the endpoint whose residual shares the probe's
//! sign. It stops when a probe's residual magnitude is strictly below
//! [`Config::residual_tol`] or after [`Config::max_iters`] probes.
//!
//! The bracket is halved deterministically, so identical inputs always take
//! the same number of probes and land on the same `x`.
//!
//! # Observer Events
//!
//! - [`Event::Left`] and [`Event::Right`]: endpoint evaluations
//! - [`Event::Midpoint`]: each probe, with the bracket it was taken from
//!
//! Observers can return [`Action::StopEarly`] to halt and receive the
//! evaluation closest to a root seen so far.

mod action;
mod bracket;
mod closest;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use chemage_core::{EquationProblem, Model, Observer};

use crate::equation::evaluate;

use bracket::Bounds;
use closest::{Closest, finite_residual};

/// Finds a root of the equation using the bisection method.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or does not contain a sign
/// change, if a residual is non-finite, or if the model or problem fails
/// during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let bounds = Bounds::new(bracket)?;

    let x = bounds.left();
    let result = evaluate(model, problem, [x]);
    let action = observer.observe(&Event::Left { x, result: &result });
    let left = result?;
    let left_residual = finite_residual(&left)?;
    let mut closest = Closest::new(left);
    if let Some(status) = stop_status(action, &closest, config) {
        return Ok(closest.into_solution(status, 0));
    }

    let x = bounds.right();
    let result = evaluate(model, problem, [x]);
    let action = observer.observe(&Event::Right { x, result: &result });
    let right = result?;
    let right_residual = finite_residual(&right)?;
    closest.offer(right);
    if let Some(status) = stop_status(action, &closest, config) {
        return Ok(closest.into_solution(status, 0));
    }

    let mut bracket = Bracket::new(bounds, Sign::of(left_residual), Sign::of(right_residual))?;

    for iter in 1..=config.max_iters() {
        let x = bracket.midpoint();
        let result = evaluate(model, problem, [x]);
        let action = observer.observe(&Event::Midpoint {
            iter,
            x,
            bracket: &bracket,
            result: &result,
        });
        let probe = result?;
        let residual = finite_residual(&probe)?;
        closest.offer(probe);
        if let Some(status) = stop_status(action, &closest, config) {
            return Ok(closest.into_solution(status, iter));
        }

        bracket.shrink(x, Sign::of(residual));
    }

    Ok(closest.into_solution(Status::MaxIters, config.max_iters()))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Decides whether the latest evaluation ends the solve.
fn stop_status<I, O>(
    action: Option<Action>,
    closest: &Closest<I, O>,
    config: &Config,
) -> Option<Status> {
    match action {
        Some(Action::StopEarly) => Some(Status::StoppedByObserver),
        None if closest.within(config.residual_tol()) => Some(Status::Converged),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// Model that cubes its input.
    struct CubeModel;

    impl Model for CubeModel {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(input * input * input)
        }
    }

    /// Residual is `output - target`.
    struct TargetOutput {
        target: f64,
    }

    impl EquationProblem<1> for TargetOutput {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
            Ok(x[0])
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
            Ok([output - self.target])
        }
    }

    #[test]
    fn finds_cube_root() {
        let problem = TargetOutput { target: 27.0 };

        let solution = solve_unobserved(&CubeModel, &problem, [0.0, 10.0], &Config::default())
            .expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
        assert_relative_eq!(solution.snapshot.output, 27.0, epsilon = 1e-10);
    }

    #[test]
    fn endpoint_within_tolerance_needs_no_probes() {
        let problem = TargetOutput { target: 0.0 };

        let solution = solve_unobserved(&CubeModel, &problem, [0.0, 10.0], &Config::default())
            .expect("left endpoint is a root");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 0.0);
    }

    #[test]
    fn loose_tolerance_stops_on_first_close_probe() {
        let problem = TargetOutput { target: 125.0 };
        let config = Config::new(100, 1.0).expect("valid config");

        // Probes 5.0 exactly on the first midpoint of [0, 10].
        let solution =
            solve_unobserved(&CubeModel, &problem, [0.0, 10.0], &config).expect("should solve");

        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 5.0);
    }

    #[test]
    fn probe_budget_is_respected() {
        let problem = TargetOutput { target: 2.0 };
        let config = Config::new(5, 1e-12).expect("valid config");

        let solution =
            solve_unobserved(&CubeModel, &problem, [0.0, 10.0], &config).expect("should finish");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 5);
        assert!(!solution.is_converged());
    }

    #[test]
    fn observer_sees_every_evaluation_and_can_stop() {
        let problem = TargetOutput { target: 2.0 };

        let mut endpoints = 0;
        let mut probes = Vec::new();
        let observer = |event: &Event<'_, CubeModel, TargetOutput>| match event {
            Event::Left { .. } | Event::Right { .. } => {
                endpoints += 1;
                None
            }
            Event::Midpoint { iter, bracket, .. } => {
                probes.push(bracket.as_array());
                (*iter >= 3).then_some(Action::StopEarly)
            }
        };

        let config = Config::default();
        let solution = solve(&CubeModel, &problem, [0.0, 8.0], &config, observer)
            .expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(endpoints, 2);
        assert_eq!(probes, [[0.0, 8.0], [0.0, 4.0], [0.0, 2.0]]);
    }

    #[test]
    fn same_signs_are_rejected() {
        let problem = TargetOutput { target: 2000.0 };

        let result = solve_unobserved(&CubeModel, &problem, [0.0, 10.0], &Config::default());

        assert!(matches!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        ));
    }

    #[test]
    fn reversed_bracket_is_normalized() {
        let problem = TargetOutput { target: 64.0 };

        let solution = solve_unobserved(&CubeModel, &problem, [10.0, 0.0], &Config::default())
            .expect("should solve");

        assert_relative_eq!(solution.x, 4.0, epsilon = 1e-10);
    }

    #[test]
    fn non_finite_residual_is_an_error() {
        let problem = TargetOutput { target: f64::NAN };

        let result = solve_unobserved(&CubeModel, &problem, [0.0, 10.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
    }
}
