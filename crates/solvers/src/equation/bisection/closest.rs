use crate::equation::Evaluation;

use super::{Error, Solution, Status};

/// The evaluation whose residual is closest to zero so far.
///
/// Always holds an evaluation, since tracking starts from the left endpoint.
pub(super) struct Closest<I, O>(Evaluation<I, O, 1>);

impl<I, O> Closest<I, O> {
    pub(super) fn new(eval: Evaluation<I, O, 1>) -> Self {
        Self(eval)
    }

    /// Takes `eval` if its residual magnitude is strictly smaller.
    ///
    /// Ties keep the earlier evaluation.
    pub(super) fn offer(&mut self, eval: Evaluation<I, O, 1>) {
        if eval.residuals[0].abs() < self.0.residuals[0].abs() {
            self.0 = eval;
        }
    }

    pub(super) fn within(&self, residual_tol: f64) -> bool {
        self.0.residuals[0].abs() < residual_tol
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        let Evaluation {
            x: [x],
            residuals: [residual],
            snapshot,
        } = self.0;

        Solution {
            status,
            x,
            residual,
            snapshot,
            iters,
        }
    }
}

/// The residual of a one-variable evaluation, rejecting NaN and infinities.
pub(super) fn finite_residual<I, O>(eval: &Evaluation<I, O, 1>) -> Result<f64, Error> {
    let [x] = eval.x;
    let [residual] = eval.residuals;
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(Error::NonFiniteResidual { x, residual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chemage_core::Snapshot;

    fn eval(x: f64, residual: f64) -> Evaluation<(), (), 1> {
        Evaluation {
            x: [x],
            residuals: [residual],
            snapshot: Snapshot::new((), ()),
        }
    }

    #[test]
    fn keeps_the_smallest_magnitude() {
        let mut closest = Closest::new(eval(1.0, 2.0));
        closest.offer(eval(2.0, -1.5));
        closest.offer(eval(3.0, 4.0));
        closest.offer(eval(4.0, 1.5));

        let solution = closest.into_solution(Status::MaxIters, 3);

        assert_eq!((solution.x, solution.residual), (2.0, -1.5));
        assert_eq!(solution.iters, 3);
    }

    #[test]
    fn tolerance_is_strict() {
        let closest = Closest::new(eval(1.0, -0.1));

        assert!(!closest.within(0.1));
        assert!(closest.within(0.2));
    }

    #[test]
    fn rejects_non_finite_residuals() {
        assert_eq!(finite_residual(&eval(1.0, -3.0)).ok(), Some(-3.0));
        assert!(matches!(
            finite_residual(&eval(2.0, f64::INFINITY)),
            Err(Error::NonFiniteResidual { x, .. }) if x == 2.0
        ));
    }
}
