use chemage_core::{EquationProblem, Model};

use crate::equation::EvaluateResult;

use super::Bracket;

/// One evaluation made during a bisection solve.
///
/// Endpoints come first, left then right, followed by one `Midpoint` per
/// probe. Failed evaluations are reported too, before the solve returns
/// their error.
pub enum Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    Left {
        x: f64,
        result: &'a EvaluateResult<M, P, 1>,
    },
    Right {
        x: f64,
        result: &'a EvaluateResult<M, P, 1>,
    },
    Midpoint {
        /// Counts probes from 1.
        iter: usize,
        x: f64,
        /// The interval the probe halves, before it shrinks.
        bracket: &'a Bracket,
        result: &'a EvaluateResult<M, P, 1>,
    },
}

impl<'a, M, P> Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn parts(&self) -> (f64, &'a EvaluateResult<M, P, 1>) {
        match *self {
            Self::Left { x, result } | Self::Right { x, result } => (x, result),
            Self::Midpoint { x, result, .. } => (x, result),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.parts().0
    }

    #[must_use]
    pub fn result(&self) -> &'a EvaluateResult<M, P, 1> {
        self.parts().1
    }

    /// The residual at [`x`](Self::x), unless the evaluation failed.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        self.result().as_ref().ok().map(|eval| eval.residuals[0])
    }
}
