use thiserror::Error;

use chemage_core::{EquationProblem, Model, Snapshot};

/// The residuals at a trial `x`, with the model call that produced them.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub snapshot: Snapshot<I, O>,
}

/// Which side of an evaluation failed.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    #[error("model evaluation failed")]
    Model(#[source] ME),

    /// Building the input or measuring the residuals failed.
    #[error("equation problem failed")]
    Problem(#[source] PE),
}

/// What [`evaluate`] returns for model `M` and problem `P`.
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N>>::Error>,
>;

/// Runs `problem` and `model` once at `x`.
///
/// # Errors
///
/// Returns [`EvalError::Problem`] if `x` has no input or the residuals are
/// undefined, and [`EvalError::Model`] if the model call fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;

    match problem.residuals(&input, &output) {
        Ok(residuals) => Ok(Evaluation {
            x,
            residuals,
            snapshot: Snapshot::new(input, output),
        }),
        Err(err) => Err(EvalError::Problem(err)),
    }
}
