use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

use super::{bracket::BracketError, config::ConfigError};

type BoxedError = Box<dyn StdError + Send + Sync>;

/// Reasons a bisection solve ends without a [`Solution`](super::Solution).
#[derive(Debug, Error)]
pub enum Error {
    /// The bracket was malformed or its endpoints share a residual sign.
    #[error("bad bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("bad solver config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A residual evaluated to NaN or an infinity.
    #[error("residual at x = {x} is not finite ({residual})")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("equation problem failed")]
    Problem(#[source] BoxedError),

    #[error("model evaluation failed")]
    Model(#[source] BoxedError),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(source) => Self::Model(source.into()),
            EvalError::Problem(source) => Self::Problem(source.into()),
        }
    }
}
