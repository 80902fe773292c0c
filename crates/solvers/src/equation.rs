//! Solvers that drive the residuals of an [`EquationProblem`] to zero.
//!
//! Every solver goes through [`evaluate`], which runs the problem and model
//! once for a trial `x` and keeps the snapshot alongside the residuals.
//!
//! Only [`bisection`] is provided, for one variable with a monotonic residual.
//!
//! [`EquationProblem`]: chemage_core::EquationProblem

pub mod bisection;
mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
