//! Core traits and types for chemical age estimation.
//!
//! This crate defines the shared abstractions that the solvers and the
//! geochronology models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`EquationProblem`]: adapts solver variables to model inputs and
//!   computes residuals from outputs

mod equation;
mod model;
mod observer;

pub use equation::EquationProblem;
pub use observer::Observer;
pub use {model::Model, model::Snapshot};
