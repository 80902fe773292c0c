//! Numerical solvers used to date monazite.
//!
//! # Modules
//!
//! - [`equation`]: root finding for [`EquationProblem`]s, currently
//!   [`equation::bisection`]
//! - [`regression`]: ordinary least-squares straight-line fits
//!
//! [`EquationProblem`]: chemage_core::EquationProblem

pub mod equation;
pub mod regression;
