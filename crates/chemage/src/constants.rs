//! Decay constants, isotopic abundances and masses used by the age equations.
//!
//! Decay constants are per year.

/// Decay constant of ²³²Th.
pub const LAMBDA_TH232: f64 = 4.95e-11;

/// Decay constant of ²³⁸U.
pub const LAMBDA_U238: f64 = 1.55e-10;

/// Decay constant of ²³⁵U.
pub const LAMBDA_U235: f64 = 9.85e-10;

/// Atomic fraction of ²³⁸U in natural uranium.
pub const ABUNDANCE_U238: f64 = 0.9928;

/// Atomic fraction of ²³⁵U in natural uranium.
pub const ABUNDANCE_U235: f64 = 0.0072;

pub const MASS_TH232: f64 = 232.0;
pub const MASS_U238: f64 = 238.0;
pub const MASS_U235: f64 = 235.0;
pub const MASS_PB208: f64 = 208.0;
pub const MASS_PB206: f64 = 206.0;
pub const MASS_PB207: f64 = 207.0;

/// Atomic weight of natural Pb, used by the CHIME slope-to-age conversion.
pub const ATOMIC_WEIGHT_PB: f64 = 207.2;

pub const YEARS_PER_MA: f64 = 1e6;
