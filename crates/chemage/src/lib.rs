//! Chemical (Th-U-total Pb) ages of monazite.
//!
//! Electron-microprobe analyses give Th, U and Pb concentrations in ppm.
//! Assuming all Pb is radiogenic, the decay equation links those
//! concentrations to a single age:
//!
//! - [`find_age`] solves the decay equation for one [`Sample`] by bisection
//!   over a fixed age window and reports a [`ChemicalAge`]
//! - [`find_ages`] applies the same solve to every sample of a batch,
//!   keeping failures per element
//! - [`chime::refine`] dates a cogenetic suite with the CHIME isochron
//!   method, iterating a Pb versus equivalent-Th regression until its
//!   intercept vanishes
//!
//! Progress is reported through [`Observer`]s and the `log` facade; the
//! numeric core never prints.
//!
//! # Features
//!
//! - `rayon`: enables [`par_find_ages`]
//! - `serde`: derives `Serialize`/`Deserialize` for samples and configs
//!
//! [`Observer`]: chemage_core::Observer

pub mod age;
pub mod chime;
pub mod constants;
pub mod decay;
pub mod equivalent;

mod sample;

#[cfg(feature = "rayon")]
pub use age::par_find_ages;
pub use age::{AgeConfig, AgeError, ChemicalAge, find_age, find_age_observed, find_ages};
pub use chime::{ChimeConfig, ChimeError, ChimeResult};
pub use decay::radiogenic_pb;
pub use equivalent::equivalent_th;
pub use sample::{Sample, ShapeError};
