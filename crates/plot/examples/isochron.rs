//! Dates a small monazite suite and plots its CHIME isochron.
//!
//! Run with `cargo run -p chemage-plot --example isochron`.

use chemage::{ChimeConfig, chime};
use chemage_plot::Isochron;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let th = [30_000.0, 45_000.0, 52_000.0, 61_000.0, 70_000.0];
    let u = [3000.0, 4100.0, 2500.0, 5200.0, 3900.0];
    let pb = [1400.0, 1900.0, 2000.0, 2500.0, 2600.0];

    let result = chime::refine_columns(&th, &u, &pb, &ChimeConfig::default())?;

    println!("Grain ages (Ma): {:?}", result.sample_ages_ma);
    println!(
        "CHIME age: {:.1} ± {:.1} Ma after {} passes",
        result.age_ma,
        result.age_two_sigma_ma(),
        result.passes
    );

    let isochron = Isochron::from(&result);
    println!("{}", isochron.summary());
    isochron.show()?;

    Ok(())
}
