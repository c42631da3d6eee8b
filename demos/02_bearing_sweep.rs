/// Bearing Sweep Example
///
/// Runs the full default sweep (24 bearings x 201 reticle readings) and
/// writes one plottable coordinate file per bearing, the way a field
/// observation run is archived.

use sightline::{run_sweep, write_bearing_files, SightingConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Bearing Sweep Example ===\n");

    let config = SightingConfig::default();
    println!("Observer: {}", config.observer);
    println!(
        "Height:   {:.1} ft, strategy: {}",
        config.observer_height().as_feet(),
        config.strategy
    );

    let entries = run_sweep(&config)?;
    println!(
        "Swept {} bearings x {} readings = {} target points",
        config.bearings.len(),
        config.reticles.len(),
        entries.len()
    );

    let dir = std::env::temp_dir().join("sightline-demo-sweep");
    let written = write_bearing_files(&dir, "bearing-", &entries)?;
    println!("\nWrote {} files under {}", written, dir.display());
    println!("Each file is a Latitude,Longitude table for one bearing,");
    println!("ready to plot over a chart of the observation area.");

    Ok(())
}
