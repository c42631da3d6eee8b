use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::path::PathBuf;

use sightline::{
    destination, group_by_bearing, run_sweep, Bearing, GeoPoint, Length, LengthUnit, RangeStrategy,
    SightingConfig, SweepRow,
};

#[derive(Parser)]
#[command(name = "sightline")]
#[command(version = "0.1.0")]
#[command(about = "Reticle-to-range estimation and target coordinate projection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep every bearing/reticle pair and project target coordinates
    Sweep {
        /// Observer latitude (decimal degrees)
        #[arg(long, default_value = "33.74475", allow_hyphen_values = true)]
        lat: f64,

        /// Observer longitude (decimal degrees)
        #[arg(long, default_value = "-118.4107", allow_hyphen_values = true)]
        lon: f64,

        /// Observer height above the surface (feet)
        #[arg(long, default_value = "143.5")]
        height: f64,

        /// Range strategy (exact, approximate, lookup)
        #[arg(short = 's', long, default_value = "exact")]
        strategy: String,

        /// Bearing step in degrees, sweeping 0 up to 360
        #[arg(long, default_value = "15.0")]
        bearing_step: f64,

        /// Reticle step per bearing
        #[arg(long, default_value = "0.1")]
        reticle_step: f64,

        /// Largest reticle reading in the sweep
        #[arg(long, default_value = "20.0")]
        reticle_max: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Write one coordinate file per bearing into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// File name prefix for --out-dir files
        #[arg(long, default_value = "bearing-")]
        file_base: String,
    },

    /// Convert a single reticle reading to a range
    Range {
        /// Reticle reading (marks; 0 means at the horizon)
        #[arg(short = 'r', long)]
        reticle: f64,

        /// Observer height above the surface (feet)
        #[arg(long, default_value = "143.5")]
        height: f64,

        /// Range strategy (exact, approximate, lookup)
        #[arg(short = 's', long, default_value = "exact")]
        strategy: String,

        /// Output unit (ft, mi, m, km, nmi)
        #[arg(short = 'u', long, default_value = "m")]
        unit: String,

        /// Print exact and approximate strategies side by side
        #[arg(long)]
        compare: bool,
    },

    /// Project a destination point from an origin, bearing, and distance
    Project {
        /// Origin latitude (decimal degrees)
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Origin longitude (decimal degrees)
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Bearing in degrees clockwise from true north
        #[arg(short = 'b', long)]
        bearing: f64,

        /// Distance to project
        #[arg(short = 'd', long)]
        distance: f64,

        /// Unit of the distance (ft, mi, m, km, nmi)
        #[arg(short = 'u', long, default_value = "m")]
        unit: String,
    },

    /// Display sighting model information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep {
            lat,
            lon,
            height,
            strategy,
            bearing_step,
            reticle_step,
            reticle_max,
            output,
            out_dir,
            file_base,
        } => {
            let strategy = parse_strategy(&strategy)?;
            let mut config = SightingConfig::default();
            config.observer = GeoPoint::with_height(lat, lon, Length::feet(height))?;
            config.strategy = strategy;
            config.bearings = bearing_sweep(bearing_step)?;
            config.reticles = reticle_sweep(reticle_step, reticle_max)?;

            let entries = run_sweep(&config)?;

            if let Some(dir) = out_dir {
                let written = sightline::write_bearing_files(&dir, &file_base, &entries)?;
                println!("Wrote {} bearing files to {}", written, dir.display());
                return Ok(());
            }

            match output {
                OutputFormat::Json => {
                    let rows: Vec<SweepRow> = entries.iter().map(SweepRow::from).collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                OutputFormat::Csv => {
                    println!("bearing_deg,reticle,latitude,longitude");
                    for entry in &entries {
                        println!(
                            "{:.1},{:.1},{:.4},{:.4}",
                            entry.bearing.degrees(),
                            entry.reticle,
                            entry.target.lat_deg(),
                            entry.target.lon_deg()
                        );
                    }
                }
                OutputFormat::Table => {
                    println!("╔════════════════════════════════════════╗");
                    println!("║            SIGHTING SWEEP              ║");
                    println!("╠════════════════════════════════════════╣");
                    println!("║ Observer:  {:>10.5}, {:>10.5}   ║", lat, lon);
                    println!("║ Height:    {:>10.1} ft              ║", height);
                    println!("║ Strategy:  {:>10}                  ║", strategy.to_string());
                    println!("║ Bearings:  {:>10}                  ║", config.bearings.len());
                    println!("║ Entries:   {:>10}                  ║", entries.len());
                    println!("╚════════════════════════════════════════╝");
                    for (bearing, rows) in group_by_bearing(&entries) {
                        println!();
                        println!("Bearing {}", bearing);
                        println!("Latitude,Longitude");
                        for row in rows {
                            println!(
                                "{:.4},{:.4}",
                                row.target.lat_deg(),
                                row.target.lon_deg()
                            );
                        }
                    }
                }
            }
        }

        Commands::Range {
            reticle,
            height,
            strategy,
            unit,
            compare,
        } => {
            let unit: LengthUnit = unit.parse()?;
            let mut config = SightingConfig::default();
            config.observer = GeoPoint::with_height(
                config.observer.lat_deg(),
                config.observer.lon_deg(),
                Length::feet(height),
            )?;

            if compare {
                config.strategy = RangeStrategy::Exact;
                let exact = config.build_model().distance(reticle)?;
                config.strategy = RangeStrategy::Approximate;
                let approx = config.build_model().distance(reticle)?;
                println!("Reticle {:.1} at {:.1} ft:", reticle, height);
                println!(
                    "  exact:       {:.3} {}",
                    exact.value_in(unit),
                    unit.abbrev()
                );
                println!(
                    "  approximate: {:.3} {}",
                    approx.value_in(unit),
                    unit.abbrev()
                );
            } else {
                config.strategy = parse_strategy(&strategy)?;
                let range = config.build_model().distance(reticle)?;
                println!("{:.3} {}", range.value_in(unit), unit.abbrev());
            }
        }

        Commands::Project {
            lat,
            lon,
            bearing,
            distance,
            unit,
        } => {
            let unit: LengthUnit = unit.parse()?;
            let origin = GeoPoint::new(lat, lon)?;
            let config = SightingConfig::default();
            let target = destination(
                &origin,
                Bearing::from_degrees(bearing),
                Length::new(distance, unit),
                config.earth_radius,
            );
            println!("{:.4},{:.4}", target.lat_deg(), target.lon_deg());
        }

        Commands::Info => {
            let config = SightingConfig::default();
            println!("╔════════════════════════════════════════╗");
            println!("║          SIGHTLINE v0.1.0              ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Reticle-to-range estimation and        ║");
            println!("║ great-circle target projection.        ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Earth radius:    {:>8.0} mi           ║", config.earth_radius.as_miles());
            println!("║ Horizon coeff:   {:>8.5}              ║", config.horizon_coeff);
            println!("║ Reticle scale:   {:>8.1} mils/mark    ║", config.reticle_scale);
            println!("║ Table entries:   {:>8}              ║", config.table.len());
            println!("╠════════════════════════════════════════╣");
            println!("║ Strategies:                            ║");
            println!("║ • exact        R·acos(R/(R+h))/m       ║");
            println!("║ • approximate  √((R+h)²−R²)/m          ║");
            println!("║ • lookup       calibrated table        ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn parse_strategy(s: &str) -> Result<RangeStrategy, Box<dyn Error>> {
    RangeStrategy::from_str(s)
        .ok_or_else(|| format!("unknown strategy {s:?} (expected exact, approximate, or lookup)").into())
}

fn bearing_sweep(step_deg: f64) -> Result<Vec<Bearing>, Box<dyn Error>> {
    if !(step_deg > 0.0) || step_deg > 360.0 {
        return Err(format!("bearing step {step_deg} out of range").into());
    }
    let count = (360.0 / step_deg).ceil() as usize;
    Ok((0..count)
        .map(|i| Bearing::from_degrees(i as f64 * step_deg))
        .collect())
}

fn reticle_sweep(step: f64, max: f64) -> Result<Vec<f64>, Box<dyn Error>> {
    if !(step > 0.0) || max < 0.0 {
        return Err(format!("invalid reticle sweep: step {step}, max {max}").into());
    }
    let count = (max / step).round() as usize;
    Ok((0..=count).map(|i| i as f64 * step).collect())
}
