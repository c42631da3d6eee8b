// CLI API module - configuration, errors, and output assembly shared by the
// command-line tool and the example programs.
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::constants::{
    DEFAULT_OBSERVER_HEIGHT_FEET, DEFAULT_OBSERVER_LAT_DEG, DEFAULT_OBSERVER_LON_DEG,
    EARTH_RADIUS_MILES, HORIZON_COEFF, LAT_LON_DECIMALS, MILS_PER_RETICLE_MARK,
};
use crate::geo::{Bearing, GeoPoint};
use crate::range_model::{RangeModel, RangeStrategy};
use crate::range_table::{RangeTable, INSTRUMENT_TABLE};
use crate::sweep::{sweep, SweepEntry};
use crate::units::Length;

/// Error type for sighting operations
#[derive(Debug)]
pub enum SightingError {
    /// Reticle readings are never negative; never clamped
    NegativeReticle(f64),
    /// Unit string outside the closed unit set
    UnknownUnit(String),
    /// Latitude/longitude/height invariant violation
    InvalidCoordinate(String),
    /// Range table construction rejected (empty or unsorted keys)
    InvalidTable(String),
    /// Output file writing failed
    Io(std::io::Error),
}

impl fmt::Display for SightingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SightingError::NegativeReticle(v) => {
                write!(f, "negative reticle reading: {v}")
            }
            SightingError::UnknownUnit(s) => write!(f, "unknown unit: {s:?}"),
            SightingError::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
            SightingError::InvalidTable(msg) => write!(f, "invalid range table: {msg}"),
            SightingError::Io(err) => write!(f, "output error: {err}"),
        }
    }
}

impl Error for SightingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SightingError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SightingError {
    fn from(err: std::io::Error) -> Self {
        SightingError::Io(err)
    }
}

/// Everything a sweep needs: observer, physical constants, strategy, and
/// the two sweep axes. No process-global state; pass this around.
#[derive(Debug, Clone)]
pub struct SightingConfig {
    /// Observer position; its height feeds the range model
    pub observer: GeoPoint,
    /// Spherical earth radius shared by the range model and the projector
    pub earth_radius: Length,
    /// Horizon coefficient k in d_miles = k * sqrt(h_feet)
    pub horizon_coeff: f64,
    /// Mils of subtense per reticle mark
    pub reticle_scale: f64,
    /// Range derivation strategy
    pub strategy: RangeStrategy,
    /// Calibrated table for the lookup strategy
    pub table: RangeTable,
    /// Bearings to sweep, in output order (major axis)
    pub bearings: Vec<Bearing>,
    /// Reticle readings to sweep per bearing (minor axis)
    pub reticles: Vec<f64>,
}

impl Default for SightingConfig {
    fn default() -> Self {
        let observer = GeoPoint::with_height(
            DEFAULT_OBSERVER_LAT_DEG,
            DEFAULT_OBSERVER_LON_DEG,
            Length::feet(DEFAULT_OBSERVER_HEIGHT_FEET),
        )
        .expect("default observer position is valid");

        SightingConfig {
            observer,
            earth_radius: Length::miles(EARTH_RADIUS_MILES),
            horizon_coeff: HORIZON_COEFF,
            reticle_scale: MILS_PER_RETICLE_MARK,
            strategy: RangeStrategy::Exact,
            table: INSTRUMENT_TABLE.clone(),
            bearings: default_bearings(),
            reticles: default_reticles(),
        }
    }
}

impl SightingConfig {
    /// Observer height above the surface; zero if the point carries none.
    pub fn observer_height(&self) -> Length {
        self.observer.height().unwrap_or(Length::feet(0.0))
    }

    /// Assemble the range model this configuration describes.
    pub fn build_model(&self) -> RangeModel {
        RangeModel::new(
            self.strategy,
            self.earth_radius,
            self.observer_height(),
            self.horizon_coeff,
            self.reticle_scale,
            self.table.clone(),
        )
    }
}

/// The default bearing sweep: a full compass rose in 15-degree steps.
pub fn default_bearings() -> Vec<Bearing> {
    (0..360)
        .step_by(15)
        .map(|deg| Bearing::from_degrees(deg as f64))
        .collect()
}

/// The default reticle sweep: 0.0 through 20.0 in 0.1 steps.
pub fn default_reticles() -> Vec<f64> {
    (0..=200).map(|i| i as f64 * 0.1).collect()
}

/// Run the configured sweep eagerly, aborting on the first invalid pair.
pub fn run_sweep(config: &SightingConfig) -> Result<Vec<SweepEntry>, SightingError> {
    let model = config.build_model();
    sweep(config, &model).collect()
}

/// One sweep row flattened to plain scalars for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub bearing_deg: f64,
    pub reticle: f64,
    pub range_m: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&SweepEntry> for SweepRow {
    fn from(entry: &SweepEntry) -> Self {
        SweepRow {
            bearing_deg: entry.bearing.degrees(),
            reticle: entry.reticle,
            range_m: entry.range.as_meters(),
            latitude: entry.target.lat_deg(),
            longitude: entry.target.lon_deg(),
        }
    }
}

/// Group sweep entries by bearing, preserving sweep order.
pub fn group_by_bearing(entries: &[SweepEntry]) -> Vec<(Bearing, Vec<&SweepEntry>)> {
    let mut groups: Vec<(Bearing, Vec<&SweepEntry>)> = Vec::new();
    for entry in entries {
        match groups.last_mut() {
            Some((bearing, rows)) if *bearing == entry.bearing => rows.push(entry),
            _ => groups.push((entry.bearing, vec![entry])),
        }
    }
    groups
}

/// Render one bearing's entries as the two-column coordinate table.
pub fn coordinate_table(entries: &[&SweepEntry]) -> String {
    let mut out = String::from("Latitude,Longitude\n");
    for entry in entries {
        out.push_str(&format!(
            "{:.p$},{:.p$}\n",
            entry.target.lat_deg(),
            entry.target.lon_deg(),
            p = LAT_LON_DECIMALS,
        ));
    }
    out
}

/// Write one coordinate-table file per bearing into `dir`.
///
/// File names are `<base><bearing>.csv` with the bearing zero-padded to
/// three digits. Returns the number of files written.
pub fn write_bearing_files(
    dir: &Path,
    base: &str,
    entries: &[SweepEntry],
) -> Result<usize, SightingError> {
    std::fs::create_dir_all(dir)?;
    let groups = group_by_bearing(entries);
    for (bearing, rows) in &groups {
        let name = format!("{}{:03}.csv", base, bearing.degrees().round() as i64);
        let mut file = File::create(dir.join(name))?;
        file.write_all(coordinate_table(rows).as_bytes())?;
    }
    Ok(groups.len())
}
