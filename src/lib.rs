//! # Sightline
//!
//! Reticle-to-range estimation with great-circle target projection.
//!
//! Given an observer at a fixed position and height, a reticle reading is
//! turned into a line-of-sight distance (three selectable strategies), and
//! that distance is projected outward along compass bearings on a spherical
//! earth to produce plottable target coordinates.

// Re-export the main types and functions
pub use cli_api::{
    coordinate_table, default_bearings, default_reticles, group_by_bearing, run_sweep,
    write_bearing_files, SightingConfig, SightingError, SweepRow,
};
pub use geo::{destination, normalize_longitude_deg, Bearing, GeoPoint};
pub use range_model::{RangeModel, RangeStrategy};
pub use range_table::{RangeTable, INSTRUMENT_TABLE};
pub use sweep::{sweep, SweepEntry};
pub use units::{Angle, AngleUnit, Length, LengthUnit};

// Module declarations
pub mod cli_api;
pub mod constants;
mod geo;
mod range_model;
mod range_table;
mod sweep;
mod units;
