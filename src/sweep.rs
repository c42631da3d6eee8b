//! Sweep driver: walk every configured (bearing, reticle) pair, derive the
//! range, and project the target point.
//!
//! The sweep is a pure function of its inputs. Iterating it twice produces
//! identical output, and bearings are independent of each other, so callers
//! are free to consume it lazily or collect it up front.

use crate::cli_api::{SightingConfig, SightingError};
use crate::geo::{destination, Bearing, GeoPoint};
use crate::range_model::RangeModel;
use crate::units::Length;

/// One row of the sweep: a bearing, a reticle reading, the derived range,
/// and the projected target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepEntry {
    pub bearing: Bearing,
    pub reticle: f64,
    pub range: Length,
    pub target: GeoPoint,
}

/// Lazily sweep the configured bearings (major axis) and reticle readings
/// (minor axis), yielding one entry per pair in order.
///
/// Per-pair failures surface as `Err` items; the driver itself never skips
/// or reorders pairs.
pub fn sweep<'a>(
    config: &'a SightingConfig,
    model: &'a RangeModel,
) -> impl Iterator<Item = Result<SweepEntry, SightingError>> + 'a {
    config.bearings.iter().flat_map(move |&bearing| {
        config.reticles.iter().map(move |&reticle| {
            let range = model.distance(reticle)?;
            let target = destination(&config.observer, bearing, range, config.earth_radius);
            Ok(SweepEntry {
                bearing,
                reticle,
                range,
                target,
            })
        })
    })
}
