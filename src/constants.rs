/// Physical and conversion constants used in sighting calculations

/// Meters per foot (exact by international agreement, 1959)
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per statute mile (5280 ft, exact)
pub const METERS_PER_MILE: f64 = 1609.344;

/// Meters per kilometer (exact)
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Meters per international nautical mile (exact by definition)
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Conversion factor: degrees to radians
pub const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.0;

/// Conversion factor: radians to degrees
pub const RADIANS_TO_DEGREES: f64 = 180.0 / std::f64::consts::PI;

/// Mean Earth radius in statute miles
///
/// The spherical-earth approximation used throughout. All range and
/// projection math assumes this single radius; no ellipsoid correction.
pub const EARTH_RADIUS_MILES: f64 = 3960.0;

/// Distance-to-horizon coefficient
///
/// Horizon distance in statute miles for an observer h feet above the
/// reference surface: d = 1.22459 * sqrt(h). This is the classic
/// horizon-dip rule of thumb and agrees with the exact arc formula
/// R*acos(R/(R+h)) to well under 0.1% at coastal observation heights.
/// Calibrated empirically; treat as an opaque instrument constant.
pub const HORIZON_COEFF: f64 = 1.22459;

/// Mils of angular subtense per reticle mark
///
/// Instrument-specific linear scale between the sighting reticle's
/// graduations and milliradian-class "mils". Calibrated for the reference
/// spotting scope; not derived from first principles.
pub const MILS_PER_RETICLE_MARK: f64 = 5.0;

/// Default observer latitude in degrees (Point Vicente overlook)
pub const DEFAULT_OBSERVER_LAT_DEG: f64 = 33.74475;

/// Default observer longitude in degrees
pub const DEFAULT_OBSERVER_LON_DEG: f64 = -118.4107;

/// Default observer height above sea level in feet
pub const DEFAULT_OBSERVER_HEIGHT_FEET: f64 = 143.5;

/// Decimal places for latitude/longitude in rendered output
pub const LAT_LON_DECIMALS: usize = 4;
