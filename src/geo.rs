//! Geographic points, compass bearings, and the spherical direct geodesic.
//!
//! The forward projection here is the system's only coordinate transform;
//! every caller that needs a destination point goes through [`destination`].

use std::fmt;

use crate::cli_api::SightingError;
use crate::units::{Angle, Length};

/// A latitude/longitude pair, optionally with a height above the surface.
///
/// Invariants enforced at construction: latitude in [-90, 90] degrees,
/// longitude normalized into (-180, 180] degrees, height non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: Angle,
    lon: Angle,
    height: Option<Length>,
}

impl GeoPoint {
    /// Build a point from decimal degrees.
    ///
    /// Longitude outside (-180, 180] is wrapped; latitude outside
    /// [-90, 90] is rejected.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Result<Self, SightingError> {
        if !lat_deg.is_finite() || lat_deg < -90.0 || lat_deg > 90.0 {
            return Err(SightingError::InvalidCoordinate(format!(
                "latitude {lat_deg} outside [-90, 90]"
            )));
        }
        if !lon_deg.is_finite() {
            return Err(SightingError::InvalidCoordinate(format!(
                "longitude {lon_deg} is not finite"
            )));
        }
        Ok(GeoPoint {
            lat: Angle::degrees(lat_deg),
            lon: Angle::degrees(normalize_longitude_deg(lon_deg)),
            height: None,
        })
    }

    /// Build a point with an observer height above the surface.
    pub fn with_height(lat_deg: f64, lon_deg: f64, height: Length) -> Result<Self, SightingError> {
        if height.value() < 0.0 {
            return Err(SightingError::InvalidCoordinate(format!(
                "height {height} is negative"
            )));
        }
        let mut point = GeoPoint::new(lat_deg, lon_deg)?;
        point.height = Some(height);
        Ok(point)
    }

    /// Internal constructor for values already known to satisfy the
    /// invariants (asin-bounded latitude, pre-wrapped longitude).
    pub(crate) fn from_normalized_deg(lat_deg: f64, lon_deg: f64) -> Self {
        GeoPoint {
            lat: Angle::degrees(lat_deg),
            lon: Angle::degrees(lon_deg),
            height: None,
        }
    }

    pub fn lat(&self) -> Angle {
        self.lat
    }

    pub fn lon(&self) -> Angle {
        self.lon
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat.as_degrees()
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon.as_degrees()
    }

    pub fn lat_rad(&self) -> f64 {
        self.lat.as_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.lon.as_radians()
    }

    pub fn height(&self) -> Option<Length> {
        self.height
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat_deg(), self.lon_deg())
    }
}

/// A compass direction, clockwise from true north, normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing(Angle);

impl Bearing {
    pub fn from_degrees(deg: f64) -> Self {
        Bearing(Angle::degrees(deg.rem_euclid(360.0)))
    }

    pub fn from_radians(rad: f64) -> Self {
        Bearing::from_degrees(Angle::radians(rad).as_degrees())
    }

    pub fn degrees(&self) -> f64 {
        self.0.as_degrees()
    }

    pub fn radians(&self) -> f64 {
        self.0.as_radians()
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.degrees())
    }
}

/// Wrap a longitude in degrees into (-180, 180].
pub fn normalize_longitude_deg(lon_deg: f64) -> f64 {
    let wrapped = (lon_deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Spherical direct-geodesic (forward) solution.
///
/// Projects from `origin` along `bearing` for `distance` over a sphere of
/// radius `earth_radius` and returns the destination point. Latitude falls
/// out of asin already in range; longitude is wrapped into (-180, 180].
pub fn destination(
    origin: &GeoPoint,
    bearing: Bearing,
    distance: Length,
    earth_radius: Length,
) -> GeoPoint {
    let delta = distance.as_meters() / earth_radius.as_meters();
    let theta = bearing.radians();
    let phi1 = origin.lat_rad();
    let lam1 = origin.lon_rad();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lam2 = lam1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    GeoPoint::from_normalized_deg(
        phi2.to_degrees(),
        normalize_longitude_deg(lam2.to_degrees()),
    )
}
