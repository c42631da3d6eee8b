//! Reticle-to-range models.
//!
//! Three interchangeable strategies turn a reticle reading into a
//! line-of-sight distance. The exact and approximate strategies derive the
//! range from the observer height and the spherical horizon geometry; the
//! lookup strategy reads a pre-calibrated [`RangeTable`]. All three sit
//! behind [`RangeModel::distance`] so the sweep driver never cares which
//! one is active.

use std::fmt;

use crate::cli_api::SightingError;
use crate::constants::{EARTH_RADIUS_MILES, HORIZON_COEFF, MILS_PER_RETICLE_MARK};
use crate::range_table::RangeTable;
use crate::units::{Length, LengthUnit};

/// Range derivation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStrategy {
    /// d = R * acos(R / (R + h)) / m -- exact horizon-arc geometry
    Exact,
    /// d = sqrt((R + h)^2 - R^2) / m -- Pythagorean line-of-sight chord
    Approximate,
    /// Nearest-key lookup in a calibrated table (height baked in)
    Lookup,
}

impl RangeStrategy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "exact" => Some(RangeStrategy::Exact),
            "approximate" | "approx" => Some(RangeStrategy::Approximate),
            "lookup" | "table" | "lookup-table" => Some(RangeStrategy::Lookup),
            _ => None,
        }
    }
}

impl fmt::Display for RangeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeStrategy::Exact => write!(f, "exact"),
            RangeStrategy::Approximate => write!(f, "approximate"),
            RangeStrategy::Lookup => write!(f, "lookup"),
        }
    }
}

/// A configured range model: strategy plus the constants it needs.
#[derive(Debug, Clone)]
pub struct RangeModel {
    strategy: RangeStrategy,
    earth_radius: Length,
    observer_height: Length,
    /// Horizon coefficient k in d_miles = k * sqrt(h_feet)
    horizon_coeff: f64,
    /// Mils of subtense per reticle mark
    reticle_scale: f64,
    table: RangeTable,
}

impl RangeModel {
    pub fn new(
        strategy: RangeStrategy,
        earth_radius: Length,
        observer_height: Length,
        horizon_coeff: f64,
        reticle_scale: f64,
        table: RangeTable,
    ) -> Self {
        RangeModel {
            strategy,
            earth_radius,
            observer_height,
            horizon_coeff,
            reticle_scale,
            table,
        }
    }

    /// Model with the reference-instrument defaults for the given strategy,
    /// height, and table.
    pub fn with_defaults(strategy: RangeStrategy, observer_height: Length, table: RangeTable) -> Self {
        RangeModel::new(
            strategy,
            Length::miles(EARTH_RADIUS_MILES),
            observer_height,
            HORIZON_COEFF,
            MILS_PER_RETICLE_MARK,
            table,
        )
    }

    pub fn strategy(&self) -> RangeStrategy {
        self.strategy
    }

    /// Line-of-sight distance for a reticle reading, in meters.
    ///
    /// A reading of zero means the subject sits at the horizon and returns
    /// the horizon distance. Negative readings are a caller bug and fail
    /// with [`SightingError::NegativeReticle`]; they are never clamped.
    pub fn distance(&self, reticle: f64) -> Result<Length, SightingError> {
        if reticle < 0.0 || reticle.is_nan() {
            return Err(SightingError::NegativeReticle(reticle));
        }

        if self.strategy == RangeStrategy::Lookup {
            return Ok(self.table.lookup(reticle));
        }

        let mils = reticle * self.reticle_scale;
        if mils == 0.0 {
            // The arc formulas divide by the subtense; zero subtense means
            // the subject is at the horizon.
            return Ok(self.horizon_distance());
        }

        let r = self.earth_radius.as_miles();
        let h = self.observer_height.as_miles();
        let arc_miles = match self.strategy {
            RangeStrategy::Exact => r * (r / (r + h)).acos(),
            _ => ((r + h).powi(2) - r.powi(2)).sqrt(),
        };
        Ok(Length::miles(arc_miles / mils).convert_to(LengthUnit::Meters))
    }

    /// Distance to the horizon for the configured observer height.
    pub fn horizon_distance(&self) -> Length {
        let miles = self.horizon_coeff * self.observer_height.as_feet().sqrt();
        Length::miles(miles).convert_to(LengthUnit::Meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_OBSERVER_HEIGHT_FEET, METERS_PER_MILE};
    use crate::range_table::INSTRUMENT_TABLE;

    fn model(strategy: RangeStrategy) -> RangeModel {
        RangeModel::with_defaults(
            strategy,
            Length::feet(DEFAULT_OBSERVER_HEIGHT_FEET),
            INSTRUMENT_TABLE.clone(),
        )
    }

    #[test]
    fn test_negative_reticle_is_a_domain_error() {
        for strategy in [
            RangeStrategy::Exact,
            RangeStrategy::Approximate,
            RangeStrategy::Lookup,
        ] {
            let err = model(strategy).distance(-0.1).unwrap_err();
            assert!(matches!(err, SightingError::NegativeReticle(_)));
        }
    }

    #[test]
    fn test_zero_reticle_returns_horizon_distance() {
        let m = model(RangeStrategy::Exact);
        let expected = HORIZON_COEFF * DEFAULT_OBSERVER_HEIGHT_FEET.sqrt() * METERS_PER_MILE;
        let d = m.distance(0.0).unwrap();
        assert!((d.as_meters() - expected).abs() < 1e-9);
        // Approximate strategy uses the same fallback
        let d2 = model(RangeStrategy::Approximate).distance(0.0).unwrap();
        assert!((d2.as_meters() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_horizon_distance_magnitude() {
        // 1.22459 * sqrt(143.5) is about 14.67 miles, about 23.6 km, which
        // also matches the calibrated table's reticle-0 entry to within 1%.
        let d = model(RangeStrategy::Exact).horizon_distance();
        assert!((d.as_miles() - 14.669).abs() < 0.01);
        let table_horizon = INSTRUMENT_TABLE.lookup(0.0).as_meters();
        assert!((d.as_meters() - table_horizon).abs() / table_horizon < 0.01);
    }

    #[test]
    fn test_exact_strategy_strictly_decreasing() {
        let m = model(RangeStrategy::Exact);
        let mut prev = f64::INFINITY;
        for i in 1..=200 {
            let reticle = i as f64 * 0.1;
            let d = m.distance(reticle).unwrap().as_meters();
            assert!(d < prev, "distance not decreasing at reticle {reticle}");
            assert!(d > 0.0);
            prev = d;
        }
    }

    #[test]
    fn test_exact_and_approximate_are_close_but_not_identical() {
        let exact = model(RangeStrategy::Exact);
        let approx = model(RangeStrategy::Approximate);
        for reticle in [0.5, 1.0, 5.0, 20.0] {
            let de = exact.distance(reticle).unwrap().as_meters();
            let da = approx.distance(reticle).unwrap().as_meters();
            let rel = (de - da).abs() / de;
            assert!(rel < 1e-3, "strategies diverge too far at reticle {reticle}");
            assert!(de != da, "strategies unexpectedly identical at reticle {reticle}");
        }
    }

    #[test]
    fn test_exact_distance_known_value() {
        // h = 143.5 ft, reticle 5.0 -> 25 mils. The horizon arc is about
        // 14.67 mi, so the range is about 0.587 mi (945 m give or take).
        let m = model(RangeStrategy::Exact);
        let d = m.distance(5.0).unwrap();
        assert!(d.as_meters() > 900.0 && d.as_meters() < 1000.0, "got {}", d.as_meters());
    }

    #[test]
    fn test_lookup_strategy_uses_table() {
        let m = model(RangeStrategy::Lookup);
        assert_eq!(m.distance(5.0).unwrap().as_meters(), 1493.0);
        assert_eq!(m.distance(0.0).unwrap().as_meters(), 23599.0);
        // Out-of-range readings clamp instead of failing
        assert_eq!(m.distance(30.0).unwrap().as_meters(), 409.0);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(RangeStrategy::from_str("exact"), Some(RangeStrategy::Exact));
        assert_eq!(RangeStrategy::from_str("Approx"), Some(RangeStrategy::Approximate));
        assert_eq!(
            RangeStrategy::from_str("lookup-table"),
            Some(RangeStrategy::Lookup)
        );
        assert_eq!(RangeStrategy::from_str("haversine"), None);
    }

    #[test]
    fn test_taller_observer_sees_farther() {
        let low = RangeModel::with_defaults(
            RangeStrategy::Exact,
            Length::feet(50.0),
            INSTRUMENT_TABLE.clone(),
        );
        let high = RangeModel::with_defaults(
            RangeStrategy::Exact,
            Length::feet(500.0),
            INSTRUMENT_TABLE.clone(),
        );
        assert!(
            high.distance(1.0).unwrap().as_meters() > low.distance(1.0).unwrap().as_meters()
        );
        assert!(high.horizon_distance().as_meters() > low.horizon_distance().as_meters());
    }
}
