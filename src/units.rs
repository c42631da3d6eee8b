//! Length and angle value types with explicit unit tags.
//!
//! All cross-unit arithmetic goes through a canonical unit (meters for
//! lengths, radians for angles), so every pairwise conversion round-trips
//! within floating-point tolerance. The unit sets are closed enums; an
//! unrecognized unit string is a parse error, never a silent pass-through.

use std::fmt;
use std::str::FromStr;

use crate::cli_api::SightingError;
use crate::constants::{
    DEGREES_TO_RADIANS, METERS_PER_FOOT, METERS_PER_KILOMETER, METERS_PER_MILE,
    METERS_PER_NAUTICAL_MILE, RADIANS_TO_DEGREES,
};

/// Length unit tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Feet,
    Miles,
    Meters,
    Kilometers,
    NauticalMiles,
}

impl LengthUnit {
    /// Meters per one of this unit
    pub fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Feet => METERS_PER_FOOT,
            LengthUnit::Miles => METERS_PER_MILE,
            LengthUnit::Meters => 1.0,
            LengthUnit::Kilometers => METERS_PER_KILOMETER,
            LengthUnit::NauticalMiles => METERS_PER_NAUTICAL_MILE,
        }
    }

    /// Short abbreviation used in rendered output
    pub fn abbrev(self) -> &'static str {
        match self {
            LengthUnit::Feet => "ft",
            LengthUnit::Miles => "mi",
            LengthUnit::Meters => "m",
            LengthUnit::Kilometers => "km",
            LengthUnit::NauticalMiles => "nmi",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

impl FromStr for LengthUnit {
    type Err = SightingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ft" | "feet" | "foot" => Ok(LengthUnit::Feet),
            "mi" | "mile" | "miles" => Ok(LengthUnit::Miles),
            "m" | "meter" | "meters" => Ok(LengthUnit::Meters),
            "km" | "kilometer" | "kilometers" => Ok(LengthUnit::Kilometers),
            "nmi" | "nm" | "nautical-mile" | "nautical-miles" => Ok(LengthUnit::NauticalMiles),
            _ => Err(SightingError::UnknownUnit(s.to_string())),
        }
    }
}

/// Angle unit tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "deg"),
            AngleUnit::Radians => write!(f, "rad"),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = SightingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            _ => Err(SightingError::UnknownUnit(s.to_string())),
        }
    }
}

/// A scalar length with an explicit unit tag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Length { value, unit }
    }

    pub fn feet(value: f64) -> Self {
        Length::new(value, LengthUnit::Feet)
    }

    pub fn miles(value: f64) -> Self {
        Length::new(value, LengthUnit::Miles)
    }

    pub fn meters(value: f64) -> Self {
        Length::new(value, LengthUnit::Meters)
    }

    pub fn kilometers(value: f64) -> Self {
        Length::new(value, LengthUnit::Kilometers)
    }

    pub fn nautical_miles(value: f64) -> Self {
        Length::new(value, LengthUnit::NauticalMiles)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Scalar value re-expressed in the given unit
    pub fn value_in(&self, unit: LengthUnit) -> f64 {
        if unit == self.unit {
            return self.value;
        }
        self.value * self.unit.meters_per_unit() / unit.meters_per_unit()
    }

    /// Same length re-tagged in the given unit
    pub fn convert_to(&self, unit: LengthUnit) -> Length {
        Length::new(self.value_in(unit), unit)
    }

    pub fn as_feet(&self) -> f64 {
        self.value_in(LengthUnit::Feet)
    }

    pub fn as_miles(&self) -> f64 {
        self.value_in(LengthUnit::Miles)
    }

    pub fn as_meters(&self) -> f64 {
        self.value_in(LengthUnit::Meters)
    }

    pub fn as_kilometers(&self) -> f64 {
        self.value_in(LengthUnit::Kilometers)
    }

    pub fn as_nautical_miles(&self) -> f64 {
        self.value_in(LengthUnit::NauticalMiles)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A scalar angle with an explicit unit tag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    value: f64,
    unit: AngleUnit,
}

impl Angle {
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Angle { value, unit }
    }

    pub fn degrees(value: f64) -> Self {
        Angle::new(value, AngleUnit::Degrees)
    }

    pub fn radians(value: f64) -> Self {
        Angle::new(value, AngleUnit::Radians)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    pub fn as_degrees(&self) -> f64 {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Radians => self.value * RADIANS_TO_DEGREES,
        }
    }

    pub fn as_radians(&self) -> f64 {
        match self.unit {
            AngleUnit::Degrees => self.value * DEGREES_TO_RADIANS,
            AngleUnit::Radians => self.value,
        }
    }

    pub fn convert_to(&self, unit: AngleUnit) -> Angle {
        let value = match unit {
            AngleUnit::Degrees => self.as_degrees(),
            AngleUnit::Radians => self.as_radians(),
        };
        Angle::new(value, unit)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LENGTH_UNITS: [LengthUnit; 5] = [
        LengthUnit::Feet,
        LengthUnit::Miles,
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::NauticalMiles,
    ];

    #[test]
    fn test_length_round_trip_all_unit_pairs() {
        // A->B->A must reproduce the original within 1e-6 relative error
        let original = 143.5;
        for a in ALL_LENGTH_UNITS {
            for b in ALL_LENGTH_UNITS {
                let there = Length::new(original, a).convert_to(b);
                let back = there.convert_to(a);
                let rel = (back.value() - original).abs() / original;
                assert!(
                    rel < 1e-6,
                    "round trip {:?} -> {:?} -> {:?} drifted by {}",
                    a,
                    b,
                    a,
                    rel
                );
            }
        }
    }

    #[test]
    fn test_length_known_conversions() {
        assert!((Length::miles(1.0).as_feet() - 5280.0).abs() < 1e-9);
        assert!((Length::kilometers(1.0).as_meters() - 1000.0).abs() < 1e-12);
        assert!((Length::nautical_miles(1.0).as_meters() - 1852.0).abs() < 1e-9);
        assert!((Length::feet(1.0).as_meters() - 0.3048).abs() < 1e-12);
        // miles -> km through the canonical unit
        assert!((Length::miles(1.0).as_kilometers() - 1.609344).abs() < 1e-9);
    }

    #[test]
    fn test_length_same_unit_is_identity() {
        let d = Length::meters(0.98765);
        assert_eq!(d.convert_to(LengthUnit::Meters), d);
        assert_eq!(d.as_meters(), 0.98765);
    }

    #[test]
    fn test_angle_round_trip() {
        let mut deg = 0.0;
        while deg < 360.0 {
            let a = Angle::degrees(deg);
            let back = a.convert_to(AngleUnit::Radians).convert_to(AngleUnit::Degrees);
            assert!((back.value() - deg).abs() < 1e-12, "angle round trip at {deg}");
            deg += 7.5;
        }
    }

    #[test]
    fn test_angle_known_values() {
        assert!((Angle::degrees(180.0).as_radians() - std::f64::consts::PI).abs() < 1e-15);
        assert!((Angle::radians(std::f64::consts::FRAC_PI_2).as_degrees() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_length_unit_from_str() {
        assert_eq!("ft".parse::<LengthUnit>().unwrap(), LengthUnit::Feet);
        assert_eq!("Miles".parse::<LengthUnit>().unwrap(), LengthUnit::Miles);
        assert_eq!("m".parse::<LengthUnit>().unwrap(), LengthUnit::Meters);
        assert_eq!("KM".parse::<LengthUnit>().unwrap(), LengthUnit::Kilometers);
        assert_eq!(
            "nautical-miles".parse::<LengthUnit>().unwrap(),
            LengthUnit::NauticalMiles
        );
    }

    #[test]
    fn test_unknown_unit_is_an_error() {
        let err = "furlongs".parse::<LengthUnit>().unwrap_err();
        assert!(matches!(err, SightingError::UnknownUnit(_)));
        let err = "grads".parse::<AngleUnit>().unwrap_err();
        assert!(matches!(err, SightingError::UnknownUnit(_)));
    }
}
