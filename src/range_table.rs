//! Reticle-to-range lookup tables.
//!
//! A [`RangeTable`] maps reticle marks to ranges calibrated for one fixed
//! observer height. Lookup rounds the reading to one decimal and picks the
//! nearest key; readings outside the key range clamp to the boundary keys
//! so a sweep never loses rows at the extremes.

use once_cell::sync::Lazy;

use crate::cli_api::SightingError;
use crate::units::Length;

/// Calibrated instrument table: (reticle marks, range in meters).
///
/// Reference spotting scope at the default observer height of 143.5 ft.
/// The reticle-0 entry is the horizon range for that height.
const INSTRUMENT_TABLE_DATA: &[(f64, f64)] = &[
    (0.0, 23599.0),
    (0.1, 14021.0),
    (0.2, 11390.0),
    (0.4, 8598.0),
    (0.6, 7010.0),
    (0.8, 5950.0),
    (1.0, 5183.0),
    (1.2, 4598.0),
    (1.4, 4135.0),
    (1.6, 3759.0),
    (1.8, 3448.0),
    (2.0, 3184.0),
    (2.4, 2764.0),
    (2.6, 2593.0),
    (3.0, 2309.0),
    (3.4, 2081.0),
    (4.0, 1813.0),
    (4.6, 1607.0),
    (5.0, 1493.0),
    (6.0, 1269.0),
    (7.0, 1104.0),
    (8.0, 977.0),
    (9.0, 876.0),
    (10.0, 794.0),
    (11.0, 726.0),
    (12.0, 669.0),
    (13.0, 620.0),
    (14.0, 577.0),
    (15.0, 540.0),
    (16.0, 508.0),
    (17.0, 479.0),
    (18.0, 453.0),
    (19.0, 430.0),
    (20.0, 409.0),
];

/// Built-in table for the reference instrument
pub static INSTRUMENT_TABLE: Lazy<RangeTable> = Lazy::new(|| {
    let entries = INSTRUMENT_TABLE_DATA
        .iter()
        .map(|&(reticle, meters)| (reticle, Length::meters(meters)))
        .collect();
    RangeTable::new(entries).expect("builtin instrument table is valid")
});

/// An ordered reticle-to-range mapping, immutable once built.
#[derive(Debug, Clone)]
pub struct RangeTable {
    keys: Vec<f64>,
    ranges_m: Vec<f64>,
}

impl RangeTable {
    /// Build a table from (reticle, range) entries.
    ///
    /// Keys must be finite, non-negative, and strictly ascending.
    pub fn new(entries: Vec<(f64, Length)>) -> Result<Self, SightingError> {
        if entries.is_empty() {
            return Err(SightingError::InvalidTable("table has no entries".to_string()));
        }
        let mut keys = Vec::with_capacity(entries.len());
        let mut ranges_m = Vec::with_capacity(entries.len());
        for (key, range) in entries {
            if !key.is_finite() || key < 0.0 {
                return Err(SightingError::InvalidTable(format!(
                    "invalid reticle key {key}"
                )));
            }
            if let Some(&prev) = keys.last() {
                if key <= prev {
                    return Err(SightingError::InvalidTable(format!(
                        "keys not strictly ascending at {key}"
                    )));
                }
            }
            keys.push(key);
            ranges_m.push(range.as_meters());
        }
        Ok(RangeTable { keys, ranges_m })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Range for a reticle reading, rounded to one decimal and matched to
    /// the nearest table key.
    pub fn lookup(&self, reticle: f64) -> Length {
        let needle = (reticle * 10.0).round() / 10.0;
        let idx = self.nearest_index(needle);
        Length::meters(self.ranges_m[idx])
    }

    /// Index of the key nearest the needle.
    ///
    /// Exact match wins; otherwise the closer of the two straddling keys,
    /// tie broken toward the lower key. Needles outside the key range clamp
    /// to the boundary keys.
    fn nearest_index(&self, needle: f64) -> usize {
        let n = self.keys.len();
        if needle <= self.keys[0] {
            return 0;
        }
        if needle >= self.keys[n - 1] {
            return n - 1;
        }

        let mut lo = 0usize;
        let mut hi = n;
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.keys[mid] == needle {
                return mid;
            } else if self.keys[mid] < needle {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        // lo is the insertion point; disambiguate between the straddling
        // keys, preferring the lower on an exact tie.
        let below = lo - 1;
        if (needle - self.keys[below]).abs() <= (self.keys[lo] - needle).abs() {
            below
        } else {
            lo
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> RangeTable {
        RangeTable::new(vec![
            (1.0, Length::meters(100.0)),
            (2.0, Length::meters(200.0)),
            (4.0, Length::meters(400.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_key_returns_its_value() {
        let t = small_table();
        assert_eq!(t.lookup(2.0).as_meters(), 200.0);
        assert_eq!(t.lookup(1.0).as_meters(), 100.0);
        assert_eq!(t.lookup(4.0).as_meters(), 400.0);
    }

    #[test]
    fn test_nearest_key_picks_closer_neighbor() {
        let t = small_table();
        // 1.4 is closer to 1.0 than to 2.0
        assert_eq!(t.lookup(1.4).as_meters(), 100.0);
        // 1.6 is closer to 2.0
        assert_eq!(t.lookup(1.6).as_meters(), 200.0);
        // 3.7 rounds to 3.7, closer to 4.0 than to 2.0
        assert_eq!(t.lookup(3.7).as_meters(), 400.0);
    }

    #[test]
    fn test_halfway_ties_break_toward_lower_key() {
        let t = small_table();
        // 1.5 is equidistant from 1.0 and 2.0
        assert_eq!(t.lookup(1.5).as_meters(), 100.0);
        // 3.0 is equidistant from 2.0 and 4.0
        assert_eq!(t.lookup(3.0).as_meters(), 200.0);
    }

    #[test]
    fn test_out_of_range_clamps_to_boundary_keys() {
        let t = small_table();
        assert_eq!(t.lookup(0.0).as_meters(), 100.0);
        assert_eq!(t.lookup(0.3).as_meters(), 100.0);
        assert_eq!(t.lookup(9.9).as_meters(), 400.0);
    }

    #[test]
    fn test_lookup_rounds_to_one_decimal() {
        let t = small_table();
        // 1.949 rounds to 1.9, which is closer to 2.0
        assert_eq!(t.lookup(1.949).as_meters(), 200.0);
        // 1.449 rounds to 1.4, closer to 1.0
        assert_eq!(t.lookup(1.449).as_meters(), 100.0);
    }

    #[test]
    fn test_rejects_empty_and_unsorted() {
        assert!(RangeTable::new(vec![]).is_err());
        let unsorted = RangeTable::new(vec![
            (2.0, Length::meters(200.0)),
            (1.0, Length::meters(100.0)),
        ]);
        assert!(unsorted.is_err());
        let duplicate = RangeTable::new(vec![
            (1.0, Length::meters(100.0)),
            (1.0, Length::meters(150.0)),
        ]);
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_builtin_table_shape() {
        assert_eq!(INSTRUMENT_TABLE.len(), 34);
        assert_eq!(INSTRUMENT_TABLE.keys()[0], 0.0);
        assert_eq!(INSTRUMENT_TABLE.keys()[33], 20.0);
        // Ranges decrease as the subject fills more of the reticle
        assert!(INSTRUMENT_TABLE.lookup(0.0).as_meters() > INSTRUMENT_TABLE.lookup(20.0).as_meters());
        assert_eq!(INSTRUMENT_TABLE.lookup(5.0).as_meters(), 1493.0);
    }

    #[test]
    fn test_builtin_table_intermediate_readings() {
        // 0.3 is equidistant from 0.2 and 0.4: lower key wins
        assert_eq!(INSTRUMENT_TABLE.lookup(0.3).as_meters(), 11390.0);
        // 4.5 is closer to 4.6 than to 4.0
        assert_eq!(INSTRUMENT_TABLE.lookup(4.5).as_meters(), 1607.0);
        // above the last key clamps
        assert_eq!(INSTRUMENT_TABLE.lookup(25.0).as_meters(), 409.0);
    }
}
