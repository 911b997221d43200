//! The consistency correction pass.
//!
//! The builder trusts the tagger; this pass does not. It re-checks every
//! finalized measurement against character-distance heuristics and drops or
//! splits the groupings that cannot be right, leaving offsets untouched.
//! Correcting corrected output changes nothing.

use serde::{Deserialize, Serialize};

use crate::measurement::{Measurement, MeasurementSet, Quantity};
use crate::unit::UnitArena;

/// Distance thresholds for the consistency pass, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Furthest a unit may sit from the value it qualifies.
    ///
    /// Default: 40.
    pub max_unit_distance: usize,
    /// Furthest apart the two bounds of an interval may sit before the
    /// grouping reads as spurious.
    ///
    /// Default: 80.
    pub max_interval_gap: usize,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        CorrectionConfig {
            max_unit_distance: 40,
            max_interval_gap: 80,
        }
    }
}

/// Apply the consistency rules once.
///
/// - A value with a unit survives only if the unit sits within
///   [`CorrectionConfig::max_unit_distance`] of the value text.
/// - An interval missing either bound is dropped. One whose bounds sit more
///   than [`CorrectionConfig::max_interval_gap`] apart in both directions
///   splits into independent values, each re-checked for unit distance.
/// - A list survives as-is when non-empty. No unit-distance filtering or
///   splitting happens inside a list; elements keep whatever the builder
///   attached.
pub fn correct_measurements(set: MeasurementSet, config: &CorrectionConfig) -> MeasurementSet {
    let MeasurementSet {
        measurements,
        units,
    } = set;
    let mut corrected = Vec::with_capacity(measurements.len());
    for measurement in measurements {
        match measurement {
            Measurement::Value(quantity) => {
                keep_as_value(quantity, &units, config, &mut corrected);
            }
            Measurement::MinMaxInterval {
                least: Some(least),
                most: Some(most),
            } => {
                if bounds_adjacent(&least, &most, config) {
                    corrected.push(Measurement::MinMaxInterval {
                        least: Some(least),
                        most: Some(most),
                    });
                } else {
                    keep_as_value(least, &units, config, &mut corrected);
                    keep_as_value(most, &units, config, &mut corrected);
                }
            }
            Measurement::BaseRangeInterval {
                base: Some(base),
                range: Some(range),
            } => {
                if bounds_adjacent(&base, &range, config) {
                    corrected.push(Measurement::BaseRangeInterval {
                        base: Some(base),
                        range: Some(range),
                    });
                } else {
                    keep_as_value(base, &units, config, &mut corrected);
                    keep_as_value(range, &units, config, &mut corrected);
                }
            }
            // A one-sided interval reads as tagger noise.
            Measurement::MinMaxInterval { .. } | Measurement::BaseRangeInterval { .. } => {}
            Measurement::ValueList(quantities) => {
                if !quantities.is_empty() {
                    corrected.push(Measurement::ValueList(quantities));
                }
            }
        }
    }
    MeasurementSet {
        measurements: corrected,
        units,
    }
}

/// Push `quantity` as a standalone value if its unit, when present, is in
/// reach.
fn keep_as_value(
    quantity: Quantity,
    units: &UnitArena,
    config: &CorrectionConfig,
    out: &mut Vec<Measurement>,
) {
    if unit_in_reach(&quantity, units, config) {
        out.push(Measurement::Value(quantity));
    }
}

fn unit_in_reach(quantity: &Quantity, units: &UnitArena, config: &CorrectionConfig) -> bool {
    match quantity.unit {
        None => true,
        Some(id) => {
            let unit = units.get(id).span;
            let value = quantity.span;
            let distance = value
                .end
                .abs_diff(unit.start)
                .min(unit.end.abs_diff(value.start));
            distance <= config.max_unit_distance
        }
    }
}

/// The bounds are close enough, in at least one direction, to read as one
/// interval.
fn bounds_adjacent(first: &Quantity, second: &Quantity, config: &CorrectionConfig) -> bool {
    first.span.end.abs_diff(second.span.start) <= config.max_interval_gap
        || second.span.end.abs_diff(first.span.start) <= config.max_interval_gap
}
