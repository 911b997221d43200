//! Measurements: the structured output of a build.

use serde::{Deserialize, Serialize};

use crate::span::Span;
use crate::unit::{Unit, UnitArena, UnitId};

/// A tagged numeric string filling one slot of a measurement.
///
/// The value stays a raw string: parsing "10", "ten" or "10³" into numbers
/// is a downstream concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    /// The value text exactly as tagged, boundary whitespace excluded.
    pub raw_value: String,
    /// Character span of the value text.
    pub span: Span,
    /// The unit qualifying this value, if one was attached.
    pub unit: Option<UnitId>,
}

impl Quantity {
    pub fn new(raw_value: impl Into<String>, span: Span) -> Self {
        Quantity {
            raw_value: raw_value.into(),
            span,
            unit: None,
        }
    }

    /// No value text and no unit. Empty quantities read as absent slots and
    /// are never stored in an emitted measurement.
    pub fn is_empty(&self) -> bool {
        self.raw_value.is_empty() && self.unit.is_none()
    }

    pub fn has_unit(&self) -> bool {
        self.unit.is_some()
    }
}

/// The four shapes a measurement can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementKind {
    Value,
    MinMaxInterval,
    BaseRangeInterval,
    ValueList,
}

impl MeasurementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementKind::Value => "value",
            MeasurementKind::MinMaxInterval => "min-max",
            MeasurementKind::BaseRangeInterval => "base-range",
            MeasurementKind::ValueList => "list",
        }
    }
}

impl std::fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reconstructed measurement. The slot set depends on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Measurement {
    /// A single standalone value ("5 kg").
    Value(Quantity),
    /// A least/most interval ("from 10 to 20 cm"). One bound may be missing
    /// while the measurement is under construction; the correction pass
    /// drops one-sided intervals.
    MinMaxInterval {
        least: Option<Quantity>,
        most: Option<Quantity>,
    },
    /// A base ± range interval ("100 ± 5 mA").
    BaseRangeInterval {
        base: Option<Quantity>,
        range: Option<Quantity>,
    },
    /// A conjunctive list of values ("5, 10 and 15 kg"), in reading order.
    ValueList(Vec<Quantity>),
}

impl Measurement {
    pub fn kind(&self) -> MeasurementKind {
        match self {
            Measurement::Value(_) => MeasurementKind::Value,
            Measurement::MinMaxInterval { .. } => MeasurementKind::MinMaxInterval,
            Measurement::BaseRangeInterval { .. } => MeasurementKind::BaseRangeInterval,
            Measurement::ValueList(_) => MeasurementKind::ValueList,
        }
    }

    /// At least one applicable slot holds a non-empty quantity.
    pub fn is_valid(&self) -> bool {
        self.quantities().iter().any(|quantity| !quantity.is_empty())
    }

    /// The populated slots, in slot order.
    pub fn quantities(&self) -> Vec<&Quantity> {
        match self {
            Measurement::Value(quantity) => vec![quantity],
            Measurement::MinMaxInterval { least, most } => {
                least.iter().chain(most.iter()).collect()
            }
            Measurement::BaseRangeInterval { base, range } => {
                base.iter().chain(range.iter()).collect()
            }
            Measurement::ValueList(quantities) => quantities.iter().collect(),
        }
    }

    /// Drop empty quantities from optional slots and lists, so emptiness
    /// reads as absence downstream.
    pub(crate) fn prune_empty(self) -> Self {
        fn keep(slot: Option<Quantity>) -> Option<Quantity> {
            slot.filter(|quantity| !quantity.is_empty())
        }
        match self {
            value @ Measurement::Value(_) => value,
            Measurement::MinMaxInterval { least, most } => Measurement::MinMaxInterval {
                least: keep(least),
                most: keep(most),
            },
            Measurement::BaseRangeInterval { base, range } => Measurement::BaseRangeInterval {
                base: keep(base),
                range: keep(range),
            },
            Measurement::ValueList(quantities) => Measurement::ValueList(
                quantities
                    .into_iter()
                    .filter(|quantity| !quantity.is_empty())
                    .collect(),
            ),
        }
    }

    /// Smallest span covering every quantity and attached unit, or `None`
    /// for a measurement with no populated slots.
    pub fn cover_span(&self, units: &UnitArena) -> Option<Span> {
        let mut covering: Option<Span> = None;
        let mut extend = |span: Span| {
            covering = Some(match covering {
                Some(so_far) => so_far.cover(span),
                None => span,
            });
        };
        for quantity in self.quantities() {
            extend(quantity.span);
            if let Some(id) = quantity.unit {
                extend(units.get(id).span);
            }
        }
        covering
    }
}

/// A build's complete output: measurements plus the unit arena their
/// quantity slots index into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementSet {
    pub measurements: Vec<Measurement>,
    pub units: UnitArena,
}

impl MeasurementSet {
    /// The unit a quantity refers to.
    pub fn unit(&self, id: UnitId) -> &Unit {
        self.units.get(id)
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity(value: &str, start: usize, end: usize) -> Quantity {
        Quantity::new(value, Span::new(start, end))
    }

    #[test]
    fn test_validity_needs_one_non_empty_slot() {
        assert!(Measurement::Value(quantity("5", 0, 1)).is_valid());
        assert!(Measurement::MinMaxInterval {
            least: Some(quantity("10", 0, 2)),
            most: None,
        }
        .is_valid());
        assert!(!Measurement::MinMaxInterval {
            least: None,
            most: None,
        }
        .is_valid());
        assert!(!Measurement::ValueList(vec![]).is_valid());
        // A quantity without value text still counts once it carries a unit.
        let mut unit_only = quantity("", 0, 0);
        unit_only.unit = Some(crate::unit::UnitId(0));
        assert!(Measurement::Value(unit_only).is_valid());
    }

    #[test]
    fn test_empty_value_measurement_is_invalid() {
        assert!(!Measurement::Value(quantity("", 4, 4)).is_valid());
    }

    #[test]
    fn test_prune_drops_empty_slots() {
        let pruned = Measurement::MinMaxInterval {
            least: Some(quantity("", 2, 2)),
            most: Some(quantity("20", 6, 8)),
        }
        .prune_empty();
        assert_eq!(
            pruned,
            Measurement::MinMaxInterval {
                least: None,
                most: Some(quantity("20", 6, 8)),
            }
        );

        let pruned = Measurement::ValueList(vec![quantity("", 0, 0), quantity("5", 1, 2)])
            .prune_empty();
        assert_eq!(pruned, Measurement::ValueList(vec![quantity("5", 1, 2)]));
    }

    #[test]
    fn test_cover_span_includes_units() {
        let mut units = UnitArena::new();
        let id = units.alloc(Unit::new("cm", Span::new(9, 11)));
        let mut least = quantity("10", 0, 2);
        least.unit = Some(id);
        let measurement = Measurement::MinMaxInterval {
            least: Some(least),
            most: Some(quantity("20", 6, 8)),
        };
        assert_eq!(measurement.cover_span(&units), Some(Span::new(0, 11)));
        assert_eq!(
            Measurement::MinMaxInterval {
                least: None,
                most: None
            }
            .cover_span(&units),
            None
        );
    }
}
