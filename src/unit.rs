//! Units, the per-build unit arena, and canonical unit definitions.

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// Index of a [`Unit`] inside its build's [`UnitArena`].
///
/// Quantities store ids rather than owned units, so a single unit can serve
/// several slots (both ends of an interval, every element of a list) and a
/// lexicon lookup lands everywhere the unit is referenced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct UnitId(pub(crate) usize);

impl UnitId {
    /// Position inside the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A raw unit mention, possibly resolved against a lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit text exactly as tagged ("kg", "mL", "°C").
    pub raw_name: String,
    /// Character span of the mention, boundary whitespace excluded.
    pub span: Span,
    /// Canonical definition, set by the resolution pass on a lexicon hit.
    pub definition: Option<UnitDefinition>,
}

impl Unit {
    pub fn new(raw_name: impl Into<String>, span: Span) -> Self {
        Unit {
            raw_name: raw_name.into(),
            span,
            definition: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.definition.is_some()
    }
}

/// Append-only store of the units created during one build.
///
/// Ids are never invalidated; indexing with an id from another build is a
/// programming error and panics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitArena {
    units: Vec<Unit>,
}

impl UnitArena {
    pub fn new() -> Self {
        UnitArena::default()
    }

    pub fn alloc(&mut self, unit: Unit) -> UnitId {
        let id = UnitId(self.units.len());
        self.units.push(unit);
        id
    }

    pub fn get(&self, id: UnitId) -> &Unit {
        &self.units[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: UnitId) -> &mut Unit {
        &mut self.units[id.0]
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units
            .iter()
            .enumerate()
            .map(|(index, unit)| (UnitId(index), unit))
    }
}

/// Canonical description of a unit, as returned by lexicon lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Canonical lowercase name ("kilogram").
    pub name: String,
    /// Preferred written notation ("kg").
    pub notation: String,
    /// The kind of measure the unit quantifies.
    pub measure: MeasureKind,
    /// The unit system it belongs to.
    pub system: UnitSystem,
}

/// What a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasureKind {
    Length,
    Mass,
    Time,
    Temperature,
    Area,
    Volume,
    Frequency,
    Pressure,
    Energy,
    Power,
    Current,
    Voltage,
    AmountOfSubstance,
    LuminousIntensity,
    Angle,
    Fraction,
}

/// The system a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitSystem {
    SiBase,
    SiDerived,
    Imperial,
    UsCustomary,
    NonStandard,
}
