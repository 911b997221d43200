//! Unit resolution against an injected lexicon.
//!
//! The lexicon is a plain dependency handed to [`resolve_units`] or to the
//! pipeline. Nothing in this crate caches or globally registers one; a
//! process-wide dictionary is the caller's composition to make.

use std::collections::{HashMap, HashSet};

use crate::measurement::MeasurementSet;
use crate::unit::{UnitDefinition, UnitId};

/// An external unit dictionary.
///
/// `lookup` must be pure: same input, same answer, no side effects. Shared
/// units receive a single lookup per resolution pass.
pub trait UnitLexicon {
    /// The canonical definition for a raw unit mention, or `None` when the
    /// name is not in the dictionary.
    fn lookup(&self, raw_name: &str) -> Option<UnitDefinition>;
}

impl<L: UnitLexicon + ?Sized> UnitLexicon for &L {
    fn lookup(&self, raw_name: &str) -> Option<UnitDefinition> {
        (**self).lookup(raw_name)
    }
}

/// Exact-match lookup. Handy for tests and small fixed dictionaries.
impl UnitLexicon for HashMap<String, UnitDefinition> {
    fn lookup(&self, raw_name: &str) -> Option<UnitDefinition> {
        self.get(raw_name).cloned()
    }
}

/// Attach canonical definitions to the units of a finished build.
///
/// Walks the unit ids reachable from measurement quantities, deduplicated,
/// in first-reference order. Units that already carry a definition are
/// skipped, so resolution is monotonic: a definition, once set, stays.
/// Lookup misses leave the raw name as the only record of the unit.
pub fn resolve_units<L: UnitLexicon>(set: &mut MeasurementSet, lexicon: &L) {
    let mut seen = HashSet::new();
    let mut reachable: Vec<UnitId> = Vec::new();
    for measurement in &set.measurements {
        for quantity in measurement.quantities() {
            if let Some(id) = quantity.unit {
                if seen.insert(id) {
                    reachable.push(id);
                }
            }
        }
    }
    for id in reachable {
        let unit = set.units.get_mut(id);
        if unit.is_resolved() {
            continue;
        }
        if let Some(definition) = lexicon.lookup(&unit.raw_name) {
            unit.definition = Some(definition);
        }
    }
}
