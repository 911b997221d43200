//! The unit catalog and its lookup rules.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use quantified_text::{MeasureKind, UnitDefinition, UnitLexicon, UnitSystem};

/// One catalog row: a canonical unit plus the strings that find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical lowercase name ("kilogram").
    pub name: String,
    /// Preferred written notation ("kg"), matched case-sensitively.
    pub notation: String,
    pub measure: MeasureKind,
    pub system: UnitSystem,
    /// Extra spellings matched like names: case-insensitively.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CatalogEntry {
    pub fn definition(&self) -> UnitDefinition {
        UnitDefinition {
            name: self.name.clone(),
            notation: self.notation.clone(),
            measure: self.measure,
            system: self.system,
        }
    }
}

/// Malformed catalog data.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("catalog JSON is malformed: {0}")]
    MalformedCatalog(#[from] serde_json::Error),
    #[error("catalog entry `{name}` has an empty notation")]
    EmptyNotation { name: String },
}

/// A lookup table over catalog entries, implementing [`UnitLexicon`].
///
/// Lookup runs three attempts in order:
///
/// 1. exact notation match, case-sensitive ("K" finds kelvin, "k" does not),
/// 2. case-insensitive name or alias match ("Kilogram", "meter"),
/// 3. the name/alias match again with one trailing `s` removed
///    ("kilograms").
///
/// When two entries claim the same notation, name, or alias, the first one
/// wins.
#[derive(Debug)]
pub struct UnitCatalog {
    entries: Vec<CatalogEntry>,
    by_notation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl UnitCatalog {
    /// The embedded catalog of common SI, imperial and US customary units.
    pub fn builtin() -> &'static UnitCatalog {
        static BUILTIN: Lazy<UnitCatalog> = Lazy::new(|| {
            UnitCatalog::from_json_str(include_str!("builtin_units.json"))
                .expect("embedded unit catalog parses")
        });
        &BUILTIN
    }

    /// Parse a caller-supplied catalog: a JSON array of entries.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        UnitCatalog::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, LexiconError> {
        let mut by_notation = HashMap::new();
        let mut by_name = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.notation.is_empty() {
                return Err(LexiconError::EmptyNotation {
                    name: entry.name.clone(),
                });
            }
            by_notation.entry(entry.notation.clone()).or_insert(index);
            by_name.entry(entry.name.to_lowercase()).or_insert(index);
            for alias in &entry.aliases {
                by_name.entry(alias.to_lowercase()).or_insert(index);
            }
        }
        Ok(UnitCatalog {
            entries,
            by_notation,
            by_name,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    fn find(&self, raw_name: &str) -> Option<&CatalogEntry> {
        if let Some(&index) = self.by_notation.get(raw_name) {
            return Some(&self.entries[index]);
        }
        let folded = raw_name.to_lowercase();
        if let Some(&index) = self.by_name.get(&folded) {
            return Some(&self.entries[index]);
        }
        let singular = folded.strip_suffix('s')?;
        self.by_name
            .get(singular)
            .map(|&index| &self.entries[index])
    }
}

impl UnitLexicon for UnitCatalog {
    fn lookup(&self, raw_name: &str) -> Option<UnitDefinition> {
        self.find(raw_name).map(CatalogEntry::definition)
    }
}
