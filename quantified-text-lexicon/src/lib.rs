#![doc(
    issue_tracker_base_url = "https://github.com/storyscript/quantified-text/issues/"
)]

//! A catalog-backed [`UnitLexicon`](quantified_text::UnitLexicon) for
//! `quantified-text`.
//!
//! The core crate resolves raw unit mentions through an injected lexicon;
//! this crate supplies one. [`UnitCatalog::builtin`] covers the common SI,
//! imperial and US customary units, and callers can load their own catalog
//! from JSON or construct it entry by entry.
//!
//! ```
//! use quantified_text::UnitLexicon;
//! use quantified_text_lexicon::UnitCatalog;
//!
//! let catalog = UnitCatalog::builtin();
//! let kilogram = catalog.lookup("kg").unwrap();
//! assert_eq!(kilogram.name, "kilogram");
//! assert!(catalog.lookup("florp").is_none());
//! ```
//!
//! Lookup is notation-first and case-sensitive there ("K" is kelvin, "k" is
//! nothing), then case-insensitive over names and aliases with a
//! trailing-plural retry.

mod catalog;

pub use catalog::{CatalogEntry, LexiconError, UnitCatalog};
