#![doc(
    issue_tracker_base_url = "https://github.com/storyscript/quantified-text/issues/"
)]

//! Reconstructs structured measurements from sequence-tagger output.
//!
//! An upstream tagging model labels each token of a text with one of a
//! closed set of measurement roles (`<valueAtomic>`, `<valueLeast>`,
//! `<unitLeft>`, ...). This crate turns that flat, ordered label stream
//! back into structure: standalone values, min-max intervals, base ± range
//! intervals, and conjunctive value lists, each with its unit attached and,
//! when a lexicon knows the name, resolved to a canonical definition.
//!
//! ## Pipeline
//!
//! Extraction is four passes over one in-memory build:
//!
//! 1. **Build**: a single-pass state machine groups labeled clusters into
//!    measurements and decides unit attachment (a unit may qualify the
//!    value on its left or on its right).
//! 2. **Correct**: character-distance heuristics drop or split groupings
//!    that cannot be right, such as a unit forty-plus characters from its
//!    value.
//! 3. **Resolve**: raw unit names are looked up in an injected
//!    [`UnitLexicon`]; misses keep the raw name.
//! 4. **Attach**: an optional [`SubstanceResolver`] links measurements to
//!    what they measure. The default is a pass-through.
//!
//! ## Usage
//!
//! ```
//! use std::collections::HashMap;
//! use quantified_text::{segment_tokens, MeasurementPipeline, TaggedToken};
//!
//! let text = "from 10 to 20 cm";
//! let labels = [
//!     "<other>", "<other>", "B-<valueLeast>", "<other>", "<other>",
//!     "<other>", "B-<valueMost>", "<other>", "B-<unitLeft>",
//! ];
//! let tagged: Vec<TaggedToken> = segment_tokens(text)
//!     .into_iter()
//!     .zip(labels)
//!     .map(|(token, label)| TaggedToken::new(token, label))
//!     .collect();
//!
//! let pipeline = MeasurementPipeline::new(HashMap::new());
//! let set = pipeline.extract_tagged(text, 0, &tagged);
//!
//! assert_eq!(set.len(), 1);
//! let quantities = set.measurements[0].quantities();
//! assert_eq!(quantities.len(), 2);
//! // Both interval bounds share the one trailing unit.
//! assert_eq!(quantities[0].unit, quantities[1].unit);
//! assert_eq!(set.unit(quantities[0].unit.unwrap()).raw_name, "cm");
//! ```
//!
//! ## Offsets
//!
//! Every span counts Unicode scalar values from the start of the source
//! text, half-open. Emitted spans never include boundary whitespace, even
//! though tagger token boundaries may.
//!
//! ## Collaborators
//!
//! The tagging model, the tokenizer, the unit lexicon, and substance
//! attachment all live outside this crate, behind plain inputs or traits
//! ([`UnitLexicon`], [`SubstanceResolver`]). The companion
//! `quantified-text-lexicon` crate provides a catalog-backed
//! [`UnitLexicon`] with the common SI, imperial and US customary units.

mod builder;
mod cluster;
mod correction;
mod display;
mod label;
mod measurement;
mod pipeline;
mod resolution;
mod span;
mod substance;
mod trace;
mod unit;

pub use builder::{build_measurements, MeasurementBuilder};
pub use cluster::{assemble_clusters, segment_tokens, LabeledCluster, TaggedToken, Token};
pub use correction::{correct_measurements, CorrectionConfig};
pub use display::MeasurementDisplay;
pub use label::{ClusterLabel, ParseLabelError};
pub use measurement::{Measurement, MeasurementKind, MeasurementSet, Quantity};
pub use pipeline::MeasurementPipeline;
pub use resolution::{resolve_units, UnitLexicon};
pub use span::Span;
pub use substance::{DefaultSubstanceResolver, SubstanceResolver};
pub use trace::{NoTrace, TraceEvent, TraceLog, TraceSink};
pub use unit::{MeasureKind, Unit, UnitArena, UnitDefinition, UnitId, UnitSystem};
