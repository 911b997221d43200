//! Downstream substance attachment.
//!
//! Deciding *what* a measurement measures ("5 kg" of flour, of thrust, of
//! CO₂) is a collaborator's job. This crate defines only the seam: a
//! resolver receives the token stream and the finished measurement set, and
//! may return the set enriched or untouched.

use crate::cluster::Token;
use crate::measurement::MeasurementSet;

/// Attaches measured substances to a finished measurement set.
pub trait SubstanceResolver {
    fn attach(&self, tokens: &[Token], set: MeasurementSet) -> MeasurementSet;
}

/// The pass-through resolver: hands the set back untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSubstanceResolver;

impl SubstanceResolver for DefaultSubstanceResolver {
    fn attach(&self, _tokens: &[Token], set: MeasurementSet) -> MeasurementSet {
        set
    }
}
