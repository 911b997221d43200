//! The closed label set assigned by the upstream sequence tagger.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label carried by one cluster of tagged tokens.
///
/// The set is closed. Tagger output uses the angle-bracket notation
/// (`<valueAtomic>`, `<unitLeft>`, ...) with an optional `B-`/`I-`
/// begin/inside prefix; [`ClusterLabel::from_str`] accepts both. Strings
/// outside the set fail to parse and are degraded to [`ClusterLabel::Other`]
/// during cluster assembly, so a noisy tagger can never halt a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterLabel {
    /// A standalone value ("5" in "5 kg").
    AtomicValue,
    /// Lower bound of a min-max interval ("10" in "from 10 to 20 cm").
    LeastValue,
    /// Upper bound of a min-max interval ("20" in "from 10 to 20 cm").
    MostValue,
    /// Centre of a base-range interval ("100" in "100 ± 5 mA").
    BaseValue,
    /// Half-width of a base-range interval ("5" in "100 ± 5 mA").
    RangeValue,
    /// One element of a conjunctive list ("10" in "5, 10 and 15 kg").
    ListValue,
    /// A unit qualifying the value(s) on its left ("kg" in "5 kg").
    UnitLeft,
    /// A unit qualifying the value on its right ("$" in "$ 50").
    UnitRight,
    /// Text the tagger deemed irrelevant to any measurement.
    Other,
}

impl ClusterLabel {
    /// The tagger notation for this label, without begin/inside prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterLabel::AtomicValue => "<valueAtomic>",
            ClusterLabel::LeastValue => "<valueLeast>",
            ClusterLabel::MostValue => "<valueMost>",
            ClusterLabel::BaseValue => "<valueBase>",
            ClusterLabel::RangeValue => "<valueRange>",
            ClusterLabel::ListValue => "<valueList>",
            ClusterLabel::UnitLeft => "<unitLeft>",
            ClusterLabel::UnitRight => "<unitRight>",
            ClusterLabel::Other => "<other>",
        }
    }

    /// True for the two unit labels.
    pub fn is_unit(&self) -> bool {
        matches!(self, ClusterLabel::UnitLeft | ClusterLabel::UnitRight)
    }

    /// True for the six value labels.
    pub fn is_value(&self) -> bool {
        !self.is_unit() && *self != ClusterLabel::Other
    }
}

impl std::fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagger label string that does not belong to the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("label `{raw}` is not part of the measurement tagset")]
pub struct ParseLabelError {
    /// The offending string, prefix included, as produced by the tagger.
    pub raw: String,
}

impl FromStr for ClusterLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s
            .strip_prefix("B-")
            .or_else(|| s.strip_prefix("I-"))
            .unwrap_or(s);
        match bare {
            "<valueAtomic>" => Ok(ClusterLabel::AtomicValue),
            "<valueLeast>" => Ok(ClusterLabel::LeastValue),
            "<valueMost>" => Ok(ClusterLabel::MostValue),
            "<valueBase>" => Ok(ClusterLabel::BaseValue),
            "<valueRange>" => Ok(ClusterLabel::RangeValue),
            "<valueList>" => Ok(ClusterLabel::ListValue),
            "<unitLeft>" => Ok(ClusterLabel::UnitLeft),
            "<unitRight>" => Ok(ClusterLabel::UnitRight),
            "<other>" => Ok(ClusterLabel::Other),
            _ => Err(ParseLabelError { raw: s.to_string() }),
        }
    }
}
