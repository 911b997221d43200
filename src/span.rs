//! Character-offset spans.
//!
//! Every offset in this crate counts Unicode scalar values, not bytes: the
//! upstream tagger reports positions in characters, and the distance
//! thresholds of the correction pass are character distances.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` character range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Span {
    /// First character covered.
    pub start: usize,
    /// One past the last character covered.
    pub end: usize,
}

impl Span {
    /// Create a span. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} exceeds end {}", start, end);
        Span { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-width spans.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    pub fn cover(&self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{})", self.start, self.end)
    }
}
