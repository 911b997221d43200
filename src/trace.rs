//! Build-time observability.
//!
//! The builder reports every decision it takes through a [`TraceSink`]
//! instead of printing. [`NoTrace`] discards events, [`TraceLog`] keeps them
//! for inspection; neither influences what gets built.

use crate::label::ClusterLabel;
use crate::measurement::MeasurementKind;
use crate::span::Span;

/// One builder decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A cluster was read from the stream. `span` is the builder's own
    /// cursor window for it, before whitespace tightening.
    ClusterConsumed {
        label: ClusterLabel,
        text: String,
        span: Span,
    },
    /// An open measurement passed the validity gate and was emitted.
    Flushed { kind: MeasurementKind },
    /// An open measurement failed the validity gate and was discarded.
    DiscardedInvalid { kind: MeasurementKind },
    /// A prospective unit was stored, waiting for the next value.
    PendingUnitStored { raw_name: String },
    /// The stored prospective unit was attached to a quantity slot.
    PendingUnitAttached { raw_name: String },
    /// A stored prospective unit was cleared before it found a value.
    PendingUnitDropped { raw_name: String },
    /// A retroactive unit reached `attached` quantity slots of the open
    /// measurement (zero when nothing was open or no slot qualified).
    BackAttached { raw_name: String, attached: usize },
}

/// Receives builder decisions.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Collects events in order.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        TraceLog::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
