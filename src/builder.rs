//! The measurement builder: one pass over the labeled-cluster stream.
//!
//! The builder is a small state machine. Across the stream it carries:
//!
//! - the open measurement, an enumerated state with one variant per shape,
//! - at most one pending right-attachment unit waiting for its value,
//! - a running character cursor, advanced for every cluster so ignored text
//!   still consumes position.
//!
//! Value labels open or extend a measurement of the matching shape,
//! finalizing a mismatched open one first. `unit-left` attaches backwards
//! into the open measurement's unit-less slots and closes it once full.
//! `unit-right` finalizes an open value or list and parks its unit for the
//! value that follows. Every emission passes the validity gate, and spans
//! never include boundary whitespace.

use crate::cluster::LabeledCluster;
use crate::correction::{correct_measurements, CorrectionConfig};
use crate::label::ClusterLabel;
use crate::measurement::{Measurement, MeasurementSet, Quantity};
use crate::span::Span;
use crate::trace::{TraceEvent, TraceSink};
use crate::unit::{Unit, UnitArena, UnitId};

/// What the builder is currently accumulating.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OpenMeasurement {
    /// Nothing under construction.
    Idle,
    /// A standalone value that may still receive a left-attached unit.
    Value { quantity: Quantity },
    /// A min-max interval with one or both bounds seen.
    MinMax {
        least: Option<Quantity>,
        most: Option<Quantity>,
    },
    /// A base-range interval with one or both parts seen.
    BaseRange {
        base: Option<Quantity>,
        range: Option<Quantity>,
    },
    /// A conjunctive list of values.
    List { quantities: Vec<Quantity> },
}

impl OpenMeasurement {
    fn into_measurement(self) -> Option<Measurement> {
        match self {
            OpenMeasurement::Idle => None,
            OpenMeasurement::Value { quantity } => Some(Measurement::Value(quantity)),
            OpenMeasurement::MinMax { least, most } => {
                Some(Measurement::MinMaxInterval { least, most })
            }
            OpenMeasurement::BaseRange { base, range } => {
                Some(Measurement::BaseRangeInterval { base, range })
            }
            OpenMeasurement::List { quantities } => Some(Measurement::ValueList(quantities)),
        }
    }
}

#[derive(Clone, Copy)]
enum Bound {
    Least,
    Most,
}

#[derive(Clone, Copy)]
enum Part {
    Base,
    Range,
}

/// Reconstructs measurements from an ordered stream of labeled clusters.
///
/// ```
/// use quantified_text::{ClusterLabel, LabeledCluster, MeasurementBuilder, Token};
///
/// let text = "5 kg";
/// let clusters = vec![
///     LabeledCluster::new(ClusterLabel::AtomicValue, vec![Token::new("5")], 0),
///     LabeledCluster::new(
///         ClusterLabel::UnitLeft,
///         vec![Token::new(" "), Token::new("kg")],
///         1,
///     ),
/// ];
/// let mut builder = MeasurementBuilder::new(text, 0);
/// for cluster in &clusters {
///     builder.consume(cluster);
/// }
/// let set = builder.finish();
/// assert_eq!(set.len(), 1);
/// ```
pub struct MeasurementBuilder<'t> {
    chars: Vec<char>,
    pos: usize,
    state: OpenMeasurement,
    pending_unit: Option<UnitId>,
    measurements: Vec<Measurement>,
    units: UnitArena,
    trace: Option<&'t mut dyn TraceSink>,
}

impl<'t> MeasurementBuilder<'t> {
    /// Start a build over `text`, with the first cluster beginning at
    /// character `origin`.
    pub fn new(text: &str, origin: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        assert!(
            origin <= chars.len(),
            "origin {} past the end of the source text ({} chars)",
            origin,
            chars.len()
        );
        MeasurementBuilder {
            chars,
            pos: origin,
            state: OpenMeasurement::Idle,
            pending_unit: None,
            measurements: Vec::new(),
            units: UnitArena::new(),
            trace: None,
        }
    }

    /// Report every decision to `sink`.
    pub fn with_trace(mut self, sink: &'t mut dyn TraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Feed the next cluster through the state machine.
    pub fn consume(&mut self, cluster: &LabeledCluster) {
        let raw_end = self.pos + cluster.len_chars();
        assert!(
            raw_end <= self.chars.len(),
            "cluster tokens run past the end of the source text"
        );
        let content = cluster.text();
        self.record(TraceEvent::ClusterConsumed {
            label: cluster.label(),
            text: content.to_string(),
            span: Span::new(self.pos, raw_end),
        });
        self.pos = match cluster.label() {
            ClusterLabel::AtomicValue => self.on_atomic(content, raw_end),
            ClusterLabel::LeastValue => self.on_min_max(Bound::Least, content, raw_end),
            ClusterLabel::MostValue => self.on_min_max(Bound::Most, content, raw_end),
            ClusterLabel::BaseValue => self.on_base_range(Part::Base, content, raw_end),
            ClusterLabel::RangeValue => self.on_base_range(Part::Range, content, raw_end),
            ClusterLabel::ListValue => self.on_list(content, raw_end),
            ClusterLabel::UnitLeft => self.on_unit_left(content, raw_end),
            ClusterLabel::UnitRight => self.on_unit_right(content, raw_end),
            ClusterLabel::Other => raw_end,
        };
    }

    /// Flush whatever is still open and hand back the raw build.
    ///
    /// The result has not been through the correction pass; see
    /// [`build_measurements`] for the one-call variant that has.
    pub fn finish(mut self) -> MeasurementSet {
        self.flush_open(false);
        self.clear_pending_unit();
        MeasurementSet {
            measurements: self.measurements,
            units: self.units,
        }
    }

    fn on_atomic(&mut self, content: &str, raw_end: usize) -> usize {
        // A prior open measurement of any shape is finalized first.
        self.flush_open(true);
        let span = self.tight_span(raw_end);
        let mut quantity = Quantity::new(content, span);
        if let Some(id) = self.pending_unit.take() {
            quantity.unit = Some(id);
            let raw_name = self.units.get(id).raw_name.clone();
            self.record(TraceEvent::PendingUnitAttached { raw_name });
            self.emit(Measurement::Value(quantity));
        } else {
            self.state = OpenMeasurement::Value { quantity };
        }
        self.cursor_after(raw_end)
    }

    fn on_min_max(&mut self, bound: Bound, content: &str, raw_end: usize) -> usize {
        if !matches!(
            self.state,
            OpenMeasurement::Idle | OpenMeasurement::MinMax { .. }
        ) {
            self.flush_open(true);
        }
        let span = self.tight_span(raw_end);
        let quantity = self.quantity_with_pending(content, span);
        match &mut self.state {
            OpenMeasurement::MinMax { least, most } => match bound {
                Bound::Least => *least = Some(quantity),
                Bound::Most => *most = Some(quantity),
            },
            state => {
                let (least, most) = match bound {
                    Bound::Least => (Some(quantity), None),
                    Bound::Most => (None, Some(quantity)),
                };
                *state = OpenMeasurement::MinMax { least, most };
            }
        }
        self.cursor_after(raw_end)
    }

    fn on_base_range(&mut self, part: Part, content: &str, raw_end: usize) -> usize {
        if !matches!(
            self.state,
            OpenMeasurement::Idle | OpenMeasurement::BaseRange { .. }
        ) {
            self.flush_open(true);
        }
        let span = self.tight_span(raw_end);
        let quantity = self.quantity_with_pending(content, span);
        match &mut self.state {
            OpenMeasurement::BaseRange { base, range } => match part {
                Part::Base => *base = Some(quantity),
                Part::Range => *range = Some(quantity),
            },
            state => {
                let (base, range) = match part {
                    Part::Base => (Some(quantity), None),
                    Part::Range => (None, Some(quantity)),
                };
                *state = OpenMeasurement::BaseRange { base, range };
            }
        }
        self.cursor_after(raw_end)
    }

    fn on_list(&mut self, content: &str, raw_end: usize) -> usize {
        if !matches!(
            self.state,
            OpenMeasurement::Idle | OpenMeasurement::List { .. }
        ) {
            // A list continuation keeps the pending unit alive across the
            // flush, so one prospective unit can serve several elements.
            self.flush_open(false);
        }
        let span = self.tight_span(raw_end);
        let quantity = self.quantity_with_pending(content, span);
        match &mut self.state {
            OpenMeasurement::List { quantities } => quantities.push(quantity),
            state => {
                *state = OpenMeasurement::List {
                    quantities: vec![quantity],
                }
            }
        }
        self.cursor_after(raw_end)
    }

    fn on_unit_left(&mut self, content: &str, raw_end: usize) -> usize {
        let span = self.tight_span(raw_end);
        let id = self.units.alloc(Unit::new(content, span));
        let mut attached = 0;
        match &mut self.state {
            OpenMeasurement::Value { quantity } => {
                quantity.unit = Some(id);
                attached = 1;
            }
            OpenMeasurement::MinMax { least, most } => {
                // The most bound anchors back-attachment; least joins only
                // behind it.
                if let Some(most) = most {
                    if most.unit.is_none() {
                        most.unit = Some(id);
                        attached += 1;
                        if let Some(least) = least {
                            if least.unit.is_none() {
                                least.unit = Some(id);
                                attached += 1;
                            }
                        }
                    }
                }
            }
            OpenMeasurement::BaseRange { base, range } => {
                if let Some(range) = range {
                    if range.unit.is_none() {
                        range.unit = Some(id);
                        attached += 1;
                        if let Some(base) = base {
                            if base.unit.is_none() {
                                base.unit = Some(id);
                                attached += 1;
                            }
                        }
                    }
                }
            }
            OpenMeasurement::List { quantities } => {
                for quantity in quantities {
                    if quantity.unit.is_none() {
                        quantity.unit = Some(id);
                        attached += 1;
                    } else {
                        // A unit-bearing element ends the back-attachment.
                        break;
                    }
                }
            }
            OpenMeasurement::Idle => {}
        }
        self.record(TraceEvent::BackAttached {
            raw_name: content.to_string(),
            attached,
        });
        self.clear_pending_unit();

        let close = match &self.state {
            OpenMeasurement::Value { .. } => true,
            OpenMeasurement::MinMax { least, most } => least.is_some() && most.is_some(),
            OpenMeasurement::BaseRange { base, range } => base.is_some() && range.is_some(),
            OpenMeasurement::List { .. } | OpenMeasurement::Idle => false,
        };
        if close {
            self.flush_open(false);
        }
        self.cursor_after(raw_end)
    }

    fn on_unit_right(&mut self, content: &str, raw_end: usize) -> usize {
        if matches!(
            self.state,
            OpenMeasurement::Value { .. } | OpenMeasurement::List { .. }
        ) {
            // Open intervals stay open; a value or list is done once a new
            // prospective unit shows up.
            self.flush_open(false);
        }
        let span = self.tight_span(raw_end);
        let id = self.units.alloc(Unit::new(content, span));
        if let Some(previous) = self.pending_unit.replace(id) {
            let raw_name = self.units.get(previous).raw_name.clone();
            self.record(TraceEvent::PendingUnitDropped { raw_name });
        }
        self.record(TraceEvent::PendingUnitStored {
            raw_name: content.to_string(),
        });
        self.cursor_after(raw_end)
    }

    /// Build a quantity, attaching the pending unit without consuming it:
    /// one prospective unit may serve both interval bounds or a whole list.
    fn quantity_with_pending(&mut self, content: &str, span: Span) -> Quantity {
        let mut quantity = Quantity::new(content, span);
        if let Some(id) = self.pending_unit {
            quantity.unit = Some(id);
            let raw_name = self.units.get(id).raw_name.clone();
            self.record(TraceEvent::PendingUnitAttached { raw_name });
        }
        quantity
    }

    /// Finalize the open measurement, if any. `clear_pending` drops the
    /// pending unit when a measurement was actually emitted.
    fn flush_open(&mut self, clear_pending: bool) {
        let open = std::mem::replace(&mut self.state, OpenMeasurement::Idle);
        if let Some(measurement) = open.into_measurement() {
            if self.emit(measurement) && clear_pending {
                self.clear_pending_unit();
            }
        }
    }

    /// The validity gate every emission passes through.
    fn emit(&mut self, measurement: Measurement) -> bool {
        let measurement = measurement.prune_empty();
        let kind = measurement.kind();
        if measurement.is_valid() {
            self.record(TraceEvent::Flushed { kind });
            self.measurements.push(measurement);
            true
        } else {
            self.record(TraceEvent::DiscardedInvalid { kind });
            false
        }
    }

    fn clear_pending_unit(&mut self) {
        if let Some(id) = self.pending_unit.take() {
            let raw_name = self.units.get(id).raw_name.clone();
            self.record(TraceEvent::PendingUnitDropped { raw_name });
        }
    }

    fn record(&mut self, event: TraceEvent) {
        if let Some(sink) = self.trace.as_mut() {
            sink.record(event);
        }
    }

    /// Advance past leading spaces.
    fn trim_start_from(&self, mut at: usize) -> usize {
        while at < self.chars.len() && self.chars[at] == ' ' {
            at += 1;
        }
        at
    }

    /// Retract past trailing spaces.
    fn trim_end_to(&self, mut at: usize) -> usize {
        while at > 0 && self.chars[at - 1] == ' ' {
            at -= 1;
        }
        at
    }

    /// Whitespace-tightened span for the cluster occupying
    /// `[self.pos, raw_end)`.
    fn tight_span(&self, raw_end: usize) -> Span {
        let start = self.trim_start_from(self.pos);
        let end = self.trim_end_to(raw_end).max(start);
        Span::new(start, end)
    }

    /// Cursor position after a span-assigning cluster: its raw end with
    /// trailing spaces given back to the following cluster.
    fn cursor_after(&self, raw_end: usize) -> usize {
        self.trim_end_to(raw_end).max(self.pos)
    }
}

/// One-call build: run the state machine over `clusters`, then apply the
/// consistency correction with default thresholds. Units are left
/// unresolved; see [`crate::resolve_units`].
pub fn build_measurements(
    text: &str,
    origin: usize,
    clusters: &[LabeledCluster],
) -> MeasurementSet {
    let mut builder = MeasurementBuilder::new(text, origin);
    for cluster in clusters {
        builder.consume(cluster);
    }
    correct_measurements(builder.finish(), &CorrectionConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Token;
    use crate::measurement::MeasurementKind;
    use crate::trace::TraceLog;

    fn cluster(label: ClusterLabel, tokens: &[&str]) -> LabeledCluster {
        let tokens = tokens.iter().map(|text| Token::new(*text)).collect();
        LabeledCluster::new(label, tokens, 0)
    }

    fn build_raw(text: &str, clusters: &[LabeledCluster]) -> MeasurementSet {
        let mut builder = MeasurementBuilder::new(text, 0);
        for cluster in clusters {
            builder.consume(cluster);
        }
        builder.finish()
    }

    #[test]
    fn test_pending_unit_closes_the_next_atomic_value() {
        let set = build_raw(
            "kg 5",
            &[
                cluster(ClusterLabel::UnitRight, &["kg"]),
                cluster(ClusterLabel::AtomicValue, &[" ", "5"]),
            ],
        );
        assert_eq!(set.len(), 1);
        match &set.measurements[0] {
            Measurement::Value(quantity) => {
                assert_eq!(quantity.raw_value, "5");
                assert_eq!(quantity.span, Span::new(3, 4));
                let unit = set.unit(quantity.unit.unwrap());
                assert_eq!(unit.raw_name, "kg");
                assert_eq!(unit.span, Span::new(0, 2));
            }
            other => panic!("expected a value, got {:?}", other),
        }
    }

    #[test]
    fn test_atomic_value_waits_for_its_unit() {
        let set = build_raw(
            "5 kg",
            &[
                cluster(ClusterLabel::AtomicValue, &["5"]),
                cluster(ClusterLabel::UnitLeft, &[" ", "kg"]),
            ],
        );
        assert_eq!(set.len(), 1);
        match &set.measurements[0] {
            Measurement::Value(quantity) => {
                assert_eq!(quantity.span, Span::new(0, 1));
                assert_eq!(set.unit(quantity.unit.unwrap()).span, Span::new(2, 4));
            }
            other => panic!("expected a value, got {:?}", other),
        }
    }

    #[test]
    fn test_new_value_flushes_the_previous_one() {
        let set = build_raw(
            "5 7",
            &[
                cluster(ClusterLabel::AtomicValue, &["5"]),
                cluster(ClusterLabel::AtomicValue, &[" ", "7"]),
            ],
        );
        let values: Vec<&str> = set
            .iter()
            .map(|m| match m {
                Measurement::Value(q) => q.raw_value.as_str(),
                other => panic!("expected values, got {:?}", other),
            })
            .collect();
        assert_eq!(values, vec!["5", "7"]);
    }

    #[test]
    fn test_interval_bounds_share_a_back_attached_unit() {
        let set = build_raw(
            "10 to 20 cm",
            &[
                cluster(ClusterLabel::LeastValue, &["10"]),
                cluster(ClusterLabel::Other, &[" ", "to"]),
                cluster(ClusterLabel::MostValue, &[" ", "20"]),
                cluster(ClusterLabel::UnitLeft, &[" ", "cm"]),
            ],
        );
        assert_eq!(set.len(), 1);
        match &set.measurements[0] {
            Measurement::MinMaxInterval {
                least: Some(least),
                most: Some(most),
            } => {
                assert_eq!(least.span, Span::new(0, 2));
                assert_eq!(most.span, Span::new(6, 8));
                assert_eq!(least.unit, most.unit);
                assert_eq!(set.unit(least.unit.unwrap()).raw_name, "cm");
            }
            other => panic!("expected a closed interval, got {:?}", other),
        }
        assert_eq!(set.units.len(), 1);
    }

    #[test]
    fn test_interval_label_flushes_an_open_value() {
        let set = build_raw(
            "5 10",
            &[
                cluster(ClusterLabel::AtomicValue, &["5"]),
                cluster(ClusterLabel::LeastValue, &[" ", "10"]),
            ],
        );
        assert_eq!(set.measurements[0].kind(), MeasurementKind::Value);
        match &set.measurements[1] {
            Measurement::MinMaxInterval {
                least: Some(least),
                most: None,
            } => assert_eq!(least.span, Span::new(2, 4)),
            other => panic!("expected a one-sided interval, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_bound_overwrites_the_slot() {
        let set = build_raw(
            "10 12",
            &[
                cluster(ClusterLabel::LeastValue, &["10"]),
                cluster(ClusterLabel::LeastValue, &[" ", "12"]),
            ],
        );
        assert_eq!(set.len(), 1);
        match &set.measurements[0] {
            Measurement::MinMaxInterval {
                least: Some(least),
                most: None,
            } => assert_eq!(least.raw_value, "12"),
            other => panic!("expected an interval, got {:?}", other),
        }
    }

    #[test]
    fn test_back_attachment_needs_the_most_bound() {
        let set = build_raw(
            "10 cm",
            &[
                cluster(ClusterLabel::LeastValue, &["10"]),
                cluster(ClusterLabel::UnitLeft, &[" ", "cm"]),
            ],
        );
        assert_eq!(set.len(), 1);
        match &set.measurements[0] {
            Measurement::MinMaxInterval {
                least: Some(least), ..
            } => assert!(least.unit.is_none()),
            other => panic!("expected an interval, got {:?}", other),
        }
    }

    #[test]
    fn test_prospective_unit_leaves_intervals_open() {
        let set = build_raw(
            "10 $ 20",
            &[
                cluster(ClusterLabel::LeastValue, &["10"]),
                cluster(ClusterLabel::UnitRight, &[" ", "$"]),
                cluster(ClusterLabel::MostValue, &[" ", "20"]),
            ],
        );
        assert_eq!(set.len(), 1);
        match &set.measurements[0] {
            Measurement::MinMaxInterval {
                least: Some(least),
                most: Some(most),
            } => {
                assert!(least.unit.is_none());
                assert_eq!(set.unit(most.unit.unwrap()).raw_name, "$");
            }
            other => panic!("expected an interval, got {:?}", other),
        }
    }

    #[test]
    fn test_list_elements_share_the_pending_unit() {
        let set = build_raw(
            "$ 5 , 10",
            &[
                cluster(ClusterLabel::UnitRight, &["$"]),
                cluster(ClusterLabel::ListValue, &[" ", "5"]),
                cluster(ClusterLabel::Other, &[" ", ","]),
                cluster(ClusterLabel::ListValue, &[" ", "10"]),
            ],
        );
        assert_eq!(set.len(), 1);
        match &set.measurements[0] {
            Measurement::ValueList(quantities) => {
                assert_eq!(quantities.len(), 2);
                assert_eq!(quantities[0].unit, quantities[1].unit);
                assert_eq!(set.unit(quantities[0].unit.unwrap()).raw_name, "$");
            }
            other => panic!("expected a list, got {:?}", other),
        }
        assert_eq!(set.units.len(), 1);
    }

    #[test]
    fn test_prospective_unit_flushes_open_value() {
        let set = build_raw(
            "5 kg 7",
            &[
                cluster(ClusterLabel::AtomicValue, &["5"]),
                cluster(ClusterLabel::UnitRight, &[" ", "kg"]),
                cluster(ClusterLabel::AtomicValue, &[" ", "7"]),
            ],
        );
        assert_eq!(set.len(), 2);
        match (&set.measurements[0], &set.measurements[1]) {
            (Measurement::Value(first), Measurement::Value(second)) => {
                assert!(first.unit.is_none());
                assert_eq!(set.unit(second.unit.unwrap()).raw_name, "kg");
            }
            other => panic!("expected two values, got {:?}", other),
        }
    }

    #[test]
    fn test_back_attachment_stops_at_a_unit_bearing_element() {
        let set = build_raw(
            "5 kg , 10 , 15 mg",
            &[
                cluster(ClusterLabel::ListValue, &["5"]),
                cluster(ClusterLabel::UnitLeft, &[" ", "kg"]),
                cluster(ClusterLabel::Other, &[" ", ","]),
                cluster(ClusterLabel::ListValue, &[" ", "10"]),
                cluster(ClusterLabel::Other, &[" ", ","]),
                cluster(ClusterLabel::ListValue, &[" ", "15"]),
                cluster(ClusterLabel::UnitLeft, &[" ", "mg"]),
            ],
        );
        assert_eq!(set.len(), 1);
        match &set.measurements[0] {
            Measurement::ValueList(quantities) => {
                assert_eq!(set.unit(quantities[0].unit.unwrap()).raw_name, "kg");
                assert!(quantities[1].unit.is_none());
                assert!(quantities[2].unit.is_none());
            }
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[test]
    fn test_unit_with_nothing_open_is_dropped() {
        let set = build_raw("kg", &[cluster(ClusterLabel::UnitLeft, &["kg"])]);
        assert!(set.is_empty());
        assert_eq!(set.units.len(), 1);
    }

    #[test]
    fn test_whitespace_only_cluster_never_emits() {
        let set = build_raw("   ", &[cluster(ClusterLabel::AtomicValue, &["   "])]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_origin_offsets_spans() {
        let mut builder = MeasurementBuilder::new("see 10 cm", 4);
        builder.consume(&cluster(ClusterLabel::AtomicValue, &["10"]));
        builder.consume(&cluster(ClusterLabel::UnitLeft, &[" ", "cm"]));
        let set = builder.finish();
        match &set.measurements[0] {
            Measurement::Value(quantity) => {
                assert_eq!(quantity.span, Span::new(4, 6));
                assert_eq!(set.unit(quantity.unit.unwrap()).span, Span::new(7, 9));
            }
            other => panic!("expected a value, got {:?}", other),
        }
    }

    #[test]
    fn test_trace_records_every_decision() {
        let mut log = TraceLog::new();
        let clusters = [
            cluster(ClusterLabel::UnitRight, &["kg"]),
            cluster(ClusterLabel::AtomicValue, &[" ", "5"]),
        ];
        let mut builder = MeasurementBuilder::new("kg 5", 0).with_trace(&mut log);
        for cluster in &clusters {
            builder.consume(cluster);
        }
        builder.finish();
        assert_eq!(
            log.events(),
            &[
                TraceEvent::ClusterConsumed {
                    label: ClusterLabel::UnitRight,
                    text: "kg".to_string(),
                    span: Span::new(0, 2),
                },
                TraceEvent::PendingUnitStored {
                    raw_name: "kg".to_string(),
                },
                TraceEvent::ClusterConsumed {
                    label: ClusterLabel::AtomicValue,
                    text: "5".to_string(),
                    span: Span::new(2, 4),
                },
                TraceEvent::PendingUnitAttached {
                    raw_name: "kg".to_string(),
                },
                TraceEvent::Flushed {
                    kind: MeasurementKind::Value,
                },
            ],
        );
    }
}
