//! Text-aligned rendering of a measurement set, for snapshots and debugging.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthChar;

use crate::measurement::{Measurement, MeasurementSet, Quantity};

/// Renders the source text with a `╰──╯` marker under each measurement's
/// covering span, followed by a one-line description.
///
/// ```text
/// 10 to 20 cm
/// ╰─────────╯min-max least 10 cm · most 20 cm
/// ```
///
/// Alignment is by display width, so wide characters in the text do not
/// skew the markers. The set's spans must index into `text`; a span past
/// its end panics.
pub struct MeasurementDisplay<'a> {
    text: &'a str,
    set: &'a MeasurementSet,
}

impl<'a> MeasurementDisplay<'a> {
    pub fn new(text: &'a str, set: &'a MeasurementSet) -> Self {
        MeasurementDisplay { text, set }
    }

    fn describe(&self, measurement: &Measurement) -> String {
        let pieces: Vec<String> = match measurement {
            Measurement::Value(quantity) => vec![self.quantity_text(quantity)],
            Measurement::MinMaxInterval { least, most } => [("least", least), ("most", most)]
                .iter()
                .filter_map(|(name, slot)| {
                    slot.as_ref()
                        .map(|quantity| format!("{} {}", name, self.quantity_text(quantity)))
                })
                .collect(),
            Measurement::BaseRangeInterval { base, range } => [("base", base), ("range", range)]
                .iter()
                .filter_map(|(name, slot)| {
                    slot.as_ref()
                        .map(|quantity| format!("{} {}", name, self.quantity_text(quantity)))
                })
                .collect(),
            Measurement::ValueList(quantities) => quantities
                .iter()
                .map(|quantity| self.quantity_text(quantity))
                .collect(),
        };
        let mut description = measurement.kind().as_str().to_string();
        for (index, piece) in pieces.iter().enumerate() {
            description.push_str(if index == 0 { " " } else { " · " });
            description.push_str(piece);
        }
        description
    }

    /// `"10 cm"` with the resolved notation preferred over the raw name.
    fn quantity_text(&self, quantity: &Quantity) -> String {
        let mut text = quantity.raw_value.clone();
        if let Some(id) = quantity.unit {
            let unit = self.set.unit(id);
            let symbol = unit
                .definition
                .as_ref()
                .map(|definition| definition.notation.as_str())
                .unwrap_or(&unit.raw_name);
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(symbol);
        }
        text
    }
}

fn width_of(chars: &[char]) -> usize {
    chars.iter().filter_map(|c| c.width()).sum()
}

impl std::fmt::Display for MeasurementDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)?;
        let chars: Vec<char> = self.text.chars().collect();
        for measurement in self.set.iter() {
            let cover = match measurement.cover_span(&self.set.units) {
                Some(cover) => cover,
                None => continue,
            };
            f.write_char('\n')?;
            let start_width = width_of(&chars[..cover.start]);
            let marker_width = width_of(&chars[cover.start..cover.end]);
            for _ in 0..start_width {
                f.write_char(' ')?;
            }
            f.write_char('╰')?;
            for _ in 0..marker_width.saturating_sub(2) {
                f.write_char('─')?;
            }
            if marker_width > 1 {
                f.write_char('╯')?;
            }
            f.write_str(&self.describe(measurement))?;
        }
        Ok(())
    }
}
