//! End-to-end scenarios: tagger label streams in, rendered measurements out.
//!
//! Each test runs the full pipeline (assembly, build, correction,
//! resolution) over one realistic tagging and snapshots the aligned
//! rendering.

use std::collections::HashMap;

use crate::{
    build_measurements, segment_tokens, ClusterLabel, LabeledCluster, Measurement,
    MeasureKind, MeasurementDisplay, MeasurementKind, MeasurementPipeline, MeasurementSet,
    TaggedToken, Token, UnitDefinition, UnitSystem,
};

fn lexicon() -> HashMap<String, UnitDefinition> {
    let entries = [
        ("kg", "kilogram", "kg", MeasureKind::Mass, UnitSystem::SiBase),
        ("mg", "milligram", "mg", MeasureKind::Mass, UnitSystem::SiDerived),
        ("cm", "centimetre", "cm", MeasureKind::Length, UnitSystem::SiDerived),
        ("mA", "milliampere", "mA", MeasureKind::Current, UnitSystem::SiDerived),
    ];
    entries
        .iter()
        .map(|(raw, name, notation, measure, system)| {
            (
                raw.to_string(),
                UnitDefinition {
                    name: name.to_string(),
                    notation: notation.to_string(),
                    measure: *measure,
                    system: *system,
                },
            )
        })
        .collect()
}

fn tag_all(text: &str, labels: &[&str]) -> Vec<TaggedToken> {
    let tokens = segment_tokens(text);
    assert_eq!(tokens.len(), labels.len(), "one label per token");
    tokens
        .into_iter()
        .zip(labels)
        .map(|(token, label)| TaggedToken::new(token, *label))
        .collect()
}

fn extract(text: &str, labels: &[&str]) -> MeasurementSet {
    MeasurementPipeline::new(lexicon()).extract_tagged(text, 0, &tag_all(text, labels))
}

#[test]
fn test_prospective_unit_then_value() {
    let text = "$ 50";
    let set = extract(text, &["B-<unitRight>", "<other>", "B-<valueAtomic>"]);

    insta::assert_snapshot!(MeasurementDisplay::new(text, &set), @r###"
    $ 50
    ╰──╯value 50 $
    "###);
}

#[test]
fn test_interval_bounds_share_the_trailing_unit() {
    let text = "between 10 and 20 cm";
    let set = extract(
        text,
        &[
            "<other>",
            "<other>",
            "B-<valueLeast>",
            "<other>",
            "<other>",
            "<other>",
            "B-<valueMost>",
            "<other>",
            "B-<unitLeft>",
        ],
    );

    insta::assert_snapshot!(MeasurementDisplay::new(text, &set), @r###"
    between 10 and 20 cm
            ╰──────────╯min-max least 10 cm · most 20 cm
    "###);

    match &set.measurements[0] {
        Measurement::MinMaxInterval {
            least: Some(least),
            most: Some(most),
        } => {
            assert_eq!(least.unit, most.unit);
            let unit = set.unit(least.unit.unwrap());
            assert_eq!(unit.definition.as_ref().unwrap().name, "centimetre");
        }
        other => panic!("expected an interval, got {:?}", other),
    }
}

#[test]
fn test_base_range_interval() {
    let text = "100 ± 5 mA";
    let set = extract(
        text,
        &[
            "B-<valueBase>",
            "<other>",
            "<other>",
            "<other>",
            "B-<valueRange>",
            "<other>",
            "B-<unitLeft>",
        ],
    );

    insta::assert_snapshot!(MeasurementDisplay::new(text, &set), @r###"
    100 ± 5 mA
    ╰────────╯base-range base 100 mA · range 5 mA
    "###);
}

#[test]
fn test_list_elements_share_the_trailing_unit() {
    let text = "5 , 10 and 15 kg";
    let set = extract(
        text,
        &[
            "B-<valueList>",
            "<other>",
            "<other>",
            "<other>",
            "B-<valueList>",
            "<other>",
            "<other>",
            "<other>",
            "B-<valueList>",
            "<other>",
            "B-<unitLeft>",
        ],
    );

    insta::assert_snapshot!(MeasurementDisplay::new(text, &set), @r###"
    5 , 10 and 15 kg
    ╰──────────────╯list 5 kg · 10 kg · 15 kg
    "###);

    match &set.measurements[0] {
        Measurement::ValueList(quantities) => {
            assert_eq!(quantities.len(), 3);
            assert!(quantities
                .iter()
                .all(|quantity| quantity.unit == quantities[0].unit));
        }
        other => panic!("expected a list, got {:?}", other),
    }
}

#[test]
fn test_far_unit_never_survives_correction() {
    let filler = " ".repeat(198);
    let text = format!("5{}cm", filler);
    let clusters = [
        LabeledCluster::new(ClusterLabel::AtomicValue, vec![Token::new("5")], 0),
        LabeledCluster::new(ClusterLabel::Other, vec![Token::new(filler.as_str())], 1),
        LabeledCluster::new(ClusterLabel::UnitLeft, vec![Token::new("cm")], 199),
    ];
    let set = build_measurements(&text, 0, &clusters);
    assert!(set.is_empty());
}

#[test]
fn test_distant_interval_splits_into_values() {
    let filler = " ".repeat(148);
    let text = format!("10{}250", filler);
    let clusters = [
        LabeledCluster::new(ClusterLabel::LeastValue, vec![Token::new("10")], 0),
        LabeledCluster::new(ClusterLabel::Other, vec![Token::new(filler.as_str())], 2),
        LabeledCluster::new(ClusterLabel::MostValue, vec![Token::new("250")], 150),
    ];
    let set = build_measurements(&text, 0, &clusters);
    let kinds: Vec<MeasurementKind> = set.iter().map(Measurement::kind).collect();
    assert_eq!(kinds, vec![MeasurementKind::Value, MeasurementKind::Value]);
}

#[test]
fn test_mixed_unit_list_stays_one_measurement() {
    // An interval this far out of shape would be split; a list passes
    // through correction whole, mixed units and all.
    let text = "5 kg , 10 , 15 mg";
    let set = extract(
        text,
        &[
            "B-<valueList>",
            "<other>",
            "B-<unitLeft>",
            "<other>",
            "<other>",
            "<other>",
            "B-<valueList>",
            "<other>",
            "<other>",
            "<other>",
            "B-<valueList>",
            "<other>",
            "B-<unitLeft>",
        ],
    );

    insta::assert_snapshot!(MeasurementDisplay::new(text, &set), @r###"
    5 kg , 10 , 15 mg
    ╰────────────╯list 5 kg · 10 · 15
    "###);
}

#[test]
fn test_unknown_labels_do_not_derail_a_build() {
    let text = "5 sheep and 10 kg";
    let set = extract(
        text,
        &[
            "B-<valueAtomic>",
            "<other>",
            "B-<valueSheep>",
            "<other>",
            "<other>",
            "<other>",
            "B-<valueAtomic>",
            "<other>",
            "B-<unitLeft>",
        ],
    );

    insta::assert_snapshot!(MeasurementDisplay::new(text, &set), @r###"
    5 sheep and 10 kg
    ╰value 5
                ╰───╯value 10 kg
    "###);
}
