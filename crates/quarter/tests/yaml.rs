use std::collections::BTreeMap;

use quarter::{from_yaml, load_yaml, scan_scalar, to_yaml, Node, Quarter, Scalar};
use serde::{Deserialize, Serialize};

fn q(year: i32, number: u8) -> Quarter {
    Quarter::new(year, number).unwrap()
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Report {
    title: String,
    period: Quarter,
    compare_to: Option<Quarter>,
}

#[test]
fn test_encode_then_decode() {
    let yaml = to_yaml(&q(2020, 1)).unwrap();
    assert_eq!(from_yaml(&yaml).unwrap(), q(2020, 1));
}

#[test]
fn test_decode_fuzzy_forms() {
    for text in ["Q1 2020", "2020-Q1", "2020/Q1", "2020Q1", "Q12020"] {
        assert_eq!(from_yaml(text).unwrap(), q(2020, 1), "{text:?}");
    }
}

#[test]
fn test_struct_round_trip() {
    let report = Report {
        title: "Revenue".to_string(),
        period: q(2021, 3),
        compare_to: Some(q(2020, 3)),
    };
    let yaml = serde_yaml::to_string(&report).unwrap();
    assert!(yaml.contains("period: Q3 2021"), "{yaml}");
    let back: Report = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_struct_field_accepts_compact_forms() {
    let yaml = "title: Costs\nperiod: 2021Q2\ncompare_to: 2020/Q2\n";
    let report: Report = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(report.period, q(2021, 2));
    assert_eq!(report.compare_to, Some(q(2020, 2)));
}

#[test]
fn test_struct_field_rejects_bad_quarter() {
    let yaml = "title: Costs\nperiod: Q6 2021\ncompare_to: ~\n";
    assert!(serde_yaml::from_str::<Report>(yaml).is_err());

    let yaml = "title: Costs\nperiod: sometime\ncompare_to: ~\n";
    assert!(serde_yaml::from_str::<Report>(yaml).is_err());
}

#[test]
fn test_untyped_document_recognizes_quarters_first() {
    let yaml = "\
a: Q1 2020
b: 2020-Q2
c: 2020/Q3
d: 2020Q4
e: Q12021
count: 12
ratio: 0.25
enabled: false
missing: ~
name: quarterly
";
    let docs = load_yaml(yaml).unwrap();
    let field = |key: &str| docs[0].get(key).and_then(Node::as_scalar).cloned().unwrap();
    assert_eq!(field("a"), Scalar::Quarter(q(2020, 1)));
    assert_eq!(field("b"), Scalar::Quarter(q(2020, 2)));
    assert_eq!(field("c"), Scalar::Quarter(q(2020, 3)));
    assert_eq!(field("d"), Scalar::Quarter(q(2020, 4)));
    assert_eq!(field("e"), Scalar::Quarter(q(2021, 1)));
    assert_eq!(field("count"), Scalar::Int(12));
    assert_eq!(field("ratio"), Scalar::Float(0.25));
    assert_eq!(field("enabled"), Scalar::Bool(false));
    assert_eq!(field("missing"), Scalar::Null);
    assert_eq!(field("name"), Scalar::String("quarterly".into()));
}

#[test]
fn test_sequence_of_scalars() {
    let docs = load_yaml("- 2020Q1\n- 7\n- Q2 2020\n").unwrap();
    assert_eq!(
        docs[0],
        Node::Sequence(vec![
            Node::Scalar(Scalar::Quarter(q(2020, 1))),
            Node::Scalar(Scalar::Int(7)),
            Node::Scalar(Scalar::Quarter(q(2020, 2))),
        ])
    );
}

#[test]
fn test_quoting_forces_a_string() {
    let docs = load_yaml("- 'Q1 2020'\n- '12'\n- Q1 2020\n- 12\n").unwrap();
    assert_eq!(
        docs[0],
        Node::Sequence(vec![
            Node::Scalar(Scalar::String("Q1 2020".into())),
            Node::Scalar(Scalar::String("12".into())),
            Node::Scalar(Scalar::Quarter(q(2020, 1))),
            Node::Scalar(Scalar::Int(12)),
        ])
    );
}

#[test]
fn test_serde_scalar_slots_keep_strings() {
    let doc: BTreeMap<String, Scalar> =
        serde_yaml::from_str("due: 2020Q3\nnote: 'Q1 2020'\n").unwrap();
    assert_eq!(doc["due"], Scalar::String("2020Q3".into()));
    assert_eq!(doc["note"], Scalar::String("Q1 2020".into()));
}

#[test]
fn test_scanner_round_trip_of_every_display_string() {
    for number in 1..=4 {
        let quarter = q(1999, number);
        assert_eq!(scan_scalar(&quarter.to_string()).unwrap(), Scalar::Quarter(quarter));
        assert_eq!(scan_scalar(&quarter.iso8601()).unwrap(), Scalar::Quarter(quarter));
    }
}
