use querycraft_types::{CombinatorKind, Error, OperatorKind};
use std::str::FromStr;

// ── OperatorKind ─────────────────────────────────────────────────

#[test]
fn operator_symbols() {
    assert_eq!(OperatorKind::Equals.symbol(), "==");
    assert_eq!(OperatorKind::GreaterThan.symbol(), ">");
    assert_eq!(OperatorKind::LessThan.symbol(), "<");
    assert_eq!(OperatorKind::Contains.symbol(), "contains");
}

#[test]
fn operator_default_is_equals() {
    assert_eq!(OperatorKind::default(), OperatorKind::Equals);
}

#[test]
fn operator_from_str_accepts_wire_names() {
    assert_eq!(OperatorKind::from_str("equals").unwrap(), OperatorKind::Equals);
    assert_eq!(OperatorKind::from_str("greaterThan").unwrap(), OperatorKind::GreaterThan);
    assert_eq!(OperatorKind::from_str("lessThan").unwrap(), OperatorKind::LessThan);
    assert_eq!(OperatorKind::from_str("contains").unwrap(), OperatorKind::Contains);
}

#[test]
fn operator_from_str_rejects_unknown() {
    let err = OperatorKind::from_str("startsWith").unwrap_err();
    assert!(matches!(err, Error::UnknownOperator(ref s) if s == "startsWith"));
    assert!(format!("{err}").contains("unknown operator"));
}

#[test]
fn operator_from_str_is_case_sensitive() {
    assert!(OperatorKind::from_str("Equals").is_err());
}

#[test]
fn operator_serde_roundtrip() {
    for op in OperatorKind::ALL {
        let json = serde_json::to_string(&op).unwrap();
        let parsed: OperatorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(op, parsed);
    }
}

#[test]
fn operator_serde_rejects_unknown() {
    assert!(serde_json::from_str::<OperatorKind>("\"like\"").is_err());
}

#[test]
fn operator_labels() {
    let labels: Vec<_> = OperatorKind::ALL.iter().map(|op| op.label()).collect();
    assert_eq!(labels, ["Equals", "Greater Than", "Less Than", "Contains"]);
}

// ── CombinatorKind ───────────────────────────────────────────────

#[test]
fn combinator_symbols() {
    assert_eq!(CombinatorKind::And.symbol(), "&&");
    assert_eq!(CombinatorKind::Or.symbol(), "||");
}

#[test]
fn combinator_default_is_and() {
    assert_eq!(CombinatorKind::default(), CombinatorKind::And);
}

#[test]
fn combinator_from_str_ignores_case() {
    assert_eq!("AND".parse::<CombinatorKind>().unwrap(), CombinatorKind::And);
    assert_eq!("or".parse::<CombinatorKind>().unwrap(), CombinatorKind::Or);
    assert_eq!("Or".parse::<CombinatorKind>().unwrap(), CombinatorKind::Or);
}

#[test]
fn combinator_from_str_rejects_unknown() {
    let err = "XOR".parse::<CombinatorKind>().unwrap_err();
    assert!(format!("{err}").contains("unknown combinator: XOR"));
}

#[test]
fn combinator_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&CombinatorKind::And).unwrap(), "\"AND\"");
    assert_eq!(serde_json::to_string(&CombinatorKind::Or).unwrap(), "\"OR\"");
}

#[test]
fn combinator_display_is_name() {
    assert_eq!(CombinatorKind::Or.to_string(), "OR");
}
