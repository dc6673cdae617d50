use pretty_assertions::assert_eq;
use querycraft_types::{CombinatorKind, Condition, Group, OperatorKind};
use serde_json::json;

fn theme_refund() -> Condition {
    Condition::new("theme", OperatorKind::Equals, "refund")
}

// ── Condition ────────────────────────────────────────────────────

#[test]
fn condition_display_quotes_value() {
    assert_eq!(theme_refund().to_string(), r#"theme == "refund""#);
}

#[test]
fn condition_display_quotes_numbers_and_bools() {
    let rating = Condition::new("rating", OperatorKind::GreaterThan, 3i64);
    assert_eq!(rating.to_string(), r#"rating > "3""#);

    let flag = Condition::new("source", OperatorKind::Equals, true);
    assert_eq!(flag.to_string(), r#"source == "true""#);
}

#[test]
fn condition_display_does_not_escape() {
    let c = Condition::new("reason", OperatorKind::Contains, r#"say "hi""#);
    assert_eq!(c.to_string(), r#"reason contains "say "hi"""#);
}

#[test]
fn condition_accepts_any_field() {
    let c = Condition::new("", OperatorKind::LessThan, "5");
    assert_eq!(c.to_string(), r#" < "5""#);
}

#[test]
fn condition_serde_shape() {
    let c = Condition::new("rating", OperatorKind::GreaterThan, 3i64);
    let value = serde_json::to_value(&c).unwrap();
    assert_eq!(
        value,
        json!({"field": "rating", "operator": "greaterThan", "value": 3})
    );

    let back: Condition = serde_json::from_value(value).unwrap();
    assert_eq!(back, c);
}

// ── Group ────────────────────────────────────────────────────────

#[test]
fn group_starts_with_one_condition() {
    let g = Group::new(theme_refund(), CombinatorKind::Or);
    assert_eq!(g.len(), 1);
    assert!(!g.is_empty());
    assert_eq!(g.first(), &theme_refund());
    assert_eq!(g.operator(), CombinatorKind::Or);
}

#[test]
fn group_push_keeps_order() {
    let mut g = Group::new(theme_refund(), CombinatorKind::And);
    g.push(Condition::new("language", OperatorKind::Contains, "en"));
    g.push(Condition::new("rating", OperatorKind::LessThan, 2i64));

    let fields: Vec<_> = g.conditions().iter().map(|c| c.field.as_str()).collect();
    assert_eq!(fields, ["theme", "language", "rating"]);
    assert_eq!(g.operator(), CombinatorKind::And);
}

#[test]
fn group_serializes_as_rule() {
    let mut g = Group::new(theme_refund(), CombinatorKind::And);
    g.push(Condition::new("rating", OperatorKind::GreaterThan, 3i64));

    assert_eq!(
        serde_json::to_value(&g).unwrap(),
        json!({
            "conditions": [
                {"field": "theme", "operator": "equals", "value": "refund"},
                {"field": "rating", "operator": "greaterThan", "value": 3}
            ],
            "operator": "AND"
        })
    );
}
