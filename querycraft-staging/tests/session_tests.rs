use querycraft_staging::{FilterUpdate, FormStaging, QuerySession};
use querycraft_types::{CombinatorKind, OperatorKind};

#[test]
fn new_session_has_no_outputs() {
    let session = QuerySession::new();
    assert_eq!(session.query(), "");
    assert!(session.built().is_empty());
    assert_eq!(session.staging(), &FormStaging::new());
}

#[test]
fn outputs_only_change_on_build() {
    let mut session = QuerySession::new();
    session
        .staging_mut()
        .update_filter(0, 0, FilterUpdate::Field("theme".into()))
        .unwrap();
    assert_eq!(session.query(), "");

    session.build();
    assert_eq!(session.query(), r#"(theme == "")"#);

    session
        .staging_mut()
        .update_filter(0, 0, FilterUpdate::Value("refund".into()))
        .unwrap();
    assert_eq!(session.query(), r#"(theme == "")"#);

    let built = session.build();
    assert_eq!(built.expression, r#"(theme == "refund")"#);
}

#[test]
fn rebuild_does_not_accumulate() {
    let mut session = QuerySession::new();
    session.build();
    session.build();
    assert_eq!(session.built().rules.len(), 1);
    assert_eq!(session.built().rules[0].len(), 1);
}

#[test]
fn clear_query_resets_everything() {
    let mut session = QuerySession::new();
    let staging = session.staging_mut();
    staging.add_group();
    staging.set_combinator(1, CombinatorKind::Or).unwrap();
    staging
        .update_filter(1, 0, FilterUpdate::Operator(OperatorKind::Contains))
        .unwrap();
    session.build();
    assert_eq!(session.built().rules.len(), 2);

    session.clear_query();
    assert_eq!(session.query(), "");
    assert!(session.built().is_empty());
    assert_eq!(session.staging(), &FormStaging::new());
}

#[test]
fn with_staging_uses_given_groups() {
    let staging = FormStaging::from_json(
        r#"[{"combinator": "OR", "filters": [
            {"field": "language", "operator": "equals", "value": "en"},
            {"field": "language", "operator": "equals", "value": "fr"}
        ]}]"#,
    )
    .unwrap();
    let mut session = QuerySession::with_staging(staging);
    session.build();
    assert_eq!(
        session.query(),
        r#"(language == "en" || language == "fr")"#
    );
}
