//! Option lists shown by a query form.
//!
//! These are presentation constants only. The assembler accepts any field
//! string and nothing here is used for validation.

use querycraft_types::OperatorKind;

/// A selectable option: the stored value and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Filterable fields, in display order.
pub const FIELD_OPTIONS: &[FieldOption] = &[
    FieldOption { value: "theme", label: "Theme" },
    FieldOption { value: "sub-theme", label: "Sub-theme" },
    FieldOption { value: "reason", label: "Reason" },
    FieldOption { value: "language", label: "Language" },
    FieldOption { value: "source", label: "Source" },
    FieldOption { value: "rating", label: "Rating" },
    FieldOption { value: "time-period", label: "Time Period" },
    FieldOption { value: "customer-id", label: "Customer ID" },
];

/// Placeholder label for a filter whose field has not been chosen.
pub const FIELD_PLACEHOLDER: &str = "Select field";

/// Placeholder for an empty value input.
pub const VALUE_PLACEHOLDER: &str = "Select criteria";

/// Operators with their display labels, in display order.
#[must_use]
pub fn operator_options() -> impl Iterator<Item = (OperatorKind, &'static str)> {
    OperatorKind::ALL.into_iter().map(|op| (op, op.label()))
}
