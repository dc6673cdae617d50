//! Conditions and the groups they are assembled into.

use crate::{CombinatorKind, OperatorKind, Scalar};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `field operator value` filter triple.
///
/// `field` is free text: the core accepts any string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: OperatorKind,
    pub value: Scalar,
}

impl Condition {
    pub fn new(field: impl Into<String>, operator: OperatorKind, value: impl Into<Scalar>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Renders as `<field> <symbol> "<value>"`.
///
/// The value is always quoted and never escaped, whatever its type.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.field, self.operator.symbol(), self.value)
    }
}

/// A run of conditions that share one combinator (a "rule" in the
/// structured output).
///
/// A group always holds at least one condition: the only constructor takes
/// the first one, and conditions can be appended but never removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    conditions: Vec<Condition>,
    operator: CombinatorKind,
}

impl Group {
    #[must_use]
    pub fn new(first: Condition, operator: CombinatorKind) -> Self {
        Self {
            conditions: vec![first],
            operator,
        }
    }

    /// Appends a condition. The group's combinator is unchanged.
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[must_use]
    pub const fn operator(&self) -> CombinatorKind {
        self.operator
    }

    #[must_use]
    pub fn first(&self) -> &Condition {
        &self.conditions[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
