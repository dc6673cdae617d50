use querycraft_types::{Condition, OperatorKind, Scalar};
use serde::{Deserialize, Serialize};

/// One editable row of a staging group.
///
/// A fresh filter has an empty field, `equals`, and an empty string value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub operator: OperatorKind,
    #[serde(default)]
    pub value: Scalar,
}

impl Filter {
    pub fn new(field: impl Into<String>, operator: OperatorKind, value: impl Into<Scalar>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Applies a single-field edit in place.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Field(field) => self.field = field,
            FilterUpdate::Operator(operator) => self.operator = operator,
            FilterUpdate::Value(value) => self.value = value,
        }
    }

    #[must_use]
    pub fn to_condition(&self) -> Condition {
        Condition::new(self.field.clone(), self.operator, self.value.clone())
    }
}

impl From<Filter> for Condition {
    fn from(filter: Filter) -> Self {
        Condition::new(filter.field, filter.operator, filter.value)
    }
}

/// An edit of exactly one of a filter's three fields.
///
/// Serialized as `{"key": "field" | "operator" | "value", "value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "lowercase")]
pub enum FilterUpdate {
    Field(String),
    Operator(OperatorKind),
    Value(Scalar),
}
