//! Comparison operators and logical combinators.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison applied between a condition's field and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperatorKind {
    #[default]
    Equals,
    GreaterThan,
    LessThan,
    Contains,
}

impl OperatorKind {
    /// Every operator, in the order a form lists them.
    pub const ALL: [OperatorKind; 4] = [
        OperatorKind::Equals,
        OperatorKind::GreaterThan,
        OperatorKind::LessThan,
        OperatorKind::Contains,
    ];

    /// Symbol used in the rendered expression string.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equals => "==",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::Contains => "contains",
        }
    }

    /// Wire name, identical to the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::Contains => "contains",
        }
    }

    /// Human-readable label for option lists.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equals => "Equals",
            Self::GreaterThan => "Greater Than",
            Self::LessThan => "Less Than",
            Self::Contains => "Contains",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}

/// Logical joiner between the conditions of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CombinatorKind {
    #[default]
    And,
    Or,
}

impl CombinatorKind {
    /// Symbol placed between conditions of a group in the expression string.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for CombinatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CombinatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("and") {
            Ok(Self::And)
        } else if s.eq_ignore_ascii_case("or") {
            Ok(Self::Or)
        } else {
            Err(Error::UnknownCombinator(s.to_string()))
        }
    }
}
