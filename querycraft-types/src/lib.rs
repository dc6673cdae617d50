//! Core type definitions for querycraft.
//!
//! This crate defines the data model shared by the assembler, the form
//! staging layer and the CLI:
//! - [`Condition`] — a single field/operator/value filter triple
//! - [`OperatorKind`] and [`CombinatorKind`] — the closed operator sets
//! - [`Scalar`] — the string/number/boolean value of a condition
//! - [`Group`] — a non-empty run of conditions sharing one combinator
//!
//! None of these types validate field names. The field option list is a
//! presentation concern and lives in `querycraft-staging`.

mod condition;
mod operator;
mod scalar;

pub use condition::{Condition, Group};
pub use operator::{CombinatorKind, OperatorKind};
pub use scalar::Scalar;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at string and JSON boundaries.
///
/// Building and rendering a query never fails; these only surface when text
/// coming from a caller is turned into typed values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("unknown combinator: {0}")]
    UnknownCombinator(String),

    #[error("number is not finite: {0}")]
    NonFiniteNumber(f64),
}
