//! Query assembly for querycraft.
//!
//! A [`QueryAssembler`] accepts conditions one at a time, each tagged with
//! the combinator relating it to the previously accepted one, and keeps
//! them as an ordered list of [`Group`]s:
//!
//! - a condition whose combinator matches the last group's is appended to it
//! - any other condition opens a new group
//!
//! Only the immediately preceding group is consulted, so two adjacent groups
//! never share a combinator. The accumulated query is read back either as
//! the structured group list or as an expression string such as
//! `(theme == "refund" && rating > "3") && (source < "5")`.
//!
//! Groups are always joined with `&&` whatever their own combinator.

mod assembler;
pub mod reduce;
pub mod render;

pub use assembler::QueryAssembler;
pub use querycraft_types::{CombinatorKind, Condition, Group, OperatorKind, Scalar};
