//! Form staging for querycraft.
//!
//! The staging layer is what a query form edits: an ordered list of
//! [`StagingGroup`]s, each with one combinator and a list of [`Filter`]s.
//! It is not kept in sync with the assembler. An explicit build step
//! ([`FormStaging::build`]) clears the assembler and feeds it every filter
//! in order, tagged with its group's combinator.
//!
//! Because the assembler only merges with the immediately preceding group,
//! adjacent staging groups that share a combinator come out as a single
//! assembled group, while adjacent groups that differ stay separate.
//!
//! - [`FormStaging`] — the editable groups
//! - [`FilterUpdate`] — a typed edit of one filter field
//! - [`QuerySession`] — staging plus assembler plus the last built outputs
//! - [`options`] — presentation-layer field and operator option lists

mod error;
mod filter;
pub mod options;
mod session;
mod staging;

pub use error::{StagingError, StagingResult};
pub use filter::{Filter, FilterUpdate};
pub use session::QuerySession;
pub use staging::{BuiltQuery, FormStaging, StagingGroup};
