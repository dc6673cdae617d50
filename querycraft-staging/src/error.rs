//! Error types for staging edits.

use thiserror::Error;

/// Errors from index-based staging edits and staging documents.
#[derive(Debug, Error)]
pub enum StagingError {
    /// Group index past the end of the staging list.
    #[error("group {index} out of range ({len} groups)")]
    GroupOutOfRange { index: usize, len: usize },

    /// Filter index past the end of its group.
    #[error("filter {index} out of range in group {group} ({len} filters)")]
    FilterOutOfRange { group: usize, index: usize, len: usize },

    /// A staging document must hold at least one group.
    #[error("staging has no groups")]
    NoGroups,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for staging operations.
pub type StagingResult<T> = Result<T, StagingError>;
