//! Error types for the diff crate.

/// Errors that can occur when a host runs a checked comparison.
///
/// The alignment algorithms themselves are total; only the size ceilings
/// and configuration validation can fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The combined input exceeds the configured character ceiling.
    #[error("input too large: {chars} characters exceeds the limit of {limit}")]
    InputTooLarge { chars: usize, limit: usize },

    /// Aligning the inputs would need a table larger than the configured bound.
    #[error("input too large: alignment needs {cells} table cells, limit is {limit}")]
    AlignmentTooLarge { cells: usize, limit: usize },

    /// The configuration cannot be used as given.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
