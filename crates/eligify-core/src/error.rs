//! Error types for benefit data parsing

use thiserror::Error;

/// A coverage string could not be read as a percentage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverageParseError {
    /// Empty or whitespace-only input
    #[error("coverage value is empty")]
    Empty,

    /// Not a number once the `%` suffix is removed
    #[error("invalid coverage percentage: {0:?}")]
    Invalid(String),
}

/// Result type for benefit parsing
pub type Result<T> = std::result::Result<T, CoverageParseError>;
