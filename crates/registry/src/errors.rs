//! Error types for the forest registry.

use thiserror::Error;

/// Errors surfaced by registry operations.
///
/// Guard violations carry stable, human-readable reason strings so external
/// callers and tests can match on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller is not the registry owner.
    #[error("The sender is not the owner")]
    Unauthorized,

    /// Registration attempted for a name that is already present.
    #[error("The forest is already registered")]
    DuplicateForest,

    /// Operation referenced a name with no registered record.
    #[error("The forest is not registered")]
    UnknownForest,

    /// Verification read at an index that has not been populated.
    #[error("verification index {index} is out of bounds ({count} recorded)")]
    IndexOutOfBounds { index: u64, count: u64 },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
