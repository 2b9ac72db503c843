//! Error types for terrain_nav

use std::fmt;

/// Error raised on precondition violation.
///
/// These are programmer-error-class failures: they propagate to the caller
/// and are never retried. Either all preconditions hold and a definite
/// result is produced, or the operation fails before any computation runs.
#[derive(Debug)]
pub enum DomainError {
    /// A dimension, limit, or heading is outside its allowed range
    InvalidParameter(String),
    /// A pose or cell index falls outside the terrain grid
    OutOfBounds(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            DomainError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

/// Result type alias for terrain_nav operations
pub type DomainResult<T> = Result<T, DomainError>;
