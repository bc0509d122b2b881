//! Error types for the agora discussion data layer.
//!
//! Each failure domain gets its own error struct with a `Kind` enum and
//! source-location capture. [`AgoraError`] unifies them for callers that
//! cross domain boundaries, such as the data-access operations.

mod database;
mod validation;

pub use database::{DatabaseError, DatabaseErrorKind};
pub use validation::{FieldViolation, ValidationError, ValidationErrorKind};

/// Unified error spanning the workspace's failure domains.
#[derive(Debug, Clone)]
pub enum AgoraError {
    /// A record failed its declared validation schema
    Validation(ValidationError),
    /// Storage access failed
    Database(DatabaseError),
}

impl std::fmt::Display for AgoraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgoraError::Validation(err) => write!(f, "{}", err),
            AgoraError::Database(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AgoraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgoraError::Validation(err) => Some(err),
            AgoraError::Database(err) => Some(err),
        }
    }
}

impl From<ValidationError> for AgoraError {
    fn from(err: ValidationError) -> Self {
        AgoraError::Validation(err)
    }
}

impl From<DatabaseError> for AgoraError {
    fn from(err: DatabaseError) -> Self {
        AgoraError::Database(err)
    }
}

/// Result alias for operations that can fail in any domain.
pub type AgoraResult<T> = Result<T, AgoraError>;
