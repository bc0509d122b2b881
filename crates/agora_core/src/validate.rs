//! Shared validation entry point.

use agora_error::ValidationError;
use validator::Validate;

/// Validate a record against its declared schema.
///
/// Collects every field violation: a record either passes whole or fails
/// whole with the complete list. Used for inbound payloads and for rows
/// freshly fetched from storage alike.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing each `(field, message)` pair that
/// failed.
pub fn check<T: Validate>(record: &T) -> Result<(), ValidationError> {
    record.validate().map_err(ValidationError::from)
}
