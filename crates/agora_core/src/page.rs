//! Pagination for top-level thread listings.

use agora_error::ValidationError;

/// Fixed number of top-level threads per page.
pub const THREAD_PAGE_SIZE: i64 = 10;

/// A validated, 1-indexed page number.
///
/// Construction rejects zero and negative pages, so a negative offset can
/// never reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreadPage(i64);

impl ThreadPage {
    /// Validate a raw page number.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `page` is less than 1.
    pub fn new(page: i64) -> Result<Self, ValidationError> {
        if page < 1 {
            return Err(ValidationError::single(
                "page",
                "page number must be 1 or greater",
            ));
        }
        Ok(Self(page))
    }

    /// The 1-indexed page number.
    pub fn number(&self) -> i64 {
        self.0
    }

    /// Row offset for this page.
    pub fn offset(&self) -> i64 {
        (self.0 - 1) * THREAD_PAGE_SIZE
    }

    /// Row limit for this page.
    pub fn limit(&self) -> i64 {
        THREAD_PAGE_SIZE
    }
}
