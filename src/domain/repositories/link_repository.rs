//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use async_trait::async_trait;
use thiserror::Error;

/// A storage failure unrelated to key uniqueness, such as a lost connection
/// or a timeout. Always unexpected; callers surface it generically.
#[derive(Debug, Error)]
#[error("database error: {0}")]
pub struct StoreError(#[from] pub sqlx::Error);

/// Error returned by [`LinkRepository::insert`].
///
/// Separates the uniqueness conflict from every other failure so that callers
/// can treat a duplicate code as an expected, retryable outcome without ever
/// inspecting engine-specific error codes.
#[derive(Debug, Error)]
pub enum InsertError {
    /// The code is already bound to a URL.
    #[error("short code already exists")]
    DuplicateCode,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Repository interface for the short code to long URL mapping.
///
/// Uniqueness of `code` is enforced by the storage engine's constraint, not
/// by this interface: `insert` attempts the write unconditionally and reports
/// a conflict after the fact. There is deliberately no `exists` operation --
/// a pre-check would race with concurrent inserts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Atomically inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::DuplicateCode`] if the code is already taken,
    /// [`InsertError::Store`] on any other database failure.
    async fn insert(&self, new_link: NewLink) -> Result<Link, InsertError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError>;
}
