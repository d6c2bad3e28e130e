//! Repository trait for short link data access.

use crate::domain::entities::{Link, LinkStats, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The store is the authoritative guard for code uniqueness: callers may check
/// [`LinkRepository::code_exists`] first, but [`LinkRepository::create`] must
/// still reject a duplicate that slipped in between the check and the insert.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with a zero click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Returns [`AppError::Validation`] if a storage constraint rejects the data.
    /// Returns [`AppError::Database`] on other database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns whether a link with this code is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Lists links ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Link>, AppError>;

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Hard-deletes a link and returns the removed record.
    ///
    /// Returns `Ok(None)` if no link had this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn delete(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments `click_count` and sets `last_clicked_at` to now.
    ///
    /// Returns the updated record, or `Ok(None)` if the link no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn increment_click_count(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Computes totals across all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn stats(&self) -> Result<LinkStats, AppError>;
}
