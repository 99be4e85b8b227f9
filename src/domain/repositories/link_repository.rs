//! Repository trait for link data access.

use crate::domain::entities::{Link, LinkInput};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link table.
///
/// Every method maps to exactly one SQL statement. There is no locking or
/// versioning: concurrent writes to the same id are last-write-wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates the backing table if it does not exist yet.
    ///
    /// Safe to call any number of times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn ensure_schema(&self) -> Result<(), AppError>;

    /// Round-trips a trivial statement to verify the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;

    /// Returns every link, newest (highest id) first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Inserts a link and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, input: LinkInput) -> Result<Link, AppError>;

    /// Finds a link by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Replaces title and url of the link with the given id.
    ///
    /// Returns the number of rows affected; `0` when no link has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, input: LinkInput) -> Result<u64, AppError>;

    /// Hard-deletes the link with the given id.
    ///
    /// Returns the number of rows affected; `0` when no link has that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
