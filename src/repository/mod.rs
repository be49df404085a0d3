//! Repository layer for database operations

pub mod books;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::RepositoryResult,
    models::book::{Book, BookInput},
};

pub use books::PgBookStore;

/// Persistence contract for book records.
///
/// Each operation is a single round trip to the store. Implementations never
/// log; failures are returned as [`crate::error::RepositoryError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a new row and return it with the store-assigned id
    async fn create(&self, book: &BookInput) -> RepositoryResult<Book>;

    /// Every stored record, in store order
    async fn list(&self) -> RepositoryResult<Vec<Book>>;

    /// Fails with `NotFound` when no row matches
    async fn get_by_id(&self, id: i32) -> RepositoryResult<Book>;

    /// Replace all fields of the matching row. Succeeds even when no row matches.
    async fn update(&self, id: i32, book: &BookInput) -> RepositoryResult<()>;

    /// Remove the matching row, if any
    async fn delete(&self, id: i32) -> RepositoryResult<()>;

    /// Round-trip the store to check it is reachable
    async fn ping(&self) -> RepositoryResult<()>;
}
