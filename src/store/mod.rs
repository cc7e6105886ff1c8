//! Persistence layer for the book catalog.
//!
//! Two interchangeable backends implement [`BookStore`]: [`SqlBookStore`]
//! executes literal parameterized SQL through sqlx, [`OrmBookStore`] goes
//! through Diesel. The backend is chosen once at startup from configuration.

pub mod orm;
pub mod pool;
pub mod schema;
pub mod sql;

pub use orm::OrmBookStore;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use sql::SqlBookStore;

use crate::{
    error::AppResult,
    models::{Book, NewBook},
};

/// Storage operations for the book resource.
///
/// Every operation is a single atomic statement against the store; write
/// operations classify "no matching row" as a not-found error rather than
/// an infrastructure failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a book and return the created record with its assigned id.
    async fn create(&self, book: &NewBook) -> AppResult<Book>;

    /// All records, ordered by id. An empty store yields an empty vector.
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Look up one record by id.
    async fn get(&self, id: i32) -> AppResult<Book>;

    /// Overwrite title/author/description of the matching record.
    async fn update(&self, id: i32, book: &NewBook) -> AppResult<Book>;

    /// Remove the matching record.
    async fn delete(&self, id: i32) -> AppResult<()>;
}
