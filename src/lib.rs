//! Bookshelf Server
//!
//! A Rust REST API exposing CRUD operations over a book catalog stored in
//! PostgreSQL, with interchangeable raw-SQL and ORM persistence backends.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use store::BookStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn BookStore>,
}
