//! Book Catalog
//!
//! A REST JSON service for book records backed by PostgreSQL: create, list,
//! fetch, update and delete.

use std::sync::Arc;

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn repository::BookStore>,
}
