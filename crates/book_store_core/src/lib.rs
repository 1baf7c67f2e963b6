//! Core read access to the book store.
//!
//! Books are read from SQLite together with their author's name and handed
//! out as plain `Book` values.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::StoreConfig;
pub use db::{DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::Book;
pub use repo::book_repo::{
    BookRepository, FileBookRepository, RepoError, RepoResult, SqliteBookRepository,
};
pub use service::book_service::BookService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
