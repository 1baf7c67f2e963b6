//! Store location resolution.
//!
//! Resolution order: explicit path, then `BOOK_STORE_DB_PATH`, then
//! `<temp_dir>/book_store.sqlite3`.

use std::path::{Path, PathBuf};

pub const DB_PATH_ENV: &str = "BOOK_STORE_DB_PATH";
pub const DEFAULT_DB_FILE_NAME: &str = "book_store.sqlite3";

/// Where the book store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Reads `BOOK_STORE_DB_PATH`, falling back to the temp-dir default when
    /// the variable is unset or blank.
    pub fn from_env() -> Self {
        Self::new(resolve_db_path(std::env::var(DB_PATH_ENV).ok()))
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

fn resolve_db_path(raw: Option<String>) -> PathBuf {
    match raw.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => PathBuf::from(trimmed),
        _ => std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
    }
}
