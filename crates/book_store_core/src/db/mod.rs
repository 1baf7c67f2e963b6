//! SQLite storage bootstrap for the book store.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing the book repository.
//! - Keep the `authors`/`books` schema current before any read happens.
//! - Provide the seed entry point used to reset the canonical catalog.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Repositories never see a connection whose migrations have not run.
//! - Read paths never create a store file; only `open_db` does.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;
pub mod seed;

pub use open::{open_db, open_db_in_memory, open_existing_db};

pub type DbResult<T> = Result<T, DbError>;

/// Failure raised while opening, migrating or seeding the store.
#[derive(Debug)]
pub enum DbError {
    /// The store file at `path` is missing or could not be opened.
    StoreUnavailable {
        path: PathBuf,
        source: rusqlite::Error,
    },
    /// The store was written by a newer schema than this binary knows.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Any other driver failure, passed through as reported.
    Sqlite(rusqlite::Error),
}

impl DbError {
    /// Stable code used in `error_code=` log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StoreUnavailable { .. } => "store_unavailable",
            Self::UnsupportedSchemaVersion { .. } => "schema_too_new",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoreUnavailable { path, source } => {
                write!(f, "book store `{}` is unavailable: {source}", path.display())
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "book store schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StoreUnavailable { source, .. } => Some(source),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
