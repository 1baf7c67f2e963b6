//! Book repository contract and SQLite implementations.
//!
//! # Invariants
//! - `all` returns books in ascending `books.id` order.
//! - An empty catalog is an empty vector, not an error.
//! - Connections opened by the repository are released on every exit path.

use crate::config::StoreConfig;
use crate::db::{open_existing_db, DbError};
use crate::model::book::Book;
use log::{debug, error};
use rusqlite::{Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

const BOOK_SELECT_SQL: &str = "SELECT
    books.id AS id,
    books.title AS title,
    authors.name AS author_name
FROM books
JOIN authors ON authors.id = books.author_id
ORDER BY books.id ASC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book queries.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Read access to the book catalog.
pub trait BookRepository {
    /// Returns every book with its author name, ordered by id.
    fn all(&self) -> RepoResult<Vec<Book>>;
}

/// Book repository over a caller-owned connection.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn all(&self) -> RepoResult<Vec<Book>> {
        let started_at = Instant::now();
        match query_all_books(self.conn) {
            Ok(books) => {
                debug!(
                    "event=books_all module=repo status=ok count={} duration_ms={}",
                    books.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(books)
            }
            Err(err) => {
                error!(
                    "event=books_all module=repo status=error duration_ms={} error_code=books_query_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Book repository that opens the configured store for each call.
///
/// The connection lives only for the duration of one `all` call. The store
/// must already exist; a missing file is an error, never an empty catalog.
#[derive(Debug, Clone)]
pub struct FileBookRepository {
    config: StoreConfig,
}

impl FileBookRepository {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl BookRepository for FileBookRepository {
    fn all(&self) -> RepoResult<Vec<Book>> {
        let conn = open_existing_db(self.config.db_path())?;
        SqliteBookRepository::new(&conn).all()
    }
}

fn query_all_books(conn: &Connection) -> RepoResult<Vec<Book>> {
    let mut stmt = conn.prepare(BOOK_SELECT_SQL)?;
    let mut rows = stmt.query([])?;
    let mut books = Vec::new();

    while let Some(row) = rows.next()? {
        books.push(parse_book_row(row)?);
    }

    Ok(books)
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let id: i64 = row.get("id")?;
    Ok(Book::new(
        id.to_string(),
        row.get::<_, String>("title")?,
        row.get::<_, String>("author_name")?,
    ))
}
