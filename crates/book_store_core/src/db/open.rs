//! Connection bootstrap for the book store.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`, so every book row points at
//!   an existing author.
//! - Returned connections have migrations fully applied.
//! - `open_existing_db` never creates a file.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the book store file, creating it when missing, and applies all
/// pending migrations.
///
/// Used by seeding and setup paths that are allowed to write.
///
/// # Side effects
/// - Emits `db_open` events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_with("file", || {
        Connection::open(path).map_err(|source| unavailable(path, source))
    })
}

/// Opens an already existing book store.
///
/// A missing file is reported as `DbError::StoreUnavailable` instead of being
/// created, so a mistyped path never looks like an empty catalog.
pub fn open_existing_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    open_with("existing", || {
        Connection::open_with_flags(path, flags).map_err(|source| unavailable(path, source))
    })
}

/// Opens an in-memory book store and applies all pending migrations.
///
/// Mostly useful for tests; the data disappears with the connection.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with("memory", || Ok(Connection::open_in_memory()?))
}

fn unavailable(path: &Path, source: rusqlite::Error) -> DbError {
    DbError::StoreUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> DbResult<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let result = connect().and_then(|mut conn| {
        bootstrap_connection(&mut conn)?;
        Ok(conn)
    });

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error_code={} error={err}",
            started_at.elapsed().as_millis(),
            err.code()
        ),
    }
    result
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)?;
    Ok(())
}
