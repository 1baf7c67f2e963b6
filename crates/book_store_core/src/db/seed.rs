//! Catalog seeding.
//!
//! Seed scripts own the full contents of `books` and `authors`: they are
//! expected to clear both tables before inserting rows.

use super::DbResult;
use log::info;
use rusqlite::Connection;

/// Canonical five-book catalog bundled with the crate.
pub const DEFAULT_SEED_SQL: &str = include_str!("seeds.sql");

/// Resets the store to the bundled catalog.
pub fn reset_book_store(conn: &Connection) -> DbResult<()> {
    apply_seed_sql(conn, DEFAULT_SEED_SQL)
}

/// Runs a seed script atomically.
///
/// The script is wrapped in a transaction, so it must not carry its own
/// `BEGIN`/`COMMIT`: SQLite rejects the nested `BEGIN` and the script fails
/// before any statement runs. A failing statement rolls the whole script
/// back, leaving the previous catalog untouched.
pub fn apply_seed_sql(conn: &Connection, sql: &str) -> DbResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.commit()?;

    let books: i64 = conn.query_row("SELECT COUNT(*) FROM books;", [], |row| row.get(0))?;
    info!("event=db_seed module=db status=ok books={books}");
    Ok(())
}
