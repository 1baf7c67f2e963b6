//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Keep SQL details behind use-case oriented read APIs.
//! - Map joined rows into `Book` values without reshaping their content.
//!
//! # Invariants
//! - Repositories only read; they never mutate `books` or `authors`.
//! - Driver failures surface unmodified inside `RepoError::Db`.

pub mod book_repo;
