//! Book catalog use-case service.
//!
//! # Invariants
//! - Errors from the repository are returned unchanged.
//! - The service holds no cached results between calls.

use crate::model::book::Book;
use crate::repo::book_repo::{BookRepository, RepoResult};

/// Use-case wrapper around a `BookRepository`.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists the whole catalog in id order.
    pub fn all_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.all()
    }
}
