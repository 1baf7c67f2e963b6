//! Book value object.
//!
//! # Invariants
//! - `id` is the decimal form of the `books` primary key and is unique per row.
//! - Field text is carried exactly as stored: no trimming or case folding.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A book row joined with the name of its author.
///
/// Fields are read-only once constructed; equality compares content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    id: String,
    title: String,
    author_name: String,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author_name: author_name.into(),
        }
    }

    /// Stable identifier, e.g. `"1"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Denormalized from `authors.name`.
    pub fn author_name(&self) -> &str {
        &self.author_name
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.id, self.title, self.author_name)
    }
}
