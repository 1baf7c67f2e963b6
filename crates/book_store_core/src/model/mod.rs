//! Domain values returned by the book store.
//!
//! # Invariants
//! - Values are created fresh per query and never written back.

pub mod book;
