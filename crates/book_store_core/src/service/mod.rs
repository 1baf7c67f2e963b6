//! Use-case services over the book repository.
//!
//! Callers (CLI, embedding apps) go through services so they stay decoupled
//! from storage details.

pub mod book_service;
