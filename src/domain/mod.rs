//! Core domain layer. No external I/O dependencies.
//!
//! Entities, input parsing rules and errors live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod parse;

pub use entities::{Course, MARK_MAX, MARK_MIN, Mark, Student};
pub use errors::DomainError;
pub use parse::{parse_count, parse_mark, parse_selection};
