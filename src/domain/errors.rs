//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// End of input reached while waiting for a line. Aborts the current operation.
    #[error("input closed")]
    InputClosed,

    #[error("Console error: {0}")]
    Console(String),

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("expected a positive number, got {0}")]
    NotPositive(i64),

    #[error("mark {0} is outside [0, 20]")]
    MarkOutOfRange(f64),

    #[error("no course at position {0}")]
    CourseNotFound(usize),
}
