//! Domain entities. Pure data structures for the core business.
//!
//! No console/IO types here; use cases read the raw fields and build these.

use crate::domain::DomainError;
use std::collections::HashMap;
use std::fmt;

/// Lowest mark a student can receive.
pub const MARK_MIN: f64 = 0.0;
/// Highest mark a student can receive.
pub const MARK_MAX: f64 = 20.0;

/// A registered student. Ids are caller-supplied and not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    /// Free text; the format is not checked.
    pub date_of_birth: String,
}

impl Student {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | DOB: {}",
            self.student_id, self.name, self.date_of_birth
        )
    }
}

/// A mark in the closed range [`MARK_MIN`, `MARK_MAX`].
///
/// Only obtainable through [`Mark::new`], so a stored mark is always in range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Mark(f64);

impl Mark {
    /// Validates the range. NaN and infinities are rejected.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if (MARK_MIN..=MARK_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::MarkOutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A course and the marks recorded for it, keyed by student id.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub course_id: String,
    pub name: String,
    marks: HashMap<String, Mark>,
}

impl Course {
    pub fn new(course_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            name: name.into(),
            marks: HashMap::new(),
        }
    }

    /// Stores the mark, replacing any earlier mark for the same student id.
    pub fn record_mark(&mut self, student_id: impl Into<String>, mark: Mark) {
        self.marks.insert(student_id.into(), mark);
    }

    /// `None` means the student has not been graded for this course.
    pub fn mark_for(&self, student_id: &str) -> Option<Mark> {
        self.marks.get(student_id).copied()
    }

    pub fn has_marks(&self) -> bool {
        !self.marks.is_empty()
    }

    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Label used in numbered course listings.
    pub fn selection_label(&self) -> String {
        format!("{} (ID: {})", self.name, self.course_id)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {} | ID: {}", self.name, self.course_id)
    }
}
