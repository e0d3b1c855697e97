//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Course, DomainError, Mark, Student};

/// Record store for one session. Keeps students and courses in insertion order.
///
/// Courses are addressed by 0-based position because course ids are not unique.
#[async_trait::async_trait]
pub trait RepoPort: Send + Sync {
    /// Append a student. Duplicate ids are accepted.
    async fn add_student(&self, student: Student) -> Result<(), DomainError>;

    /// Append a course with an empty mark table.
    async fn add_course(&self, course: Course) -> Result<(), DomainError>;

    /// Snapshot of all students, insertion order.
    async fn students(&self) -> Result<Vec<Student>, DomainError>;

    /// Snapshot of all courses (with their marks), insertion order.
    async fn courses(&self) -> Result<Vec<Course>, DomainError>;

    async fn student_count(&self) -> Result<usize, DomainError>;

    async fn course_count(&self) -> Result<usize, DomainError>;

    /// Store or overwrite the mark of `student_id` in the course at `course_index`.
    ///
    /// # Errors
    /// `DomainError::CourseNotFound` if no course exists at that position.
    async fn record_mark(
        &self,
        course_index: usize,
        student_id: &str,
        mark: Mark,
    ) -> Result<(), DomainError>;
}

/// Line-oriented terminal. All prompts, listings and messages go through here.
#[async_trait::async_trait]
pub trait ConsolePort: Send + Sync {
    /// Read one line without its trailing newline.
    ///
    /// # Errors
    /// `DomainError::InputClosed` at end of input.
    async fn read_line(&self) -> Result<String, DomainError>;

    /// Write text as-is and flush.
    async fn write(&self, text: &str) -> Result<(), DomainError>;

    /// Clear the display and move the cursor home.
    async fn clear_screen(&self) -> Result<(), DomainError>;

    /// Write `line` followed by a newline.
    async fn println(&self, line: &str) -> Result<(), DomainError> {
        self.write(&format!("{line}\n")).await
    }

    /// Write `label` (no newline) and read the answer.
    async fn prompt(&self, label: &str) -> Result<String, DomainError> {
        self.write(label).await?;
        self.read_line().await
    }
}
