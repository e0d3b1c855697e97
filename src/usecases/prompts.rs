//! Validated prompts shared by the use cases.
//!
//! Counts and marks retry in place until valid input arrives; only
//! `DomainError::InputClosed` (or a console failure) gets out of the loop.

use crate::domain::{Course, DomainError, Mark, Student, parse_count, parse_mark};
use crate::ports::ConsolePort;
use tracing::debug;

pub const PAUSE_PROMPT: &str = "Press Enter to continue...";

/// Wait for the user to acknowledge. The entered text is discarded.
pub async fn pause(console: &dyn ConsolePort) -> Result<(), DomainError> {
    console.prompt(PAUSE_PROMPT).await.map(|_| ())
}

/// Prompt until a strictly positive integer is entered.
pub async fn read_positive_count(
    console: &dyn ConsolePort,
    label: &str,
) -> Result<usize, DomainError> {
    loop {
        let line = console.prompt(label).await?;
        match parse_count(&line) {
            Ok(n) => return Ok(n),
            Err(DomainError::NotPositive(n)) => {
                debug!(value = n, "rejected non-positive count");
                console.println("Please enter a positive number.").await?;
            }
            Err(e) => {
                debug!(error = %e, "rejected count");
                console.println("Invalid input").await?;
            }
        }
    }
}

/// Prompt until a number in [0, 20] is entered.
pub async fn read_mark(console: &dyn ConsolePort, label: &str) -> Result<Mark, DomainError> {
    loop {
        let line = console.prompt(label).await?;
        match parse_mark(&line) {
            Ok(mark) => return Ok(mark),
            Err(DomainError::MarkOutOfRange(v)) => {
                debug!(value = v, "rejected out-of-range mark");
                console.println("Mark must be between 0 and 20.").await?;
            }
            Err(e) => {
                debug!(error = %e, "rejected mark");
                console
                    .println("Invalid input. Please enter a number.")
                    .await?;
            }
        }
    }
}

/// Collect the three student fields. Empty answers are kept as-is.
pub async fn read_student(console: &dyn ConsolePort) -> Result<Student, DomainError> {
    let student_id = console.prompt("Enter student id: ").await?;
    let name = console.prompt("Enter student name: ").await?;
    let dob = console.prompt("Enter student dob: ").await?;
    Ok(Student::new(student_id, name, dob))
}

/// Collect the two course fields. Empty answers are kept as-is.
pub async fn read_course(console: &dyn ConsolePort) -> Result<Course, DomainError> {
    let course_id = console.prompt("Enter course id: ").await?;
    let name = console.prompt("Enter course name: ").await?;
    Ok(Course::new(course_id, name))
}
