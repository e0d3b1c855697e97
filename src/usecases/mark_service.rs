//! Mark use cases: pick a course, record marks for every student, show them.
//!
//! - Course selection is one-shot: a bad answer is reported and aborts the caller
//! - Marks are stored one student at a time, so an early end of input keeps
//!   what was already entered

use crate::domain::{Course, DomainError, parse_selection};
use crate::ports::{ConsolePort, RepoPort};
use crate::usecases::prompts::{pause, read_mark};
use std::sync::Arc;
use tracing::{debug, info};

/// Mark service. Reads and writes marks through `RepoPort`.
pub struct MarkService {
    repo: Arc<dyn RepoPort>,
    console: Arc<dyn ConsolePort>,
}

impl MarkService {
    pub fn new(repo: Arc<dyn RepoPort>, console: Arc<dyn ConsolePort>) -> Self {
        Self { repo, console }
    }

    /// Print the numbered course list and read one choice.
    ///
    /// Returns the 0-based course position, or `None` after reporting an
    /// invalid answer. Callers must check that at least one course exists.
    pub async fn select_course(&self) -> Result<Option<usize>, DomainError> {
        let console = self.console.as_ref();
        let courses = self.repo.courses().await?;

        console.println("Available courses:\n").await?;
        for (i, course) in courses.iter().enumerate() {
            console
                .println(&format!("{}. {}", i + 1, course.selection_label()))
                .await?;
        }

        let answer = console.prompt("\nSelect course: ").await?;
        match parse_selection(&answer, courses.len()) {
            Ok(index) => Ok(Some(index)),
            Err(DomainError::CourseNotFound(choice)) => {
                debug!(choice, available = courses.len(), "course choice out of range");
                console.println("Invalid choice\n").await?;
                pause(console).await?;
                Ok(None)
            }
            Err(e) => {
                debug!(error = %e, "course choice not a number");
                console.println("Invalid input\n").await?;
                pause(console).await?;
                Ok(None)
            }
        }
    }

    /// Record a mark for every student, in repository order, for one course.
    pub async fn input_marks(&self) -> Result<(), DomainError> {
        let console = self.console.as_ref();
        if self.repo.course_count().await? == 0 {
            console
                .println("No course available, please add courses first\n")
                .await?;
            return pause(console).await;
        }
        if self.repo.student_count().await? == 0 {
            console
                .println("No student available, please add student first\n")
                .await?;
            return pause(console).await;
        }

        let Some(index) = self.select_course().await? else {
            return Ok(());
        };
        let courses = self.repo.courses().await?;
        let course = courses
            .get(index)
            .ok_or(DomainError::CourseNotFound(index))?;

        console
            .println(&format!("\nEnter mark for this course: {}\n", course.name))
            .await?;
        let students = self.repo.students().await?;
        for student in &students {
            let label = format!(
                "Enter mark for {} (ID: {}): ",
                student.name, student.student_id
            );
            let mark = read_mark(console, &label).await?;
            self.repo
                .record_mark(index, &student.student_id, mark)
                .await?;
        }

        let graded = self
            .repo
            .courses()
            .await?
            .get(index)
            .map_or(0, Course::mark_count);
        info!(
            course_id = %course.course_id,
            students = students.len(),
            graded,
            "marks saved"
        );
        console
            .println(&format!("Mark for {} successfully saved\n", course.name))
            .await?;
        pause(console).await
    }

    /// Print every student's mark for one course, `Null` where none was entered.
    pub async fn show_marks(&self) -> Result<(), DomainError> {
        let console = self.console.as_ref();
        if self.repo.course_count().await? == 0 {
            console.println("No courses available\n").await?;
            return pause(console).await;
        }

        let Some(index) = self.select_course().await? else {
            return Ok(());
        };
        let courses = self.repo.courses().await?;
        let course = courses
            .get(index)
            .ok_or(DomainError::CourseNotFound(index))?;

        console
            .println(&format!(
                "\nMark for course: {} (ID: {})\n",
                course.name, course.course_id
            ))
            .await?;

        if !course.has_marks() {
            console
                .println("No marks available for this course\n")
                .await?;
        } else {
            let students = self.repo.students().await?;
            for (i, student) in students.iter().enumerate() {
                let mark = course
                    .mark_for(&student.student_id)
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Null".to_string());
                console
                    .println(&format!(
                        "{}. {} | {} | {}",
                        i + 1,
                        student.name,
                        student.student_id,
                        mark
                    ))
                    .await?;
            }
        }
        pause(console).await
    }
}
