//! Roster use cases: add students/courses in batches, list them back.

use crate::domain::DomainError;
use crate::ports::{ConsolePort, RepoPort};
use crate::usecases::prompts::{pause, read_course, read_positive_count, read_student};
use std::sync::Arc;
use tracing::info;

/// Roster service. Owns no data; everything goes through `RepoPort`.
pub struct RosterService {
    repo: Arc<dyn RepoPort>,
    console: Arc<dyn ConsolePort>,
}

impl RosterService {
    pub fn new(repo: Arc<dyn RepoPort>, console: Arc<dyn ConsolePort>) -> Self {
        Self { repo, console }
    }

    /// Ask how many students to add, then read and append each one.
    ///
    /// Students appended before input is closed stay in the repository.
    pub async fn input_students(&self) -> Result<(), DomainError> {
        let console = self.console.as_ref();
        let n = read_positive_count(console, "Enter number of students: ").await?;
        for i in 1..=n {
            console.println(&format!("\n--- Student {i} ---")).await?;
            let student = read_student(console).await?;
            let name = student.name.clone();
            self.repo.add_student(student).await?;
            console
                .println(&format!("Student {name} successfully added\n"))
                .await?;
        }
        info!(count = n, "students added");
        pause(console).await
    }

    /// Ask how many courses to add, then read and append each one.
    pub async fn input_courses(&self) -> Result<(), DomainError> {
        let console = self.console.as_ref();
        let n = read_positive_count(console, "Enter number of courses: ").await?;
        for i in 1..=n {
            console.println(&format!("\n--- Course {i} ---")).await?;
            let course = read_course(console).await?;
            let name = course.name.clone();
            self.repo.add_course(course).await?;
            console
                .println(&format!("Course {name} successfully added\n"))
                .await?;
        }
        info!(count = n, "courses added");
        pause(console).await
    }

    pub async fn list_courses(&self) -> Result<(), DomainError> {
        let console = self.console.as_ref();
        let courses = self.repo.courses().await?;
        if courses.is_empty() {
            console.println("No courses available\n").await?;
            return pause(console).await;
        }
        console.println("\nCourse List:\n").await?;
        for course in &courses {
            console.println(&format!("{course}\n")).await?;
        }
        pause(console).await
    }

    pub async fn list_students(&self) -> Result<(), DomainError> {
        let console = self.console.as_ref();
        let students = self.repo.students().await?;
        if students.is_empty() {
            console.println("No students available\n").await?;
            return pause(console).await;
        }
        console.println("\nStudent list:\n").await?;
        for student in &students {
            console.println(&format!("{student}\n")).await?;
        }
        pause(console).await
    }
}
