//! Implements RepoPort in memory.
//!
//! Everything recorded during a session lives here and is dropped on exit.

use crate::domain::{Course, DomainError, Mark, Student};
use crate::ports::RepoPort;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct RepoData {
    students: Vec<Student>,
    courses: Vec<Course>,
}

/// In-memory record store. Construct one per session (or per test).
#[derive(Debug, Default)]
pub struct MemoryRepo {
    data: RwLock<RepoData>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RepoPort for MemoryRepo {
    async fn add_student(&self, student: Student) -> Result<(), DomainError> {
        let mut data = self.data.write().await;
        info!(
            student_id = %student.student_id,
            position = data.students.len() + 1,
            "student added"
        );
        data.students.push(student);
        Ok(())
    }

    async fn add_course(&self, course: Course) -> Result<(), DomainError> {
        let mut data = self.data.write().await;
        info!(
            course_id = %course.course_id,
            position = data.courses.len() + 1,
            "course added"
        );
        data.courses.push(course);
        Ok(())
    }

    async fn students(&self) -> Result<Vec<Student>, DomainError> {
        Ok(self.data.read().await.students.clone())
    }

    async fn courses(&self) -> Result<Vec<Course>, DomainError> {
        Ok(self.data.read().await.courses.clone())
    }

    async fn student_count(&self) -> Result<usize, DomainError> {
        Ok(self.data.read().await.students.len())
    }

    async fn course_count(&self) -> Result<usize, DomainError> {
        Ok(self.data.read().await.courses.len())
    }

    async fn record_mark(
        &self,
        course_index: usize,
        student_id: &str,
        mark: Mark,
    ) -> Result<(), DomainError> {
        let mut data = self.data.write().await;
        let course = data
            .courses
            .get_mut(course_index)
            .ok_or(DomainError::CourseNotFound(course_index))?;
        course.record_mark(student_id, mark);
        debug!(
            course_id = %course.course_id,
            student_id,
            mark = mark.value(),
            "mark recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_students_keep_insertion_order_and_duplicates() {
        let repo = MemoryRepo::new();
        for (id, name) in [("S2", "Bob"), ("S1", "Ada"), ("S2", "Bob again")] {
            repo.add_student(Student::new(id, name, "")).await.unwrap();
        }

        let students = repo.students().await.unwrap();
        assert_eq!(repo.student_count().await.unwrap(), 3);
        let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Ada", "Bob again"]);
    }

    #[tokio::test]
    async fn test_record_mark_overwrites_previous_value() {
        let repo = MemoryRepo::new();
        repo.add_course(Course::new("C1", "Algebra")).await.unwrap();

        repo.record_mark(0, "S1", Mark::new(12.0).unwrap())
            .await
            .unwrap();
        repo.record_mark(0, "S1", Mark::new(4.5).unwrap())
            .await
            .unwrap();

        let courses = repo.courses().await.unwrap();
        assert_eq!(courses[0].mark_count(), 1);
        assert_eq!(courses[0].mark_for("S1"), Some(Mark::new(4.5).unwrap()));
    }

    #[tokio::test]
    async fn test_record_mark_unknown_course() {
        let repo = MemoryRepo::new();
        let err = repo
            .record_mark(0, "S1", Mark::new(1.0).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::CourseNotFound(0));
    }

    #[tokio::test]
    async fn test_same_course_id_is_addressed_by_position() {
        let repo = MemoryRepo::new();
        repo.add_course(Course::new("C1", "First")).await.unwrap();
        repo.add_course(Course::new("C1", "Second")).await.unwrap();

        repo.record_mark(1, "S1", Mark::new(9.0).unwrap())
            .await
            .unwrap();

        let courses = repo.courses().await.unwrap();
        assert!(!courses[0].has_marks());
        assert!(courses[1].has_marks());
    }
}
