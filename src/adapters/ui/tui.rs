//! Implements InputPort. Text menu loop over a ConsolePort.
//!
//! Each iteration clears the screen, prints the menu, reads one choice and
//! dispatches it. The optional header is printed on the first iteration only.
//! Operations handle their own validation errors; only end of input or a
//! console failure leaves the loop early.

use crate::domain::DomainError;
use crate::ports::{ConsolePort, InputPort};
use crate::usecases::prompts::pause;
use crate::usecases::{MarkService, RosterService};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

const RULE: &str = "==================================================";

/// Menu entries, keyed by the text the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    InputStudents,
    InputCourses,
    InputMarks,
    ListCourses,
    ListStudents,
    ShowMarks,
    Exit,
}

impl MenuChoice {
    /// Surrounding whitespace is ignored; anything unknown is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::InputStudents),
            "2" => Some(Self::InputCourses),
            "3" => Some(Self::InputMarks),
            "4" => Some(Self::ListCourses),
            "5" => Some(Self::ListStudents),
            "6" => Some(Self::ShowMarks),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    Running,
    Terminated,
}

/// TUI adapter. Owns the menu; delegates every entry to a service.
pub struct TuiInputPort {
    console: Arc<dyn ConsolePort>,
    roster: Arc<RosterService>,
    marks: Arc<MarkService>,
    clear_screen: bool,
    /// Printed once, under the first screen clear (e.g. the welcome banner).
    header: Option<String>,
}

impl TuiInputPort {
    pub fn new(
        console: Arc<dyn ConsolePort>,
        roster: Arc<RosterService>,
        marks: Arc<MarkService>,
        clear_screen: bool,
    ) -> Self {
        Self {
            console,
            roster,
            marks,
            clear_screen,
            header: None,
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    async fn show_menu(&self) -> Result<(), DomainError> {
        let menu = [
            "",
            RULE,
            "STUDENT MARK MANAGEMENT SYSTEM",
            RULE,
            "1. Input students",
            "2. Input courses",
            "3. Input marks for a course",
            "4. List all courses",
            "5. List all students",
            "6. Show student marks for a course",
            "0. Exit",
            RULE,
        ];
        self.console.println(&menu.join("\n")).await
    }

    /// One pass of the loop: menu, choice, dispatch.
    async fn step(&self, first: bool) -> Result<MenuState, DomainError> {
        if self.clear_screen {
            self.console.clear_screen().await?;
        }
        if let Some(header) = self.header.as_ref().filter(|_| first) {
            self.console.println(header).await?;
        }
        self.show_menu().await?;
        let input = self.console.prompt("Enter your choice: ").await?;

        match MenuChoice::parse(&input) {
            Some(MenuChoice::InputStudents) => self.roster.input_students().await?,
            Some(MenuChoice::InputCourses) => self.roster.input_courses().await?,
            Some(MenuChoice::InputMarks) => self.marks.input_marks().await?,
            Some(MenuChoice::ListCourses) => self.roster.list_courses().await?,
            Some(MenuChoice::ListStudents) => self.roster.list_students().await?,
            Some(MenuChoice::ShowMarks) => self.marks.show_marks().await?,
            Some(MenuChoice::Exit) => {
                self.console.println("Goodbye!\n").await?;
                return Ok(MenuState::Terminated);
            }
            None => {
                warn!(choice = %input.trim(), "invalid menu choice");
                self.console
                    .println("Invalid choice. Please try again.\n")
                    .await?;
                pause(self.console.as_ref()).await?;
            }
        }
        Ok(MenuState::Running)
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut state = MenuState::Running;
        let mut first = true;
        while state == MenuState::Running {
            let result = self.step(first).await;
            first = false;
            state = match result {
                Ok(next) => next,
                Err(DomainError::InputClosed) => {
                    info!("input closed, leaving menu");
                    MenuState::Terminated
                }
                Err(e) => return Err(e),
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::memory_repo::MemoryRepo;
    use crate::adapters::ui::scripted::{CLEAR_MARKER, ScriptedConsole};
    use crate::ports::RepoPort;

    fn menu(lines: &[&str]) -> (TuiInputPort, Arc<MemoryRepo>, Arc<ScriptedConsole>) {
        let repo = Arc::new(MemoryRepo::new());
        let console = Arc::new(ScriptedConsole::new(lines.iter().copied()));
        let roster = Arc::new(RosterService::new(repo.clone(), console.clone()));
        let marks = Arc::new(MarkService::new(repo.clone(), console.clone()));
        let tui = TuiInputPort::new(console.clone(), roster, marks, true);
        (tui, repo, console)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::InputStudents));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::ShowMarks));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("01"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[tokio::test]
    async fn test_exit_prints_farewell() {
        let (tui, _repo, console) = menu(&["0"]);
        tui.run().await.unwrap();

        let out = console.output();
        assert!(out.starts_with(CLEAR_MARKER));
        assert!(out.contains("STUDENT MARK MANAGEMENT SYSTEM"));
        assert!(out.ends_with("Goodbye!\n\n"));
    }

    #[tokio::test]
    async fn test_invalid_choice_redisplays_menu() {
        let (tui, repo, console) = menu(&["9", "", "0"]);
        tui.run().await.unwrap();

        let out = console.output();
        assert!(out.contains("Invalid choice. Please try again."));
        assert_eq!(out.matches("STUDENT MARK MANAGEMENT SYSTEM").count(), 2);
        assert_eq!(out.matches(CLEAR_MARKER).count(), 2);
        assert_eq!(repo.student_count().await.unwrap(), 0);
        assert_eq!(repo.course_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_input_closed_ends_loop() {
        let (tui, _repo, console) = menu(&["5", ""]);
        tui.run().await.unwrap();

        let out = console.output();
        assert!(out.contains("No students available"));
        assert!(!out.contains("Goodbye!"));
    }

    #[tokio::test]
    async fn test_full_session() {
        let (tui, repo, console) = menu(&[
            "1", "2", "S1", "Ada", "2001-01-01", "S2", "Bob", "2002-02-02", "",
            "2", "1", "C1", "Algebra", "",
            "3", "1", "12", "7", "",
            "6", "1", "",
            "0",
        ]);
        tui.run().await.unwrap();

        assert_eq!(repo.student_count().await.unwrap(), 2);
        let out = console.output();
        let first = out.find("1. Ada | S1 | 12.00").unwrap();
        let second = out.find("2. Bob | S2 | 7.00").unwrap();
        assert!(first < second);
        assert!(out.ends_with("Goodbye!\n\n"));
        assert_eq!(console.remaining(), 0);
    }

    #[tokio::test]
    async fn test_list_courses_empty_from_menu() {
        let (tui, _repo, console) = menu(&["4", "", "0"]);
        tui.run().await.unwrap();

        let out = console.output();
        assert!(out.contains("No courses available"));
        assert!(!out.contains("Course List"));
    }

    #[tokio::test]
    async fn test_clear_screen_disabled() {
        let repo = Arc::new(MemoryRepo::new());
        let console = Arc::new(ScriptedConsole::new(["0"]));
        let roster = Arc::new(RosterService::new(repo.clone(), console.clone()));
        let marks = Arc::new(MarkService::new(repo, console.clone()));
        let tui = TuiInputPort::new(console.clone(), roster, marks, false);

        tui.run().await.unwrap();

        assert!(!console.output().contains(CLEAR_MARKER));
    }

    #[tokio::test]
    async fn test_header_printed_once_under_first_clear() {
        let repo = Arc::new(MemoryRepo::new());
        let console = Arc::new(ScriptedConsole::new(["9", "", "9", "", "0"]));
        let roster = Arc::new(RosterService::new(repo.clone(), console.clone()));
        let marks = Arc::new(MarkService::new(repo, console.clone()));
        let tui = TuiInputPort::new(console.clone(), roster, marks, true).with_header("BANNER");

        tui.run().await.unwrap();

        let out = console.output();
        assert_eq!(out.matches("BANNER").count(), 1);
        assert!(out.starts_with("<clear>BANNER\n\n====="));
        assert_eq!(out.matches(CLEAR_MARKER).count(), 3);
    }

    #[tokio::test]
    async fn test_welcome_banner_shown_once() {
        let repo = Arc::new(MemoryRepo::new());
        let console = Arc::new(ScriptedConsole::new(["9", "", "9", "", "0"]));
        let roster = Arc::new(RosterService::new(repo.clone(), console.clone()));
        let marks = Arc::new(MarkService::new(repo, console.clone()));
        let tui = TuiInputPort::new(console.clone(), roster, marks, true)
            .with_header(crate::adapters::ui::banner::render_welcome());

        tui.run().await.unwrap();

        let version_line = format!("v{}", env!("CARGO_PKG_VERSION"));
        assert_eq!(console.output().matches(&version_line).count(), 1);
    }
}
