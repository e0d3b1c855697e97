//! Scripted console for tests and demos.
//!
//! Replays a fixed list of input lines and captures everything written.
//! Once the script runs out, reads fail with `DomainError::InputClosed`.

use crate::domain::DomainError;
use crate::ports::ConsolePort;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Marker appended to the captured output for every screen clear.
pub const CLEAR_MARKER: &str = "<clear>";

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: Mutex<VecDeque<String>>,
    output: Mutex<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
            output: Mutex::new(String::new()),
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        self.output
            .lock()
            .map(|o| o.clone())
            .unwrap_or_default()
    }

    /// Number of scripted lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.lock().map(|i| i.len()).unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl ConsolePort for ScriptedConsole {
    async fn read_line(&self) -> Result<String, DomainError> {
        let line = {
            let mut input = self
                .input
                .lock()
                .map_err(|e| DomainError::Console(e.to_string()))?;
            input.pop_front().ok_or(DomainError::InputClosed)?
        };
        // Echo so the captured transcript reads like a terminal session.
        self.write(&format!("{line}\n")).await?;
        Ok(line)
    }

    async fn write(&self, text: &str) -> Result<(), DomainError> {
        self.output
            .lock()
            .map_err(|e| DomainError::Console(e.to_string()))?
            .push_str(text);
        Ok(())
    }

    async fn clear_screen(&self) -> Result<(), DomainError> {
        self.write(CLEAR_MARKER).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_console_replays_and_captures() {
        let console = ScriptedConsole::new(["first", "second"]);

        let answer = console.prompt("Name: ").await.unwrap();
        assert_eq!(answer, "first");
        assert_eq!(console.remaining(), 1);

        console.println("hello").await.unwrap();
        console.clear_screen().await.unwrap();
        assert_eq!(console.output(), "Name: first\nhello\n<clear>");
    }

    #[tokio::test]
    async fn test_scripted_console_closed_after_script() {
        let console = ScriptedConsole::new(Vec::<String>::new());
        assert_eq!(console.read_line().await, Err(DomainError::InputClosed));
    }
}
