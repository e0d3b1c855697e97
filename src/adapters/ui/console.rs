//! Implements ConsolePort over the process stdin/stdout.
//!
//! Screen clearing uses crossterm's ANSI commands, written through the same
//! stdout handle as every other line so output ordering is preserved.

use crate::domain::DomainError;
use crate::ports::ConsolePort;
use crossterm::Command;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;

/// Terminal console. One per process.
pub struct StdConsole {
    reader: Mutex<BufReader<Stdin>>,
    writer: Mutex<Stdout>,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            reader: Mutex::new(BufReader::new(tokio::io::stdin())),
            writer: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn console_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::Console(e.to_string())
}

#[async_trait::async_trait]
impl ConsolePort for StdConsole {
    async fn read_line(&self) -> Result<String, DomainError> {
        let mut buf = String::new();
        let n = self
            .reader
            .lock()
            .await
            .read_line(&mut buf)
            .await
            .map_err(console_err)?;
        if n == 0 {
            return Err(DomainError::InputClosed);
        }
        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    async fn write(&self, text: &str) -> Result<(), DomainError> {
        let mut out = self.writer.lock().await;
        out.write_all(text.as_bytes()).await.map_err(console_err)?;
        out.flush().await.map_err(console_err)
    }

    async fn clear_screen(&self) -> Result<(), DomainError> {
        let mut seq = String::new();
        Clear(ClearType::All)
            .write_ansi(&mut seq)
            .map_err(console_err)?;
        MoveTo(0, 0).write_ansi(&mut seq).map_err(console_err)?;
        self.write(&seq).await
    }
}
