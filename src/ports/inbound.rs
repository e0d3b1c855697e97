//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the interactive front-end that drives the use cases.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the main menu until the user exits or input is closed.
    async fn run(&self) -> Result<(), DomainError>;
}
