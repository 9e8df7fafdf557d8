//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the terminal front-end drives the analysis session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive session (form → analysis → dashboard) until the user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
