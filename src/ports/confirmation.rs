//! Confirmation prompt port.
//!
//! Irreversible remote writes (creating a new document version) must be
//! preceded by an explicit, cancelable prompt. The presentation layer
//! owns the dialog; the core only sees the answer.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port asking the user to confirm an irreversible operation.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    /// Presents the message and returns whether the user confirmed.
    ///
    /// Returning `Ok(false)` cancels the operation without error.
    async fn confirm(&self, message: &str) -> Result<bool, DomainError>;
}
