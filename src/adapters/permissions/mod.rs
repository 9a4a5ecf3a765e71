//! Permission and confirmation adapters.

use async_trait::async_trait;

use crate::domain::foundation::{Actor, Capability, DomainError};
use crate::ports::{ConfirmationPrompt, PermissionOracle};

/// Oracle answering from the actor's own capability set.
///
/// The platform-admin override is deliberately NOT applied here: the
/// action catalog and its rules treat admin status as a separate,
/// explicit condition.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActorPermissionOracle;

impl ActorPermissionOracle {
    pub fn new() -> Self {
        Self
    }
}

impl PermissionOracle for ActorPermissionOracle {
    fn has_permission(&self, actor: &Actor, capability: Capability) -> bool {
        actor.holds(capability)
    }
}

/// Confirmation adapter that always confirms.
///
/// For headless contexts (tests, scripted imports) where no user can
/// answer a dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl AutoConfirm {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConfirmationPrompt for AutoConfirm {
    async fn confirm(&self, _message: &str) -> Result<bool, DomainError> {
        Ok(true)
    }
}
