//! RequestTransitionHandler - permission-gated lifecycle transitions.

use std::sync::Arc;

use crate::application::DocumentWorkspace;
use crate::domain::document::{required_capability, Document, DocumentError, DocumentStatus};
use crate::domain::foundation::Actor;
use crate::ports::{PermissionOracle, RemoteDocumentStore};

/// Command to move a document to a new lifecycle status.
#[derive(Debug, Clone)]
pub struct RequestTransitionCommand {
    pub document: Document,
    pub target: DocumentStatus,
    pub actor: Actor,
}

/// Handler validating and executing lifecycle transitions.
///
/// Status changes are consequential (retiring is irreversible), so this
/// operation is confirmed-write: nothing is applied locally until the
/// remote store returns the persisted document, and the server's answer
/// is authoritative for the new state including any appended history.
pub struct RequestTransitionHandler {
    store: Arc<dyn RemoteDocumentStore>,
    permissions: Arc<dyn PermissionOracle>,
    workspace: Arc<DocumentWorkspace>,
}

impl RequestTransitionHandler {
    pub fn new(
        store: Arc<dyn RemoteDocumentStore>,
        permissions: Arc<dyn PermissionOracle>,
        workspace: Arc<DocumentWorkspace>,
    ) -> Self {
        Self {
            store,
            permissions,
            workspace,
        }
    }

    /// Validates the transition and, if legal and permitted, persists
    /// it and applies the confirmed document to the workspace.
    ///
    /// # Errors
    ///
    /// - `IllegalTransition` if the (current, target) pair is not in
    ///   the transition table; no remote call is issued
    /// - `PermissionDenied` if the actor lacks the required capability;
    ///   no remote call is issued
    /// - `Remote` if the store rejects or the call fails
    pub async fn handle(&self, cmd: RequestTransitionCommand) -> Result<Document, DocumentError> {
        let current = cmd.document.status();

        // 1. The transition table is checked here even though the action
        //    catalog already filters menus; the UI is not trusted.
        let capability = required_capability(current, cmd.target)
            .ok_or_else(|| DocumentError::illegal_transition(current, cmd.target))?;

        // 2. Capability gate.
        if !self.permissions.has_permission(&cmd.actor, capability) {
            return Err(DocumentError::permission_denied(capability));
        }

        // 3. Confirmed write; the server owns the resulting state.
        let confirmed = self
            .store
            .update_status(cmd.document.id(), cmd.target, &cmd.actor)
            .await
            .map_err(|err| {
                tracing::error!(
                    document_id = %cmd.document.id(),
                    target = %cmd.target,
                    error = %err,
                    "status update rejected by remote store"
                );
                DocumentError::from(err)
            })?;

        // 4. Replace the stale element by identity.
        self.workspace
            .apply_status_update(cmd.document.id(), confirmed.clone())
            .await;

        Ok(confirmed)
    }
}
