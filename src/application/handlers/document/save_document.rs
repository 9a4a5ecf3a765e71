//! SaveDocumentHandler - edit-form saves of descriptive fields.

use std::sync::Arc;

use crate::application::DocumentWorkspace;
use crate::domain::document::{Document, DocumentError};
use crate::domain::foundation::{Actor, DocumentId};
use crate::ports::{DocumentPatch, RemoteDocumentStore};

/// Command to persist an edit-form save.
#[derive(Debug, Clone)]
pub struct SaveDocumentCommand {
    pub document_id: DocumentId,
    pub patch: DocumentPatch,
    pub actor: Actor,
}

/// Handler for descriptive-field updates.
///
/// Lifecycle state never travels through here; a patch carries only
/// descriptive fields, and the confirmed document is applied with the
/// same replace-by-identity semantics as a status update.
pub struct SaveDocumentHandler {
    store: Arc<dyn RemoteDocumentStore>,
    workspace: Arc<DocumentWorkspace>,
}

impl SaveDocumentHandler {
    pub fn new(store: Arc<dyn RemoteDocumentStore>, workspace: Arc<DocumentWorkspace>) -> Self {
        Self { store, workspace }
    }

    /// Persists the patch and applies the confirmed document.
    ///
    /// # Errors
    ///
    /// - `Remote` if the store rejects or the call fails
    pub async fn handle(&self, cmd: SaveDocumentCommand) -> Result<Document, DocumentError> {
        let confirmed = self
            .store
            .update_document(&cmd.document_id, cmd.patch, &cmd.actor)
            .await
            .map_err(|err| {
                tracing::error!(
                    document_id = %cmd.document_id,
                    error = %err,
                    "document update rejected by remote store"
                );
                DocumentError::from(err)
            })?;

        self.workspace
            .apply_full_update(&cmd.document_id, confirmed.clone())
            .await;

        Ok(confirmed)
    }
}
