//! CreateNewVersionHandler - start a new version from an existing
//! document.

use std::sync::Arc;

use crate::application::DocumentWorkspace;
use crate::domain::document::{Document, DocumentError};
use crate::domain::foundation::DocumentId;
use crate::ports::{ConfirmationPrompt, RemoteDocumentStore};

/// Command to clone a document as the start of a new version.
#[derive(Debug, Clone)]
pub struct CreateNewVersionCommand {
    pub document_id: DocumentId,
}

/// Result of a create-new-version request.
#[derive(Debug, Clone, PartialEq)]
pub enum CloneOutcome {
    /// The remote store created the new version; it now heads the
    /// local collection.
    Created(Document),
    /// The user declined the confirmation; no remote call was made.
    Cancelled,
}

/// Handler orchestrating the clone workflow.
///
/// The remote write is irreversible, so an explicit cancelable prompt
/// precedes it. The store owns the cloning itself: copied content,
/// incremented version, draft status, appended history entry.
///
/// Concurrent calls for the same source document are not deduplicated;
/// each confirmation issues an independent remote request.
pub struct CreateNewVersionHandler {
    store: Arc<dyn RemoteDocumentStore>,
    confirmation: Arc<dyn ConfirmationPrompt>,
    workspace: Arc<DocumentWorkspace>,
}

impl CreateNewVersionHandler {
    pub fn new(
        store: Arc<dyn RemoteDocumentStore>,
        confirmation: Arc<dyn ConfirmationPrompt>,
        workspace: Arc<DocumentWorkspace>,
    ) -> Self {
        Self {
            store,
            confirmation,
            workspace,
        }
    }

    /// Asks for confirmation and, if given, clones the document and
    /// prepends the new version to the collection.
    ///
    /// # Errors
    ///
    /// - `Remote` if the prompt or the store fails
    pub async fn handle(
        &self,
        cmd: CreateNewVersionCommand,
    ) -> Result<CloneOutcome, DocumentError> {
        let confirmed = self
            .confirmation
            .confirm("Se creará una nueva versión del documento. ¿Desea continuar?")
            .await
            .map_err(DocumentError::from)?;
        if !confirmed {
            tracing::debug!(document_id = %cmd.document_id, "new version declined");
            return Ok(CloneOutcome::Cancelled);
        }

        let clone = self
            .store
            .clone_as_new_version(&cmd.document_id)
            .await
            .map_err(|err| {
                tracing::error!(
                    document_id = %cmd.document_id,
                    error = %err,
                    "clone rejected by remote store"
                );
                DocumentError::from(err)
            })?;

        self.workspace.prepend(clone.clone()).await;
        Ok(CloneOutcome::Created(clone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{ContentType, DocumentStatus, DocumentType, Process};
    use crate::domain::foundation::{Actor, DomainError, ReviewDate, UserId};
    use crate::domain::kpi::Kpi;
    use crate::domain::tabular::TableData;
    use crate::ports::DocumentPatch;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn document(id: &str, version: u32, status: DocumentStatus) -> Document {
        Document::reconstitute(
            DocumentId::new(id).unwrap(),
            "Control de registros".to_string(),
            "PR-GC-01".to_string(),
            version,
            Process::Operational,
            None,
            DocumentType::Procedure,
            status,
            UserId::new("user-1").unwrap(),
            "Ana Gómez".to_string(),
            ReviewDate::parse("2026-12-01").unwrap(),
            String::new(),
            ContentType::File,
            Vec::new(),
        )
    }

    struct StaticPrompt {
        answer: bool,
        asked: Mutex<u32>,
    }

    impl StaticPrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: Mutex::new(0),
            }
        }

        fn asked(&self) -> u32 {
            *self.asked.lock().unwrap()
        }
    }

    #[async_trait]
    impl ConfirmationPrompt for StaticPrompt {
        async fn confirm(&self, _message: &str) -> Result<bool, DomainError> {
            *self.asked.lock().unwrap() += 1;
            Ok(self.answer)
        }
    }

    struct CloningStore {
        clone_calls: Mutex<Vec<DocumentId>>,
    }

    impl CloningStore {
        fn new() -> Self {
            Self {
                clone_calls: Mutex::new(Vec::new()),
            }
        }

        fn clone_calls(&self) -> Vec<DocumentId> {
            self.clone_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteDocumentStore for CloningStore {
        async fn list_documents(&self, _actor: &Actor) -> Result<Vec<Document>, DomainError> {
            Ok(Vec::new())
        }

        async fn list_kpis(&self) -> Result<Vec<Kpi>, DomainError> {
            Ok(Vec::new())
        }

        async fn update_status(
            &self,
            _id: &DocumentId,
            _status: DocumentStatus,
            _actor: &Actor,
        ) -> Result<Document, DomainError> {
            unimplemented!("not exercised by clone tests")
        }

        async fn update_document(
            &self,
            _id: &DocumentId,
            _patch: DocumentPatch,
            _actor: &Actor,
        ) -> Result<Document, DomainError> {
            unimplemented!("not exercised by clone tests")
        }

        async fn clone_as_new_version(&self, id: &DocumentId) -> Result<Document, DomainError> {
            self.clone_calls.lock().unwrap().push(id.clone());
            Ok(document("doc-1-v2", 2, DocumentStatus::Draft))
        }

        async fn get_rows(&self, _id: &DocumentId) -> Result<TableData, DomainError> {
            unimplemented!("not exercised by clone tests")
        }

        async fn put_rows(
            &self,
            _id: &DocumentId,
            _table: &TableData,
            _actor: &Actor,
        ) -> Result<(), DomainError> {
            unimplemented!("not exercised by clone tests")
        }
    }

    #[tokio::test]
    async fn confirmed_clone_prepends_the_new_version() {
        let store = Arc::new(CloningStore::new());
        let workspace = Arc::new(DocumentWorkspace::new(store.clone()));
        workspace
            .prepend(document("doc-1", 1, DocumentStatus::Effective))
            .await;
        let prompt = Arc::new(StaticPrompt::answering(true));
        let handler = CreateNewVersionHandler::new(store.clone(), prompt, workspace.clone());

        let outcome = handler
            .handle(CreateNewVersionCommand {
                document_id: DocumentId::new("doc-1").unwrap(),
            })
            .await
            .unwrap();

        let CloneOutcome::Created(clone) = outcome else {
            panic!("expected Created outcome");
        };
        assert_eq!(clone.version(), 2);
        assert_eq!(clone.status(), DocumentStatus::Draft);

        let documents = workspace.documents().await;
        assert_eq!(documents[0].id().as_str(), "doc-1-v2");
        assert_eq!(documents[1].id().as_str(), "doc-1");
        assert_eq!(store.clone_calls().len(), 1);
    }

    #[tokio::test]
    async fn declined_prompt_cancels_without_a_remote_call() {
        let store = Arc::new(CloningStore::new());
        let workspace = Arc::new(DocumentWorkspace::new(store.clone()));
        let prompt = Arc::new(StaticPrompt::answering(false));
        let handler =
            CreateNewVersionHandler::new(store.clone(), prompt.clone(), workspace.clone());

        let outcome = handler
            .handle(CreateNewVersionCommand {
                document_id: DocumentId::new("doc-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(outcome, CloneOutcome::Cancelled);
        assert_eq!(prompt.asked(), 1);
        assert!(store.clone_calls().is_empty());
        assert!(workspace.documents().await.is_empty());
    }

    #[tokio::test]
    async fn repeated_calls_each_issue_an_independent_clone() {
        let store = Arc::new(CloningStore::new());
        let workspace = Arc::new(DocumentWorkspace::new(store.clone()));
        let prompt = Arc::new(StaticPrompt::answering(true));
        let handler = CreateNewVersionHandler::new(store.clone(), prompt, workspace);

        for _ in 0..2 {
            handler
                .handle(CreateNewVersionCommand {
                    document_id: DocumentId::new("doc-1").unwrap(),
                })
                .await
                .unwrap();
        }
        assert_eq!(store.clone_calls().len(), 2);
    }
}
