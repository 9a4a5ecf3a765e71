//! DocumentWorkspace - the authoritative client-side state container.
//!
//! Owns the documents and KPI collections plus the derived expiring
//! set. Presentation code reads through the view methods and mutates
//! only through the sanctioned operations here and in the handlers;
//! the collections are never exposed mutably.
//!
//! Mutations are whole-collection or whole-element replacement under a
//! single short-lived write lock, never held across an await, so
//! interleaved operations observe only complete states. Overlapping
//! `refresh` calls are last-write-wins on both the collections and the
//! loading flag; there is no generation counting for stale responses.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::document::{expiring_documents, Document};
use crate::domain::foundation::{Actor, DocumentId, DomainError, ReviewDate};
use crate::domain::kpi::Kpi;
use crate::ports::RemoteDocumentStore;

#[derive(Default)]
struct WorkspaceState {
    documents: Vec<Document>,
    kpis: Vec<Kpi>,
    expiring: Vec<Document>,
    loading: bool,
}

impl WorkspaceState {
    fn recompute_expiring(&mut self) {
        self.expiring = expiring_documents(&self.documents, ReviewDate::today());
    }
}

/// Authoritative in-memory collections, synchronized with the remote
/// store.
pub struct DocumentWorkspace {
    store: Arc<dyn RemoteDocumentStore>,
    state: RwLock<WorkspaceState>,
}

impl DocumentWorkspace {
    /// Creates an empty workspace backed by the given remote store.
    pub fn new(store: Arc<dyn RemoteDocumentStore>) -> Self {
        Self {
            store,
            state: RwLock::new(WorkspaceState::default()),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Synchronization
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces both collections wholesale from the remote store.
    ///
    /// The loading flag is true for the duration and cleared on
    /// completion or failure. Callers gate redundant calls themselves
    /// (e.g. on actor identity change); overlapping refreshes are not
    /// coalesced.
    pub async fn refresh(&self, actor: &Actor) -> Result<(), DomainError> {
        self.state.write().await.loading = true;

        let fetched = futures::try_join!(self.store.list_documents(actor), self.store.list_kpis());

        let mut state = self.state.write().await;
        state.loading = false;
        match fetched {
            Ok((documents, kpis)) => {
                tracing::debug!(
                    documents = documents.len(),
                    kpis = kpis.len(),
                    "collections refreshed"
                );
                state.documents = documents;
                state.kpis = kpis;
                state.recompute_expiring();
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to refresh collections");
                Err(err)
            }
        }
    }

    /// Replaces the matching document after a confirmed status change.
    ///
    /// Absent ids are a silent miss, not an error.
    pub async fn apply_status_update(&self, id: &DocumentId, confirmed: Document) {
        self.replace_by_id(id, confirmed).await;
    }

    /// Replaces the matching document after a confirmed edit-form save.
    ///
    /// Absent ids are a silent miss, not an error.
    pub async fn apply_full_update(&self, id: &DocumentId, confirmed: Document) {
        self.replace_by_id(id, confirmed).await;
    }

    /// Inserts a document at the head of the collection
    /// (most-recently-created-first).
    pub async fn prepend(&self, document: Document) {
        let mut state = self.state.write().await;
        state.documents.insert(0, document);
        state.recompute_expiring();
    }

    async fn replace_by_id(&self, id: &DocumentId, confirmed: Document) {
        let mut state = self.state.write().await;
        match state.documents.iter().position(|doc| doc.id() == id) {
            Some(index) => {
                state.documents[index] = confirmed;
                state.recompute_expiring();
            }
            None => {
                tracing::debug!(document_id = %id, "apply on absent document ignored");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read views
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the authoritative document collection.
    pub async fn documents(&self) -> Vec<Document> {
        self.state.read().await.documents.clone()
    }

    /// Returns one document by id.
    pub async fn document(&self, id: &DocumentId) -> Option<Document> {
        self.state
            .read()
            .await
            .documents
            .iter()
            .find(|doc| doc.id() == id)
            .cloned()
    }

    /// Returns the KPI collection.
    pub async fn kpis(&self) -> Vec<Kpi> {
        self.state.read().await.kpis.clone()
    }

    /// Returns the derived expiring-soon subset.
    pub async fn expiring_documents(&self) -> Vec<Document> {
        self.state.read().await.expiring.clone()
    }

    /// Returns true while a refresh is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }
}
