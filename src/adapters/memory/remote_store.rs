//! In-memory remote store adapter.
//!
//! Plays the server's role for development and integration tests:
//! mints ids, appends history entries on accepted writes, and owns the
//! cloning semantics for new versions.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::document::{Document, DocumentStatus, HistoryEntry};
use crate::domain::foundation::{
    Actor, DocumentId, DomainError, ErrorCode, HistoryEntryId, Timestamp,
};
use crate::domain::kpi::Kpi;
use crate::domain::tabular::TableData;
use crate::ports::{DocumentPatch, RemoteDocumentStore};

/// In-memory implementation of `RemoteDocumentStore`.
#[derive(Default)]
pub struct InMemoryRemoteStore {
    documents: RwLock<Vec<Document>>,
    kpis: RwLock<Vec<Kpi>>,
    rows: RwLock<HashMap<DocumentId, TableData>>,
}

impl InMemoryRemoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document (most-recently-seeded-first, like the server's
    /// creation ordering).
    pub async fn seed_document(&self, document: Document) {
        self.documents.write().await.insert(0, document);
    }

    /// Seed a KPI.
    pub async fn seed_kpi(&self, kpi: Kpi) {
        self.kpis.write().await.push(kpi);
    }

    /// Number of stored documents.
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }

    fn missing(id: &DocumentId) -> DomainError {
        DomainError::new(ErrorCode::DocumentNotFound, format!("no document {}", id))
            .with_detail("document_id", id.as_str())
    }

    fn history_entry(version: u32, changes: String, actor: &Actor) -> HistoryEntry {
        HistoryEntry {
            id: HistoryEntryId::random(),
            date: Timestamp::now(),
            version,
            changes,
            author: actor.name().to_string(),
        }
    }

    fn rebuild(
        doc: &Document,
        version: u32,
        status: DocumentStatus,
        patch: Option<&DocumentPatch>,
        extra_history: Option<HistoryEntry>,
    ) -> Document {
        let mut history = doc.history().to_vec();
        if let Some(entry) = extra_history {
            history.push(entry);
        }
        let empty = DocumentPatch::default();
        let patch = patch.unwrap_or(&empty);
        Document::reconstitute(
            doc.id().clone(),
            patch.name.clone().unwrap_or_else(|| doc.name().to_string()),
            patch.code.clone().unwrap_or_else(|| doc.code().to_string()),
            version,
            patch.process.unwrap_or_else(|| doc.process()),
            patch
                .subprocess
                .clone()
                .or_else(|| doc.subprocess().map(String::from)),
            patch.doc_type.unwrap_or_else(|| doc.doc_type()),
            status,
            patch
                .responsible_id
                .clone()
                .unwrap_or_else(|| doc.responsible_id().clone()),
            patch
                .responsible_name
                .clone()
                .unwrap_or_else(|| doc.responsible_name().to_string()),
            patch.review_date.unwrap_or_else(|| doc.review_date()),
            patch
                .file_url
                .clone()
                .unwrap_or_else(|| doc.file_url().to_string()),
            doc.content_type(),
            history,
        )
    }
}

#[async_trait]
impl RemoteDocumentStore for InMemoryRemoteStore {
    async fn list_documents(&self, _actor: &Actor) -> Result<Vec<Document>, DomainError> {
        Ok(self.documents.read().await.clone())
    }

    async fn list_kpis(&self) -> Result<Vec<Kpi>, DomainError> {
        Ok(self.kpis.read().await.clone())
    }

    async fn update_status(
        &self,
        id: &DocumentId,
        status: DocumentStatus,
        actor: &Actor,
    ) -> Result<Document, DomainError> {
        let mut documents = self.documents.write().await;
        let index = documents
            .iter()
            .position(|doc| doc.id() == id)
            .ok_or_else(|| Self::missing(id))?;

        let entry = Self::history_entry(
            documents[index].version(),
            format!("Cambio de estado a {}", status),
            actor,
        );
        let updated = Self::rebuild(&documents[index], documents[index].version(), status, None, Some(entry));
        documents[index] = updated.clone();
        Ok(updated)
    }

    async fn update_document(
        &self,
        id: &DocumentId,
        patch: DocumentPatch,
        actor: &Actor,
    ) -> Result<Document, DomainError> {
        let mut documents = self.documents.write().await;
        let index = documents
            .iter()
            .position(|doc| doc.id() == id)
            .ok_or_else(|| Self::missing(id))?;

        let entry = Self::history_entry(
            documents[index].version(),
            "Actualización de datos".to_string(),
            actor,
        );
        let updated = Self::rebuild(
            &documents[index],
            documents[index].version(),
            documents[index].status(),
            Some(&patch),
            Some(entry),
        );
        documents[index] = updated.clone();
        Ok(updated)
    }

    async fn clone_as_new_version(&self, id: &DocumentId) -> Result<Document, DomainError> {
        let mut documents = self.documents.write().await;
        let source = documents
            .iter()
            .find(|doc| doc.id() == id)
            .cloned()
            .ok_or_else(|| Self::missing(id))?;

        let version = source.version() + 1;
        let mut history = source.history().to_vec();
        history.push(HistoryEntry {
            id: HistoryEntryId::random(),
            date: Timestamp::now(),
            version,
            changes: format!("Nueva versión {} creada", version),
            author: "sistema".to_string(),
        });
        let clone = Document::reconstitute(
            DocumentId::random(),
            source.name().to_string(),
            source.code().to_string(),
            version,
            source.process(),
            source.subprocess().map(String::from),
            source.doc_type(),
            DocumentStatus::Draft,
            source.responsible_id().clone(),
            source.responsible_name().to_string(),
            source.review_date(),
            source.file_url().to_string(),
            source.content_type(),
            history,
        );

        documents.insert(0, clone.clone());

        // Copy any tabular content to the new version.
        let rows = self.rows.read().await.get(id).cloned();
        if let Some(table) = rows {
            self.rows.write().await.insert(clone.id().clone(), table);
        }

        Ok(clone)
    }

    async fn get_rows(&self, id: &DocumentId) -> Result<TableData, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows.get(id).cloned().unwrap_or_else(TableData::empty))
    }

    async fn put_rows(
        &self,
        id: &DocumentId,
        table: &TableData,
        _actor: &Actor,
    ) -> Result<(), DomainError> {
        self.rows.write().await.insert(id.clone(), table.clone());
        Ok(())
    }
}
