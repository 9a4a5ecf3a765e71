//! Remote document store port.
//!
//! The remote service is the source of truth for documents, KPIs, and
//! tabular row data. Every mutating call here is confirmed-write: the
//! caller applies nothing locally until the store returns the persisted
//! entity. The store owns all server-side side effects, in particular
//! appending `historial` entries on accepted writes and minting ids and
//! version numbers for cloned documents.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::document::{Document, DocumentStatus, DocumentType, Process};
use crate::domain::foundation::{Actor, DocumentId, DomainError, ReviewDate, UserId};
use crate::domain::kpi::Kpi;
use crate::domain::tabular::TableData;

/// Partial descriptive-field update sent by the edit form.
///
/// Lifecycle state is never part of a patch; status changes go through
/// [`RemoteDocumentStore::update_status`] only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "codigo", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "proceso", skip_serializing_if = "Option::is_none")]
    pub process: Option<Process>,
    #[serde(rename = "subproceso", skip_serializing_if = "Option::is_none")]
    pub subprocess: Option<String>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DocumentType>,
    #[serde(rename = "responsableId", skip_serializing_if = "Option::is_none")]
    pub responsible_id: Option<UserId>,
    #[serde(rename = "responsableNombre", skip_serializing_if = "Option::is_none")]
    pub responsible_name: Option<String>,
    #[serde(rename = "fechaRevision", skip_serializing_if = "Option::is_none")]
    pub review_date: Option<ReviewDate>,
    #[serde(rename = "archivoUrl", skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

impl DocumentPatch {
    /// Returns true when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &DocumentPatch::default()
    }
}

/// Port for the remote persistence service.
///
/// # Contract
///
/// - Reads are filtered by the acting user's permission set where the
///   operation takes an actor.
/// - Mutations return the persisted entity, including server-side side
///   effects (updated `historial`, incremented version on clone).
/// - No retry discipline is implied; every call is at-most-once from
///   the core's perspective.
#[async_trait]
pub trait RemoteDocumentStore: Send + Sync {
    /// Lists the documents visible to the actor.
    async fn list_documents(&self, actor: &Actor) -> Result<Vec<Document>, DomainError>;

    /// Lists all KPIs.
    async fn list_kpis(&self) -> Result<Vec<Kpi>, DomainError>;

    /// Persists a lifecycle status change and returns the confirmed
    /// document.
    async fn update_status(
        &self,
        id: &DocumentId,
        status: DocumentStatus,
        actor: &Actor,
    ) -> Result<Document, DomainError>;

    /// Applies a descriptive-field patch and returns the confirmed
    /// document.
    async fn update_document(
        &self,
        id: &DocumentId,
        patch: DocumentPatch,
        actor: &Actor,
    ) -> Result<Document, DomainError>;

    /// Clones the document as the start of a new version: copied
    /// content, incremented version, draft status, history entry.
    async fn clone_as_new_version(&self, id: &DocumentId) -> Result<Document, DomainError>;

    /// Fetches the tabular rows of a spreadsheet document. May be
    /// empty when nothing has been stored yet.
    async fn get_rows(&self, id: &DocumentId) -> Result<TableData, DomainError>;

    /// Replaces the full tabular row set of a spreadsheet document.
    async fn put_rows(
        &self,
        id: &DocumentId,
        table: &TableData,
        actor: &Actor,
    ) -> Result<(), DomainError>;
}
