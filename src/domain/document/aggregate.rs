//! Document aggregate entity.
//!
//! A controlled document as the remote store persists it. The client
//! never advances `status` locally: every lifecycle change goes through
//! the transition engine and is applied only from the server-confirmed
//! document. `history` is append-only and appended exclusively by the
//! remote store on accepted writes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    DocumentId, HistoryEntryId, ReviewDate, Timestamp, UserId, ValidationError,
};

use super::DocumentStatus;

/// Classification of a document within the process map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Process {
    #[serde(rename = "ESTRATEGICO")]
    Strategic,
    #[serde(rename = "OPERATIVO")]
    Operational,
    #[serde(rename = "APOYO")]
    Support,
    #[serde(rename = "EVALUACION")]
    Evaluation,
}

impl Process {
    /// Support-process documents must name the concrete sub-process.
    pub fn requires_subprocess(&self) -> bool {
        matches!(self, Process::Support)
    }
}

/// Kind of controlled document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "MANUAL")]
    Manual,
    #[serde(rename = "PROCEDIMIENTO")]
    Procedure,
    #[serde(rename = "INSTRUCTIVO")]
    WorkInstruction,
    #[serde(rename = "FORMATO")]
    Form,
    #[serde(rename = "REGISTRO")]
    Record,
}

/// How the document's content is stored and edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Opaque uploaded file behind `archivoUrl`.
    File,
    /// Tabular content edited in the spreadsheet view.
    Spreadsheet,
}

/// One entry of a document's change log.
///
/// Entries are never mutated or removed; the remote store appends one
/// on every accepted write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    #[serde(rename = "fecha")]
    pub date: Timestamp,
    pub version: u32,
    #[serde(rename = "cambios")]
    pub changes: String,
    #[serde(rename = "autor")]
    pub author: String,
}

/// A controlled document under lifecycle management.
///
/// # Invariants
///
/// - `version >= 1`, non-decreasing across the document's lineage
/// - `subprocess` present exactly when `process` requires it
/// - `status` changes only through a legal transition, server-confirmed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "codigo")]
    code: String,
    version: u32,
    #[serde(rename = "proceso")]
    process: Process,
    #[serde(rename = "subproceso")]
    subprocess: Option<String>,
    #[serde(rename = "tipo")]
    doc_type: DocumentType,
    #[serde(rename = "estado")]
    status: DocumentStatus,
    #[serde(rename = "responsableId")]
    responsible_id: UserId,
    #[serde(rename = "responsableNombre")]
    responsible_name: String,
    #[serde(rename = "fechaRevision")]
    review_date: ReviewDate,
    #[serde(rename = "archivoUrl")]
    file_url: String,
    #[serde(rename = "contentType")]
    content_type: ContentType,
    #[serde(rename = "historial")]
    history: Vec<HistoryEntry>,
}

impl Document {
    /// Creates a new draft document.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or code is blank
    /// - `BelowMinimum` if version is zero
    /// - `EmptyField` if the process requires a sub-process and none is given
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: DocumentId,
        name: String,
        code: String,
        version: u32,
        process: Process,
        subprocess: Option<String>,
        doc_type: DocumentType,
        responsible_id: UserId,
        responsible_name: String,
        review_date: ReviewDate,
        file_url: String,
        content_type: ContentType,
    ) -> Result<Self, ValidationError> {
        Self::validate(&name, &code, version, process, subprocess.as_deref())?;

        Ok(Self {
            id,
            name,
            code,
            version,
            process,
            subprocess,
            doc_type,
            status: DocumentStatus::Draft,
            responsible_id,
            responsible_name,
            review_date,
            file_url,
            content_type,
            history: Vec::new(),
        })
    }

    /// Reconstitutes a document from the remote store (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DocumentId,
        name: String,
        code: String,
        version: u32,
        process: Process,
        subprocess: Option<String>,
        doc_type: DocumentType,
        status: DocumentStatus,
        responsible_id: UserId,
        responsible_name: String,
        review_date: ReviewDate,
        file_url: String,
        content_type: ContentType,
        history: Vec<HistoryEntry>,
    ) -> Self {
        Self {
            id,
            name,
            code,
            version,
            process,
            subprocess,
            doc_type,
            status,
            responsible_id,
            responsible_name,
            review_date,
            file_url,
            content_type,
            history,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the document id.
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Returns the document name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the document code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the version within the document's lineage.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the owning process.
    pub fn process(&self) -> Process {
        self.process
    }

    /// Returns the sub-process, when one applies.
    pub fn subprocess(&self) -> Option<&str> {
        self.subprocess.as_deref()
    }

    /// Returns the document type.
    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    /// Returns the current lifecycle status.
    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    /// Returns the responsible user's id.
    pub fn responsible_id(&self) -> &UserId {
        &self.responsible_id
    }

    /// Returns the responsible user's display name.
    pub fn responsible_name(&self) -> &str {
        &self.responsible_name
    }

    /// Returns the next-review date.
    pub fn review_date(&self) -> ReviewDate {
        self.review_date
    }

    /// Returns the opaque pointer to stored content.
    pub fn file_url(&self) -> &str {
        &self.file_url
    }

    /// Returns how the content is stored and edited.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Returns the change log, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate(
        name: &str,
        code: &str,
        version: u32,
        process: Process,
        subprocess: Option<&str>,
    ) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("nombre"));
        }
        if code.trim().is_empty() {
            return Err(ValidationError::empty_field("codigo"));
        }
        if version < 1 {
            return Err(ValidationError::below_minimum("version", 1, version as i64));
        }
        if process.requires_subprocess() && subprocess.map_or(true, |s| s.trim().is_empty()) {
            return Err(ValidationError::empty_field("subproceso"));
        }
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} v{}", self.code, self.name, self.version)
    }
}
