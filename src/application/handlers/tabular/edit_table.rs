//! TableEditSession - editing the tabular content of a spreadsheet
//! document.

use std::sync::Arc;

use crate::domain::document::DocumentError;
use crate::domain::foundation::{Actor, DocumentId};
use crate::domain::tabular::TableData;
use crate::ports::RemoteDocumentStore;

/// One editing session over a spreadsheet document's rows.
///
/// Loading substitutes the fixed default schema when the store has
/// nothing yet, so a session never holds zero rows or zero columns.
/// Saving is whole-document replacement; there is no incremental
/// diffing.
pub struct TableEditSession {
    document_id: DocumentId,
    store: Arc<dyn RemoteDocumentStore>,
    table: TableData,
}

impl TableEditSession {
    /// Fetches the stored rows and opens a session over them.
    ///
    /// # Errors
    ///
    /// - `Remote` if the fetch fails
    pub async fn load(
        document_id: DocumentId,
        store: Arc<dyn RemoteDocumentStore>,
    ) -> Result<Self, DocumentError> {
        let fetched = store.get_rows(&document_id).await.map_err(|err| {
            tracing::error!(document_id = %document_id, error = %err, "failed to load rows");
            DocumentError::from(err)
        })?;

        let table = if fetched.is_empty() {
            TableData::default_schema()
        } else {
            fetched
        };

        Ok(Self {
            document_id,
            store,
            table,
        })
    }

    /// Returns the document this session edits.
    pub fn document_id(&self) -> &DocumentId {
        &self.document_id
    }

    /// Returns the current table.
    pub fn table(&self) -> &TableData {
        &self.table
    }

    /// Replaces a single cell.
    ///
    /// # Errors
    ///
    /// - `Validation` on unknown column or out-of-range row
    pub fn set_cell(
        &mut self,
        row_index: usize,
        column: &str,
        value: impl Into<String>,
    ) -> Result<(), DocumentError> {
        self.table
            .set_cell(row_index, column, value)
            .map_err(DocumentError::from)
    }

    /// Appends a blank row.
    pub fn add_row(&mut self) {
        self.table.add_row();
    }

    /// Removes a row; the last remaining row stays.
    pub fn remove_row(&mut self, row_index: usize) -> bool {
        self.table.remove_row(row_index)
    }

    /// Pushes the full row set to the remote store.
    ///
    /// # Errors
    ///
    /// - `Remote` if the store rejects or the call fails
    pub async fn save(&self, actor: &Actor) -> Result<(), DocumentError> {
        self.store
            .put_rows(&self.document_id, &self.table, actor)
            .await
            .map_err(|err| {
                tracing::error!(
                    document_id = %self.document_id,
                    error = %err,
                    "failed to save rows"
                );
                DocumentError::from(err)
            })
    }
}
