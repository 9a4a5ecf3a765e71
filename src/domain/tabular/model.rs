//! Dynamic-schema tabular content model.
//!
//! Backs `contentType = spreadsheet` documents: an ordered column list
//! and rows of cells parallel to it. Keeping cells in parallel vectors
//! makes the shared-column-set invariant structural: a row cannot have
//! keys the table does not, nor in a different order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Column set used when a spreadsheet document has no stored rows yet.
pub static DEFAULT_COLUMNS: Lazy<Vec<String>> =
    Lazy::new(|| (1..=4).map(|i| format!("Columna {}", i)).collect());

/// Ordered rows of string cells under a shared ordered column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableData {
    /// Creates a table, validating that every row matches the column
    /// list in width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ValidationError> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ValidationError::invalid_format(
                    "rows",
                    format!(
                        "row {} has {} cells, expected {}",
                        index,
                        row.len(),
                        columns.len()
                    ),
                ));
            }
        }
        Ok(Self { columns, rows })
    }

    /// A table with no columns and no rows, the wire shape of a
    /// spreadsheet document nothing has been stored for yet.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// The fixed default schema: four columns, one blank row.
    pub fn default_schema() -> Self {
        let columns = DEFAULT_COLUMNS.clone();
        let rows = vec![vec![String::new(); columns.len()]];
        Self { columns, rows }
    }

    /// Returns true when the table holds no rows or no columns.
    ///
    /// A loaded editing model is never empty; emptiness only occurs on
    /// the wire, before the default schema is substituted.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.rows.is_empty()
    }

    /// Returns the ordered column list.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows, cells parallel to the column list.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns one cell by row index and column name.
    pub fn cell(&self, row_index: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row_index).map(|row| row[col].as_str())
    }

    /// Replaces a single cell; every other cell is unchanged.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the column is not in the column list
    /// - `InvalidFormat` if the row index is out of range
    pub fn set_cell(
        &mut self,
        row_index: usize,
        column: &str,
        value: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let col = self.column_index(column).ok_or_else(|| {
            ValidationError::invalid_format("column", format!("unknown column '{}'", column))
        })?;
        let row = self.rows.get_mut(row_index).ok_or_else(|| {
            ValidationError::invalid_format("row", format!("row {} out of range", row_index))
        })?;
        row[col] = value.into();
        Ok(())
    }

    /// Appends a row with every column set to empty.
    pub fn add_row(&mut self) {
        self.rows.push(vec![String::new(); self.columns.len()]);
    }

    /// Removes a row, unless it is the last remaining one.
    ///
    /// Returns whether a row was removed. Out-of-range indexes are a
    /// silent no-op, like the last-row case.
    pub fn remove_row(&mut self, row_index: usize) -> bool {
        if self.rows.len() <= 1 || row_index >= self.rows.len() {
            return false;
        }
        self.rows.remove(row_index);
        true
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}
