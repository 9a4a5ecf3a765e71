//! Tabular module - spreadsheet-like document content.

mod model;

pub use model::{TableData, DEFAULT_COLUMNS};
