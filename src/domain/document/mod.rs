//! Document module - controlled documents and their lifecycle.

mod actions;
mod aggregate;
mod errors;
mod expiring;
mod status;

pub use actions::{visible_actions, DocumentAction};
pub use aggregate::{ContentType, Document, DocumentType, HistoryEntry, Process};
pub use errors::DocumentError;
pub use expiring::{expiring_documents, EXPIRING_WINDOW_DAYS};
pub use status::{required_capability, DocumentStatus};
