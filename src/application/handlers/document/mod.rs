//! Document operation handlers.

mod create_new_version;
mod request_transition;
mod save_document;

pub use create_new_version::{CloneOutcome, CreateNewVersionCommand, CreateNewVersionHandler};
pub use request_transition::{RequestTransitionCommand, RequestTransitionHandler};
pub use save_document::{SaveDocumentCommand, SaveDocumentHandler};
