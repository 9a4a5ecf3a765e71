//! Application layer - the workspace and its command handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports. Presentation collaborators call only into this layer; the
//! authoritative collections are never mutated around it.

pub mod handlers;
mod workspace;

pub use handlers::document::{
    CloneOutcome, CreateNewVersionCommand, CreateNewVersionHandler, RequestTransitionCommand,
    RequestTransitionHandler, SaveDocumentCommand, SaveDocumentHandler,
};
pub use handlers::tabular::TableEditSession;
pub use workspace::DocumentWorkspace;
