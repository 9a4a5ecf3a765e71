//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PermissionOracle` - capability checks for the acting user
//! - `RemoteDocumentStore` - the remote persistence service
//! - `ConfirmationPrompt` - explicit user confirmation for irreversible
//!   operations

mod confirmation;
mod permission_oracle;
mod remote_store;

pub use confirmation::ConfirmationPrompt;
pub use permission_oracle::PermissionOracle;
pub use remote_store::{DocumentPatch, RemoteDocumentStore};
