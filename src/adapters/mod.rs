//! Adapters - concrete implementations of the ports.

pub mod http;
pub mod memory;
pub mod permissions;

pub use http::HttpRemoteStore;
pub use memory::InMemoryRemoteStore;
pub use permissions::{ActorPermissionOracle, AutoConfirm};
