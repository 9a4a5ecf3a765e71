//! Doc Control - Document lifecycle management for ISO-style quality
//! management systems.
//!
//! This crate implements the document-control core: the lifecycle state
//! machine with its permission-gated transition engine, the action
//! catalog feeding UI menus, and the data-synchronization layer keeping
//! the client-side collections and their derived views consistent with
//! the remote store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
