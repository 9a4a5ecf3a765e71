//! Permission oracle port.
//!
//! Single seam for every capability check in the crate. Gating logic
//! that used to live next to each UI action is centralized here plus
//! the transition table, so the permission matrix is one testable
//! source of truth.

use crate::domain::foundation::{Actor, Capability};

/// Port answering whether an actor holds a named capability.
///
/// Checks are synchronous and infallible by contract: an oracle that
/// cannot answer must answer `false` (fail closed).
pub trait PermissionOracle: Send + Sync {
    /// Returns true if the capability is granted to the actor.
    fn has_permission(&self, actor: &Actor, capability: Capability) -> bool;
}
