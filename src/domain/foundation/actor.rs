//! Actor, role, and capability value objects.
//!
//! An actor is the authenticated user/role pair initiating an operation,
//! together with the capability set granted by its role. Capability
//! checks themselves go through the `PermissionOracle` port so the
//! transition table stays the single source of truth for gating.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::UserId;

/// A named permission gating one class of action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Send a draft document into review.
    Submit,
    /// Approve, reject, publish, or retire a document.
    Publish,
    /// Create documents and new document versions.
    Create,
    /// Download stored document content.
    Download,
}

impl Capability {
    /// Returns the capability's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Submit => "submit",
            Capability::Publish => "publish",
            Capability::Create => "create",
            Capability::Download => "download",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Platform role of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator; some catalog rules treat this as an
    /// override independent of the capability set.
    PlatformAdmin,
    /// Regular member of a tenant.
    Member,
}

/// The authenticated user initiating an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    user_id: UserId,
    name: String,
    role: Role,
    permissions: HashSet<Capability>,
}

impl Actor {
    /// Creates an actor with the given role and capability set.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        role: Role,
        permissions: impl IntoIterator<Item = Capability>,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            role,
            permissions: permissions.into_iter().collect(),
        }
    }

    /// Returns the actor's user id.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the actor's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the actor's platform role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the actor's capability set.
    pub fn permissions(&self) -> &HashSet<Capability> {
        &self.permissions
    }

    /// Returns true if the capability is in the actor's own set.
    pub fn holds(&self, capability: Capability) -> bool {
        self.permissions.contains(&capability)
    }

    /// Returns true if the actor is a platform administrator.
    pub fn is_platform_admin(&self) -> bool {
        self.role == Role::PlatformAdmin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(perms: &[Capability]) -> Actor {
        Actor::new(
            UserId::new("user-1").unwrap(),
            "Ana",
            Role::Member,
            perms.iter().copied(),
        )
    }

    #[test]
    fn holds_reflects_capability_set() {
        let actor = member(&[Capability::Submit]);
        assert!(actor.holds(Capability::Submit));
        assert!(!actor.holds(Capability::Publish));
    }

    #[test]
    fn member_is_not_platform_admin() {
        assert!(!member(&[]).is_platform_admin());
    }

    #[test]
    fn platform_admin_role_is_detected() {
        let admin = Actor::new(UserId::new("admin-1").unwrap(), "Root", Role::PlatformAdmin, []);
        assert!(admin.is_platform_admin());
    }

    #[test]
    fn capability_serializes_to_lowercase_wire_name() {
        assert_eq!(serde_json::to_string(&Capability::Submit).unwrap(), "\"submit\"");
        assert_eq!(Capability::Publish.as_str(), "publish");
    }

    #[test]
    fn role_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::PlatformAdmin).unwrap(),
            "\"platform_admin\""
        );
    }
}
