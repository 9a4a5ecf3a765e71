//! Document lifecycle status and the transition table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Capability, StateMachine};

/// Lifecycle status of a controlled document.
///
/// The wire values are the Spanish QMS states the remote store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocumentStatus {
    /// Being written; not yet submitted.
    #[default]
    #[serde(rename = "BORRADOR")]
    Draft,
    /// Submitted and awaiting approval or rejection.
    #[serde(rename = "REVISION")]
    InReview,
    /// Approved but not yet published to the organization.
    #[serde(rename = "APROBADO")]
    Approved,
    /// Published and in force.
    #[serde(rename = "VIGENTE")]
    Effective,
    /// Retired. Terminal.
    #[serde(rename = "OBSOLETO")]
    Obsolete,
}

/// The capability an actor must hold to perform a transition.
///
/// This table is the single source of truth for which edges exist in
/// the lifecycle and who may traverse them. Returns `None` for any
/// (from, to) pair that is not a legal edge.
///
/// | From | To | Capability |
/// |---|---|---|
/// | Draft | InReview | submit |
/// | InReview | Approved | publish |
/// | InReview | Draft | publish (rejection) |
/// | Approved | Effective | publish |
/// | Effective | Obsolete | publish |
pub fn required_capability(from: DocumentStatus, to: DocumentStatus) -> Option<Capability> {
    use DocumentStatus::*;
    match (from, to) {
        (Draft, InReview) => Some(Capability::Submit),
        (InReview, Approved) => Some(Capability::Publish),
        (InReview, Draft) => Some(Capability::Publish),
        (Approved, Effective) => Some(Capability::Publish),
        (Effective, Obsolete) => Some(Capability::Publish),
        _ => None,
    }
}

impl DocumentStatus {
    /// All five lifecycle states, in lifecycle order.
    pub const ALL: [DocumentStatus; 5] = [
        DocumentStatus::Draft,
        DocumentStatus::InReview,
        DocumentStatus::Approved,
        DocumentStatus::Effective,
        DocumentStatus::Obsolete,
    ];

    /// Returns true if the document is published and in force.
    pub fn is_effective(&self) -> bool {
        matches!(self, DocumentStatus::Effective)
    }
}

impl StateMachine for DocumentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        required_capability(*self, *target).is_some()
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DocumentStatus::*;
        match self {
            Draft => vec![InReview],
            InReview => vec![Approved, Draft],
            Approved => vec![Effective],
            Effective => vec![Obsolete],
            Obsolete => vec![],
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentStatus::Draft => "Borrador",
            DocumentStatus::InReview => "Revisión",
            DocumentStatus::Approved => "Aprobado",
            DocumentStatus::Effective => "Vigente",
            DocumentStatus::Obsolete => "Obsoleto",
        };
        write!(f, "{}", s)
    }
}
