//! Actor-visible lifecycle actions for a document.
//!
//! Feeds the UI action menus: given a document and the acting user, this
//! catalog yields every action the actor may trigger right now. The
//! yield order is a user-facing contract (menu order) and must not
//! change.

use crate::domain::foundation::{Actor, Capability};
use crate::ports::PermissionOracle;

use super::{Document, DocumentStatus};

/// An action an actor can trigger on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentAction {
    /// Approve a document under review.
    Approve,
    /// Reject a document under review back to draft.
    Reject,
    /// Publish an approved document.
    Publish,
    /// Retire an effective document.
    Retire,
    /// Send a draft into review.
    SubmitForReview,
    /// Start a new version from this document.
    CreateNewVersion,
    /// Download the stored content. Not lifecycle-gated.
    Download,
    /// Open the detail/editor view. Available to everyone.
    ViewDetails,
}

impl DocumentAction {
    /// The lifecycle status this action transitions to, if it is a
    /// transition action.
    pub fn target_status(&self) -> Option<DocumentStatus> {
        match self {
            DocumentAction::Approve => Some(DocumentStatus::Approved),
            DocumentAction::Reject => Some(DocumentStatus::Draft),
            DocumentAction::Publish => Some(DocumentStatus::Effective),
            DocumentAction::Retire => Some(DocumentStatus::Obsolete),
            DocumentAction::SubmitForReview => Some(DocumentStatus::InReview),
            DocumentAction::CreateNewVersion
            | DocumentAction::Download
            | DocumentAction::ViewDetails => None,
        }
    }
}

/// Computes the actions visible to `actor` on `document`.
///
/// Rules are evaluated independently and unioned; the returned sequence
/// is finite, non-restartable, and recomputed on every call. Yield order
/// is the fixed rule order below.
pub fn visible_actions(
    document: &Document,
    actor: &Actor,
    oracle: &dyn PermissionOracle,
) -> impl Iterator<Item = DocumentAction> {
    use DocumentAction::*;
    use DocumentStatus::*;

    let can_publish = oracle.has_permission(actor, Capability::Publish);
    let can_submit = oracle.has_permission(actor, Capability::Submit);
    let can_create = oracle.has_permission(actor, Capability::Create);
    let can_download = oracle.has_permission(actor, Capability::Download);
    let is_admin = actor.is_platform_admin();
    let status = document.status();

    let mut actions = Vec::new();
    if can_publish && status == InReview {
        actions.push(Approve);
        actions.push(Reject);
    }
    if can_publish && status == Approved {
        actions.push(Publish);
    }
    if can_publish && status == Effective {
        actions.push(Retire);
    }
    if can_submit && status == Draft {
        actions.push(SubmitForReview);
    }
    if can_create && (status == Effective || is_admin) {
        actions.push(CreateNewVersion);
    }
    if can_download || is_admin {
        actions.push(Download);
    }
    actions.push(ViewDetails);

    actions.into_iter()
}
