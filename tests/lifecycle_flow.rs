//! Integration tests for the document lifecycle and synchronization
//! flow.
//!
//! Wires the handlers, workspace, and action catalog through the
//! in-memory adapters, the same composition an embedding application
//! uses minus the real HTTP client.

use std::sync::Arc;

use doc_control::adapters::{ActorPermissionOracle, AutoConfirm, InMemoryRemoteStore};
use doc_control::application::{
    CloneOutcome, CreateNewVersionCommand, CreateNewVersionHandler, DocumentWorkspace,
    RequestTransitionCommand, RequestTransitionHandler, SaveDocumentCommand, SaveDocumentHandler,
    TableEditSession,
};
use doc_control::domain::document::{
    visible_actions, ContentType, Document, DocumentAction, DocumentStatus, DocumentType, Process,
};
use doc_control::domain::foundation::{
    Actor, Capability, DocumentId, ReviewDate, Role, UserId,
};
use doc_control::ports::DocumentPatch;

fn document(id: &str, status: DocumentStatus, review_date: ReviewDate) -> Document {
    Document::reconstitute(
        DocumentId::new(id).unwrap(),
        "Control de registros".to_string(),
        "PR-GC-01".to_string(),
        1,
        Process::Operational,
        None,
        DocumentType::Procedure,
        status,
        UserId::new("user-1").unwrap(),
        "Ana Gómez".to_string(),
        review_date,
        "https://files.example/doc".to_string(),
        ContentType::Spreadsheet,
        Vec::new(),
    )
}

fn actor(role: Role, perms: &[Capability]) -> Actor {
    Actor::new(
        UserId::new("user-2").unwrap(),
        "Luis Prado",
        role,
        perms.iter().copied(),
    )
}

struct Harness {
    store: Arc<InMemoryRemoteStore>,
    workspace: Arc<DocumentWorkspace>,
    transitions: RequestTransitionHandler,
    saves: SaveDocumentHandler,
    clones: CreateNewVersionHandler,
}

fn harness() -> Harness {
    let store = Arc::new(InMemoryRemoteStore::new());
    let workspace = Arc::new(DocumentWorkspace::new(store.clone()));
    let oracle = Arc::new(ActorPermissionOracle::new());
    Harness {
        transitions: RequestTransitionHandler::new(
            store.clone(),
            oracle,
            workspace.clone(),
        ),
        saves: SaveDocumentHandler::new(store.clone(), workspace.clone()),
        clones: CreateNewVersionHandler::new(
            store.clone(),
            Arc::new(AutoConfirm::new()),
            workspace.clone(),
        ),
        store,
        workspace,
    }
}

#[tokio::test]
async fn submit_for_review_updates_collection_and_action_menu() {
    let h = harness();
    h.store
        .seed_document(document("doc-b", DocumentStatus::Effective, ReviewDate::today()))
        .await;
    h.store
        .seed_document(document("doc-a", DocumentStatus::Draft, ReviewDate::today()))
        .await;

    let submitter = actor(Role::Member, &[Capability::Submit]);
    h.workspace.refresh(&submitter).await.unwrap();
    let draft = h
        .workspace
        .document(&DocumentId::new("doc-a").unwrap())
        .await
        .unwrap();

    let confirmed = h
        .transitions
        .handle(RequestTransitionCommand {
            document: draft,
            target: DocumentStatus::InReview,
            actor: submitter,
        })
        .await
        .unwrap();

    assert_eq!(confirmed.status(), DocumentStatus::InReview);
    // History came back from the store, not from any local mutation.
    assert_eq!(confirmed.history().len(), 1);

    // The confirmed document sits at the draft's former position.
    let documents = h.workspace.documents().await;
    assert_eq!(documents[0].id().as_str(), "doc-a");
    assert_eq!(documents[0].status(), DocumentStatus::InReview);
    assert_eq!(documents[1].id().as_str(), "doc-b");

    // A publisher now sees Approve and Reject on it.
    let publisher = actor(Role::Member, &[Capability::Publish]);
    let oracle = ActorPermissionOracle::new();
    let actions: Vec<DocumentAction> =
        visible_actions(&documents[0], &publisher, &oracle).collect();
    assert_eq!(
        actions,
        vec![
            DocumentAction::Approve,
            DocumentAction::Reject,
            DocumentAction::ViewDetails
        ]
    );
}

#[tokio::test]
async fn full_lifecycle_walk_from_draft_to_obsolete() {
    let h = harness();
    h.store
        .seed_document(document("doc-a", DocumentStatus::Draft, ReviewDate::today()))
        .await;
    let submitter = actor(Role::Member, &[Capability::Submit]);
    let publisher = actor(Role::Member, &[Capability::Publish]);
    h.workspace.refresh(&submitter).await.unwrap();

    let steps = [
        (DocumentStatus::InReview, &submitter),
        (DocumentStatus::Approved, &publisher),
        (DocumentStatus::Effective, &publisher),
        (DocumentStatus::Obsolete, &publisher),
    ];
    for (target, who) in steps {
        let current = h
            .workspace
            .document(&DocumentId::new("doc-a").unwrap())
            .await
            .unwrap();
        h.transitions
            .handle(RequestTransitionCommand {
                document: current,
                target,
                actor: who.clone(),
            })
            .await
            .unwrap();
    }

    let final_doc = h
        .workspace
        .document(&DocumentId::new("doc-a").unwrap())
        .await
        .unwrap();
    assert_eq!(final_doc.status(), DocumentStatus::Obsolete);
    // One history entry per accepted transition.
    assert_eq!(final_doc.history().len(), 4);
}

#[tokio::test]
async fn retiring_an_expiring_document_empties_the_derived_set() {
    let h = harness();
    let due_soon = ReviewDate::today().plus_days(10);
    h.store
        .seed_document(document("doc-e", DocumentStatus::Effective, due_soon))
        .await;
    let publisher = actor(Role::Member, &[Capability::Publish]);
    h.workspace.refresh(&publisher).await.unwrap();

    let expiring = h.workspace.expiring_documents().await;
    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].id().as_str(), "doc-e");

    let current = h
        .workspace
        .document(&DocumentId::new("doc-e").unwrap())
        .await
        .unwrap();
    h.transitions
        .handle(RequestTransitionCommand {
            document: current,
            target: DocumentStatus::Obsolete,
            actor: publisher,
        })
        .await
        .unwrap();

    assert!(h.workspace.expiring_documents().await.is_empty());
}

#[tokio::test]
async fn new_version_heads_the_collection_as_a_draft() {
    let h = harness();
    h.store
        .seed_document(document(
            "doc-a",
            DocumentStatus::Effective,
            ReviewDate::today().plus_days(60),
        ))
        .await;
    let creator = actor(Role::Member, &[Capability::Create]);
    h.workspace.refresh(&creator).await.unwrap();

    let outcome = h
        .clones
        .handle(CreateNewVersionCommand {
            document_id: DocumentId::new("doc-a").unwrap(),
        })
        .await
        .unwrap();

    let CloneOutcome::Created(clone) = outcome else {
        panic!("expected Created outcome");
    };
    assert_eq!(clone.version(), 2);
    assert_eq!(clone.status(), DocumentStatus::Draft);

    let documents = h.workspace.documents().await;
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].id(), clone.id());
    assert_eq!(documents[1].id().as_str(), "doc-a");
}

#[tokio::test]
async fn edit_form_save_keeps_lifecycle_state() {
    let h = harness();
    h.store
        .seed_document(document("doc-a", DocumentStatus::InReview, ReviewDate::today()))
        .await;
    let editor = actor(Role::Member, &[Capability::Submit]);
    h.workspace.refresh(&editor).await.unwrap();

    let confirmed = h
        .saves
        .handle(SaveDocumentCommand {
            document_id: DocumentId::new("doc-a").unwrap(),
            patch: DocumentPatch {
                name: Some("Control de registros v2".to_string()),
                review_date: Some(ReviewDate::today().plus_days(180)),
                ..DocumentPatch::default()
            },
            actor: editor,
        })
        .await
        .unwrap();

    assert_eq!(confirmed.name(), "Control de registros v2");
    assert_eq!(confirmed.status(), DocumentStatus::InReview);
    assert_eq!(
        h.workspace.documents().await[0].name(),
        "Control de registros v2"
    );
}

#[tokio::test]
async fn spreadsheet_roundtrip_through_the_edit_session() {
    let h = harness();
    h.store
        .seed_document(document("doc-s", DocumentStatus::Effective, ReviewDate::today()))
        .await;
    let editor = actor(Role::Member, &[Capability::Submit]);
    let id = DocumentId::new("doc-s").unwrap();

    // First load: nothing stored, default schema comes up.
    let mut session = TableEditSession::load(id.clone(), h.store.clone())
        .await
        .unwrap();
    assert_eq!(session.table().columns().len(), 4);
    assert_eq!(session.table().row_count(), 1);

    session.set_cell(0, "Columna 1", "Actividad inicial").unwrap();
    session.add_row();
    session.set_cell(1, "Columna 2", "Responsable").unwrap();
    session.save(&editor).await.unwrap();

    // Second load sees the saved rows verbatim.
    let reloaded = TableEditSession::load(id, h.store.clone()).await.unwrap();
    assert_eq!(reloaded.table().row_count(), 2);
    assert_eq!(reloaded.table().cell(0, "Columna 1"), Some("Actividad inicial"));
    assert_eq!(reloaded.table().cell(1, "Columna 2"), Some("Responsable"));
}

#[tokio::test]
async fn illegal_transition_is_rejected_before_reaching_the_store() {
    let h = harness();
    h.store
        .seed_document(document("doc-a", DocumentStatus::Draft, ReviewDate::today()))
        .await;
    let publisher = actor(Role::Member, &[Capability::Publish]);
    h.workspace.refresh(&publisher).await.unwrap();

    let draft = h
        .workspace
        .document(&DocumentId::new("doc-a").unwrap())
        .await
        .unwrap();
    let result = h
        .transitions
        .handle(RequestTransitionCommand {
            document: draft,
            target: DocumentStatus::Effective,
            actor: publisher,
        })
        .await;

    assert!(result.is_err());
    // The store never saw the write: no history was appended.
    let untouched = h
        .workspace
        .document(&DocumentId::new("doc-a").unwrap())
        .await
        .unwrap();
    assert_eq!(untouched.status(), DocumentStatus::Draft);
    assert!(untouched.history().is_empty());
}
