//! Document-specific error types.

use crate::domain::foundation::{Capability, DocumentId, DomainError, ErrorCode, ValidationError};

use super::DocumentStatus;

/// Errors raised by document lifecycle operations.
///
/// `IllegalTransition` and `PermissionDenied` are raised synchronously
/// before any remote call and carry their own explanatory messages;
/// they must never be collapsed into generic failure text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The requested status pair is not in the transition table.
    IllegalTransition {
        from: DocumentStatus,
        to: DocumentStatus,
    },
    /// The actor lacks the capability the transition requires.
    PermissionDenied { capability: Capability },
    /// The operation target is absent from the authoritative collection.
    NotFound(DocumentId),
    /// Network/store failure, opaque to the core.
    Remote(String),
    /// A field failed validation.
    Validation { field: String, message: String },
}

impl DocumentError {
    pub fn illegal_transition(from: DocumentStatus, to: DocumentStatus) -> Self {
        DocumentError::IllegalTransition { from, to }
    }

    pub fn permission_denied(capability: Capability) -> Self {
        DocumentError::PermissionDenied { capability }
    }

    pub fn not_found(id: DocumentId) -> Self {
        DocumentError::NotFound(id)
    }

    pub fn remote(message: impl Into<String>) -> Self {
        DocumentError::Remote(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DocumentError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DocumentError::IllegalTransition { .. } => ErrorCode::IllegalTransition,
            DocumentError::PermissionDenied { .. } => ErrorCode::PermissionDenied,
            DocumentError::NotFound(_) => ErrorCode::DocumentNotFound,
            DocumentError::Remote(_) => ErrorCode::RemoteFailure,
            DocumentError::Validation { .. } => ErrorCode::ValidationFailed,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DocumentError::IllegalTransition { from, to } => {
                format!("No transition exists from {} to {}", from, to)
            }
            DocumentError::PermissionDenied { capability } => {
                format!("This action requires the '{}' permission", capability)
            }
            DocumentError::NotFound(id) => format!("Document not found: {}", id),
            DocumentError::Remote(msg) => format!("Remote store error: {}", msg),
            DocumentError::Validation { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
        }
    }
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DocumentError {}

impl From<DomainError> for DocumentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DocumentNotFound => match err
                .details
                .get("document_id")
                .and_then(|id| DocumentId::new(id.clone()).ok())
            {
                Some(id) => DocumentError::NotFound(id),
                None => DocumentError::Remote(err.to_string()),
            },
            ErrorCode::PermissionDenied => DocumentError::Remote(err.to_string()),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                DocumentError::Validation {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.to_string(),
                }
            }
            _ => DocumentError::Remote(err.to_string()),
        }
    }
}

impl From<ValidationError> for DocumentError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::BelowMinimum { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        DocumentError::Validation {
            field,
            message: err.to_string(),
        }
    }
}
