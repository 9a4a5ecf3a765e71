//! Strongly-typed identifier value objects.
//!
//! All identifiers are opaque strings assigned by the remote document
//! store; the client never fabricates one for a persisted entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from a non-empty string.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(value))
            }

            /// Creates a random id.
            ///
            /// Used by in-memory store implementations that play the
            /// server's id-minting role, and by tests.
            pub fn random() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a controlled document.
    DocumentId,
    "document_id"
);

string_id!(
    /// Unique identifier for a KPI.
    KpiId,
    "kpi_id"
);

string_id!(
    /// Unique identifier for a document history entry.
    HistoryEntryId,
    "history_entry_id"
);

string_id!(
    /// Unique identifier for a platform user.
    UserId,
    "user_id"
);
