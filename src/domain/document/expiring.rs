//! Derivation of the "expiring soon" document subset.
//!
//! Recomputed by the workspace whenever the authoritative document
//! collection changes; never persisted and never mutated directly.

use crate::domain::foundation::ReviewDate;

use super::Document;

/// Width of the expiring window, in days. Both bounds inclusive.
pub const EXPIRING_WINDOW_DAYS: i64 = 30;

/// Selects the effective documents whose review date falls within
/// `[today, today + EXPIRING_WINDOW_DAYS]`.
///
/// Comparison is calendar-date only. An empty input yields an empty
/// set, which is a valid result, not an "uncomputed" state.
pub fn expiring_documents(documents: &[Document], today: ReviewDate) -> Vec<Document> {
    let upper = today.plus_days(EXPIRING_WINDOW_DAYS);
    documents
        .iter()
        .filter(|doc| {
            doc.status().is_effective() && doc.review_date() >= today && doc.review_date() <= upper
        })
        .cloned()
        .collect()
}
