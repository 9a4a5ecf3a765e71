//! Foundation value objects shared across the domain.

mod actor;
mod errors;
mod ids;
mod review_date;
mod state_machine;
mod timestamp;

pub use actor::{Actor, Capability, Role};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DocumentId, HistoryEntryId, KpiId, UserId};
pub use review_date::ReviewDate;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
