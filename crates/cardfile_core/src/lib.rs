//! Core domain logic for Cardfile.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;
pub mod view;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactDraft, ContactGroup, ContactId, ContactPatch};
pub use service::contact_service::{ContactService, ContactServiceError, ServiceResult};
pub use store::{
    seed_contacts, ContactStore, DetachedContactStore, LoadOutcome, LoadSource,
    SqliteContactStore, StoreError, StoreResult, CONTACTS_SLOT_KEY,
};
pub use validation::{validate_draft, validate_patch, FieldErrors};
pub use view::{compose_view, GroupFilter, SortOrder, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
