//! Contact lifecycle coordination.
//!
//! # Responsibility
//! - Drive store mutations and keep an in-memory working set in sync
//!   with what the store actually persisted.
//! - Gate every mutation behind input validation.
//!
//! # Invariants
//! - The working set is only ever reconciled from store return values,
//!   never from locally constructed records.
//! - Validation failures leave both the working set and the slot
//!   untouched.

use crate::model::contact::{Contact, ContactDraft, ContactPatch};
use crate::store::{ContactStore, LoadSource, StoreError};
use crate::validation::{validate_draft, validate_patch, FieldErrors};
use crate::view::{compose_view, ViewState};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ContactServiceError>;

/// Failure of a coordinated operation: bad input or a store fault.
#[derive(Debug)]
pub enum ContactServiceError {
    Invalid(FieldErrors),
    Store(StoreError),
}

impl Display for ContactServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "invalid contact input: {errors}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContactServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<FieldErrors> for ContactServiceError {
    fn from(value: FieldErrors) -> Self {
        Self::Invalid(value)
    }
}

impl From<StoreError> for ContactServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Coordinator between the input boundary, the store, and the composer.
pub struct ContactService<S: ContactStore> {
    store: S,
    contacts: Vec<Contact>,
    load_source: LoadSource,
}

impl<S: ContactStore> ContactService<S> {
    /// Loads the collection through `store` and starts coordinating it.
    pub fn open(store: S) -> ServiceResult<Self> {
        let outcome = store.load()?;
        if outcome.source.is_degraded() {
            warn!(
                "event=service_open module=service status=degraded source={:?}",
                outcome.source
            );
        } else {
            info!(
                "event=service_open module=service status=ok count={}",
                outcome.contacts.len()
            );
        }
        Ok(Self {
            store,
            contacts: outcome.contacts,
            load_source: outcome.source,
        })
    }

    /// Records currently held in the working set.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// How the working set was obtained at `open` time.
    pub fn load_source(&self) -> &LoadSource {
        &self.load_source
    }

    /// Validates a draft, persists it, and appends the stored record to
    /// the working set.
    pub fn add_contact(&mut self, draft: ContactDraft) -> ServiceResult<Contact> {
        validate_draft(&draft)?;
        let contact = self.store.create(draft)?;
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    /// Validates a patch and merges it over the record with `id`.
    ///
    /// `None` means the id was absent; the working set and the slot are
    /// left as they were.
    pub fn edit_contact(
        &mut self,
        id: &str,
        patch: &ContactPatch,
    ) -> ServiceResult<Option<Contact>> {
        validate_patch(patch)?;
        let Some(updated) = self.store.update(id, patch)? else {
            return Ok(None);
        };

        if let Some(held) = self.contacts.iter_mut().find(|contact| contact.id == id) {
            *held = updated.clone();
        }
        Ok(Some(updated))
    }

    /// Removes the record with `id`; `true` iff the store removed
    /// something.
    pub fn remove_contact(&mut self, id: &str) -> ServiceResult<bool> {
        let removed = self.store.delete(id)?;
        if removed {
            self.contacts.retain(|contact| contact.id != id);
        }
        Ok(removed)
    }

    /// Looks up one record straight from the store.
    pub fn find_contact(&self, id: &str) -> ServiceResult<Option<Contact>> {
        Ok(self.store.find_by_id(id)?)
    }

    /// Composes the visible subset of the working set for `state`.
    pub fn visible_contacts(&self, state: &ViewState) -> Vec<Contact> {
        compose_view(&self.contacts, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DetachedContactStore;

    fn draft(name: &str, email: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            group: None,
        }
    }

    #[test]
    fn open_over_detached_store_reports_the_degrade() {
        let service = ContactService::open(DetachedContactStore::new()).unwrap();
        assert!(service.contacts().is_empty());
        assert_eq!(service.load_source(), &LoadSource::Detached);
        assert!(service.load_source().is_degraded());
    }

    #[test]
    fn invalid_draft_is_rejected_before_the_store_is_touched() {
        let mut service = ContactService::open(DetachedContactStore::new()).unwrap();
        let err = service.add_contact(draft("", "ada@lovelace.dev")).unwrap_err();
        assert!(matches!(err, ContactServiceError::Invalid(_)));
        assert!(service.contacts().is_empty());
    }

    #[test]
    fn added_record_joins_the_working_set_for_the_session() {
        let mut service = ContactService::open(DetachedContactStore::new()).unwrap();
        let added = service.add_contact(draft("Ada", "ada@lovelace.dev")).unwrap();
        assert_eq!(service.contacts(), [added.clone()]);

        // The detached store persisted nothing, so a removal reports
        // false and the working set follows the store's verdict.
        assert!(!service.remove_contact(&added.id).unwrap());
        assert_eq!(service.contacts().len(), 1);
    }

    #[test]
    fn invalid_patch_is_rejected_before_the_store_is_touched() {
        let mut service = ContactService::open(DetachedContactStore::new()).unwrap();
        let patch = ContactPatch {
            email: Some("nope".to_string()),
            ..ContactPatch::default()
        };
        let err = service.edit_contact("1", &patch).unwrap_err();
        assert!(matches!(err, ContactServiceError::Invalid(_)));
    }

    #[test]
    fn editing_an_absent_record_is_an_outcome_not_an_error() {
        let mut service = ContactService::open(DetachedContactStore::new()).unwrap();
        assert_eq!(
            service.edit_contact("missing", &ContactPatch::default()).unwrap(),
            None
        );
    }

    #[test]
    fn visible_contacts_go_through_the_composer() {
        let mut service = ContactService::open(DetachedContactStore::new()).unwrap();
        service.add_contact(draft("Ada", "ada@lovelace.dev")).unwrap();
        service.add_contact(draft("Grace", "grace@navy.mil")).unwrap();

        let state = ViewState {
            search_term: "gra".to_string(),
            ..ViewState::default()
        };
        let visible = service.visible_contacts(&state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Grace");
    }
}
