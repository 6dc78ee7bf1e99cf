//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record persisted in the durable slot.
//! - Provide the id-less draft and field-wise patch shapes used by write
//!   paths.
//!
//! # Invariants
//! - `id` is opaque, unique across the stored collection and never
//!   reassigned after creation.
//! - The wire format omits the `phone`/`group` keys entirely when unset.
//! - Field validation lives at the input boundary, never in this module.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a stored contact.
///
/// Kept as a string alias: seed records carry short literal ids while
/// minted ids are UUIDv4 text, and callers treat both as opaque.
pub type ContactId = String;

/// Fixed grouping taxonomy for contacts.
///
/// Serialized with the human-facing labels (`"Friends"`, `"Work"`, ...) so
/// the slot value stays readable and compatible with previously stored
/// data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactGroup {
    Friends,
    Work,
    Family,
    Other,
}

impl ContactGroup {
    /// All groups in display order, for pickers at the UI boundary.
    pub const ALL: [ContactGroup; 4] = [
        ContactGroup::Friends,
        ContactGroup::Work,
        ContactGroup::Family,
        ContactGroup::Other,
    ];

    /// Returns the display/wire label for this group.
    pub fn label(self) -> &'static str {
        match self {
            Self::Friends => "Friends",
            Self::Work => "Work",
            Self::Family => "Family",
            Self::Other => "Other",
        }
    }

    /// Parses a display label. Empty or unknown labels yield `None`.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Friends" => Some(Self::Friends),
            "Work" => Some(Self::Work),
            "Family" => Some(Self::Family),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Canonical contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Opaque unique id assigned by the store at creation time.
    pub id: ContactId,
    /// Display name; non-empty by the time it reaches the store.
    pub name: String,
    /// Email address; shape-checked at the input boundary.
    pub email: String,
    /// Optional free-form phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Optional group membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<ContactGroup>,
}

impl Contact {
    /// Creates a contact from a draft with a freshly minted unique id.
    pub fn new(draft: ContactDraft) -> Self {
        Self::with_id(mint_contact_id(), draft)
    }

    /// Creates a contact with a caller-provided id.
    ///
    /// Used by the seed set and by tests that need stable ids; the id must
    /// stay unique within whatever collection the record joins.
    pub fn with_id(id: impl Into<ContactId>, draft: ContactDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            group: draft.group,
        }
    }

    /// Merges a partial patch over this record, leaving `id` untouched.
    ///
    /// A `None` patch field keeps the stored value; optional fields can
    /// therefore never be cleared through this path.
    pub fn apply_patch(&mut self, patch: &ContactPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = Some(phone.clone());
        }
        if let Some(group) = patch.group {
            self.group = Some(group);
        }
    }
}

/// Mints a fresh contact id.
///
/// UUIDv4 text, so uniqueness holds for any call sequence, including
/// several creates within one millisecond.
pub fn mint_contact_id() -> ContactId {
    Uuid::new_v4().to_string()
}

/// Id-less shape accepted by the create path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub group: Option<ContactGroup>,
}

impl ContactDraft {
    /// Builds a draft from raw form fields.
    ///
    /// Trims every text field; a phone that trims to empty becomes absent.
    /// The group arrives pre-parsed because pickers only offer the closed
    /// set (an unselected picker is `None`).
    pub fn from_form(name: &str, email: &str, phone: &str, group: Option<ContactGroup>) -> Self {
        let phone = phone.trim();
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            group,
        }
    }
}

/// Field-wise partial update; `None` means "keep the stored value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub group: Option<ContactGroup>,
}

impl ContactPatch {
    /// Returns whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.group.is_none()
    }
}
