//! Input-boundary validation for contact drafts and patches.
//!
//! # Responsibility
//! - Reject unusable field values before they reach the store.
//!
//! # Invariants
//! - Messages are stable strings surfaced verbatim at the input boundary.
//! - A patch is validated only on the fields it carries.
//! - Phone and group are free-form here; no check applies to them.

use crate::model::contact::{ContactDraft, ContactPatch};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

/// Shape check only: something, an `@`, something, a dot, something,
/// with no whitespace anywhere.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

/// Per-field failure messages for one draft or patch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(name) = &self.name {
            parts.push(name.as_str());
        }
        if let Some(email) = &self.email {
            parts.push(email.as_str());
        }
        write!(f, "{}", parts.join("; "))
    }
}

/// Checks a full draft ahead of `create`.
pub fn validate_draft(draft: &ContactDraft) -> Result<(), FieldErrors> {
    let errors = FieldErrors {
        name: check_name(&draft.name),
        email: check_email(&draft.email),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks only the fields a patch carries ahead of `update`.
pub fn validate_patch(patch: &ContactPatch) -> Result<(), FieldErrors> {
    let errors = FieldErrors {
        name: patch.name.as_deref().and_then(check_name),
        email: patch.email.as_deref().and_then(check_email),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some(NAME_REQUIRED.to_string());
    }
    None
}

fn check_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some(EMAIL_REQUIRED.to_string());
    }
    if !EMAIL_RE.is_match(email) {
        return Some(EMAIL_INVALID.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contact::ContactGroup;

    fn draft(name: &str, email: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            group: None,
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(validate_draft(&draft("Ada", "ada@lovelace.dev")), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected_with_stable_message() {
        let errors = validate_draft(&draft("   ", "ada@lovelace.dev")).unwrap_err();
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(errors.email, None);
    }

    #[test]
    fn blank_email_is_rejected_before_the_shape_check() {
        let errors = validate_draft(&draft("Ada", "")).unwrap_err();
        assert_eq!(errors.email.as_deref(), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn malformed_email_is_rejected_with_stable_message() {
        for bad in ["plainaddress", "a@b", "a b@c.d", "a@b.", "@c.d"] {
            let errors = validate_draft(&draft("Ada", bad)).unwrap_err();
            assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID), "case: {bad}");
        }
    }

    #[test]
    fn both_failures_are_reported_together() {
        let errors = validate_draft(&draft("", "not-an-email")).unwrap_err();
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
        assert_eq!(
            errors.to_string(),
            format!("{NAME_REQUIRED}; {EMAIL_INVALID}")
        );
    }

    #[test]
    fn empty_patch_passes() {
        assert_eq!(validate_patch(&ContactPatch::default()), Ok(()));
    }

    #[test]
    fn patch_checks_only_carried_fields() {
        let patch = ContactPatch {
            group: Some(ContactGroup::Family),
            ..ContactPatch::default()
        };
        assert_eq!(validate_patch(&patch), Ok(()));

        let patch = ContactPatch {
            email: Some("nope".to_string()),
            ..ContactPatch::default()
        };
        let errors = validate_patch(&patch).unwrap_err();
        assert_eq!(errors.name, None);
        assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
    }

    #[test]
    fn patch_cannot_blank_a_required_field() {
        let patch = ContactPatch {
            name: Some(String::new()),
            ..ContactPatch::default()
        };
        let errors = validate_patch(&patch).unwrap_err();
        assert_eq!(errors.name.as_deref(), Some(NAME_REQUIRED));
    }
}
