use cardfile_core::{Contact, ContactDraft, ContactGroup, ContactPatch};
use serde_json::json;
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn wire_format_spells_out_every_present_field() {
    let contact = Contact {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john.doe@email.com".to_string(),
        phone: Some("+1 (555) 123-4567".to_string()),
        group: Some(ContactGroup::Work),
    };

    let value = serde_json::to_value(&contact).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "1",
            "name": "John Doe",
            "email": "john.doe@email.com",
            "phone": "+1 (555) 123-4567",
            "group": "Work",
        })
    );
}

#[test]
fn wire_format_omits_absent_optional_fields_entirely() {
    let contact = Contact {
        id: "4".to_string(),
        name: "Alice Brown".to_string(),
        email: "alice.brown@email.com".to_string(),
        phone: None,
        group: None,
    };

    let value = serde_json::to_value(&contact).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("phone"));
    assert!(!object.contains_key("group"));
}

#[test]
fn decoding_tolerates_missing_optional_keys() {
    let contact: Contact =
        serde_json::from_str(r#"{"id":"9","name":"Ada","email":"ada@lovelace.dev"}"#).unwrap();
    assert_eq!(contact.phone, None);
    assert_eq!(contact.group, None);
}

#[test]
fn group_labels_round_trip_and_unknown_labels_parse_to_none() {
    for group in ContactGroup::ALL {
        assert_eq!(ContactGroup::from_label(group.label()), Some(group));
    }
    assert_eq!(ContactGroup::from_label("friends"), None);
    assert_eq!(ContactGroup::from_label(""), None);
    assert_eq!(ContactGroup::from_label("Colleagues"), None);
}

#[test]
fn minted_ids_are_unique_and_uuid_shaped() {
    let mut seen = HashSet::new();
    for _ in 0..64 {
        let contact = Contact::new(ContactDraft {
            name: "Ada".to_string(),
            email: "ada@lovelace.dev".to_string(),
            ..ContactDraft::default()
        });
        assert!(Uuid::parse_str(&contact.id).is_ok());
        assert!(seen.insert(contact.id));
    }
}

#[test]
fn from_form_trims_fields_and_drops_blank_phone() {
    let draft = ContactDraft::from_form(
        "  Ada Lovelace ",
        " ada@lovelace.dev ",
        "   ",
        Some(ContactGroup::Friends),
    );
    assert_eq!(draft.name, "Ada Lovelace");
    assert_eq!(draft.email, "ada@lovelace.dev");
    assert_eq!(draft.phone, None);
    assert_eq!(draft.group, Some(ContactGroup::Friends));

    let draft = ContactDraft::from_form("Ada", "ada@lovelace.dev", " 555-0100 ", None);
    assert_eq!(draft.phone.as_deref(), Some("555-0100"));
}

#[test]
fn apply_patch_replaces_carried_fields_and_keeps_the_rest() {
    let mut contact = Contact {
        id: "2".to_string(),
        name: "Jane Smith".to_string(),
        email: "jane.smith@email.com".to_string(),
        phone: Some("+1 (555) 987-6543".to_string()),
        group: Some(ContactGroup::Friends),
    };

    let patch = ContactPatch {
        name: Some("Jane Doe".to_string()),
        group: Some(ContactGroup::Family),
        ..ContactPatch::default()
    };
    contact.apply_patch(&patch);

    assert_eq!(contact.id, "2");
    assert_eq!(contact.name, "Jane Doe");
    assert_eq!(contact.email, "jane.smith@email.com");
    assert_eq!(contact.phone.as_deref(), Some("+1 (555) 987-6543"));
    assert_eq!(contact.group, Some(ContactGroup::Family));
}

#[test]
fn empty_patch_changes_nothing() {
    let mut contact = Contact {
        id: "3".to_string(),
        name: "Bob Johnson".to_string(),
        email: "bob.johnson@email.com".to_string(),
        phone: None,
        group: None,
    };
    let before = contact.clone();

    let patch = ContactPatch::default();
    assert!(patch.is_empty());
    contact.apply_patch(&patch);
    assert_eq!(contact, before);
}
