use chrono::NaiveDateTime;
use contactbook::model::{Contact, DEFAULT_GROUP};

fn sample() -> Contact {
    Contact::create(
        "Ann".into(),
        "+15551234567".into(),
        "ann@example.com".into(),
        "1 Main St".into(),
        None,
    )
}

// ==========================================================================
// CONSTRUCTION TESTS
// ==========================================================================

#[test]
fn create_stamps_both_timestamps_equal() {
    let contact = sample();
    assert_eq!(contact.created_date, contact.last_modified);
}

#[test]
fn create_uses_expected_timestamp_format() {
    let contact = sample();
    assert!(NaiveDateTime::parse_from_str(&contact.created_date, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn create_defaults_group_to_general() {
    let contact = sample();
    assert_eq!(contact.group, DEFAULT_GROUP);
}

#[test]
fn create_keeps_explicit_group() {
    let contact = Contact::create(
        "Bob".into(),
        "15551234567".into(),
        "bob@example.com".into(),
        "2 Side St".into(),
        Some("Work".into()),
    );
    assert_eq!(contact.group, "Work");
}

#[test]
fn touch_restamps_last_modified_and_keeps_created() {
    let mut contact = sample();
    let created = contact.created_date.clone();
    contact.last_modified = "2020-01-01 00:00:00".into();
    contact.touch();
    assert_eq!(contact.created_date, created);
    assert_ne!(contact.last_modified, "2020-01-01 00:00:00");
    assert!(contact.last_modified >= contact.created_date);
}

#[test]
fn contacts_get_distinct_ids() {
    assert_ne!(sample().id, sample().id);
}

// ==========================================================================
// SERDE SHAPE TESTS
// ==========================================================================

#[test]
fn serializes_exactly_seven_named_fields() {
    let value = serde_json::to_value(sample()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 7);
    for key in [
        "name",
        "phone",
        "email",
        "address",
        "group",
        "created_date",
        "last_modified",
    ] {
        assert!(object.contains_key(key), "missing field {}", key);
    }
    assert!(!object.contains_key("id"));
}

#[test]
fn deserializes_from_file_record() {
    let contact: Contact = serde_json::from_str(
        r#"{"name": "Ann", "phone": "+15551234567", "email": "ann@example.com",
            "address": "1 Main St", "group": "General",
            "created_date": "2024-03-01 10:00:00",
            "last_modified": "2024-03-02 11:30:00"}"#,
    )
    .unwrap();
    assert_eq!(contact.name, "Ann");
    assert_eq!(contact.created_date, "2024-03-01 10:00:00");
    assert_eq!(contact.last_modified, "2024-03-02 11:30:00");
}
