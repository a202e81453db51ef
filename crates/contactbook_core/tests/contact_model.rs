use contactbook_core::{Contact, ContactDraft, ContactField};

#[test]
fn contact_serialization_uses_expected_wire_fields() {
    let contact = ContactDraft::new("Ada Lovelace", "(555) 123-4567", "ada@example.com")
        .into_contact(3)
        .unwrap();

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["phone"], "(555) 123-4567");
    assert_eq!(json["email"], "ada@example.com");

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}

#[test]
fn deserialize_rejects_invalid_fields() {
    let value = serde_json::json!({
        "id": 1,
        "name": "123John",
        "phone": "555-123-4567",
        "email": "john@example.com"
    });

    let err = serde_json::from_value::<Contact>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("invalid name: digit at position 0 appears before any letter"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_zero_id() {
    let value = serde_json::json!({
        "id": 0,
        "name": "John",
        "phone": "555-123-4567",
        "email": "john@example.com"
    });

    let err = serde_json::from_value::<Contact>(value).unwrap_err();
    assert!(err.to_string().contains("contact id must be positive"));
}

#[test]
fn field_enum_serializes_snake_case() {
    let json = serde_json::to_value(ContactField::ALL).unwrap();
    assert_eq!(json, serde_json::json!(["name", "phone", "email"]));
    assert_eq!(ContactField::Phone.to_string(), "phone");
}

#[test]
fn field_accessor_matches_struct_fields() {
    let contact = ContactDraft::new("Grace", "5551234567", "grace@example.com")
        .into_contact(9)
        .unwrap();
    assert_eq!(contact.field(ContactField::Name), contact.name);
    assert_eq!(contact.field(ContactField::Phone), contact.phone);
    assert_eq!(contact.field(ContactField::Email), contact.email);
}
