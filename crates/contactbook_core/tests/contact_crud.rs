use contactbook_core::{
    ContactDraft, ContactField, ContactRepository, ContactService, ContactValidationError,
    InMemoryContactRepository, ListOrder, NameRejection, RepoError,
};

fn ada() -> ContactDraft {
    ContactDraft::new("Ada Lovelace", "(555) 123-4567", "ada@example.com")
}

fn grace() -> ContactDraft {
    ContactDraft::new("Grace Hopper", "+1-555-987-6543", "grace@navy.mil")
}

fn alan() -> ContactDraft {
    ContactDraft::new("Alan Turing", "555.246.8100", "alan@bletchley.uk")
}

#[test]
fn create_assigns_sequential_ids_from_one() {
    let mut repo = InMemoryContactRepository::new();

    let first = repo.create_contact(&ada()).unwrap();
    let second = repo.create_contact(&grace()).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.name, "Ada Lovelace");
    assert_eq!(repo.len(), 2);
    assert_eq!(repo.get_contact(2).unwrap(), second);
}

#[test]
fn stored_text_is_kept_exactly() {
    let mut repo = InMemoryContactRepository::new();
    let stored = repo.create_contact(&grace()).unwrap();
    assert_eq!(stored.phone, "+1-555-987-6543");
    assert_eq!(stored.email, "grace@navy.mil");
}

#[test]
fn invalid_draft_is_rejected_without_consuming_an_id() {
    let mut repo = InMemoryContactRepository::new();

    let mut invalid = ada();
    invalid.name = "9Lives".to_string();
    let err = repo.create_contact(&invalid).unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ContactValidationError::Name(
            NameRejection::LeadingDigit { position: 0 }
        ))
    );
    assert!(repo.is_empty());

    let created = repo.create_contact(&ada()).unwrap();
    assert_eq!(created.id, 1);
}

#[test]
fn ids_are_never_reused_after_removal() {
    let mut repo = InMemoryContactRepository::new();
    repo.create_contact(&ada()).unwrap();
    let second = repo.create_contact(&grace()).unwrap();

    repo.remove_contact(second.id).unwrap();
    let third = repo.create_contact(&alan()).unwrap();

    assert_eq!(third.id, 3);
    assert!(repo.get_contact(2).is_none());
}

#[test]
fn removal_keeps_remaining_order() {
    let mut repo = InMemoryContactRepository::new();
    repo.create_contact(&ada()).unwrap();
    repo.create_contact(&grace()).unwrap();
    repo.create_contact(&alan()).unwrap();

    let removed = repo.remove_contact(1).unwrap();
    assert_eq!(removed.name, "Ada Lovelace");

    let ids: Vec<_> = repo.list_contacts().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn remove_and_update_unknown_id_return_not_found() {
    let mut repo = InMemoryContactRepository::new();
    assert_eq!(repo.remove_contact(42).unwrap_err(), RepoError::NotFound(42));

    let phantom = ada().into_contact(42).unwrap();
    assert_eq!(
        repo.update_contact(&phantom).unwrap_err(),
        RepoError::NotFound(42)
    );
}

#[test]
fn update_validates_before_writing() {
    let mut repo = InMemoryContactRepository::new();
    let mut contact = repo.create_contact(&ada()).unwrap();

    contact.email = "not-an-email".to_string();
    let err = repo.update_contact(&contact).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ContactValidationError::Email(_))
    ));
    assert_eq!(repo.get_contact(1).unwrap().email, "ada@example.com");
}

#[test]
fn capacity_limit_rejects_when_full() {
    let mut repo = InMemoryContactRepository::with_capacity_limit(2);
    repo.create_contact(&ada()).unwrap();
    repo.create_contact(&grace()).unwrap();

    let err = repo.create_contact(&alan()).unwrap_err();
    assert_eq!(err, RepoError::DirectoryFull { capacity: 2 });
    assert_eq!(repo.next_id(), Some(3));

    repo.remove_contact(1).unwrap();
    assert_eq!(repo.create_contact(&alan()).unwrap().id, 3);
}

#[test]
fn service_lists_in_requested_order() {
    let mut service = ContactService::new(InMemoryContactRepository::new());
    service.add_contact(&grace()).unwrap();
    service.add_contact(&alan()).unwrap();
    service.add_contact(&ada()).unwrap();
    service.remove_contact(1).unwrap();
    service.add_contact(&grace()).unwrap();

    let names = |order| {
        service
            .list_contacts(order)
            .into_iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(
        names(ListOrder::Insertion),
        vec!["Alan Turing", "Ada Lovelace", "Grace Hopper"]
    );
    assert_eq!(
        names(ListOrder::NameAscending),
        vec!["Ada Lovelace", "Alan Turing", "Grace Hopper"]
    );

    let ids: Vec<_> = service
        .list_contacts(ListOrder::IdAscending)
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn name_order_is_bytewise() {
    let mut service = ContactService::new(InMemoryContactRepository::new());
    service
        .add_contact(&ContactDraft::new("bob", "5551234567", "b@example.com"))
        .unwrap();
    service
        .add_contact(&ContactDraft::new("Zed", "5551234567", "z@example.com"))
        .unwrap();

    let names: Vec<_> = service
        .list_contacts(ListOrder::NameAscending)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Zed", "bob"]);
}

#[test]
fn edit_field_replaces_one_field_and_reports_change() {
    let mut service = ContactService::new(InMemoryContactRepository::new());
    let contact = service.add_contact(&ada()).unwrap();

    let change = service
        .edit_field(contact.id, ContactField::Email, "countess@example.org")
        .unwrap();
    assert_eq!(change.field, ContactField::Email);
    assert_eq!(change.old, "ada@example.com");
    assert_eq!(change.new, "countess@example.org");

    let stored = service.find_by_id(contact.id).unwrap();
    assert_eq!(stored.email, "countess@example.org");
    assert_eq!(stored.name, "Ada Lovelace");
}

#[test]
fn edit_field_rejection_leaves_record_unchanged() {
    let mut service = ContactService::new(InMemoryContactRepository::new());
    let contact = service.add_contact(&ada()).unwrap();

    let err = service
        .edit_field(contact.id, ContactField::Name, "x")
        .unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ContactValidationError::Name(NameRejection::TooShort {
            len: 1
        }))
    );
    assert_eq!(service.find_by_id(contact.id).unwrap(), contact);

    let err = service
        .edit_field(99, ContactField::Name, "Valid Name")
        .unwrap_err();
    assert_eq!(err, RepoError::NotFound(99));
}

#[test]
fn stored_contacts_always_revalidate() {
    let mut service = ContactService::new(InMemoryContactRepository::new());
    service.add_contact(&ada()).unwrap();
    service.add_contact(&grace()).unwrap();
    service
        .edit_field(2, ContactField::Phone, "(020) 7946-0958")
        .unwrap();

    for contact in service.list_contacts(ListOrder::Insertion) {
        contact.validate().unwrap();
    }
}
