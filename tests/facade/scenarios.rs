//! Behavioural scenarios for the six facade operations.

use student_registry::facade::{DeleteRequest, FindRequest, UpdateRequest};
use student_registry::RecordFields;

use crate::support::{ana, empty_facade, student};

#[test]
fn empty_store_counts_zero_and_lists_nothing() {
    let facade = empty_facade();

    assert_eq!(facade.count().unwrap().count, 0);
    assert!(facade.list_all().unwrap().records.is_empty());
}

#[test]
fn each_successful_add_increments_count() {
    let facade = empty_facade();

    for (i, mail) in ["a@x.com", "b@x.com", "c@x.com"].iter().enumerate() {
        let response = facade.add(student("S", mail)).unwrap();
        assert!(response.success);
        assert_eq!(facade.count().unwrap().count, i + 1);
    }
}

#[test]
fn add_returns_created_record_with_generated_id() {
    let facade = empty_facade();

    let response = facade.add(ana()).unwrap();
    assert!(response.success);
    assert!(!response.message.is_empty());

    let record = response.record.unwrap();
    assert!(!record.id.is_empty());
    assert_eq!(record.name, "Ana");
    assert_eq!(record.lastname, "Gomez");
    assert_eq!(record.mail, "a@x.com");
    assert_eq!(record.phone, "");
}

#[test]
fn duplicate_mail_is_rejected_without_creating_a_record() {
    let facade = empty_facade();

    assert!(facade.add(ana()).unwrap().success);

    let second = facade.add(student("Other", "a@x.com")).unwrap();
    assert!(!second.success);
    assert!(second.record.is_none());
    assert!(!second.message.is_empty());
    assert_eq!(facade.count().unwrap().count, 1);
}

#[test]
fn find_is_case_insensitive_substring_on_name() {
    let facade = empty_facade();
    facade.add(ana()).unwrap();

    let response = facade.find_by_name(FindRequest::new("ana")).unwrap();
    assert!(response.found);
    assert_eq!(response.record.unwrap().name, "Ana");

    let response = facade.find_by_name(FindRequest::new("N")).unwrap();
    assert!(response.found);
}

#[test]
fn find_without_match_reports_not_found() {
    let facade = empty_facade();
    facade.add(ana()).unwrap();

    let response = facade.find_by_name(FindRequest::new("Pedro")).unwrap();
    assert!(!response.found);
    assert!(response.record.is_none());
    assert!(!response.message.is_empty());
}

#[test]
fn find_does_not_search_lastname() {
    let facade = empty_facade();
    facade.add(ana()).unwrap();

    let response = facade.find_by_name(FindRequest::new("Gomez")).unwrap();
    assert!(!response.found);
}

#[test]
fn update_unknown_id_fails_and_leaves_store_unchanged() {
    let facade = empty_facade();
    facade.add(ana()).unwrap();
    let before = facade.list_all().unwrap();

    let response = facade
        .update(UpdateRequest::new(
            "bogus",
            RecordFields::new("Name", "Lastname", "n@x.com"),
        ))
        .unwrap();

    assert!(!response.success);
    assert!(response.record.is_none());
    assert!(!response.message.is_empty());
    assert_eq!(facade.list_all().unwrap(), before);
}

#[test]
fn update_to_mail_of_another_record_fails() {
    let facade = empty_facade();
    let first = facade.add(ana()).unwrap().record.unwrap();
    facade.add(student("Luis", "l@x.com")).unwrap();

    let response = facade
        .update(UpdateRequest::new(
            &first.id,
            RecordFields::new("Ana", "Gomez", "l@x.com"),
        ))
        .unwrap();

    assert!(!response.success);
    assert!(response.record.is_none());
    assert_eq!(facade.list_all().unwrap().records[0].mail, "a@x.com");
}

#[test]
fn add_then_update_then_list_shows_new_fields_at_same_id() {
    let facade = empty_facade();
    let added = facade.add(ana()).unwrap().record.unwrap();

    let updated = facade
        .update(UpdateRequest::new(
            &added.id,
            RecordFields::new("Ana María", "Gomez Paz", "am@x.com")
                .with_phone("+54 11 7777-8888")
                .with_city("Buenos Aires"),
        ))
        .unwrap();
    assert!(updated.success);

    let records = facade.list_all().unwrap().records;
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, added.id);
    assert_eq!(record.name, "Ana María");
    assert_eq!(record.lastname, "Gomez Paz");
    assert_eq!(record.mail, "am@x.com");
    assert_eq!(record.phone, "+54 11 7777-8888");
    assert_eq!(record.street, "");
    assert_eq!(record.city, "Buenos Aires");
}

#[test]
fn delete_removes_exactly_that_record_once() {
    let facade = empty_facade();
    let a = facade.add(student("A", "a@x.com")).unwrap().record.unwrap();
    let b = facade.add(student("B", "b@x.com")).unwrap().record.unwrap();

    let response = facade.delete(DeleteRequest::new(&a.id)).unwrap();
    assert!(response.success);
    assert!(response.message.contains("A Tester"));

    let records = facade.list_all().unwrap().records;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, b.id);

    let again = facade.delete(DeleteRequest::new(&a.id)).unwrap();
    assert!(!again.success);
    assert!(!again.message.is_empty());
}

#[test]
fn deleted_mail_can_be_registered_again() {
    let facade = empty_facade();
    let first = facade.add(ana()).unwrap().record.unwrap();
    facade.delete(DeleteRequest::new(&first.id)).unwrap();

    let second = facade.add(ana()).unwrap();
    assert!(second.success);
    assert_ne!(second.record.unwrap().id, first.id);
}

#[test]
fn facade_clones_share_the_store() {
    let facade = empty_facade();
    let other = facade.clone();

    facade.add(ana()).unwrap();
    assert_eq!(other.count().unwrap().count, 1);
}
