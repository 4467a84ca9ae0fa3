//! Behavior every `ContactRepository` implementation must share.
//!
//! The same checks run against the array-backed repository and the
//! map-backed mock through a trait object.

mod mocks;

use contact_book::domain::ContactValidator;
use contact_book::metrics::ValidationMetrics;
use contact_book::repositories::{ArrayContactRepository, ContactRepository};
use contact_book::{Contact, ContactError};
use mocks::MockContactRepository;

fn contact(id: &str) -> Contact {
    Contact::with_validator(
        ContactValidator::new(ValidationMetrics::new()),
        id,
        "Jane",
        "Doe",
        "1234567890",
        "123 Lane",
    )
    .unwrap()
}

fn implementations(capacity: usize) -> Vec<(&'static str, Box<dyn ContactRepository>)> {
    let array: Box<dyn ContactRepository> =
        Box::new(ArrayContactRepository::with_capacity(capacity));
    let map: Box<dyn ContactRepository> = Box::new(MockContactRepository::with_capacity(capacity));
    vec![("array", array), ("map", map)]
}

#[test]
fn test_add_find_delete_cycle() {
    for (name, mut repo) in implementations(10) {
        repo.add(contact("a")).unwrap();
        repo.add(contact("b")).unwrap();
        assert_eq!(repo.size(), 2, "{}", name);

        assert_eq!(repo.find_by_id("a").unwrap().contact_id(), "a", "{}", name);
        assert!(repo.find_by_id("c").is_none(), "{}", name);

        repo.delete_by_id("a").unwrap();
        assert_eq!(repo.size(), 1, "{}", name);
        assert!(repo.find_by_id("a").is_none(), "{}", name);
        assert!(repo.find_by_id("b").is_some(), "{}", name);
    }
}

#[test]
fn test_duplicate_and_capacity_errors() {
    for (name, mut repo) in implementations(2) {
        repo.add(contact("a")).unwrap();
        assert_eq!(
            repo.add(contact("a")).unwrap_err(),
            ContactError::DuplicateId("a".to_string()),
            "{}",
            name
        );

        repo.add(contact("b")).unwrap();
        assert_eq!(
            repo.add(contact("c")).unwrap_err(),
            ContactError::CapacityExceeded { capacity: 2 },
            "{}",
            name
        );
        assert_eq!(repo.size(), 2, "{}", name);
    }
}

#[test]
fn test_delete_missing_is_not_found() {
    for (name, mut repo) in implementations(5) {
        repo.add(contact("a")).unwrap();
        assert_eq!(
            repo.delete_by_id("zzz").unwrap_err(),
            ContactError::NotFound("zzz".to_string()),
            "{}",
            name
        );
        assert_eq!(repo.size(), 1, "{}", name);
    }
}

#[test]
fn test_mutable_lookup_edits_stored_contact() {
    for (name, mut repo) in implementations(5) {
        repo.add(contact("a")).unwrap();
        repo.find_by_id_mut("a")
            .unwrap()
            .set_address("8818 East Brooks")
            .unwrap();
        assert_eq!(
            repo.find_by_id("a").unwrap().address(),
            "8818 East Brooks",
            "{}",
            name
        );
    }
}

#[test]
fn test_array_repository_keeps_insertion_order() {
    let mut repo = ArrayContactRepository::new();
    for id in ["first", "second", "third", "fourth"] {
        repo.add(contact(id)).unwrap();
    }
    repo.delete_by_id("first").unwrap();
    repo.delete_by_id("third").unwrap();

    let ids: Vec<&str> = repo.iter().map(Contact::contact_id).collect();
    assert_eq!(ids, vec!["second", "fourth"]);
}
