//! Unit tests for newsletter module.

use sabor::constants::{INVALID_EMAIL_MESSAGE, STORAGE_FAILURE_MESSAGE, SUBSCRIBERS_STORAGE_KEY};
use sabor::newsletter::{NewsletterForm, subscribers};
use sabor::storage::{KeyValueStore, MemoryStore, save_json};

#[test]
fn test_new_form_is_idle() {
    let form = NewsletterForm::new();
    assert_eq!(form, NewsletterForm::Idle);
    assert!(!form.is_submitted());
    assert_eq!(form.error(), None);
}

#[test]
fn test_valid_new_email_submits_and_appends_once() {
    let store = MemoryStore::new();
    let mut form = NewsletterForm::new();

    form.submit("guest@example.com", &store);

    assert!(form.is_submitted());
    assert_eq!(subscribers(&store).unwrap(), vec!["guest@example.com"]);
}

#[test]
fn test_appends_to_existing_list() {
    let store = MemoryStore::new();
    save_json(&store, SUBSCRIBERS_STORAGE_KEY, &vec!["first@example.com"]).unwrap();

    NewsletterForm::new().submit("second@example.com", &store);

    assert_eq!(
        subscribers(&store).unwrap(),
        vec!["first@example.com", "second@example.com"]
    );
}

#[test]
fn test_duplicate_email_not_added_but_still_submitted() {
    let store = MemoryStore::new();
    NewsletterForm::new().submit("guest@example.com", &store);

    let mut again = NewsletterForm::new();
    again.submit("guest@example.com", &store);

    assert!(again.is_submitted());
    assert_eq!(subscribers(&store).unwrap().len(), 1);
}

#[test]
fn test_invalid_emails_leave_store_untouched() {
    for email in ["", "guest", "guest@example", "@example.com", "guest @example.com"] {
        let store = MemoryStore::new();
        let mut form = NewsletterForm::new();
        form.submit(email, &store);

        assert_eq!(form.error(), Some(INVALID_EMAIL_MESSAGE), "email: {email:?}");
        assert!(!form.is_submitted());
        assert!(store.is_empty(), "store touched for {email:?}");
    }
}

#[test]
fn test_retry_after_invalid() {
    let store = MemoryStore::new();
    let mut form = NewsletterForm::new();

    form.submit("nope", &store);
    assert!(form.error().is_some());

    form.submit("yes@example.com", &store);
    assert!(form.is_submitted());
    assert_eq!(form.error(), None);
}

#[test]
fn test_storage_failure_shows_generic_error() {
    let store = MemoryStore::new();
    store.set_failing(true);
    let mut form = NewsletterForm::new();

    form.submit("guest@example.com", &store);

    assert_eq!(form.error(), Some(STORAGE_FAILURE_MESSAGE));
    assert!(!form.is_submitted());
}

#[test]
fn test_corrupt_subscriber_list_shows_generic_error() {
    let store = MemoryStore::new();
    store.set(SUBSCRIBERS_STORAGE_KEY, "not json").unwrap();
    let mut form = NewsletterForm::new();

    form.submit("guest@example.com", &store);

    assert_eq!(form.error(), Some(STORAGE_FAILURE_MESSAGE));
    assert_eq!(store.get(SUBSCRIBERS_STORAGE_KEY).unwrap().as_deref(), Some("not json"));
}

#[test]
fn test_submitted_is_terminal() {
    let store = MemoryStore::new();
    let mut form = NewsletterForm::new();
    form.submit("guest@example.com", &store);

    form.submit("other@example.com", &store);
    form.submit("invalid", &store);

    assert!(form.is_submitted());
    assert_eq!(subscribers(&store).unwrap(), vec!["guest@example.com"]);
}

#[test]
fn test_subscribers_empty_by_default() {
    assert!(subscribers(&MemoryStore::new()).unwrap().is_empty());
}

#[test]
fn test_empty_stored_value_counts_as_empty_list() {
    let store = MemoryStore::new();
    store.set(SUBSCRIBERS_STORAGE_KEY, "").unwrap();
    assert!(subscribers(&store).unwrap().is_empty());

    let mut form = NewsletterForm::new();
    form.submit("guest@example.com", &store);

    assert!(form.is_submitted());
    assert_eq!(subscribers(&store).unwrap(), vec!["guest@example.com"]);
}
