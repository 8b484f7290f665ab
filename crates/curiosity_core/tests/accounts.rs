use curiosity_core::store::keys::{notes_key, ACCOUNTS_KEY};
use curiosity_core::{FixedClock, KeyValueStore, LocalSocialStore, MemoryStore, SocialError};
use std::collections::HashSet;
use std::sync::Arc;

fn new_store() -> LocalSocialStore<MemoryStore> {
    LocalSocialStore::with_clock(
        MemoryStore::new(),
        Arc::new(FixedClock::new(1_700_000_000_000)),
    )
}

#[test]
fn register_rejects_duplicate_email_before_username() {
    let store = new_store();
    store.register("a@x.com", "alice", "pw1").unwrap();

    let err = store.register("a@x.com", "bob", "pw2").unwrap_err();
    assert!(matches!(err, SocialError::DuplicateEmail));

    let err = store.register("a@x.com", "alice", "pw2").unwrap_err();
    assert!(matches!(err, SocialError::DuplicateEmail));

    let err = store.register("b@x.com", "alice", "pw2").unwrap_err();
    assert!(matches!(err, SocialError::DuplicateUsername));

    assert_eq!(store.list_accounts().unwrap().len(), 1);
}

#[test]
fn registered_accounts_never_share_email_or_username() {
    let store = new_store();
    let attempts = [
        ("a@x.com", "alice"),
        ("b@x.com", "bob"),
        ("a@x.com", "carol"),
        ("c@x.com", "bob"),
        ("d@x.com", "dave"),
    ];
    for (email, username) in attempts {
        let _ = store.register(email, username, "pw");
    }

    let accounts = store.list_accounts().unwrap();
    assert_eq!(accounts.len(), 3);
    let emails: HashSet<_> = accounts.iter().map(|a| a.email.as_str()).collect();
    let usernames: HashSet<_> = accounts.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(emails.len(), accounts.len());
    assert_eq!(usernames.len(), accounts.len());
}

#[test]
fn register_stores_digest_and_provisions_empty_notes() {
    let store = new_store();
    let account_id = store.register("a@x.com", "alice", "pw1").unwrap();

    let account = store.get_account(account_id).unwrap().unwrap();
    assert_eq!(account.initial, "A");
    assert_eq!(account.joined_at, 1_700_000_000_000);
    assert_ne!(account.password_digest, "pw1");

    let raw_accounts = store.backend().get(ACCOUNTS_KEY).unwrap().unwrap();
    assert!(!raw_accounts.contains("pw1"));

    let raw_notes = store.backend().get(&notes_key(account_id)).unwrap();
    assert_eq!(raw_notes.as_deref(), Some("[]"));
}

#[test]
fn login_requires_matching_email_and_password() {
    let store = new_store();
    let account_id = store.register("a@x.com", "alice", "pw1").unwrap();
    store.register("b@x.com", "bob", "pw2").unwrap();

    for (email, password) in [
        ("a@x.com", "pw2"),
        ("b@x.com", "pw1"),
        ("nobody@x.com", "pw1"),
        ("A@X.COM", "pw1"),
    ] {
        let err = store.login(email, password).unwrap_err();
        assert!(matches!(err, SocialError::InvalidCredentials), "{email}");
    }
    assert!(store.current_account().unwrap().is_none());

    let account = store.login("a@x.com", "pw1").unwrap();
    assert_eq!(account.account_id, account_id);
    assert_eq!(
        store.current_account().unwrap().map(|a| a.account_id),
        Some(account_id)
    );
}

#[test]
fn logout_clears_session_and_is_idempotent() {
    let store = new_store();
    store.register("a@x.com", "alice", "pw1").unwrap();
    store.login("a@x.com", "pw1").unwrap();

    store.logout().unwrap();
    assert!(store.current_account().unwrap().is_none());
    store.logout().unwrap();
    assert!(store.current_account().unwrap().is_none());
}

#[test]
fn failed_login_keeps_existing_session() {
    let store = new_store();
    let alice = store.register("a@x.com", "alice", "pw1").unwrap();
    store.register("b@x.com", "bob", "pw2").unwrap();
    store.login("a@x.com", "pw1").unwrap();

    store.login("b@x.com", "wrong").unwrap_err();
    assert_eq!(
        store.current_account().unwrap().map(|a| a.account_id),
        Some(alice)
    );
}

#[test]
fn username_lookup_is_exact() {
    let store = new_store();
    let account_id = store.register("a@x.com", "alice", "pw1").unwrap();

    let found = store.find_account_by_username("alice").unwrap().unwrap();
    assert_eq!(found.account_id, account_id);
    assert!(store.find_account_by_username("Alice").unwrap().is_none());
}

#[test]
fn corrupted_directory_reads_as_empty() {
    let store = new_store();
    store.backend().set(ACCOUNTS_KEY, "{not json").unwrap();

    assert!(store.list_accounts().unwrap().is_empty());
    let err = store.login("a@x.com", "pw1").unwrap_err();
    assert!(matches!(err, SocialError::InvalidCredentials));

    store.register("a@x.com", "alice", "pw1").unwrap();
    assert_eq!(store.list_accounts().unwrap().len(), 1);
}
