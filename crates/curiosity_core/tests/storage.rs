use curiosity_core::store::keys::SESSION_KEY;
use curiosity_core::{KeyValueStore, LocalSocialStore, MemoryStore, SqliteStore, SystemClock};
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

#[test]
fn sqlite_store_set_get_remove() {
    let store = SqliteStore::open_in_memory().unwrap();

    assert!(store.get("missing").unwrap().is_none());
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert!(store.get("k").unwrap().is_none());
}

#[test]
fn state_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.db");

    let (account_id, post_id) = {
        let store = LocalSocialStore::new(SqliteStore::open(&path).unwrap());
        let account_id = store.register("a@x.com", "alice", "pw1").unwrap();
        store.login("a@x.com", "pw1").unwrap();
        store.add_note(account_id, "private", Some("ideas")).unwrap();
        let post = store.create_post(account_id, "public").unwrap();
        store.toggle_like(post.post_id, account_id).unwrap();
        (account_id, post.post_id)
    };

    let store = LocalSocialStore::new(SqliteStore::open(&path).unwrap());
    let current = store.current_account().unwrap().unwrap();
    assert_eq!(current.account_id, account_id);

    let notes = store.list_notes(account_id).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].category, "ideas");

    let post = store.get_post(post_id).unwrap().unwrap();
    assert_eq!(post.likes, 1);
    assert!(post.is_liked_by(account_id));

    store.login("a@x.com", "pw1").unwrap();
}

#[test]
fn separate_files_never_share_state() {
    let dir = tempfile::tempdir().unwrap();
    let first = LocalSocialStore::new(SqliteStore::open(dir.path().join("a.db")).unwrap());
    let second = LocalSocialStore::new(SqliteStore::open(dir.path().join("b.db")).unwrap());

    first.register("a@x.com", "alice", "pw").unwrap();

    assert!(second.list_accounts().unwrap().is_empty());
    second.register("a@x.com", "alice", "pw").unwrap();
}

#[test]
fn session_pointing_at_unknown_account_reads_as_logged_out() {
    let store = LocalSocialStore::new(MemoryStore::new());
    let ghost = serde_json::to_string(&Uuid::new_v4()).unwrap();
    store.backend().set(SESSION_KEY, &ghost).unwrap();
    assert!(store.current_account().unwrap().is_none());

    store.backend().set(SESSION_KEY, "garbage").unwrap();
    assert!(store.current_account().unwrap().is_none());
}

#[test]
fn concurrent_toggles_do_not_lose_updates() {
    let store = Arc::new(LocalSocialStore::with_clock(
        MemoryStore::new(),
        Arc::new(SystemClock),
    ));
    let author = store.register("a@x.com", "alice", "pw").unwrap();
    let post = store.create_post(author, "race").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let post_id = post.post_id;
            thread::spawn(move || {
                let liker = Uuid::new_v4();
                for _ in 0..5 {
                    store.toggle_like(post_id, liker).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stored = store.get_post(post.post_id).unwrap().unwrap();
    assert_eq!(stored.likes, 8);
    assert_eq!(stored.liked_by.len(), 8);
}

#[test]
fn concurrent_note_adds_are_all_kept() {
    let store = Arc::new(LocalSocialStore::new(MemoryStore::new()));
    let owner = store.register("a@x.com", "alice", "pw").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for idx in 0..10 {
                    store
                        .add_note(owner, &format!("note {worker}-{idx}"), None)
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.list_notes(owner).unwrap().len(), 40);
}

#[test]
fn shared_backend_handle_sees_writes_from_another_store() {
    let backend = Arc::new(MemoryStore::new());
    let writer = LocalSocialStore::new(Arc::clone(&backend));
    let reader = LocalSocialStore::new(Arc::clone(&backend));

    let account_id = writer.register("a@x.com", "alice", "pw").unwrap();
    writer.create_post(account_id, "visible").unwrap();

    assert_eq!(reader.list_accounts().unwrap().len(), 1);
    assert_eq!(reader.latest_posts().unwrap()[0].content, "visible");
    assert!(!backend.is_empty());
}
