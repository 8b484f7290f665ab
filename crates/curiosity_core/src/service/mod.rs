//! Local Social Store use-case services.
//!
//! # Responsibility
//! - Expose account, notebook and feed operations over one injected backend.
//! - Serialize every read-modify-write cycle per collection.
//!
//! # Invariants
//! - Each mutating operation holds its collection's critical section from
//!   load to save.
//! - Nested critical sections are taken in the order accounts, posts, notes.
//! - Services stay storage-agnostic; all persistence goes through `repo`.

mod accounts;
mod feed;
mod notebook;

pub use feed::{sort_latest, sort_popular, FeedOrder};

use crate::clock::{Clock, SystemClock};
use crate::error::{SocialError, SocialResult};
use crate::model::account::{Account, AccountId};
use crate::repo::{AccountRepo, NoteRepo, PostRepo, SessionRepo};
use crate::store::KeyValueStore;
use std::sync::{Arc, Mutex, MutexGuard};

/// Repository object over an injected key-value backend.
pub struct LocalSocialStore<S: KeyValueStore> {
    store: S,
    clock: Arc<dyn Clock>,
    accounts_lock: Mutex<()>,
    posts_lock: Mutex<()>,
    notes_lock: Mutex<()>,
}

impl<S: KeyValueStore> LocalSocialStore<S> {
    /// Creates a store reading wall-clock time.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Creates a store with a caller-provided time source.
    pub fn with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            accounts_lock: Mutex::new(()),
            posts_lock: Mutex::new(()),
            notes_lock: Mutex::new(()),
        }
    }

    /// Underlying backend, for inspection and tests.
    pub fn backend(&self) -> &S {
        &self.store
    }

    fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    fn account_repo(&self) -> AccountRepo<'_, S> {
        AccountRepo::new(&self.store)
    }

    fn note_repo(&self) -> NoteRepo<'_, S> {
        NoteRepo::new(&self.store)
    }

    fn post_repo(&self) -> PostRepo<'_, S> {
        PostRepo::new(&self.store)
    }

    fn session_repo(&self) -> SessionRepo<'_, S> {
        SessionRepo::new(&self.store)
    }

    fn require_account(&self, account_id: AccountId) -> SocialResult<Account> {
        self.account_repo()
            .find_by_id(account_id)?
            .ok_or(SocialError::UnknownAccount(account_id))
    }
}

fn enter(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
