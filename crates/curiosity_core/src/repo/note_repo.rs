//! Per-account private note persistence.
//!
//! # Invariants
//! - Every read and write is addressed by the owning account id only.
//! - Notes for one account live under exactly one key.

use crate::model::account::AccountId;
use crate::model::note::PrivateNote;
use crate::repo::collection::{load_collection, save_collection};
use crate::store::keys::notes_key;
use crate::store::{KeyValueStore, StoreResult};

pub struct NoteRepo<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: KeyValueStore + ?Sized> NoteRepo<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Notes owned by `account_id`, oldest first.
    ///
    /// Entries whose owner field disagrees with the key are dropped.
    pub fn list(&self, account_id: AccountId) -> StoreResult<Vec<PrivateNote>> {
        let mut notes: Vec<PrivateNote> = load_collection(self.store, &notes_key(account_id))?;
        notes.retain(|note| note.account_id == account_id);
        Ok(notes)
    }

    pub fn save(&self, account_id: AccountId, notes: &[PrivateNote]) -> StoreResult<()> {
        save_collection(self.store, &notes_key(account_id), notes)
    }

    /// Writes an empty list unless the account already has one.
    pub fn provision(&self, account_id: AccountId) -> StoreResult<()> {
        let key = notes_key(account_id);
        if self.store.get(&key)?.is_none() {
            save_collection::<S, PrivateNote>(self.store, &key, &[])?;
        }
        Ok(())
    }
}
