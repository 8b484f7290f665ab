//! Private notebook operations.

use super::{enter, LocalSocialStore};
use crate::error::SocialResult;
use crate::model::account::AccountId;
use crate::model::note::{NoteId, PrivateNote};
use crate::store::KeyValueStore;
use log::{debug, info};

impl<S: KeyValueStore> LocalSocialStore<S> {
    /// Notes owned by `account_id`, oldest first. Unknown accounts have none.
    pub fn list_notes(&self, account_id: AccountId) -> SocialResult<Vec<PrivateNote>> {
        Ok(self.note_repo().list(account_id)?)
    }

    /// Appends a note to the owner's list.
    ///
    /// `category` defaults to `general` when `None` or blank.
    ///
    /// # Errors
    /// - `UnknownAccount` when `account_id` is not registered.
    pub fn add_note(
        &self,
        account_id: AccountId,
        content: &str,
        category: Option<&str>,
    ) -> SocialResult<PrivateNote> {
        self.require_account(account_id)?;

        let _notes = enter(&self.notes_lock);
        let repo = self.note_repo();
        let mut notes = repo.list(account_id)?;
        let note = PrivateNote::new(account_id, content, category, self.now());
        notes.push(note.clone());
        repo.save(account_id, &notes)?;

        info!(
            "event=note_add module=notebook status=ok account_id={} note_id={} notes={}",
            account_id,
            note.note_id,
            notes.len()
        );
        Ok(note)
    }

    /// Removes one note. Returns whether anything was removed.
    pub fn delete_note(&self, account_id: AccountId, note_id: NoteId) -> SocialResult<bool> {
        let _notes = enter(&self.notes_lock);
        let repo = self.note_repo();
        let mut notes = repo.list(account_id)?;
        let before = notes.len();
        notes.retain(|note| note.note_id != note_id);

        if notes.len() == before {
            debug!(
                "event=note_delete module=notebook status=noop account_id={} note_id={}",
                account_id, note_id
            );
            return Ok(false);
        }

        repo.save(account_id, &notes)?;
        info!(
            "event=note_delete module=notebook status=ok account_id={} note_id={}",
            account_id, note_id
        );
        Ok(true)
    }
}
