//! Single active-session slot.

use crate::model::account::AccountId;
use crate::store::keys::SESSION_KEY;
use crate::store::{KeyValueStore, StoreResult};
use log::warn;

pub struct SessionRepo<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: KeyValueStore + ?Sized> SessionRepo<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Active account id; `None` when logged out or the slot is unreadable.
    pub fn current(&self) -> StoreResult<Option<AccountId>> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<AccountId>(&raw) {
            Ok(account_id) => Ok(Some(account_id)),
            Err(err) => {
                warn!("event=session_load module=repo status=corrupt error={err}");
                Ok(None)
            }
        }
    }

    pub fn set(&self, account_id: AccountId) -> StoreResult<()> {
        let encoded = serde_json::to_string(&account_id)?;
        self.store.set(SESSION_KEY, &encoded)
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.store.remove(SESSION_KEY)
    }
}
