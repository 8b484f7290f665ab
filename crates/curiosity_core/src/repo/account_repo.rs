//! Account directory persistence.

use crate::model::account::{Account, AccountId};
use crate::repo::collection::{load_collection, save_collection};
use crate::store::keys::ACCOUNTS_KEY;
use crate::store::{KeyValueStore, StoreResult};

/// Account directory stored as one collection.
pub struct AccountRepo<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: KeyValueStore + ?Sized> AccountRepo<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// All accounts in registration order.
    pub fn list(&self) -> StoreResult<Vec<Account>> {
        load_collection(self.store, ACCOUNTS_KEY)
    }

    pub fn save(&self, accounts: &[Account]) -> StoreResult<()> {
        save_collection(self.store, ACCOUNTS_KEY, accounts)
    }

    pub fn find_by_id(&self, account_id: AccountId) -> StoreResult<Option<Account>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|account| account.account_id == account_id))
    }

    pub fn find_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|account| account.email == email))
    }

    pub fn find_by_username(&self, username: &str) -> StoreResult<Option<Account>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|account| account.username == username))
    }
}
