//! Account directory and session operations.
//!
//! # Invariants
//! - Email and username are unique across the directory.
//! - A new account always gets an (empty) note list provisioned.
//! - Log lines carry ids and error codes, never emails or usernames.

use super::{enter, LocalSocialStore};
use crate::credentials::{hash_password, verify_password};
use crate::error::{SocialError, SocialResult};
use crate::model::account::{Account, AccountId};
use crate::store::KeyValueStore;
use log::info;

impl<S: KeyValueStore> LocalSocialStore<S> {
    /// Registers a new account and returns its id.
    ///
    /// # Errors
    /// - `DuplicateEmail` when the email is taken (checked first).
    /// - `DuplicateUsername` when the username is taken.
    pub fn register(&self, email: &str, username: &str, password: &str) -> SocialResult<AccountId> {
        let digest = hash_password(password).map_err(SocialError::Credential)?;

        let _accounts = enter(&self.accounts_lock);
        let repo = self.account_repo();
        let mut accounts = repo.list()?;

        let rejected = if accounts.iter().any(|account| account.email == email) {
            Some(SocialError::DuplicateEmail)
        } else if accounts.iter().any(|account| account.username == username) {
            Some(SocialError::DuplicateUsername)
        } else {
            None
        };
        if let Some(err) = rejected {
            info!(
                "event=account_register module=accounts status=rejected error_code={}",
                err.code()
            );
            return Err(err);
        }

        let account = Account::new(email, username, digest, self.now());
        let account_id = account.account_id;
        accounts.push(account);
        repo.save(&accounts)?;

        {
            let _notes = enter(&self.notes_lock);
            self.note_repo().provision(account_id)?;
        }

        info!(
            "event=account_register module=accounts status=ok account_id={} accounts={}",
            account_id,
            accounts.len()
        );
        Ok(account_id)
    }

    /// Verifies credentials and makes the matching account the active session.
    ///
    /// # Errors
    /// - `InvalidCredentials` for an unknown email or a wrong password.
    pub fn login(&self, email: &str, password: &str) -> SocialResult<Account> {
        let account = self
            .account_repo()
            .find_by_email(email)?
            .filter(|account| verify_password(password, &account.password_digest));

        let Some(account) = account else {
            info!("event=account_login module=accounts status=rejected error_code=invalid_credentials");
            return Err(SocialError::InvalidCredentials);
        };

        self.session_repo().set(account.account_id)?;
        info!(
            "event=account_login module=accounts status=ok account_id={}",
            account.account_id
        );
        Ok(account)
    }

    /// Clears the active session. Idempotent.
    pub fn logout(&self) -> SocialResult<()> {
        self.session_repo().clear()?;
        info!("event=account_logout module=accounts status=ok");
        Ok(())
    }

    /// Account behind the active session.
    ///
    /// A session naming an account that no longer resolves reads as logged out.
    pub fn current_account(&self) -> SocialResult<Option<Account>> {
        match self.session_repo().current()? {
            Some(account_id) => self.get_account(account_id),
            None => Ok(None),
        }
    }

    pub fn get_account(&self, account_id: AccountId) -> SocialResult<Option<Account>> {
        Ok(self.account_repo().find_by_id(account_id)?)
    }

    /// Profile lookup by exact username.
    pub fn find_account_by_username(&self, username: &str) -> SocialResult<Option<Account>> {
        Ok(self.account_repo().find_by_username(username)?)
    }

    /// All registered accounts in registration order.
    pub fn list_accounts(&self) -> SocialResult<Vec<Account>> {
        Ok(self.account_repo().list()?)
    }
}
