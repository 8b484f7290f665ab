//! Persistence key layout.
//!
//! Notes keys are derived from the owning account id only, so one account's
//! notes can never be addressed through another account's key.

use crate::model::account::AccountId;

pub const ACCOUNTS_KEY: &str = "curiosity_accounts";
pub const POSTS_KEY: &str = "curiosity_public_posts";
pub const SESSION_KEY: &str = "curiosity_current_session";
const NOTES_KEY_PREFIX: &str = "curiosity_notes_";

/// Key holding the private note list of `account_id`.
pub fn notes_key(account_id: AccountId) -> String {
    format!("{NOTES_KEY_PREFIX}{}", account_id.as_hyphenated())
}
