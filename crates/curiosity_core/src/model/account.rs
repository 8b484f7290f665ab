//! Account model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type AccountId = Uuid;

/// Registered identity in the account directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: AccountId,
    /// Unique across the directory (exact match).
    pub email: String,
    /// Unique across the directory (exact match).
    pub username: String,
    /// Argon2 PHC string. Never the plain password.
    pub password_digest: String,
    /// Join time in epoch milliseconds.
    pub joined_at: i64,
    /// Display initial derived from `username` at registration.
    pub initial: String,
}

impl Account {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password_digest: impl Into<String>,
        joined_at: i64,
    ) -> Self {
        let username = username.into();
        Self {
            account_id: Uuid::new_v4(),
            email: email.into(),
            initial: display_initial(&username),
            username,
            password_digest: password_digest.into(),
            joined_at,
        }
    }
}

/// Uppercased first non-whitespace character of `username`.
///
/// Leading whitespace is skipped, so `" bob"` gives `B`; a blank username
/// gives `?`.
pub fn display_initial(username: &str) -> String {
    match username.trim().chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => "?".to_string(),
    }
}
