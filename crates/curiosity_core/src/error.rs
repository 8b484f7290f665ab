//! Domain error for store operations.
//!
//! # Invariants
//! - Validation outcomes are distinct variants; storage failures wrap
//!   `StoreError` unchanged.

use crate::model::account::AccountId;
use crate::model::post::PostId;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SocialResult<T> = Result<T, SocialError>;

#[derive(Debug)]
pub enum SocialError {
    /// Another account already uses this email.
    DuplicateEmail,
    /// Another account already uses this username.
    DuplicateUsername,
    /// Email unknown or password mismatch. Deliberately indistinguishable.
    InvalidCredentials,
    /// Account id does not resolve in the directory.
    UnknownAccount(AccountId),
    /// Post id does not resolve in the feed.
    UnknownPost(PostId),
    /// Password hashing failed.
    Credential(String),
    /// Storage backend failure.
    Store(StoreError),
}

impl Display for SocialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEmail => write!(f, "email already registered"),
            Self::DuplicateUsername => write!(f, "username already taken"),
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::UnknownAccount(id) => write!(f, "account not found: {id}"),
            Self::UnknownPost(id) => write!(f, "post not found: {id}"),
            Self::Credential(message) => write!(f, "{message}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SocialError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for SocialError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl SocialError {
    /// Stable machine-readable code used in log lines and envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateEmail => "duplicate_email",
            Self::DuplicateUsername => "duplicate_username",
            Self::InvalidCredentials => "invalid_credentials",
            Self::UnknownAccount(_) => "unknown_account",
            Self::UnknownPost(_) => "unknown_post",
            Self::Credential(_) => "credential_failed",
            Self::Store(_) => "store_failed",
        }
    }
}
