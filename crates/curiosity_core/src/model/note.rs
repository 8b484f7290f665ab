//! Private note model.

use crate::model::account::AccountId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NoteId = Uuid;

pub const DEFAULT_NOTE_CATEGORY: &str = "general";

/// Note visible only to its owning account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateNote {
    pub note_id: NoteId,
    pub account_id: AccountId,
    pub content: String,
    pub category: String,
    pub created_at: i64,
    /// Always `false`; promotion creates a `Post` instead of flipping this.
    #[serde(default)]
    pub is_public: bool,
}

impl PrivateNote {
    /// Builds a note; a blank `category` falls back to `general`.
    pub fn new(
        account_id: AccountId,
        content: impl Into<String>,
        category: Option<&str>,
        created_at: i64,
    ) -> Self {
        let category = category
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_NOTE_CATEGORY);
        Self {
            note_id: Uuid::new_v4(),
            account_id,
            content: content.into(),
            category: category.to_string(),
            created_at,
            is_public: false,
        }
    }
}
