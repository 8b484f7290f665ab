//! Public post model and like bookkeeping.
//!
//! # Invariants
//! - `likes == liked_by.len()` after every mutation through this type.
//! - `liked_by` never contains the same account twice.
//! - Author fields are a snapshot taken at creation time.

use crate::model::account::{Account, AccountId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PostId = Uuid;
pub type CommentId = Uuid;

/// Comment attached to a post. Present in the stored shape only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: CommentId,
    pub account_id: AccountId,
    pub username: String,
    pub content: String,
    pub created_at: i64,
}

/// Entry in the shared public feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: PostId,
    pub account_id: AccountId,
    pub username: String,
    pub initial: String,
    pub content: String,
    pub created_at: i64,
    pub likes: u32,
    #[serde(default)]
    pub liked_by: Vec<AccountId>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Outcome of a single like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeChange {
    Liked,
    Unliked,
}

impl Post {
    /// Creates a post authored by `author`, snapshotting its display fields.
    pub fn new(author: &Account, content: impl Into<String>, created_at: i64) -> Self {
        Self {
            post_id: Uuid::new_v4(),
            account_id: author.account_id,
            username: author.username.clone(),
            initial: author.initial.clone(),
            content: content.into(),
            created_at,
            likes: 0,
            liked_by: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn is_liked_by(&self, account_id: AccountId) -> bool {
        self.liked_by.contains(&account_id)
    }

    /// Flips the like relation between this post and `account_id`.
    pub fn toggle_like(&mut self, account_id: AccountId) -> LikeChange {
        let change = match self.liked_by.iter().position(|id| *id == account_id) {
            Some(index) => {
                self.liked_by.remove(index);
                LikeChange::Unliked
            }
            None => {
                self.liked_by.push(account_id);
                LikeChange::Liked
            }
        };
        self.sync_like_count();
        change
    }

    /// Drops duplicate likers and recomputes `likes` from the liker set.
    ///
    /// Returns `true` when stored state had to be repaired.
    pub fn normalize_likes(&mut self) -> bool {
        let before = (self.likes, self.liked_by.len());
        let mut seen = Vec::with_capacity(self.liked_by.len());
        self.liked_by.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(*id);
                true
            }
        });
        self.sync_like_count();
        before != (self.likes, self.liked_by.len())
    }

    fn sync_like_count(&mut self) {
        self.likes = u32::try_from(self.liked_by.len()).unwrap_or(u32::MAX);
    }
}
