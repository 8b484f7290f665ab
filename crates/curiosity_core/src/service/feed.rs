//! Public feed operations and derived views.
//!
//! # Invariants
//! - New posts are prepended; stored order is insertion order, newest first.
//! - Derived views use stable sorts, so ties keep feed order.
//! - `likes == liked_by.len()` for every post returned or persisted.

use super::{enter, LocalSocialStore};
use crate::error::SocialResult;
use crate::model::account::AccountId;
use crate::model::note::NoteId;
use crate::model::post::{LikeChange, Post, PostId};
use crate::store::KeyValueStore;
use log::{debug, info};
use std::cmp::Reverse;

/// Ordering for the feed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedOrder {
    /// Creation time, newest first.
    #[default]
    Latest,
    /// Like count, highest first.
    Popular,
}

impl FeedOrder {
    /// Maps a feed filter label; anything but `popular` means latest.
    pub fn from_filter(filter: &str) -> Self {
        if filter.trim().eq_ignore_ascii_case("popular") {
            Self::Popular
        } else {
            Self::Latest
        }
    }
}

/// Stable sort by creation time, newest first.
pub fn sort_latest(posts: &mut [Post]) {
    posts.sort_by_key(|post| Reverse(post.created_at));
}

/// Stable sort by like count, highest first.
pub fn sort_popular(posts: &mut [Post]) {
    posts.sort_by_key(|post| Reverse(post.likes));
}

impl<S: KeyValueStore> LocalSocialStore<S> {
    /// Publishes a post authored by `account_id`.
    ///
    /// # Errors
    /// - `UnknownAccount` when `account_id` is not registered.
    pub fn create_post(&self, account_id: AccountId, content: &str) -> SocialResult<Post> {
        let author = self.require_account(account_id)?;

        let _posts = enter(&self.posts_lock);
        let repo = self.post_repo();
        let mut posts = repo.list()?;
        let post = Post::new(&author, content, self.now());
        posts.insert(0, post.clone());
        repo.save(&posts)?;

        info!(
            "event=post_create module=feed status=ok account_id={} post_id={} posts={}",
            account_id,
            post.post_id,
            posts.len()
        );
        Ok(post)
    }

    /// Publishes `content` and then removes the source note, if one is named.
    ///
    /// The note is only removed after the post is persisted.
    pub fn share_note_as_post(
        &self,
        account_id: AccountId,
        note_id: Option<NoteId>,
        content: &str,
    ) -> SocialResult<Post> {
        let post = self.create_post(account_id, content)?;
        if let Some(note_id) = note_id {
            self.delete_note(account_id, note_id)?;
        }
        Ok(post)
    }

    /// Likes or unlikes a post on behalf of `account_id`.
    ///
    /// Returns `None` without writing when the post does not exist.
    pub fn toggle_like(
        &self,
        post_id: PostId,
        account_id: AccountId,
    ) -> SocialResult<Option<Post>> {
        let _posts = enter(&self.posts_lock);
        let repo = self.post_repo();
        let mut posts = repo.list()?;

        let Some(post) = posts.iter_mut().find(|post| post.post_id == post_id) else {
            debug!("event=post_like module=feed status=noop post_id={post_id}");
            return Ok(None);
        };

        let change = post.toggle_like(account_id);
        let updated = post.clone();
        repo.save(&posts)?;

        info!(
            "event=post_like module=feed status=ok post_id={} account_id={} change={} likes={}",
            post_id,
            account_id,
            match change {
                LikeChange::Liked => "liked",
                LikeChange::Unliked => "unliked",
            },
            updated.likes
        );
        Ok(Some(updated))
    }

    pub fn get_post(&self, post_id: PostId) -> SocialResult<Option<Post>> {
        Ok(self
            .post_repo()
            .list()?
            .into_iter()
            .find(|post| post.post_id == post_id))
    }

    /// Whole feed in stored order.
    pub fn all_posts(&self) -> SocialResult<Vec<Post>> {
        Ok(self.post_repo().list()?)
    }

    pub fn latest_posts(&self) -> SocialResult<Vec<Post>> {
        self.feed(FeedOrder::Latest)
    }

    pub fn popular_posts(&self) -> SocialResult<Vec<Post>> {
        self.feed(FeedOrder::Popular)
    }

    pub fn feed(&self, order: FeedOrder) -> SocialResult<Vec<Post>> {
        let mut posts = self.post_repo().list()?;
        match order {
            FeedOrder::Latest => sort_latest(&mut posts),
            FeedOrder::Popular => sort_popular(&mut posts),
        }
        Ok(posts)
    }

    /// Posts authored by `account_id`, in feed order.
    pub fn posts_by_account(&self, account_id: AccountId) -> SocialResult<Vec<Post>> {
        let mut posts = self.post_repo().list()?;
        posts.retain(|post| post.account_id == account_id);
        Ok(posts)
    }
}
