//! Shared public feed persistence.

use crate::model::post::Post;
use crate::repo::collection::{load_collection, save_collection};
use crate::store::keys::POSTS_KEY;
use crate::store::{KeyValueStore, StoreResult};
use log::warn;

pub struct PostRepo<'s, S: KeyValueStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: KeyValueStore + ?Sized> PostRepo<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Feed in stored order (newest insertion first).
    ///
    /// Like bookkeeping is normalized on the way out.
    pub fn list(&self) -> StoreResult<Vec<Post>> {
        let mut posts: Vec<Post> = load_collection(self.store, POSTS_KEY)?;
        for post in &mut posts {
            if post.normalize_likes() {
                warn!(
                    "event=post_load module=repo status=repaired post_id={} likes={}",
                    post.post_id, post.likes
                );
            }
        }
        Ok(posts)
    }

    pub fn save(&self, posts: &[Post]) -> StoreResult<()> {
        save_collection(self.store, POSTS_KEY, posts)
    }
}
