//! Local Social Store: accounts, private notebooks and a shared public feed
//! persisted through a pluggable key-value backend.
//! This crate has no rendering dependency; presentation layers call into it.

pub mod clock;
pub mod config;
pub mod credentials;
pub mod db;
pub mod error;
pub mod links;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SocialConfig;
pub use error::{SocialError, SocialResult};
pub use links::{link_spans, LinkSpan};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Account, AccountId};
pub use model::note::{NoteId, PrivateNote, DEFAULT_NOTE_CATEGORY};
pub use model::post::{Comment, CommentId, LikeChange, Post, PostId};
pub use service::{FeedOrder, LocalSocialStore};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
