//! Typed collections persisted through a `KeyValueStore`.
//!
//! # Responsibility
//! - Load and save whole collections as JSON blobs under fixed keys.
//! - Hide key layout and blob encoding from services.
//!
//! # Invariants
//! - Reads never fail on malformed stored values; they yield empty state.
//! - Writes replace the full collection under its key.

pub mod account_repo;
mod collection;
pub mod note_repo;
pub mod post_repo;
pub mod session_repo;

pub use account_repo::AccountRepo;
pub use note_repo::NoteRepo;
pub use post_repo::PostRepo;
pub use session_repo::SessionRepo;
