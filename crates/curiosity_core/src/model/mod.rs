//! Domain model for accounts, private notes and public posts.
//!
//! # Responsibility
//! - Define the persisted shapes stored under each key.
//! - Keep like bookkeeping (`likes` / `liked_by`) behind methods.
//!
//! # Invariants
//! - Every record is identified by a UUID v4 that is never reused.
//! - Timestamps are Unix epoch milliseconds.

pub mod account;
pub mod note;
pub mod post;
