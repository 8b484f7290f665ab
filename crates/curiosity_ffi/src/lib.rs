//! Flutter-facing bindings for the Local Social Store core.

pub mod api;
