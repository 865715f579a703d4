//! Flutter-facing bindings for Goalboard core.

pub mod api;
