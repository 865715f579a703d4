//! Goal board state container and its update protocol.
//!
//! # Responsibility
//! - Own the input buffer and goal list of one app session.
//! - Apply keystroke and submit actions as single, total steps.
//!
//! # Invariants
//! - The goal list is append-only; nothing is removed or edited.
//! - Submit always appends exactly one goal and clears the input buffer.
//! - State lives in an owned value, never in process globals.

pub mod id_source;
pub mod input;
pub mod list;
pub mod session;
