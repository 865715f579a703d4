//! Domain model for submitted goals.
//!
//! # Responsibility
//! - Define the canonical goal record rendered by the list view.
//!
//! # Invariants
//! - Every goal carries a non-nil `GoalId` used only as a rendering key.
//! - Goal text is stored exactly as typed.

pub mod goal;
