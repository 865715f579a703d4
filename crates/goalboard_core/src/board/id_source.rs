//! Goal id generation.
//!
//! # Responsibility
//! - Supply a fresh `GoalId` for every submitted goal.
//!
//! # Invariants
//! - Sources never return the nil UUID.
//! - `RandomIdSource` accepts negligible v4 collision odds.
//! - `SequentialIdSource` never repeats within one source instance.

use crate::model::goal::GoalId;
use uuid::Uuid;

/// Supplier of goal ids used by the submit protocol.
pub trait GoalIdSource {
    fn next_id(&mut self) -> GoalId;
}

/// Random v4 UUIDs. Default source for app sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl GoalIdSource for RandomIdSource {
    fn next_id(&mut self) -> GoalId {
        Uuid::new_v4()
    }
}

/// Counter-backed ids with no collision risk.
///
/// The first id is `Uuid::from_u128(1)`; each call increments by one.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    next: u128,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts the counter at `first`. Zero is bumped to one to avoid nil.
    pub fn starting_at(first: u128) -> Self {
        Self {
            next: first.max(1),
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalIdSource for SequentialIdSource {
    fn next_id(&mut self) -> GoalId {
        let id = Uuid::from_u128(self.next);
        // Wrap past u128::MAX back to 1, not 0.
        self.next = self.next.checked_add(1).unwrap_or(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::{GoalIdSource, RandomIdSource, SequentialIdSource};
    use uuid::Uuid;

    #[test]
    fn sequential_starts_at_one_and_increments() {
        let mut source = SequentialIdSource::new();

        assert_eq!(source.next_id(), Uuid::from_u128(1));
        assert_eq!(source.next_id(), Uuid::from_u128(2));
    }

    #[test]
    fn sequential_zero_start_is_bumped() {
        let mut source = SequentialIdSource::starting_at(0);
        assert!(!source.next_id().is_nil());
    }

    #[test]
    fn sequential_wraps_without_nil() {
        let mut source = SequentialIdSource::starting_at(u128::MAX);

        assert_eq!(source.next_id(), Uuid::from_u128(u128::MAX));
        assert_eq!(source.next_id(), Uuid::from_u128(1));
    }

    #[test]
    fn random_ids_are_v4() {
        let mut source = RandomIdSource;
        let id = source.next_id();

        assert!(!id.is_nil());
        assert_eq!(id.get_version_num(), 4);
    }
}
