//! Append-only goal list.

use crate::model::goal::Goal;

/// Ordered collection of submitted goals.
///
/// Exposes no removal or mutable access, so insertion order is the only
/// order and recorded goals never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalList {
    goals: Vec<Goal>,
}

impl GoalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `goal` after every existing element and returns it.
    pub fn append(&mut self, goal: Goal) -> &Goal {
        self.goals.push(goal);
        &self.goals[self.goals.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Goal> {
        self.goals.get(index)
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Goal> {
        self.goals.iter()
    }

    pub fn as_slice(&self) -> &[Goal] {
        self.goals.as_slice()
    }
}

impl<'a> IntoIterator for &'a GoalList {
    type Item = &'a Goal;
    type IntoIter = std::slice::Iter<'a, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
