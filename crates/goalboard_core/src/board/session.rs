//! Goal board session: the state object held by the presentation layer.
//!
//! # Responsibility
//! - Route keystrokes into the input buffer.
//! - Run the submit protocol: take text, mint id, append, clear input.
//! - Produce owned snapshots for rendering.
//!
//! # Invariants
//! - `submit` is total and appends exactly one goal per call.
//! - Empty and whitespace-only text are accepted on submit.
//! - Goal text is never written to logs.

use crate::board::id_source::{GoalIdSource, RandomIdSource};
use crate::board::input::InputBuffer;
use crate::board::list::GoalList;
use crate::model::goal::Goal;
use crate::view::{BoardSnapshot, GoalCard, ScreenCopy};
use log::{debug, warn};
use uuid::Uuid;

/// Input buffer plus goal list for one app session.
#[derive(Debug, Clone)]
pub struct GoalBoard<S: GoalIdSource = RandomIdSource> {
    input: InputBuffer,
    goals: GoalList,
    ids: S,
    copy: ScreenCopy,
}

impl GoalBoard<RandomIdSource> {
    /// Creates an empty board with random goal ids.
    pub fn new() -> Self {
        Self::with_id_source(RandomIdSource)
    }
}

impl Default for GoalBoard<RandomIdSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GoalIdSource> GoalBoard<S> {
    /// Creates an empty board that mints ids from `ids`.
    pub fn with_id_source(ids: S) -> Self {
        Self {
            input: InputBuffer::new(),
            goals: GoalList::new(),
            ids,
            copy: ScreenCopy::default(),
        }
    }

    /// Replaces the screen text shown around the list.
    pub fn with_copy(mut self, copy: ScreenCopy) -> Self {
        self.copy = copy;
        self
    }

    /// Keystroke entry point: replaces the input buffer contents.
    pub fn set_text(&mut self, new_value: impl Into<String>) {
        self.input.set_text(new_value);
    }

    /// Current input buffer value, for the text field.
    pub fn current(&self) -> &str {
        self.input.current()
    }

    /// Whether the input is empty or whitespace-only.
    pub fn input_is_blank(&self) -> bool {
        self.input.is_blank()
    }

    /// Appends the buffered text as a new goal and clears the buffer.
    ///
    /// Returns the appended goal.
    pub fn submit(&mut self) -> &Goal {
        let text = self.input.take();
        let text_chars = text.chars().count();
        let id = match self.ids.next_id() {
            id if id.is_nil() => {
                warn!("event=goal_submit module=board status=fallback reason=nil_id");
                Uuid::new_v4()
            }
            id => id,
        };

        let goal_count = self.goals.len() + 1;
        debug!(
            "event=goal_submit module=board status=ok goal_count={} text_chars={}",
            goal_count, text_chars
        );
        self.goals.append(Goal { id, text })
    }

    /// Submitted goals in insertion order.
    pub fn goals(&self) -> &GoalList {
        &self.goals
    }

    pub fn copy(&self) -> &ScreenCopy {
        &self.copy
    }

    /// Owned copy of everything the screen needs to render.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            input: self.input.current().to_string(),
            cards: self.goals.iter().map(GoalCard::from).collect(),
            copy: self.copy.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GoalBoard;
    use crate::board::id_source::GoalIdSource;
    use crate::model::goal::GoalId;
    use uuid::Uuid;

    struct NilIds;

    impl GoalIdSource for NilIds {
        fn next_id(&mut self) -> GoalId {
            Uuid::nil()
        }
    }

    #[test]
    fn nil_id_from_source_is_replaced() {
        let mut board = GoalBoard::with_id_source(NilIds);
        board.set_text("swim");

        let goal = board.submit();
        assert!(!goal.id.is_nil());
        assert_eq!(goal.text, "swim");
    }

    #[test]
    fn submit_returns_appended_goal() {
        let mut board = GoalBoard::new();
        board.set_text("read");

        let id = board.submit().id;
        assert_eq!(board.goals().get(0).map(|goal| goal.id), Some(id));
    }
}
