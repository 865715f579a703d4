//! Goal domain model.
//!
//! # Responsibility
//! - Define the record appended to the goal list on submit.
//! - Keep the id/text wire shape stable for FFI and serialization.
//!
//! # Invariants
//! - `id` is never nil.
//! - `text` is kept verbatim: no trimming, no length limit.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Rendering identity of one goal.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type GoalId = Uuid;

/// Validation error for goal construction and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalValidationError {
    /// The nil UUID cannot serve as a list key.
    NilId,
}

impl Display for GoalValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "goal id must not be nil"),
        }
    }
}

impl Error for GoalValidationError {}

/// One submitted goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GoalWire")]
pub struct Goal {
    /// Stable key for list rendering. Never used for lookup.
    pub id: GoalId,
    /// Content as it was in the input buffer at submit time.
    pub text: String,
}

#[derive(Deserialize)]
struct GoalWire {
    id: GoalId,
    text: String,
}

impl TryFrom<GoalWire> for Goal {
    type Error = GoalValidationError;

    fn try_from(value: GoalWire) -> Result<Self, Self::Error> {
        Goal::with_id(value.id, value.text)
    }
}

impl Goal {
    /// Creates a goal with a freshly generated random id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }

    /// Creates a goal with a caller-provided id.
    ///
    /// # Errors
    /// - Returns `GoalValidationError::NilId` when `id` is nil.
    pub fn with_id(id: GoalId, text: impl Into<String>) -> Result<Self, GoalValidationError> {
        let goal = Self {
            id,
            text: text.into(),
        };
        goal.validate()?;
        Ok(goal)
    }

    /// Checks record invariants.
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.id.is_nil() {
            return Err(GoalValidationError::NilId);
        }
        Ok(())
    }

    /// Returns the list key in hyphenated string form.
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}
