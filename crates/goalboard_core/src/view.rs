//! Render-ready projections of a goal board.
//!
//! # Responsibility
//! - Hand the presentation layer owned data: screen text, input, cards.
//! - Provide a plain-text rendering for terminal front ends.

use crate::model::goal::Goal;
use serde::{Deserialize, Serialize};

const DEFAULT_TITLE: &str = "My Goals";
const DEFAULT_INPUT_PLACEHOLDER: &str = "Your goals...";
const DEFAULT_SUBMIT_LABEL: &str = "Add Goal";

/// Static text around the input form and list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenCopy {
    pub title: String,
    pub input_placeholder: String,
    pub submit_label: String,
}

impl Default for ScreenCopy {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            input_placeholder: DEFAULT_INPUT_PLACEHOLDER.to_string(),
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
        }
    }
}

/// One list item: the goal text plus its rendering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalCard {
    pub key: String,
    pub text: String,
}

impl From<&Goal> for GoalCard {
    fn from(goal: &Goal) -> Self {
        Self {
            key: goal.key(),
            text: goal.text.clone(),
        }
    }
}

/// Owned view of a board at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Value shown in the text field.
    pub input: String,
    /// Cards in submit order.
    pub cards: Vec<GoalCard>,
    pub copy: ScreenCopy,
}

impl BoardSnapshot {
    /// Renders the screen as plain text.
    ///
    /// The input line shows the placeholder while the buffer is empty.
    pub fn render_plain(&self) -> String {
        let shown_input = if self.input.is_empty() {
            self.copy.input_placeholder.as_str()
        } else {
            self.input.as_str()
        };
        let rule_width = self.copy.title.chars().count().max(8);

        let mut lines = vec![
            self.copy.title.clone(),
            format!("> {shown_input} [{}]", self.copy.submit_label),
            "-".repeat(rule_width),
        ];
        lines.extend(
            self.cards
                .iter()
                .enumerate()
                .map(|(index, card)| format!("{}. {}", index + 1, card.text)),
        );

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardSnapshot, GoalCard, ScreenCopy};

    #[test]
    fn render_plain_shows_placeholder_for_empty_input() {
        let snapshot = BoardSnapshot {
            input: String::new(),
            cards: Vec::new(),
            copy: ScreenCopy::default(),
        };

        let rendered = snapshot.render_plain();
        assert!(rendered.starts_with("My Goals\n"));
        assert!(rendered.contains("> Your goals... [Add Goal]"));
    }

    #[test]
    fn render_plain_numbers_cards_in_order() {
        let snapshot = BoardSnapshot {
            input: "draft".to_string(),
            cards: vec![
                GoalCard {
                    key: "k1".to_string(),
                    text: "A".to_string(),
                },
                GoalCard {
                    key: "k2".to_string(),
                    text: "B".to_string(),
                },
            ],
            copy: ScreenCopy::default(),
        };

        let rendered = snapshot.render_plain();
        assert!(rendered.contains("> draft [Add Goal]"));
        let first = rendered.find("1. A").expect("first card rendered");
        let second = rendered.find("2. B").expect("second card rendered");
        assert!(first < second);
    }

    #[test]
    fn render_plain_emits_one_line_per_row() {
        let snapshot = BoardSnapshot {
            input: String::new(),
            cards: vec![GoalCard {
                key: "k1".to_string(),
                text: "Run 5k".to_string(),
            }],
            copy: ScreenCopy::default(),
        };

        assert_eq!(
            snapshot.render_plain(),
            "My Goals\n> Your goals... [Add Goal]\n--------\n1. Run 5k\n"
        );
    }
}
