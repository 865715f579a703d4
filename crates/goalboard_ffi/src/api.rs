//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the goal board to Dart via FRB as an opaque, owned handle.
//! - Convert core records into flat DTOs with string ids.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Each handle call locks the board once and runs to completion.
//! - Return values are UTF-8 strings with stable meaning.

use goalboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Goal, GoalBoard, GoalCard,
};
use log::warn;
use std::sync::{Mutex, MutexGuard};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One goal as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalItem {
    /// List key in hyphenated UUID form.
    pub id: String,
    /// Goal text exactly as submitted.
    pub text: String,
}

/// Everything the goals screen renders in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState {
    pub title: String,
    pub input_placeholder: String,
    pub submit_label: String,
    /// Current text field value.
    pub input: String,
    /// Goals in submit order.
    pub items: Vec<GoalItem>,
}

/// Goal board owned by one Flutter screen.
///
/// The Dart side keeps the handle alive for the session; dropping it
/// discards every goal.
#[flutter_rust_bridge::frb(opaque)]
pub struct GoalBoardHandle {
    board: Mutex<GoalBoard>,
}

impl GoalBoardHandle {
    /// Creates an empty board.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            board: Mutex::new(GoalBoard::new()),
        }
    }

    /// Keystroke callback: replaces the text field value.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_text(&self, value: String) {
        self.lock().set_text(value);
    }

    /// Current text field value.
    #[flutter_rust_bridge::frb(sync)]
    pub fn current(&self) -> String {
        self.lock().current().to_owned()
    }

    /// Submit button callback. Always appends one goal.
    #[flutter_rust_bridge::frb(sync)]
    pub fn submit(&self) -> GoalItem {
        to_goal_item(self.lock().submit())
    }

    /// Goals in submit order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn goals(&self) -> Vec<GoalItem> {
        self.lock().goals().iter().map(to_goal_item).collect()
    }

    /// Full screen state for one rebuild.
    #[flutter_rust_bridge::frb(sync)]
    pub fn screen(&self) -> ScreenState {
        let snapshot = self.lock().snapshot();
        ScreenState {
            title: snapshot.copy.title,
            input_placeholder: snapshot.copy.input_placeholder,
            submit_label: snapshot.copy.submit_label,
            input: snapshot.input,
            items: snapshot.cards.into_iter().map(card_to_goal_item).collect(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GoalBoard> {
        // Board operations are total, so state behind a poisoned lock is
        // still consistent.
        self.board.lock().unwrap_or_else(|poisoned| {
            warn!("event=board_lock module=ffi status=recovered reason=poisoned");
            poisoned.into_inner()
        })
    }
}

impl Default for GoalBoardHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn to_goal_item(goal: &Goal) -> GoalItem {
    GoalItem {
        id: goal.key(),
        text: goal.text.clone(),
    }
}

fn card_to_goal_item(card: GoalCard) -> GoalItem {
    GoalItem {
        id: card.key,
        text: card.text,
    }
}
