//! Core state and domain logic for Goalboard.
//! UI hosts (Flutter via FFI, the CLI) render from this crate and never own
//! goal state themselves.

pub mod board;
pub mod logging;
pub mod model;
pub mod view;

pub use board::id_source::{GoalIdSource, RandomIdSource, SequentialIdSource};
pub use board::input::InputBuffer;
pub use board::list::GoalList;
pub use board::session::GoalBoard;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{Goal, GoalId, GoalValidationError};
pub use view::{BoardSnapshot, GoalCard, ScreenCopy};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
