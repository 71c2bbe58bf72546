//! Core domain logic for MyTodoList.
//! This crate is the single source of truth for list invariants.

pub mod list;
pub mod logging;
pub mod model;
pub mod screen;

pub use list::id_gen::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use list::todo_list::TodoList;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemValidationError, TodoId, TodoItem};
pub use screen::session::{Intent, IntentOutcome, TodoScreen};
pub use screen::view::{RowView, ScreenView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
