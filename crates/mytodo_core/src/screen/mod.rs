//! Screen session and render model.
//!
//! # Responsibility
//! - Own the list and the draft text for the single to-do screen.
//! - Translate user intents into list mutations.
//! - Build the read-only view every presentation layer renders.
//!
//! # Invariants
//! - Presentation layers mutate state only through `TodoScreen::dispatch`.
//! - Draft text is cleared only after a successful add.

pub mod session;
pub mod view;
