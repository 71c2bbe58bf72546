//! Domain model for the to-do list screen.
//!
//! # Responsibility
//! - Define the item record rendered by every presentation layer.
//! - Keep item validation next to the data it guards.
//!
//! # Invariants
//! - Every item is identified by a non-nil `TodoId`.
//! - Items are immutable once created; there is no edit path.

pub mod item;
