//! In-memory list manager.
//!
//! # Responsibility
//! - Own the ordered item sequence shown on screen.
//! - Apply append and remove-by-id mutations with the non-empty rule.
//!
//! # Invariants
//! - Insertion order is display order.
//! - No id is issued twice within one list lifetime.

pub mod id_gen;
pub mod todo_list;
