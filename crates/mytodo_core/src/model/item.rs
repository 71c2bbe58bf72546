//! To-do item model.
//!
//! # Responsibility
//! - Define the canonical `(id, value)` record held by the list.
//! - Validate items on construction and on deserialization.
//!
//! # Invariants
//! - `id` is never the nil UUID.
//! - `value` is trimmed and never empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one to-do item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Validation failures for item construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// The nil UUID is reserved and never identifies an item.
    NilId,
    /// Value is empty after trimming whitespace.
    EmptyValue,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be nil"),
            Self::EmptyValue => write!(f, "item value must not be empty"),
        }
    }
}

impl Error for ItemValidationError {}

/// One entry of the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTodoItem")]
pub struct TodoItem {
    id: TodoId,
    value: String,
}

/// Unvalidated wire shape used as the deserialization entry point.
#[derive(Deserialize)]
struct RawTodoItem {
    id: TodoId,
    value: String,
}

impl TryFrom<RawTodoItem> for TodoItem {
    type Error = ItemValidationError;

    fn try_from(raw: RawTodoItem) -> Result<Self, Self::Error> {
        Self::with_id(raw.id, raw.value)
    }
}

impl TodoItem {
    /// Creates an item with a caller-provided id.
    ///
    /// The value is trimmed before it is stored.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyValue` when `value` is blank after trimming.
    pub fn with_id(id: TodoId, value: impl AsRef<str>) -> Result<Self, ItemValidationError> {
        if id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        let value = normalize_value(value.as_ref()).ok_or(ItemValidationError::EmptyValue)?;
        Ok(Self {
            id,
            value: value.to_string(),
        })
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Trims raw input and returns `None` when nothing is left.
///
/// This is the single validation rule for new items.
pub fn normalize_value(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_value, ItemValidationError, TodoItem};
    use uuid::Uuid;

    #[test]
    fn normalize_value_trims_and_rejects_blank() {
        assert_eq!(normalize_value("  Buy milk \n"), Some("Buy milk"));
        assert_eq!(normalize_value(" \t\r\n"), None);
        assert_eq!(normalize_value(""), None);
    }

    #[test]
    fn with_id_stores_trimmed_value() {
        let id = Uuid::from_u128(7);
        let item = TodoItem::with_id(id, "  Walk dog  ").expect("valid item");
        assert_eq!(item.id(), id);
        assert_eq!(item.value(), "Walk dog");
    }

    #[test]
    fn with_id_rejects_nil_id_and_blank_value() {
        assert_eq!(
            TodoItem::with_id(Uuid::nil(), "x").unwrap_err(),
            ItemValidationError::NilId
        );
        assert_eq!(
            TodoItem::with_id(Uuid::from_u128(1), "   ").unwrap_err(),
            ItemValidationError::EmptyValue
        );
    }
}
