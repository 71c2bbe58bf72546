//! Render snapshot for the to-do screen.

use crate::model::item::{TodoId, TodoItem};
use serde::Serialize;

/// Screen title.
pub const SCREEN_TITLE: &str = "My Todo List";
/// Input placeholder shown while the draft is empty.
pub const INPUT_PLACEHOLDER: &str = "Add a new task...";
/// Add control label.
pub const ADD_LABEL: &str = "Add";
/// Per-row delete control label.
pub const DELETE_LABEL: &str = "Delete";
/// Message shown when the list has no items.
pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one above!";

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: TodoId,
    pub value: String,
    pub delete_label: &'static str,
}

impl From<&TodoItem> for RowView {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id(),
            value: item.value().to_string(),
            delete_label: DELETE_LABEL,
        }
    }
}

/// Everything a presentation layer needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub title: &'static str,
    pub draft: String,
    pub placeholder: &'static str,
    pub add_label: &'static str,
    /// Rows in display (insertion) order.
    pub rows: Vec<RowView>,
    /// `Some` exactly when `rows` is empty.
    pub empty_message: Option<&'static str>,
}

impl ScreenView {
    pub(crate) fn build<'a>(draft: &str, items: impl IntoIterator<Item = &'a TodoItem>) -> Self {
        let rows = items.into_iter().map(RowView::from).collect::<Vec<_>>();
        let empty_message = rows.is_empty().then_some(EMPTY_MESSAGE);
        Self {
            title: SCREEN_TITLE,
            draft: draft.to_string(),
            placeholder: INPUT_PLACEHOLDER,
            add_label: ADD_LABEL,
            rows,
            empty_message,
        }
    }

    /// Whether the placeholder should be shown instead of draft text.
    pub fn shows_placeholder(&self) -> bool {
        self.draft.is_empty()
    }
}
