//! Screen session state machine.
//!
//! # Responsibility
//! - Hold the draft text next to the list it feeds.
//! - Apply `Intent`s and report what changed.
//!
//! # Invariants
//! - `PressAdd` clears the draft only when an item was appended.
//! - `PressDelete` never touches the draft.

use crate::list::id_gen::{IdGenerator, RandomIdGenerator};
use crate::list::todo_list::TodoList;
use crate::model::item::{TodoId, TodoItem};
use crate::screen::view::ScreenView;

/// User action forwarded by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Text field content changed.
    EditDraft(String),
    /// Add control pressed.
    PressAdd,
    /// Delete control pressed on the row with this id.
    PressDelete(TodoId),
}

/// Result of one dispatched intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    DraftChanged,
    Added(TodoId),
    /// Draft was blank after trimming; nothing changed.
    AddIgnored,
    Removed(TodoItem),
    /// No row had this id; nothing changed.
    RemoveIgnored(TodoId),
}

impl IntentOutcome {
    /// Whether the list itself changed.
    pub fn list_changed(&self) -> bool {
        matches!(self, Self::Added(_) | Self::Removed(_))
    }
}

/// The single to-do screen: list plus draft text.
#[derive(Debug, Clone, Default)]
pub struct TodoScreen<G: IdGenerator = RandomIdGenerator> {
    list: TodoList<G>,
    draft: String,
}

impl TodoScreen<RandomIdGenerator> {
    pub fn new() -> Self {
        Self::with_list(TodoList::new())
    }
}

impl<G: IdGenerator> TodoScreen<G> {
    /// Starts a session over an existing list with an empty draft.
    pub fn with_list(list: TodoList<G>) -> Self {
        Self {
            list,
            draft: String::new(),
        }
    }

    /// Applies one intent.
    pub fn dispatch(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::EditDraft(text) => {
                self.draft = text;
                IntentOutcome::DraftChanged
            }
            Intent::PressAdd => match self.list.add(&self.draft) {
                Some(id) => {
                    self.draft.clear();
                    IntentOutcome::Added(id)
                }
                None => IntentOutcome::AddIgnored,
            },
            Intent::PressDelete(id) => match self.list.remove(id) {
                Some(item) => IntentOutcome::Removed(item),
                None => IntentOutcome::RemoveIgnored(id),
            },
        }
    }

    /// Drops all items and the draft.
    pub fn reset(&mut self) {
        self.list.clear();
        self.draft.clear();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn list(&self) -> &TodoList<G> {
        &self.list
    }

    /// Builds the current render snapshot.
    pub fn view(&self) -> ScreenView {
        ScreenView::build(&self.draft, self.list.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::{Intent, IntentOutcome, TodoScreen};
    use crate::list::id_gen::SequentialIdGenerator;
    use crate::list::todo_list::TodoList;
    use uuid::Uuid;

    fn screen() -> TodoScreen<SequentialIdGenerator> {
        TodoScreen::with_list(TodoList::with_id_generator(SequentialIdGenerator::new()))
    }

    #[test]
    fn press_add_clears_draft_on_success() {
        let mut screen = screen();
        screen.dispatch(Intent::EditDraft(" Buy milk ".to_string()));

        let outcome = screen.dispatch(Intent::PressAdd);
        assert_eq!(outcome, IntentOutcome::Added(Uuid::from_u128(1)));
        assert!(outcome.list_changed());
        assert_eq!(screen.draft(), "");
        assert_eq!(screen.list().items()[0].value(), "Buy milk");
    }

    #[test]
    fn press_add_keeps_blank_draft() {
        let mut screen = screen();
        screen.dispatch(Intent::EditDraft("   ".to_string()));

        let outcome = screen.dispatch(Intent::PressAdd);
        assert_eq!(outcome, IntentOutcome::AddIgnored);
        assert!(!outcome.list_changed());
        assert_eq!(screen.draft(), "   ");
        assert!(screen.list().is_empty());
    }

    #[test]
    fn press_delete_leaves_draft_alone() {
        let mut screen = screen();
        screen.dispatch(Intent::EditDraft("a".to_string()));
        screen.dispatch(Intent::PressAdd);
        screen.dispatch(Intent::EditDraft("half typed".to_string()));

        let outcome = screen.dispatch(Intent::PressDelete(Uuid::from_u128(1)));
        assert!(matches!(outcome, IntentOutcome::Removed(ref item) if item.value() == "a"));
        assert_eq!(screen.draft(), "half typed");

        let missing = screen.dispatch(Intent::PressDelete(Uuid::from_u128(1)));
        assert_eq!(missing, IntentOutcome::RemoveIgnored(Uuid::from_u128(1)));
    }

    #[test]
    fn reset_drops_items_and_draft() {
        let mut screen = screen();
        screen.dispatch(Intent::EditDraft("a".to_string()));
        screen.dispatch(Intent::PressAdd);
        screen.dispatch(Intent::EditDraft("b".to_string()));

        screen.reset();
        assert!(screen.list().is_empty());
        assert_eq!(screen.draft(), "");
    }
}
