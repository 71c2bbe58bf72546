//! Ordered to-do list with append and remove-by-id.
//!
//! # Responsibility
//! - Hold items in insertion order.
//! - Enforce the non-empty rule on append and id uniqueness.
//!
//! # Invariants
//! - Blank input never changes the list.
//! - An id is appended at most once per list lifetime, even after removal.
//! - Remove keeps the relative order of the remaining items.

use crate::list::id_gen::{IdGenerator, RandomIdGenerator};
use crate::model::item::{normalize_value, TodoId, TodoItem};
use log::{debug, error, info};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

const MAX_ID_ATTEMPTS: usize = 8;

/// In-memory list manager.
#[derive(Debug, Clone, Default)]
pub struct TodoList<G: IdGenerator = RandomIdGenerator> {
    items: Vec<TodoItem>,
    issued: HashSet<TodoId>,
    ids: G,
}

impl TodoList<RandomIdGenerator> {
    /// Creates an empty list using random UUID ids.
    pub fn new() -> Self {
        Self::with_id_generator(RandomIdGenerator)
    }
}

impl<G: IdGenerator> TodoList<G> {
    /// Creates an empty list using the provided id strategy.
    pub fn with_id_generator(ids: G) -> Self {
        Self {
            items: Vec::new(),
            issued: HashSet::new(),
            ids,
        }
    }

    /// Appends a new item built from `raw_text`.
    ///
    /// Returns the new id, or `None` when the trimmed text is empty and the
    /// list was left unchanged.
    pub fn add(&mut self, raw_text: &str) -> Option<TodoId> {
        let Some(value) = normalize_value(raw_text) else {
            debug!(
                "event=todo_add_ignored module=list status=ok reason=blank len={}",
                self.items.len()
            );
            return None;
        };

        let id = self.fresh_id()?;
        let item = match TodoItem::with_id(id, value) {
            Ok(item) => item,
            Err(err) => {
                error!("event=todo_add module=list status=error reason={err}");
                return None;
            }
        };
        self.items.push(item);
        info!(
            "event=todo_add module=list status=ok id={id} len={}",
            self.items.len()
        );
        Some(id)
    }

    /// Removes the item with `id`, if present.
    ///
    /// Returns the removed item; `None` means nothing changed.
    pub fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let Some(index) = self.position(id) else {
            debug!(
                "event=todo_remove_missing module=list status=ok id={id} len={}",
                self.items.len()
            );
            return None;
        };

        let removed = self.items.remove(index);
        info!(
            "event=todo_remove module=list status=ok id={id} len={}",
            self.items.len()
        );
        Some(removed)
    }

    /// Drops every item. Issued ids stay reserved.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.items.iter()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn fresh_id(&mut self) -> Option<TodoId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if !candidate.is_nil() && self.issued.insert(candidate) {
                return Some(candidate);
            }
        }
        error!(
            "event=todo_add module=list status=error reason=id_exhausted attempts={MAX_ID_ATTEMPTS}"
        );
        None
    }
}

impl<'a, G: IdGenerator> IntoIterator for &'a TodoList<G> {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<G: IdGenerator> Serialize for TodoList<G> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::TodoList;
    use crate::list::id_gen::{IdGenerator, SequentialIdGenerator};
    use crate::model::item::TodoId;
    use uuid::Uuid;

    struct RepeatingIds;

    impl IdGenerator for RepeatingIds {
        fn next_id(&mut self) -> TodoId {
            Uuid::from_u128(42)
        }
    }

    #[test]
    fn add_rejects_repeated_generator_ids() {
        let mut list = TodoList::with_id_generator(RepeatingIds);
        assert_eq!(list.add("first"), Some(Uuid::from_u128(42)));
        assert_eq!(list.add("second"), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn removed_ids_are_not_reissued() {
        let mut list = TodoList::with_id_generator(RepeatingIds);
        let id = list.add("first").expect("first add");
        list.remove(id).expect("remove first");
        assert_eq!(list.add("again"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn clear_empties_list_but_keeps_counter_running() {
        let mut list = TodoList::with_id_generator(SequentialIdGenerator::new());
        list.add("a");
        list.add("b");
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.add("c"), Some(Uuid::from_u128(3)));
    }
}
