//! Ordered task list store.
//!
//! # Responsibility
//! - Own an ordered sequence of [`Task`] rows in display order.
//! - Expose insert/remove/update/move operations to a UI binding layer.
//!
//! # Invariants
//! - New rows are always inserted at index 0 (most-recent-first).
//! - Out-of-range indices are ignored: the call is a no-op and no change is
//!   emitted.
//! - `move_task` keeps the relative order of every other row.

use super::{Notifier, SubscriptionId};
use crate::model::task::{FieldValue, Task, TaskField};
use log::debug;

/// Structural or field change applied to a [`ListStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// A row was inserted at `index`.
    Inserted { index: usize },
    /// The row at `index` was removed.
    Removed { index: usize },
    /// One field of the row at `index` was written.
    DataChanged { index: usize, field: TaskField },
    /// The row at `from` now lives at `to`.
    Moved { from: usize, to: usize },
    /// All rows were replaced.
    Reset,
}

impl ListChange {
    /// Destination of a move in "insert before row" numbering, as counted
    /// before the row is taken out.
    ///
    /// Moving down lands before `to + 1`; moving up lands before `to`.
    pub fn insert_before(&self) -> Option<usize> {
        match *self {
            Self::Moved { from, to } if from < to => Some(to + 1),
            Self::Moved { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Ordered, observable collection of tasks.
#[derive(Debug, Default)]
pub struct ListStore {
    tasks: Vec<Task>,
    notifier: Notifier<ListChange>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store that already holds `tasks`, in the given order.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            notifier: Notifier::new(),
        }
    }

    /// Registers a change observer.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ListChange) + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Inserts an open task at the front.
    pub fn add(&mut self, text: impl Into<String>) {
        self.add_task(text, false);
    }

    /// Inserts a task at index 0. Always succeeds.
    pub fn add_task(&mut self, text: impl Into<String>, done: bool) {
        self.tasks.insert(0, Task::new(text, done));
        self.notifier.emit(&ListChange::Inserted { index: 0 });
    }

    /// Removes the row at `index`; ignored when out of range.
    ///
    /// Returns the removed task so callers can hand it to another store.
    pub fn remove_task(&mut self, index: i64) -> Option<Task> {
        let Some(index) = self.checked_index(index) else {
            debug!(
                "event=list_remove module=store status=skip reason=index_out_of_range index={index} len={}",
                self.tasks.len()
            );
            return None;
        };

        let task = self.tasks.remove(index);
        self.notifier.emit(&ListChange::Removed { index });
        Some(task)
    }

    /// Writes the done flag of the row at `index`; ignored when out of range.
    ///
    /// A change is emitted even if the flag already had that value.
    pub fn set_done(&mut self, index: i64, done: bool) {
        let Some(index) = self.checked_index(index) else {
            debug!(
                "event=list_set_done module=store status=skip reason=index_out_of_range index={index} len={}",
                self.tasks.len()
            );
            return;
        };

        self.tasks[index].done = done;
        self.notifier.emit(&ListChange::DataChanged {
            index,
            field: TaskField::Done,
        });
    }

    /// Moves the row at `from` so it ends up at `to`.
    ///
    /// Ignored when either index is out of range or both are equal.
    pub fn move_task(&mut self, from: i64, to: i64) {
        let (Some(from), Some(to)) = (self.checked_index(from), self.checked_index(to)) else {
            debug!(
                "event=list_move module=store status=skip reason=index_out_of_range from={from} to={to} len={}",
                self.tasks.len()
            );
            return;
        };
        if from == to {
            return;
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        self.notifier.emit(&ListChange::Moved { from, to });
    }

    /// Replaces every row, keeping the given order.
    pub fn reset(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.notifier.emit(&ListChange::Reset);
    }

    /// Removes every row.
    pub fn clear(&mut self) {
        self.reset(Vec::new());
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Reads one bindable field of the row at `index`.
    pub fn field(&self, index: usize, field: TaskField) -> Option<FieldValue<'_>> {
        self.tasks.get(index).map(|task| task.field(field))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn checked_index(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|index| *index < self.tasks.len())
    }
}

impl<'a> IntoIterator for &'a ListStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{ListChange, ListStore};
    use crate::model::task::{FieldValue, Task, TaskField};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn texts(store: &ListStore) -> Vec<&str> {
        store.iter().map(|task| task.text.as_str()).collect()
    }

    fn abcd() -> ListStore {
        ListStore::with_tasks(["A", "B", "C", "D"].into_iter().map(Task::open).collect())
    }

    fn recorder(store: &mut ListStore) -> Rc<RefCell<Vec<ListChange>>> {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        store.subscribe(move |change| sink.borrow_mut().push(*change));
        changes
    }

    #[test]
    fn add_inserts_at_front_and_notifies() {
        let mut store = ListStore::new();
        let changes = recorder(&mut store);

        store.add("first");
        store.add_task("second", true);

        assert_eq!(texts(&store), vec!["second", "first"]);
        assert!(store.get(0).unwrap().done);
        assert_eq!(
            *changes.borrow(),
            vec![
                ListChange::Inserted { index: 0 },
                ListChange::Inserted { index: 0 }
            ]
        );
    }

    #[test]
    fn move_down_and_up_keep_relative_order() {
        let mut store = abcd();
        store.move_task(0, 2);
        assert_eq!(texts(&store), vec!["B", "C", "A", "D"]);

        let mut store = abcd();
        store.move_task(2, 0);
        assert_eq!(texts(&store), vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn invalid_indices_are_silent_noops() {
        let mut store = abcd();
        let changes = recorder(&mut store);

        assert!(store.remove_task(-1).is_none());
        assert!(store.remove_task(4).is_none());
        store.set_done(9, true);
        store.move_task(1, 1);
        store.move_task(-1, 2);
        store.move_task(0, 4);

        assert_eq!(texts(&store), vec!["A", "B", "C", "D"]);
        assert!(store.iter().all(|task| !task.done));
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn set_done_notifies_even_when_unchanged() {
        let mut store = abcd();
        let changes = recorder(&mut store);

        store.set_done(1, true);
        store.set_done(1, true);

        assert_eq!(store.field(1, TaskField::Done), Some(FieldValue::Done(true)));
        assert_eq!(changes.borrow().len(), 2);
        assert_eq!(
            changes.borrow()[0],
            ListChange::DataChanged {
                index: 1,
                field: TaskField::Done
            }
        );
    }

    #[test]
    fn insert_before_follows_move_direction() {
        assert_eq!(ListChange::Moved { from: 0, to: 2 }.insert_before(), Some(3));
        assert_eq!(ListChange::Moved { from: 2, to: 0 }.insert_before(), Some(0));
        assert_eq!(ListChange::Reset.insert_before(), None);
    }

    #[test]
    fn remove_returns_the_removed_task() {
        let mut store = abcd();
        let removed = store.remove_task(2).unwrap();
        assert_eq!(removed.text, "C");
        assert_eq!(texts(&store), vec!["A", "B", "D"]);
    }
}
