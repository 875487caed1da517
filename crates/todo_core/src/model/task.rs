//! Task row model.
//!
//! # Responsibility
//! - Define the `{ text, done }` record persisted in `tasks.json` and
//!   `history.json`.
//! - Name the per-row fields a UI binding reads.

use serde::Serialize;

/// One to-do entry.
///
/// Identity is positional: two tasks with the same text are still distinct
/// rows, and a row's identity changes when it moves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Task {
    pub text: String,
    pub done: bool,
}

impl Task {
    /// Creates a task with the given completion flag.
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        Self {
            text: text.into(),
            done,
        }
    }

    /// Creates an open (not done) task.
    pub fn open(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// Reads one bindable field.
    pub fn field(&self, field: TaskField) -> FieldValue<'_> {
        match field {
            TaskField::Text => FieldValue::Text(self.text.as_str()),
            TaskField::Done => FieldValue::Done(self.done),
        }
    }
}

/// Bindable per-row field of a [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Text,
    Done,
}

impl TaskField {
    /// Name under which the field is exposed to UI bindings and stored on
    /// disk.
    pub fn role_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Done => "done",
        }
    }
}

/// Borrowed value of a single task field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Done(bool),
}
