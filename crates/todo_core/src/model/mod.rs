//! Plain data records owned by the stores.
//!
//! # Responsibility
//! - Define the task row and settings shapes shared by stores and persistence.
//!
//! # Invariants
//! - Tasks have no stable ID; identity is the row position inside a store.
//! - Settings defaults are `(expanded_width, win_height) = (400, 600)`.

pub mod settings;
pub mod task;
