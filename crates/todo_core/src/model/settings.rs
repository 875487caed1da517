//! Window settings model.
//!
//! # Invariants
//! - On disk the fields are named `Width` / `Height`, not their in-memory
//!   names. This mapping is a fixed file-format contract.

use serde::Serialize;

pub const DEFAULT_EXPANDED_WIDTH: i32 = 400;
pub const DEFAULT_WIN_HEIGHT: i32 = 600;

/// Flat settings record persisted in `settings.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Settings {
    #[serde(rename = "Width")]
    pub expanded_width: i32,
    #[serde(rename = "Height")]
    pub win_height: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            expanded_width: DEFAULT_EXPANDED_WIDTH,
            win_height: DEFAULT_WIN_HEIGHT,
        }
    }
}
