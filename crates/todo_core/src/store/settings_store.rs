//! Observable settings store.
//!
//! # Invariants
//! - Setters notify only when the stored value actually changes.
//! - No range validation is applied to either field.

use super::{Notifier, SubscriptionId};
use crate::model::settings::Settings;

/// Property of [`SettingsStore`] whose value changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    ExpandedWidthChanged,
    WinHeightChanged,
}

/// Two-integer settings object with change notification.
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: Settings,
    notifier: Notifier<SettingsChange>,
}

impl SettingsStore {
    /// Creates a store at the default geometry (400 x 600).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SettingsChange) + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn expanded_width(&self) -> i32 {
        self.settings.expanded_width
    }

    pub fn win_height(&self) -> i32 {
        self.settings.win_height
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn set_expanded_width(&mut self, expanded_width: i32) {
        if self.settings.expanded_width != expanded_width {
            self.settings.expanded_width = expanded_width;
            self.notifier.emit(&SettingsChange::ExpandedWidthChanged);
        }
    }

    pub fn set_win_height(&mut self, win_height: i32) {
        if self.settings.win_height != win_height {
            self.settings.win_height = win_height;
            self.notifier.emit(&SettingsChange::WinHeightChanged);
        }
    }

    /// Writes both fields through their setters.
    pub fn apply(&mut self, settings: Settings) {
        self.set_expanded_width(settings.expanded_width);
        self.set_win_height(settings.win_height);
    }
}

#[cfg(test)]
mod tests {
    use super::{SettingsChange, SettingsStore};
    use crate::model::settings::Settings;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_at_defaults() {
        let store = SettingsStore::new();
        assert_eq!(store.expanded_width(), 400);
        assert_eq!(store.win_height(), 600);
    }

    #[test]
    fn setters_notify_only_on_actual_change() {
        let mut store = SettingsStore::new();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        store.subscribe(move |change| sink.borrow_mut().push(*change));

        store.set_expanded_width(400);
        store.set_win_height(600);
        assert!(changes.borrow().is_empty());

        store.set_expanded_width(-5);
        store.set_win_height(900);
        assert_eq!(
            *changes.borrow(),
            vec![
                SettingsChange::ExpandedWidthChanged,
                SettingsChange::WinHeightChanged
            ]
        );
        assert_eq!(store.expanded_width(), -5);
    }

    #[test]
    fn apply_emits_for_changed_fields_only() {
        let mut store = SettingsStore::new();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        store.subscribe(move |change| sink.borrow_mut().push(*change));

        store.apply(Settings {
            expanded_width: 400,
            win_height: 480,
        });

        assert_eq!(*changes.borrow(), vec![SettingsChange::WinHeightChanged]);
        assert_eq!(store.settings().win_height, 480);
    }
}
