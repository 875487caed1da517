//! Application session lifecycle.
//!
//! # Responsibility
//! - Construct the task, history and settings stores explicitly.
//! - Load them at start and save them at shutdown.
//!
//! # Invariants
//! - Missing files at open are tolerated and yield empty/default stores.
//! - Save attempts every store even if an earlier one fails.

use crate::config::StorePaths;
use crate::persist::{JsonPersist, PersistResult};
use crate::store::list_store::ListStore;
use crate::store::settings_store::SettingsStore;
use log::info;
use std::time::Instant;

/// The three stores a running application binds to.
#[derive(Debug)]
pub struct TodoSession {
    paths: StorePaths,
    tasks: ListStore,
    history: ListStore,
    settings: SettingsStore,
}

impl TodoSession {
    /// Builds fresh stores for `paths` without touching the disk.
    pub fn new(paths: StorePaths) -> Self {
        Self {
            paths,
            tasks: ListStore::new(),
            history: ListStore::new(),
            settings: SettingsStore::new(),
        }
    }

    /// Builds the stores and loads each one from its file.
    pub fn open(paths: StorePaths) -> Self {
        let started_at = Instant::now();
        let mut session = Self::new(paths);
        session.tasks.load(&session.paths.tasks);
        session.history.load(&session.paths.history);
        session.settings.load(&session.paths.settings);

        info!(
            "event=session_open module=session status=ok tasks={} history={} duration_ms={}",
            session.tasks.count(),
            session.history.count(),
            started_at.elapsed().as_millis()
        );
        session
    }

    /// Best-effort save of all stores.
    pub fn save(&self) {
        self.tasks.save(&self.paths.tasks);
        self.history.save(&self.paths.history);
        self.settings.save(&self.paths.settings);
        info!("event=session_save module=session status=done");
    }

    /// Saves all stores and returns the first failure, if any.
    pub fn try_save(&self) -> PersistResult<()> {
        let results = [
            self.tasks.try_save(&self.paths.tasks),
            self.history.try_save(&self.paths.history),
            self.settings.try_save(&self.paths.settings),
        ];
        results.into_iter().collect()
    }

    /// Saves and consumes the session.
    pub fn close(self) {
        self.save();
    }

    /// Moves the task at `index` into history, marked done.
    ///
    /// Ignored when `index` is out of range.
    pub fn archive_task(&mut self, index: i64) {
        if let Some(task) = self.tasks.remove_task(index) {
            self.history.add_task(task.text, true);
        }
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    pub fn tasks(&self) -> &ListStore {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut ListStore {
        &mut self.tasks
    }

    pub fn history(&self) -> &ListStore {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ListStore {
        &mut self.history
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }
}
