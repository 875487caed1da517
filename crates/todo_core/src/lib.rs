//! Core logic for the to-do application.
//! The UI shell binds to the stores exposed here and never touches files.

pub mod config;
pub mod logging;
pub mod model;
pub mod persist;
pub mod session;
pub mod store;

pub use config::{AppConfig, StorePaths};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::settings::Settings;
pub use model::task::{FieldValue, Task, TaskField};
pub use persist::{JsonPersist, PersistError, PersistResult};
pub use session::TodoSession;
pub use store::list_store::{ListChange, ListStore};
pub use store::settings_store::{SettingsChange, SettingsStore};
pub use store::{Notifier, SubscriptionId};

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
