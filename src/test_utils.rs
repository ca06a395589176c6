//! Shared test utilities for tidings
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::store::NotificationStore;
    use crate::timer::ManualTimer;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Store on a fake clock; advance the returned timer to expire toasts
    pub fn test_store() -> (NotificationStore, ManualTimer) {
        let timer = ManualTimer::new();
        (NotificationStore::new(timer.clone()), timer)
    }

    /// Playground app with default config on a fake clock
    pub fn test_app() -> (App, ManualTimer) {
        let config = Config::default();
        let timer = ManualTimer::new();
        let store = NotificationStore::with_settings(timer.clone(), config.store_settings());
        (App::new(store, &config), timer)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
