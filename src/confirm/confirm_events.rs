//! Confirmation dialog key handling
//!
//! The dialog is modal: while a request is open every key is consumed. Only
//! the explicit confirm keys accept; every other way of closing the dialog
//! cancels, so the producer's cancel continuation still runs.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::store::NotificationStore;

/// Route a key press to the open confirmation request
///
/// Returns true if the key was consumed by the dialog, false when no request
/// is open and the key should go to the rest of the UI.
pub fn handle_confirm_key(store: &NotificationStore, key: KeyEvent) -> bool {
    if !store.is_confirm_open() {
        return false;
    }

    if key.kind == KeyEventKind::Release {
        return true;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            store.resolve_confirm();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            store.resolve_cancel();
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') => {
            store.resolve_cancel();
        }
        _ => {}
    }

    true
}

#[cfg(test)]
#[path = "confirm_events_tests.rs"]
mod confirm_events_tests;
