use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::atomic::Ordering;
use std::time::Duration;

use super::app_state::App;
use crate::confirm::{self, ConfirmOptions, ConfirmPrompt};
use crate::toast::Severity;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if !confirm::handle_confirm_key(&self.store, key) {
                self.quit_flag().store(true, Ordering::SeqCst);
            }
            return;
        }

        // Modal dialog swallows everything while open
        if confirm::handle_confirm_key(&self.store, key) {
            return;
        }

        match key.code {
            KeyCode::Char('s') => self.show_sample(Severity::Success),
            KeyCode::Char('w') => self.show_sample(Severity::Warning),
            KeyCode::Char('i') => self.show_sample(Severity::Info),
            KeyCode::Char('e') => {
                let n = self.next_sample();
                self.store.show_toast_for(
                    format!("Error #{} (press d to dismiss)", n),
                    Severity::Error,
                    Duration::ZERO,
                );
            }
            KeyCode::Char('d') => self.dismiss_oldest(),
            KeyCode::Char('c') => self.ask_clear(),
            KeyCode::Char('q') | KeyCode::Esc => self.ask_quit(),
            _ => {}
        }
    }

    fn show_sample(&mut self, severity: Severity) {
        let n = self.next_sample();
        let message = match severity {
            Severity::Success => format!("Saved item #{}", n),
            Severity::Warning => format!("Disk almost full (#{})", n),
            _ => format!("Synced {} records", n),
        };
        self.store.show_toast(message, severity);
    }

    fn dismiss_oldest(&mut self) {
        if let Some(oldest) = self.store.toasts().first() {
            self.store.remove_toast(oldest.id);
        }
    }

    fn ask_clear(&mut self) {
        let count = self.store.toast_count();
        if count == 0 {
            self.store.info("Nothing to clear");
            return;
        }

        let on_confirm = self.store.clone();
        let on_cancel = self.store.clone();
        self.store.show_confirm(ConfirmOptions::new(
            ConfirmPrompt::new(format!("Dismiss all {} toasts?", count))
                .title("Clear toasts")
                .confirm_text("Clear"),
            move || {
                let cleared = on_confirm.clear_toasts();
                on_confirm.success(format!("Cleared {} toasts", cleared));
            },
            move || {
                on_cancel.info("Kept toasts");
            },
        ));
    }

    fn ask_quit(&mut self) {
        let quit = self.quit_flag();
        self.store.show_confirm(ConfirmOptions::new(
            ConfirmPrompt::new("Leave the playground?").confirm_text("Quit"),
            move || quit.store(true, Ordering::SeqCst),
            || {},
        ));
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
