use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use crate::config::Config;
use crate::store::NotificationStore;

/// Playground application state
pub struct App {
    pub store: NotificationStore,
    pub max_visible: usize,
    /// Set from confirmation continuations, which may run on any thread
    quit: Arc<AtomicBool>,
    revision: watch::Receiver<u64>,
    dirty: bool,
    samples: usize,
}

impl App {
    pub fn new(store: NotificationStore, config: &Config) -> Self {
        let revision = store.subscribe();
        Self {
            store,
            max_visible: config.toast.max_visible,
            quit: Arc::new(AtomicBool::new(false)),
            revision,
            dirty: true,
            samples: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }

    pub(super) fn quit_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }

    /// Redraw after input or whenever the store changed, including timer expiry
    pub fn should_render(&self) -> bool {
        self.dirty || self.revision.has_changed().unwrap_or(false)
    }

    /// Mark everything up to now as drawn; call before reading the store
    /// for a frame so changes landing mid-draw trigger another one
    pub fn begin_frame(&mut self) {
        self.dirty = false;
        self.revision.borrow_and_update();
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(super) fn next_sample(&mut self) -> usize {
        self.samples += 1;
        self.samples
    }
}
