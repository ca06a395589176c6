//! Notification store
//!
//! Cheaply clonable handle over shared state. Each slot sits behind its own
//! mutex, held only for the synchronous mutation and never while a timer
//! callback or a producer continuation runs. Poisoned locks are recovered.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::{oneshot, watch};

use super::pending_confirm::{PendingConfirm, SharedReply, send_reply};
use crate::confirm::{
    ConfirmBroker, ConfirmDefaults, ConfirmOptions, ConfirmPrompt, ConfirmRequest, ConfirmView,
    Resolution,
};
use crate::id::{IdGenerator, ToastId};
use crate::timer::Timer;
use crate::toast::{Severity, Toast, ToastQueue};

/// Default lifetime of a toast when the producer does not pick one
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Tunables applied by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub default_duration: Duration,
    pub confirm: ConfirmDefaults,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            default_duration: DEFAULT_TOAST_DURATION,
            confirm: ConfirmDefaults::default(),
        }
    }
}

struct StoreInner {
    settings: StoreSettings,
    timer: Arc<dyn Timer>,
    ids: IdGenerator,
    toasts: Mutex<ToastQueue>,
    confirm: Mutex<ConfirmBroker>,
    revision: watch::Sender<u64>,
}

impl StoreInner {
    fn toasts(&self) -> MutexGuard<'_, ToastQueue> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn confirm(&self) -> MutexGuard<'_, ConfirmBroker> {
        self.confirm.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    /// Shared removal path for explicit dismissal and timer expiry
    fn remove_toast(&self, id: ToastId, cause: &str) -> bool {
        let removed = self.toasts().remove(id);
        match removed {
            Some(toast) => {
                log::debug!("Removed {} ({}): {:?}", id, cause, toast.message);
                self.bump();
                true
            }
            None => false,
        }
    }

    fn resolve(&self, resolution: Resolution) -> bool {
        let request = self.confirm().take();
        let Some(request) = request else {
            return false;
        };

        // Slot is already empty and published before the continuation runs
        self.bump();
        log::debug!("Confirmation {:?} resolved: {:?}", request.view().title, resolution);
        request.resolve(resolution);
        true
    }
}

/// Shared store of toasts and the pending confirmation
///
/// Build one per application and hand clones to producers and to the
/// rendering layer. All operations complete synchronously and none can fail.
#[derive(Clone)]
pub struct NotificationStore {
    inner: Arc<StoreInner>,
}

impl fmt::Debug for NotificationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationStore")
            .field("settings", &self.inner.settings)
            .field("toasts", &self.toast_count())
            .field("confirm_open", &self.is_confirm_open())
            .field("revision", &self.revision())
            .finish()
    }
}

impl NotificationStore {
    pub fn new(timer: impl Timer + 'static) -> Self {
        Self::with_settings(timer, StoreSettings::default())
    }

    pub fn with_settings(timer: impl Timer + 'static, settings: StoreSettings) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(StoreInner {
                settings,
                timer: Arc::new(timer),
                ids: IdGenerator::new(),
                toasts: Mutex::new(ToastQueue::new()),
                confirm: Mutex::new(ConfirmBroker::new()),
                revision,
            }),
        }
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.inner.settings
    }

    // ==================== Toasts ====================

    /// Show a toast for the default duration
    pub fn show_toast(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.show_toast_for(message, severity, self.inner.settings.default_duration)
    }

    /// Show a toast that expires after `duration`; zero keeps it until removed
    pub fn show_toast_for(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
    ) -> ToastId {
        let inner = &self.inner;
        let id = inner.ids.next_id();
        let toast = Toast::new(id, message, severity, duration);
        log::debug!("Showing {} [{}] for {:?}: {:?}", id, severity, duration, toast.message);

        {
            // Timer must be attached under the same lock as the insert
            let mut queue = inner.toasts();
            queue.push(toast);
            if !duration.is_zero() {
                let store = Arc::downgrade(inner);
                let timer = inner
                    .timer
                    .schedule(duration, Box::new(move || expire(&store, id)));
                queue.attach_timer(id, timer);
            }
        }

        inner.bump();
        id
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.show_toast(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.show_toast(message, Severity::Error)
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.show_toast(message, Severity::Warning)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.show_toast(message, Severity::Info)
    }

    /// Dismiss a toast and cancel its timer
    ///
    /// Returns false if the toast was already gone, which is not an error.
    pub fn remove_toast(&self, id: ToastId) -> bool {
        self.inner.remove_toast(id, "dismissed")
    }

    /// Dismiss every toast, returning how many were removed
    pub fn clear_toasts(&self) -> usize {
        let removed = self.inner.toasts().clear();
        if removed > 0 {
            log::debug!("Cleared {} toasts", removed);
            self.inner.bump();
        }
        removed
    }

    /// Snapshot of the queued toasts, oldest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.toasts().to_vec()
    }

    pub fn toast_count(&self) -> usize {
        self.inner.toasts().len()
    }

    pub fn contains_toast(&self, id: ToastId) -> bool {
        self.inner.toasts().contains(id)
    }

    // ==================== Confirmation ====================

    /// Open a confirmation request
    ///
    /// A request that is still open is replaced and its continuations are
    /// dropped without running.
    pub fn show_confirm(&self, options: ConfirmOptions) {
        let request = ConfirmRequest::new(options, &self.inner.settings.confirm);
        let superseded = self.inner.confirm().open(request);
        self.inner.bump();

        if let Some(previous) = superseded {
            log::warn!(
                "Confirmation {:?} superseded before it was resolved",
                previous.view().title
            );
        }
    }

    /// Open a confirmation request and get a future for the answer
    pub fn confirm(&self, prompt: ConfirmPrompt) -> PendingConfirm {
        let (tx, rx) = oneshot::channel();
        let reply: Arc<SharedReply> = Arc::new(Mutex::new(Some(tx)));
        let cancel_reply = Arc::clone(&reply);

        self.show_confirm(ConfirmOptions::new(
            prompt,
            move || send_reply(&reply, true),
            move || send_reply(&cancel_reply, false),
        ));

        PendingConfirm::new(rx)
    }

    /// Accept the open request; no-op when idle
    pub fn resolve_confirm(&self) -> bool {
        self.inner.resolve(Resolution::Confirm)
    }

    /// Reject the open request; no-op when idle
    ///
    /// Every dismissal other than the explicit confirm action must come
    /// through here.
    pub fn resolve_cancel(&self) -> bool {
        self.inner.resolve(Resolution::Cancel)
    }

    pub fn is_confirm_open(&self) -> bool {
        self.inner.confirm().is_open()
    }

    pub fn confirm_view(&self) -> Option<ConfirmView> {
        self.inner.confirm().view().cloned()
    }

    // ==================== Observation ====================

    /// Counter bumped on every visible change
    pub fn revision(&self) -> u64 {
        *self.inner.revision.borrow()
    }

    /// Watch the change counter
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }
}

fn expire(store: &Weak<StoreInner>, id: ToastId) {
    if let Some(inner) = store.upgrade() {
        inner.remove_toast(id, "expired");
    }
}

#[cfg(test)]
#[path = "notification_store_tests.rs"]
mod notification_store_tests;
