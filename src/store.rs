//! Notification store
//!
//! The shared coordination point between producers (any application code)
//! and the rendering layer. Owns the toast queue, the confirmation slot and
//! the toast timers.

mod notification_store;
mod pending_confirm;

pub use notification_store::{NotificationStore, StoreSettings};
pub use pending_confirm::{ConfirmOutcome, PendingConfirm};
