//! tidings - toast notifications and modal confirmations
//!
//! A [`NotificationStore`] queues transient toasts, each with its own expiry
//! timer, and brokers at most one yes/no confirmation at a time. The rendering
//! layer reads the store and routes user answers back into it.

pub mod app;
pub mod config;
pub mod confirm;
pub mod error;
pub mod id;
pub mod store;
#[cfg(test)]
pub mod test_utils;
pub mod timer;
pub mod toast;
pub mod widgets;

// Re-export commonly used types for convenience
pub use config::Config;
pub use confirm::{ConfirmOptions, ConfirmPrompt, ConfirmView};
pub use error::TidingsError;
pub use id::ToastId;
pub use store::{ConfirmOutcome, NotificationStore, PendingConfirm, StoreSettings};
pub use timer::{ManualTimer, Timer, TokioTimer};
pub use toast::{Severity, Toast};
