//! Toast module
//!
//! Transient messages shown in a stack until their timer expires or the user
//! dismisses them.

mod toast_render;
mod toast_state;

pub use toast_render::render_toasts;
pub use toast_state::{Severity, Toast, ToastQueue, ToastStyle};
