//! Timer facility
//!
//! One-shot callbacks scheduled after a delay. Every scheduled callback is
//! paired with a [`TimerHandle`] owned by whoever scheduled it; cancelling the
//! handle guarantees the callback never runs.
//!
//! Two implementations are provided:
//! - [`TokioTimer`] runs callbacks on a tokio runtime in real time.
//! - [`ManualTimer`] is a fake clock that only moves when advanced, for
//!   deterministic tests and for hosts that drive time themselves.

mod manual_timer;
mod timer_handle;
mod tokio_timer;

use std::time::Duration;

pub use manual_timer::ManualTimer;
pub use timer_handle::TimerHandle;
pub use tokio_timer::{TimerThread, TokioTimer};

/// Callback run when a timer fires
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Schedules one-shot callbacks
pub trait Timer: Send + Sync {
    /// Run `on_fire` once after `delay`, unless the returned handle is
    /// cancelled first
    ///
    /// `on_fire` must never run before `schedule` returns; callers may hold
    /// locks the callback needs.
    fn schedule(&self, delay: Duration, on_fire: TimerCallback) -> TimerHandle;
}
