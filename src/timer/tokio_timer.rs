//! Real-time timer backed by tokio tasks
//!
//! Each scheduled callback becomes one spawned task that races the delay
//! against the handle's cancellation token.

use std::thread::JoinHandle;
use std::time::Duration;

use tokio::runtime::{Builder, Handle};
use tokio_util::sync::CancellationToken;

use super::{Timer, TimerCallback, TimerHandle};
use crate::error::TidingsError;

#[derive(Debug, Clone)]
pub struct TokioTimer {
    runtime: Handle,
}

impl TokioTimer {
    /// Spawn timer tasks onto the given runtime
    ///
    /// The runtime must be driven for callbacks to run; a current-thread
    /// runtime needs a thread blocked on it.
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Use the runtime of the calling context
    pub fn current() -> Result<Self, TidingsError> {
        Ok(Self::new(Handle::try_current()?))
    }

    /// Start a current-thread runtime on its own thread and schedule onto it
    ///
    /// For synchronous hosts such as a terminal UI loop. Timers stop firing
    /// once the returned [`TimerThread`] is shut down or dropped.
    pub fn spawn_dedicated() -> Result<(Self, TimerThread), TidingsError> {
        let runtime = Builder::new_current_thread().enable_time().build()?;
        let timer = Self::new(runtime.handle().clone());

        let shutdown = CancellationToken::new();
        let stop = shutdown.clone();
        let thread = std::thread::Builder::new()
            .name("tidings-timers".to_string())
            .spawn(move || runtime.block_on(stop.cancelled()))?;

        Ok((
            timer,
            TimerThread {
                shutdown,
                thread: Some(thread),
            },
        ))
    }
}

/// Thread driving the runtime behind [`TokioTimer::spawn_dedicated`]
#[derive(Debug)]
pub struct TimerThread {
    shutdown: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl TimerThread {
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shutdown.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::error!("Timer thread panicked");
        }
    }
}

impl Drop for TimerThread {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Timer for TokioTimer {
    fn schedule(&self, delay: Duration, on_fire: TimerCallback) -> TimerHandle {
        let handle = TimerHandle::new();
        let token = handle.token().clone();

        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Cancellation may land between the sleep completing and this arm running
                    if !token.is_cancelled() {
                        on_fire();
                    }
                }
            }
        });

        handle
    }
}

#[cfg(test)]
#[path = "tokio_timer_tests.rs"]
mod tokio_timer_tests;
