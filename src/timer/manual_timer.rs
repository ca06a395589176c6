//! Fake clock timer
//!
//! Time only moves when [`ManualTimer::advance`] is called. Due callbacks run
//! on the advancing thread in deadline order (ties in scheduling order), with
//! no internal lock held, so a callback may schedule further timers.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::{Timer, TimerCallback, TimerHandle};

struct Scheduled {
    due: Duration,
    seq: u64,
    token: CancellationToken,
    on_fire: TimerCallback,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    pending: Vec<Scheduled>,
}

impl Clock {
    /// Pop the earliest live entry due at or before `target`
    fn pop_due(&mut self, target: Duration) -> Option<Scheduled> {
        self.pending.retain(|s| !s.token.is_cancelled());
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= target)
            .min_by_key(|(_, s)| (s.due, s.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(index))
    }
}

/// Timer driven by an explicit clock; clones share the clock
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Arc<Mutex<Clock>>,
}

impl fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualTimer")
            .field("now", &self.now())
            .field("pending", &self.pending_count())
            .finish()
    }
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Time elapsed on this clock since creation
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of scheduled callbacks that are neither fired nor cancelled
    pub fn pending_count(&self) -> usize {
        self.lock()
            .pending
            .iter()
            .filter(|s| !s.token.is_cancelled())
            .count()
    }

    /// Move the clock forward, running every callback that falls due
    ///
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now + by;
        let mut fired = 0;

        loop {
            let next = {
                let mut clock = self.lock();
                match clock.pop_due(target) {
                    Some(scheduled) => {
                        clock.now = scheduled.due;
                        scheduled
                    }
                    None => {
                        clock.now = target;
                        break;
                    }
                }
            };

            (next.on_fire)();
            fired += 1;
        }

        fired
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, on_fire: TimerCallback) -> TimerHandle {
        let handle = TimerHandle::new();
        let mut clock = self.lock();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.pending.push(Scheduled {
            due,
            seq,
            token: handle.token().clone(),
            on_fire,
        });
        handle
    }
}

#[cfg(test)]
#[path = "manual_timer_tests.rs"]
mod manual_timer_tests;
