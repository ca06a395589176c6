//! Toast identifiers
//!
//! Ids come from a per-store monotonic counter, so an id is never handed out
//! twice for the lifetime of the store.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier of a single toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Source of fresh toast ids
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next_id(&self) -> ToastId {
        ToastId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
