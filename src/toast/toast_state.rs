//! Toast state
//!
//! The toast record and the insertion-ordered queue that owns toasts together
//! with their expiry timers.

use ratatui::style::Color;
use std::fmt;
use std::time::Duration;

use crate::id::ToastId;
use crate::timer::TimerHandle;

/// Severity of a toast - only affects styling, never lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Parse a severity name, falling back to `Info` for anything unrecognised
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" | "warn" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Colors used when drawing a toast of this severity
    pub fn style(self) -> ToastStyle {
        match self {
            Severity::Success => ToastStyle {
                fg: Color::Black,
                bg: Color::Green,
                border: Color::LightGreen,
            },
            Severity::Error => ToastStyle {
                fg: Color::White,
                bg: Color::Red,
                border: Color::LightRed,
            },
            Severity::Warning => ToastStyle {
                fg: Color::Black,
                bg: Color::Yellow,
                border: Color::Yellow,
            },
            Severity::Info => ToastStyle {
                fg: Color::White,
                bg: Color::DarkGray,
                border: Color::Gray,
            },
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::parse_lossy(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style configuration for a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single transient message
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    /// Zero means the toast stays until dismissed
    pub duration: Duration,
    timer: Option<TimerHandle>,
}

impl Toast {
    pub fn new(id: ToastId, message: impl Into<String>, severity: Severity, duration: Duration) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
            duration,
            timer: None,
        }
    }

    /// Whether the toast only leaves on explicit removal
    pub fn is_sticky(&self) -> bool {
        self.duration.is_zero()
    }

    /// Whether an expiry timer is currently attached
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

/// Insertion-ordered toasts, oldest first
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast; a toast whose id is already queued is ignored
    pub fn push(&mut self, toast: Toast) -> bool {
        if self.contains(toast.id) {
            return false;
        }
        self.toasts.push(toast);
        true
    }

    /// Attach the expiry timer for a queued toast
    ///
    /// A toast holds at most one timer: attaching replaces and cancels any
    /// previous one. If the toast is gone the timer is cancelled immediately.
    pub fn attach_timer(&mut self, id: ToastId, timer: TimerHandle) {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.cancel_timer();
                toast.timer = Some(timer);
            }
            None => timer.cancel(),
        }
    }

    /// Remove a toast and cancel its timer, `None` if it was not queued
    pub fn remove(&mut self, id: ToastId) -> Option<Toast> {
        let index = self.toasts.iter().position(|t| t.id == id)?;
        let mut toast = self.toasts.remove(index);
        toast.cancel_timer();
        Some(toast)
    }

    /// Remove every toast, cancelling all timers
    pub fn clear(&mut self) -> usize {
        let count = self.toasts.len();
        for toast in &mut self.toasts {
            toast.cancel_timer();
        }
        self.toasts.clear();
        count
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Toast> {
        self.toasts.clone()
    }
}

impl Drop for ToastQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
#[path = "toast_state_tests.rs"]
mod toast_state_tests;
