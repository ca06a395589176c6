// Configuration type definitions

use serde::Deserialize;
use std::time::Duration;

use crate::confirm::ConfirmDefaults;
use crate::store::StoreSettings;

/// Toast configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToastConfig {
    /// Lifetime of toasts shown without an explicit duration; 0 = sticky
    #[serde(default = "default_duration_ms")]
    pub default_duration_ms: u64,
    /// How many toasts the stack draws before summarising the rest
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_duration_ms() -> u64 {
    4000
}

fn default_max_visible() -> usize {
    5
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            default_duration_ms: default_duration_ms(),
            max_visible: default_max_visible(),
        }
    }
}

/// Confirmation dialog configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfirmConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,
    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,
}

fn default_title() -> String {
    ConfirmDefaults::default().title
}

fn default_confirm_label() -> String {
    ConfirmDefaults::default().confirm_label
}

fn default_cancel_label() -> String {
    ConfirmDefaults::default().cancel_label
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        let defaults = ConfirmDefaults::default();
        ConfirmConfig {
            title: defaults.title,
            confirm_label: defaults.confirm_label,
            cancel_label: defaults.cancel_label,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub confirm: ConfirmConfig,
}

impl Config {
    /// Settings handed to the notification store
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            default_duration: Duration::from_millis(self.toast.default_duration_ms),
            confirm: ConfirmDefaults {
                title: self.confirm.title.clone(),
                confirm_label: self.confirm.confirm_label.clone(),
                cancel_label: self.confirm.cancel_label.clone(),
            },
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
