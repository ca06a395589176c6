//! Tests for types

use super::*;
use proptest::prelude::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.toast.default_duration_ms, 4000);
    assert_eq!(config.toast.max_visible, 5);
    assert_eq!(config.confirm.title, "Confirm Action");
    assert_eq!(config.confirm.confirm_label, "Confirm");
    assert_eq!(config.confirm.cancel_label, "Cancel");
}

#[test]
fn test_parse_empty_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_toast_section() {
    let toml = r#"
[toast]
default_duration_ms = 2500
max_visible = 3
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.toast.default_duration_ms, 2500);
    assert_eq!(config.toast.max_visible, 3);
    assert_eq!(config.confirm, ConfirmConfig::default());
}

#[test]
fn test_parse_sticky_default_duration() {
    let toml = r#"
[toast]
default_duration_ms = 0
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.store_settings().default_duration, Duration::ZERO);
}

#[test]
fn test_parse_confirm_section() {
    let toml = r#"
[confirm]
title = "Are you sure?"
cancel_label = "Back"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.confirm.title, "Are you sure?");
    assert_eq!(config.confirm.confirm_label, "Confirm");
    assert_eq!(config.confirm.cancel_label, "Back");
}

#[test]
fn test_negative_duration_rejected() {
    let toml = r#"
[toast]
default_duration_ms = -5
"#;
    let config: Result<Config, _> = toml::from_str(toml);
    assert!(config.is_err());
}

#[test]
fn test_store_settings_mapping() {
    let toml = r#"
[toast]
default_duration_ms = 1500

[confirm]
title = "T"
confirm_label = "Y"
cancel_label = "N"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    let settings = config.store_settings();

    assert_eq!(settings.default_duration, Duration::from_millis(1500));
    assert_eq!(settings.confirm.title, "T");
    assert_eq!(settings.confirm.confirm_label, "Y");
    assert_eq!(settings.confirm.cancel_label, "N");
}

// Feature: config-system, Property: Missing fields use defaults
// For any subset of fields present in the [toast] section, absent fields keep
// their default values.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_missing_toast_fields_use_defaults(
        duration in proptest::option::of(0u64..100_000),
        max_visible in proptest::option::of(0usize..50)
    ) {
        let mut toml_content = String::from("[toast]\n");
        if let Some(d) = duration {
            toml_content.push_str(&format!("default_duration_ms = {}\n", d));
        }
        if let Some(m) = max_visible {
            toml_content.push_str(&format!("max_visible = {}\n", m));
        }

        let config: Config = toml::from_str(&toml_content).unwrap();
        prop_assert_eq!(config.toast.default_duration_ms, duration.unwrap_or(4000));
        prop_assert_eq!(config.toast.max_visible, max_visible.unwrap_or(5));
    }
}
