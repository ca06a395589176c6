//! Tests for confirm_state

use super::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default, Clone)]
struct Calls {
    confirm: Arc<AtomicUsize>,
    cancel: Arc<AtomicUsize>,
}

impl Calls {
    fn options(&self, prompt: ConfirmPrompt) -> ConfirmOptions {
        let confirm = Arc::clone(&self.confirm);
        let cancel = Arc::clone(&self.cancel);
        ConfirmOptions::new(
            prompt,
            move || {
                confirm.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                cancel.fetch_add(1, Ordering::SeqCst);
            },
        )
    }

    fn counts(&self) -> (usize, usize) {
        (
            self.confirm.load(Ordering::SeqCst),
            self.cancel.load(Ordering::SeqCst),
        )
    }
}

#[test]
fn test_prompt_builder() {
    let prompt = ConfirmPrompt::new("Delete?")
        .title("Danger")
        .confirm_text("Delete")
        .cancel_text("Keep");

    assert_eq!(prompt.message, "Delete?");
    assert_eq!(prompt.title.as_deref(), Some("Danger"));
    assert_eq!(prompt.confirm_text.as_deref(), Some("Delete"));
    assert_eq!(prompt.cancel_text.as_deref(), Some("Keep"));
}

#[test]
fn test_request_applies_defaults() {
    let calls = Calls::default();
    let request = ConfirmRequest::new(
        calls.options(ConfirmPrompt::new("Delete?")),
        &ConfirmDefaults::default(),
    );

    assert_eq!(
        request.view(),
        &ConfirmView {
            title: "Confirm Action".to_string(),
            message: "Delete?".to_string(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    );
}

#[test]
fn test_request_empty_message_default() {
    let calls = Calls::default();
    let request = ConfirmRequest::new(
        calls.options(ConfirmPrompt::default()),
        &ConfirmDefaults::default(),
    );
    assert_eq!(request.view().message, "");
}

#[test]
fn test_request_prefers_prompt_text() {
    let calls = Calls::default();
    let request = ConfirmRequest::new(
        calls.options(ConfirmPrompt::new("Go?").title("T").confirm_text("Yes").cancel_text("No")),
        &ConfirmDefaults::default(),
    );

    let view = request.view();
    assert_eq!(view.title, "T");
    assert_eq!(view.confirm_label, "Yes");
    assert_eq!(view.cancel_label, "No");
}

#[test]
fn test_custom_defaults_used() {
    let calls = Calls::default();
    let defaults = ConfirmDefaults {
        title: "Sure?".to_string(),
        confirm_label: "OK".to_string(),
        cancel_label: "Back".to_string(),
    };
    let request = ConfirmRequest::new(calls.options(ConfirmPrompt::new("m")), &defaults);

    assert_eq!(request.view().title, "Sure?");
    assert_eq!(request.view().confirm_label, "OK");
    assert_eq!(request.view().cancel_label, "Back");
}

#[test]
fn test_resolve_confirm_runs_only_on_confirm() {
    let calls = Calls::default();
    let request = ConfirmRequest::new(calls.options(ConfirmPrompt::new("m")), &ConfirmDefaults::default());

    request.resolve(Resolution::Confirm);
    assert_eq!(calls.counts(), (1, 0));
}

#[test]
fn test_resolve_cancel_runs_only_on_cancel() {
    let calls = Calls::default();
    let request = ConfirmRequest::new(calls.options(ConfirmPrompt::new("m")), &ConfirmDefaults::default());

    request.resolve(Resolution::Cancel);
    assert_eq!(calls.counts(), (0, 1));
}

#[test]
fn test_broker_starts_idle() {
    let broker = ConfirmBroker::new();
    assert!(!broker.is_open());
    assert!(broker.view().is_none());
}

#[test]
fn test_broker_open_then_take() {
    let calls = Calls::default();
    let mut broker = ConfirmBroker::new();

    let superseded = broker.open(ConfirmRequest::new(
        calls.options(ConfirmPrompt::new("first")),
        &ConfirmDefaults::default(),
    ));
    assert!(superseded.is_none());
    assert!(broker.is_open());
    assert_eq!(broker.view().unwrap().message, "first");

    let request = broker.take().unwrap();
    assert!(!broker.is_open());
    assert!(broker.take().is_none());
    assert_eq!(request.view().message, "first");
}

#[test]
fn test_broker_open_supersedes_without_resolving() {
    let first = Calls::default();
    let second = Calls::default();
    let mut broker = ConfirmBroker::new();

    broker.open(ConfirmRequest::new(
        first.options(ConfirmPrompt::new("first")),
        &ConfirmDefaults::default(),
    ));
    let superseded = broker.open(ConfirmRequest::new(
        second.options(ConfirmPrompt::new("second")),
        &ConfirmDefaults::default(),
    ));

    assert_eq!(superseded.unwrap().view().message, "first");
    assert_eq!(broker.view().unwrap().message, "second");
    assert_eq!(first.counts(), (0, 0));
}
