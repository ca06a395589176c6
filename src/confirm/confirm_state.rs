//! Confirmation state
//!
//! The pending request slot and the request record with its continuations.

use std::fmt;

/// Zero-argument continuation supplied by the producer
pub type Continuation = Box<dyn FnOnce() + Send + 'static>;

/// Display text of a confirmation request
///
/// Only `message` is required; missing fields fall back to [`ConfirmDefaults`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfirmPrompt {
    pub title: Option<String>,
    pub message: String,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
}

impl ConfirmPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }
}

/// A prompt together with both continuations
pub struct ConfirmOptions {
    pub prompt: ConfirmPrompt,
    on_confirm: Continuation,
    on_cancel: Continuation,
}

impl ConfirmOptions {
    pub fn new<C, X>(prompt: ConfirmPrompt, on_confirm: C, on_cancel: X) -> Self
    where
        C: FnOnce() + Send + 'static,
        X: FnOnce() + Send + 'static,
    {
        Self {
            prompt,
            on_confirm: Box::new(on_confirm),
            on_cancel: Box::new(on_cancel),
        }
    }
}

impl fmt::Debug for ConfirmOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmOptions")
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

/// Text used when a prompt leaves a field unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDefaults {
    pub title: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Default for ConfirmDefaults {
    fn default() -> Self {
        Self {
            title: "Confirm Action".to_string(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

/// What the rendering layer paints for the open request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmView {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// How the user answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Confirm,
    Cancel,
}

/// An open confirmation request
///
/// Resolving consumes the request, so each continuation can run at most once
/// and only one of the two ever runs.
pub struct ConfirmRequest {
    view: ConfirmView,
    on_confirm: Continuation,
    on_cancel: Continuation,
}

impl ConfirmRequest {
    pub fn new(options: ConfirmOptions, defaults: &ConfirmDefaults) -> Self {
        let ConfirmOptions {
            prompt,
            on_confirm,
            on_cancel,
        } = options;

        Self {
            view: ConfirmView {
                title: prompt.title.unwrap_or_else(|| defaults.title.clone()),
                message: prompt.message,
                confirm_label: prompt
                    .confirm_text
                    .unwrap_or_else(|| defaults.confirm_label.clone()),
                cancel_label: prompt
                    .cancel_text
                    .unwrap_or_else(|| defaults.cancel_label.clone()),
            },
            on_confirm,
            on_cancel,
        }
    }

    pub fn view(&self) -> &ConfirmView {
        &self.view
    }

    /// Run the continuation matching `resolution`; the other one is dropped
    pub fn resolve(self, resolution: Resolution) {
        match resolution {
            Resolution::Confirm => (self.on_confirm)(),
            Resolution::Cancel => (self.on_cancel)(),
        }
    }
}

impl fmt::Debug for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

/// Slot holding at most one open request
#[derive(Debug, Default)]
pub struct ConfirmBroker {
    pending: Option<ConfirmRequest>,
}

impl ConfirmBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a request, returning the one it superseded (if any) unresolved
    pub fn open(&mut self, request: ConfirmRequest) -> Option<ConfirmRequest> {
        self.pending.replace(request)
    }

    /// Close the slot and hand back the open request for resolution
    pub fn take(&mut self) -> Option<ConfirmRequest> {
        self.pending.take()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn view(&self) -> Option<&ConfirmView> {
        self.pending.as_ref().map(ConfirmRequest::view)
    }
}

#[cfg(test)]
#[path = "confirm_state_tests.rs"]
mod confirm_state_tests;
