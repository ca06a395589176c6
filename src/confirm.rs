//! Confirmation module
//!
//! A single modal yes/no request that gates a workflow until the user answers.
//! Every way of closing the dialog resolves the request, so the producer always
//! hears back through exactly one of its two continuations.

mod confirm_events;
mod confirm_render;
mod confirm_state;

pub use confirm_events::handle_confirm_key;
pub use confirm_render::render_confirm;
pub use confirm_state::{
    ConfirmBroker, ConfirmDefaults, ConfirmOptions, ConfirmPrompt, ConfirmRequest, ConfirmView,
    Continuation, Resolution,
};
