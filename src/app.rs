//! Interactive playground
//!
//! A small terminal app that produces toasts and confirmations from key
//! presses, renders them, and routes dialog keys back into the store.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::App;
