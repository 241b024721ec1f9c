//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat widget chrome while reading/writing shared
//! state from Leptos context providers.

pub mod chat_input;
pub mod chat_window;
pub mod status_banner;
pub mod trial_popup;
