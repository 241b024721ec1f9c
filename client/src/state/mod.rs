//! Reactive state containers provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each container is a plain struct with pure update methods; `App` wraps them
//! in `RwSignal`s and components read or update them from context.

pub mod chat;
pub mod session;
pub mod status;
pub mod ui;
