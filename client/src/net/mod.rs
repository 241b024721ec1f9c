//! Networking modules for the chat and billing REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues same-origin requests; the server forwards them to the
//! configured backend.

pub mod api;
