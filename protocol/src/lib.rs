//! Shared chat + billing model for the Flora GPT client, server, and CLI.
//!
//! This crate owns the wire representation of the three backend calls and the
//! pure session/status logic built on top of them. It never reads a clock or
//! touches I/O: callers pass "now" in and plug their own transport in through
//! [`sync::StatusApi`], so the same code runs in the browser and on tokio.

pub mod billing;
pub mod chat;
pub mod countdown;
pub mod session;
pub mod standard;
pub mod sync;

pub use billing::{Badge, StatusSnapshot, SubscriptionStatus, TrialStatus, derive_subscription};
pub use chat::{ChatRequest, ChatResponse};
pub use countdown::{Countdown, calculate_countdown};
pub use session::{Bootstrap, Identity, KeyValueStore, LaunchParams, MemoryStore, bootstrap};
pub use standard::Standard;
pub use sync::{ApiError, StatusApi, StatusRefresh, fetch_status};
