//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the pure parts stay testable without a DOM.

pub mod clock;
pub mod location;
pub mod markdown;
pub mod schedule;
pub mod storage;
