//! Shared utilities for Chatter.
//!
//! Cross-cutting helpers used by the server binary and its tests.

pub mod logger;
pub mod time;
