//! Chatter relay server library.
//!
//! A chat hub over WebSocket: connection registry, topic-based routing and
//! admin notifications, plus a small HTTP administration API.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run;
