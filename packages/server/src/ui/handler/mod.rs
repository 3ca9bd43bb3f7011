//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{broadcast, health_check, list_users};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;
