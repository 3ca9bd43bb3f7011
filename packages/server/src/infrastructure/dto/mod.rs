//! Data transfer objects for HTTP and WebSocket.

pub mod http;
pub mod websocket;
