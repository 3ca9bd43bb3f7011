//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::ConnectionRegistry,
    infrastructure::{pusher::WebSocketEventPusher, repository::InMemoryConnectionRegistry},
    usecase::ChatHub,
};

/// State shared by every handler
pub struct AppState {
    /// Outbound channels of all live sockets (also used for completions)
    pub pusher: Arc<WebSocketEventPusher>,
    /// Hub operations, wired to the registry and the pusher above
    pub hub: ChatHub,
}

impl AppState {
    pub fn new(registry: Arc<dyn ConnectionRegistry>, pusher: Arc<WebSocketEventPusher>) -> Self {
        let hub = ChatHub::new(registry, pusher.clone());
        Self { pusher, hub }
    }

    /// State backed by the in-memory registry
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryConnectionRegistry::new()),
            Arc::new(WebSocketEventPusher::new()),
        )
    }
}
