//! Server startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::{
    handler::{broadcast, health_check, list_users, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Routes of the relay server
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/users", get(list_users))
        .route("/api/broadcast", post(broadcast))
        .route("/hub/chat", get(websocket_handler))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS: any origin, with credentials.
///
/// Credentials forbid `*`, so origin, methods and headers are echoed back.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Bind and serve until Ctrl-C / SIGTERM.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::in_memory());
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Chat hub listening on ws://{}/hub/chat", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
