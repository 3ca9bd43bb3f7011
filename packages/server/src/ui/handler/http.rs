//! HTTP API endpoint handlers (administration).

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::{BroadcastRequestDto, BroadcastResponseDto, UserSummaryDto},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List every signed-in user
pub async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<UserSummaryDto>> {
    let sessions = state.hub.list_users().await;
    Json(sessions.iter().map(UserSummaryDto::from).collect())
}

/// Push a message from "Admin" to every live connection, signed in or not
pub async fn broadcast(
    State(state): State<Arc<AppState>>,
    Json(body): Json<BroadcastRequestDto>,
) -> Result<Json<BroadcastResponseDto>, (StatusCode, Json<serde_json::Value>)> {
    match state.hub.admin_broadcast(body.message).await {
        Ok(recipients) => Ok(Json(BroadcastResponseDto { recipients })),
        Err(e) => {
            tracing::warn!("Broadcast rejected: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": e.to_string()})),
            ))
        }
    }
}
