//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde_json::json;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, Topics},
    infrastructure::dto::websocket::{ClientCall, ClientFrame, ServerMessage},
    ui::state::AppState,
    usecase::ChatHub,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, StatusCode> {
    let connection_id = match ConnectionIdFactory::generate() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to assign connection id: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id)))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (mut sender, mut receiver) = socket.split();

    // Pushed events and completions share this channel, so frames to one
    // connection keep their order
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    state.pusher.attach(connection_id.clone(), tx).await;
    state.hub.connect(&connection_id);

    let recv_state = state.clone();
    let recv_id = connection_id.clone();

    // Spawn a task to receive hub calls from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", recv_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let Some(reply) = handle_frame(&recv_state.hub, &recv_id, &text).await else {
                        continue;
                    };
                    match serde_json::to_string(&reply) {
                        Ok(json) => {
                            if !recv_state.pusher.send_raw(&recv_id, json).await {
                                break;
                            }
                        }
                        Err(e) => tracing::error!("Failed to serialize completion: {}", e),
                    }
                }
                Message::Close(_) => {
                    tracing::debug!("Connection '{}' requested close", recv_id);
                    break;
                }
                // Ping/pong is handled by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to forward outbound frames to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    let recv_finished = tokio::select! {
        _ = &mut recv_task => true,
        _ = &mut send_task => false,
    };
    if recv_finished {
        send_task.abort();
    } else {
        // A hub call may be mid-flight; it must settle before the cleanup
        // below, or a late sign-in would outlive the connection
        recv_task.abort();
        let _ = recv_task.await;
    }

    state.hub.disconnect(&connection_id).await;
    state.pusher.detach(&connection_id).await;
}

/// Dispatch one inbound text frame to the hub.
///
/// Returns the completion to send back, if any: calls with an invocation id
/// always get one, failures get one even without an id.
pub(crate) async fn handle_frame(
    hub: &ChatHub,
    connection_id: &ConnectionId,
    text: &str,
) -> Option<ServerMessage> {
    let frame = match serde_json::from_str::<ClientFrame>(text) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!("Malformed frame from '{}': {}", connection_id, e);
            return Some(ServerMessage::failure(None, format!("Malformed frame: {e}")));
        }
    };
    let invocation_id = frame.invocation_id;

    let outcome: Result<serde_json::Value, String> = match frame.call {
        ClientCall::SignIn { username, password } => hub
            .sign_in(connection_id, username, password)
            .await
            .map(|is_admin| json!(is_admin))
            .map_err(|e| e.to_string()),
        ClientCall::SignOut => {
            hub.sign_out(connection_id).await;
            Ok(serde_json::Value::Null)
        }
        ClientCall::SendMessage {
            name,
            message,
            topic,
        } => hub
            .send_message(connection_id, name, message, &topic)
            .await
            .map(|()| serde_json::Value::Null)
            .map_err(|e| {
                tracing::warn!("Message from '{}' rejected: {}", connection_id, e);
                e.to_string()
            }),
        ClientCall::RegisterTopicsOfInterest { topics } => {
            hub.register_topics_of_interest(connection_id, Topics::from(topics))
                .await;
            Ok(serde_json::Value::Null)
        }
        ClientCall::GetNrClients => Ok(json!(hub.get_nr_clients().await)),
    };

    match outcome {
        Ok(result) => invocation_id.map(|_| ServerMessage::completion(invocation_id, result)),
        Err(error) => Some(ServerMessage::failure(invocation_id, error)),
    }
}
