//! HTTP API request/response DTOs for the admin surface.

use serde::{Deserialize, Serialize};

use crate::domain::Session;

/// One row of the user listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummaryDto {
    pub name: String,
    pub registered: String,   // HH:mm:ss
    pub last_message: String, // HH:mm:ss
    pub topics_of_interest: Vec<String>,
}

impl From<&Session> for UserSummaryDto {
    fn from(session: &Session) -> Self {
        Self {
            name: session.name.as_str().to_string(),
            registered: session.registered_at.to_clock(),
            last_message: session.last_message_at.to_clock(),
            topics_of_interest: session.topics.to_vec(),
        }
    }
}

/// Body of `POST /api/broadcast`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastRequestDto {
    pub message: String,
}

/// Response of `POST /api/broadcast`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastResponseDto {
    /// Number of sessions the message was pushed to
    pub recipients: usize,
}
