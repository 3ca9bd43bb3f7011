//! Events pushed from the server to connected clients.

/// Server → client event.
///
/// Pushed, never requested. Encoding is up to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// A chat message, with the send time as `HH:mm:ss`
    NewMessage {
        name: String,
        message: String,
        timestamp: String,
    },
    /// Another user signed in
    ClientConnected { name: String },
    /// Another user signed out or disconnected
    ClientDisconnected { name: String },
    /// Operational notice for admins
    AdminNotification { message: String },
    /// Current number of signed-in sessions, for admins
    NrClientsChanged { count: usize },
}

impl ServerEvent {
    /// Event name as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMessage { .. } => "NewMessage",
            Self::ClientConnected { .. } => "ClientConnected",
            Self::ClientDisconnected { .. } => "ClientDisconnected",
            Self::AdminNotification { .. } => "AdminNotification",
            Self::NrClientsChanged { .. } => "NrClientsChanged",
        }
    }
}
