//! Factory for transport-assigned connection ids.

use super::{ConnectionId, error::ValueObjectError};

/// Factory for generating ConnectionId instances.
///
/// The transport calls this once per accepted connection. Ids are random
/// UUID v4 strings, so they are never reused while a connection is live.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new ConnectionId with a random UUID v4.
    ///
    /// A UUID string is never empty, so the `ConnectionId` check always passes.
    pub fn generate() -> Result<ConnectionId, ValueObjectError> {
        let uuid = uuid::Uuid::new_v4();
        ConnectionId::new(uuid.to_string())
    }
}
