//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ConnectionId validation error
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,

    /// UserName validation error
    #[error("User name cannot be empty")]
    UserNameEmpty,

    /// UserName too long error
    #[error("User name cannot exceed {max} characters (got {actual})")]
    UserNameTooLong { max: usize, actual: usize },

    /// Password too short error
    #[error("Password must be at least {min} characters long (got {actual})")]
    PasswordTooShort { min: usize, actual: usize },

    /// MessageContent validation error
    #[error("Message cannot be empty")]
    MessageContentEmpty,

    /// MessageContent too long error
    #[error("Message cannot exceed {max} characters (got {actual})")]
    MessageContentTooLong { max: usize, actual: usize },
}
