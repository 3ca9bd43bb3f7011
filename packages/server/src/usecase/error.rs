//! UseCase 層のエラー定義
//!
//! `Display` の文言はそのままクライアントへ返されます。

use thiserror::Error;

use crate::domain::ValueObjectError;

/// Errors returned by sign-in
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignInError {
    /// Password failed the length check
    #[error("{0}")]
    InvalidPassword(ValueObjectError),

    /// User name failed validation
    #[error("{0}")]
    InvalidName(ValueObjectError),
}

/// Errors returned by send-message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// The calling connection has no session
    #[error("Sign in before sending messages")]
    NotSignedIn,

    /// Message content failed validation
    #[error("{0}")]
    InvalidContent(ValueObjectError),
}

/// Errors returned by the administrative broadcast
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BroadcastError {
    /// Message content failed validation
    #[error("{0}")]
    InvalidContent(ValueObjectError),
}
