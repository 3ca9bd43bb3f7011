//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

use super::error::ValueObjectError;

/// Maximum length of a user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 100;

/// Minimum length of a password (in characters)
pub const PASSWORD_MIN_LENGTH: usize = 5;

/// Maximum length of a message (in characters)
pub const MESSAGE_CONTENT_MAX_LENGTH: usize = 10000;

/// Case-insensitive name prefix that marks a user as admin
const ADMIN_PREFIX: &str = "admin";

/// Connection identifier value object.
///
/// Assigned by the transport when a connection is accepted and stable until
/// it closes. See [`ConnectionIdFactory`](super::factory::ConnectionIdFactory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Create a new ConnectionId.
    ///
    /// # Returns
    ///
    /// A Result containing the ConnectionId or an error if the id is empty
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::ConnectionIdEmpty);
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User display name value object.
///
/// Set once at sign-in. Admin status is derived from it on every read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or longer than
    /// [`USER_NAME_MAX_LENGTH`] characters.
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::UserNameEmpty);
        }
        let len = name.chars().count();
        if len > USER_NAME_MAX_LENGTH {
            return Err(ValueObjectError::UserNameTooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Whether the name starts with "Admin", ignoring case.
    pub fn is_admin(&self) -> bool {
        self.0
            .get(..ADMIN_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ADMIN_PREFIX))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Password value object.
///
/// Only the length is checked. The value is never stored in a session.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Create a new Password.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::PasswordTooShort` when shorter than
    /// [`PASSWORD_MIN_LENGTH`] characters.
    pub fn new(password: String) -> Result<Self, ValueObjectError> {
        let len = password.chars().count();
        if len < PASSWORD_MIN_LENGTH {
            return Err(ValueObjectError::PasswordTooShort {
                min: PASSWORD_MIN_LENGTH,
                actual: len,
            });
        }
        Ok(Self(password))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Message content value object.
///
/// Represents the content of a chat message with validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent(String);

impl MessageContent {
    /// Create a new MessageContent.
    ///
    /// # Arguments
    ///
    /// * `content` - The message content string
    ///
    /// # Returns
    ///
    /// A Result containing the MessageContent or an error if validation fails
    pub fn new(content: String) -> Result<Self, ValueObjectError> {
        if content.is_empty() {
            return Err(ValueObjectError::MessageContentEmpty);
        }
        let len = content.chars().count();
        if len > MESSAGE_CONTENT_MAX_LENGTH {
            return Err(ValueObjectError::MessageContentTooLong {
                max: MESSAGE_CONTENT_MAX_LENGTH,
                actual: len,
            });
        }
        Ok(Self(content))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of topics a session is interested in.
///
/// Duplicates collapse and order is irrelevant. An empty set means the
/// session only receives topic messages it sent itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topics(BTreeSet<String>);

impl Topics {
    /// Empty topic set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the set contains `topic`.
    pub fn contains(&self, topic: &str) -> bool {
        self.0.contains(topic)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Topics as an owned, sorted list.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl From<Vec<String>> for Topics {
    fn from(topics: Vec<String>) -> Self {
        Self(topics.into_iter().collect())
    }
}

/// A missing topic list is the empty set.
impl From<Option<Vec<String>>> for Topics {
    fn from(topics: Option<Vec<String>>) -> Self {
        topics.map(Topics::from).unwrap_or_default()
    }
}

impl FromIterator<String> for Topics {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp.
    ///
    /// # Arguments
    ///
    /// * `value` - Unix timestamp in milliseconds
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current time.
    pub fn now() -> Self {
        Self(chatter_shared::time::current_timestamp())
    }

    /// Local wall-clock representation (`HH:mm:ss`).
    pub fn to_clock(&self) -> String {
        chatter_shared::time::timestamp_to_clock(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
