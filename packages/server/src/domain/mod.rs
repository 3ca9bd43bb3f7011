//! Domain layer for the chat hub.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod event;
pub mod factory;
pub mod pusher;
pub mod repository;
pub mod resolver;
pub mod value_object;

pub use entity::Session;
pub use error::ValueObjectError;
pub use event::ServerEvent;
pub use factory::ConnectionIdFactory;
pub use pusher::EventPusher;
#[cfg(test)]
pub use pusher::MockEventPusher;
pub use repository::ConnectionRegistry;
pub use resolver::RecipientResolver;
pub use value_object::{ConnectionId, MessageContent, Password, Timestamp, Topics, UserName};
