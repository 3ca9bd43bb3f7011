//! Infrastructure layer.
//!
//! Concrete implementations of the domain traits (registry, pusher) and the
//! DTOs used on the wire.

pub mod dto;
pub mod pusher;
pub mod repository;
