//! インメモリ実装

pub mod registry;

pub use registry::InMemoryConnectionRegistry;
