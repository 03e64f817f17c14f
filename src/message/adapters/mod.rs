//! Persistence adapters for the message module.
//!
//! This module provides concrete implementations of the
//! [`MessageRepository`] port, following hexagonal architecture
//! principles. Adapters handle all storage concerns while the domain
//! remains pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryMessageRepository`]: Thread-safe in-memory
//!   storage for unit testing
//!
//! [`MessageRepository`]: crate::message::ports::repository::MessageRepository

pub mod memory;
