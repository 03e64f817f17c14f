//! Domain types for the message subsystem.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. All types are immutable after construction and
//! serialisable via serde.

mod ids;
mod message;
mod severity;

pub use ids::MessageId;
pub use message::{Message, MessageDraft};
pub use severity::{ParseSeverityError, Severity};
