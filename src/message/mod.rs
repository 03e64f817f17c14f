//! Message formatting and ingestion for Linotype.
//!
//! This module implements the core message types, the decoration chain,
//! batch validation, and the pipeline orchestrator that ties them
//! together.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::Severity`], [`domain::MessageDraft`])
//! - **Ports**: Abstract trait interfaces ([`ports::repository::MessageRepository`], [`ports::decorator::MessageDecorator`], [`ports::validator::BatchValidator`])
//! - **Decorators**: The concrete decoration chain ([`decorators::SeverityDecorator`], [`decorators::TypographicDecorator`], [`decorators::TimestampDecorator`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryMessageRepository`])
//! - **Validation**: Batch admission at the ingestion boundary
//! - **Services**: The [`services::MessagePipeline`] orchestrator
//!
//! # Example
//!
//! ```
//! use linotype::message::domain::{MessageDraft, Severity};
//! use linotype::message::ports::validator::BatchValidator;
//! use linotype::message::validation::DraftBatchValidator;
//!
//! let validator = DraftBatchValidator::new();
//! let batch = Some(vec![Some(MessageDraft::new(
//!     Severity::Major,
//!     "system started",
//! ))]);
//!
//! let admitted = validator.validate(batch).expect("valid batch");
//! assert_eq!(admitted.len(), 1);
//! ```

pub mod adapters;
pub mod decorators;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
