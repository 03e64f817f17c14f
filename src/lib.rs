//! Linotype: message decoration and ingestion pipeline.
//!
//! This crate formats and ingests log-like messages: callers submit a
//! batch of message drafts, the pipeline validates the batch, optionally
//! reorders and deduplicates it, drives every message through a chain of
//! text decorations (severity marker, contextual annotation, typographic
//! pagination), assigns a globally monotonic ordinal, and hands each
//! finished message to a storage collaborator.
//!
//! # Architecture
//!
//! Linotype follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, etc.)
//!
//! # Modules
//!
//! - [`message`]: message domain, decorator chain, batch validation, and
//!   the pipeline orchestrator

pub mod message;
