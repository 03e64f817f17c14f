//! Batch validation implementation.
//!
//! This module provides the default implementation of batch admission,
//! including individual validation rules and the composite validator.

pub mod rules;
pub mod service;

pub use service::DraftBatchValidator;
