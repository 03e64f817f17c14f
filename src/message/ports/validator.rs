//! Validator port for batch admission.
//!
//! Defines the abstract interface for validating an incoming batch of
//! message drafts before any decoration or storage occurs.

use crate::message::{
    domain::{Message, MessageDraft},
    error::ValidationError,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for batch validation at the ingestion boundary.
///
/// Validation is all-or-nothing and fail-fast: the first offending
/// element aborts the whole batch, so a rejected batch is never
/// partially persisted. On success the validator promotes every draft
/// to a [`Message`] with a freshly assigned identifier, in batch order.
///
/// # Implementation Notes
///
/// Implementations should be stateless and thread-safe.
pub trait BatchValidator: Send + Sync {
    /// Validates a batch and admits it as constructed messages.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` describing the first failure found:
    /// an absent batch, an absent element, an empty body, or an absent
    /// severity.
    fn validate(
        &self,
        batch: Option<Vec<Option<MessageDraft>>>,
    ) -> ValidationResult<Vec<Message>>;
}
