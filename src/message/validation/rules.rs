//! Individual validation rule implementations.
//!
//! Each rule is implemented as a pure function that checks one absence
//! condition on the incoming batch. Rules return the admitted value on
//! success or a specific `ValidationError` on failure.

use crate::message::{
    domain::{MessageDraft, Severity},
    error::ValidationError,
};

/// Requires the batch itself to be present.
///
/// # Errors
///
/// Returns `ValidationError::NullBatch` if the batch is absent.
pub fn require_batch(
    batch: Option<Vec<Option<MessageDraft>>>,
) -> Result<Vec<Option<MessageDraft>>, ValidationError> {
    batch.ok_or(ValidationError::NullBatch)
}

/// Requires a batch slot to hold a draft.
///
/// # Errors
///
/// Returns `ValidationError::NullMessage` if the slot is empty.
pub fn require_draft(slot: Option<MessageDraft>) -> Result<MessageDraft, ValidationError> {
    slot.ok_or(ValidationError::NullMessage)
}

/// Requires a draft to carry a non-empty body.
///
/// # Errors
///
/// Returns `ValidationError::EmptyBody` if the body is empty.
pub fn require_body(draft: &MessageDraft) -> Result<(), ValidationError> {
    if draft.body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    Ok(())
}

/// Requires a draft to carry a severity.
///
/// # Errors
///
/// Returns `ValidationError::NullSeverity` if the severity is absent.
pub fn require_severity(draft: &MessageDraft) -> Result<Severity, ValidationError> {
    draft.severity.ok_or(ValidationError::NullSeverity)
}
