//! Batch validator implementation.
//!
//! Provides the default implementation of the `BatchValidator` port,
//! composing the individual rules into a fail-fast admission check.

use crate::message::{
    domain::{Message, MessageDraft},
    ports::validator::{BatchValidator, ValidationResult},
    validation::rules,
};

/// Default implementation of the batch validator.
///
/// Applies the rules in a fixed order per element — slot present, body
/// non-empty, severity present — aborting on the first failure so that
/// a rejected batch is never partially admitted. Unlike a collect-all
/// validator, fail-fast keeps the reported failure to the single cause
/// the caller must fix first.
///
/// # Examples
///
/// ```
/// use linotype::message::domain::{MessageDraft, Severity};
/// use linotype::message::error::ValidationError;
/// use linotype::message::ports::validator::BatchValidator;
/// use linotype::message::validation::DraftBatchValidator;
///
/// let validator = DraftBatchValidator::new();
///
/// let admitted = validator
///     .validate(Some(vec![Some(MessageDraft::new(Severity::Minor, "ok"))]))
///     .expect("valid batch");
/// assert_eq!(admitted.len(), 1);
///
/// let rejected = validator.validate(Some(vec![None]));
/// assert_eq!(rejected.unwrap_err(), ValidationError::NullMessage);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftBatchValidator;

impl DraftBatchValidator {
    /// Creates the default validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BatchValidator for DraftBatchValidator {
    fn validate(
        &self,
        batch: Option<Vec<Option<MessageDraft>>>,
    ) -> ValidationResult<Vec<Message>> {
        let drafts = rules::require_batch(batch)?;

        let mut admitted = Vec::with_capacity(drafts.len());
        for slot in drafts {
            let draft = rules::require_draft(slot)?;
            rules::require_body(&draft)?;
            let severity = rules::require_severity(&draft)?;
            admitted.push(Message::new(severity, draft.body));
        }

        Ok(admitted)
    }
}
