//! The Message value and its ingress draft form.
//!
//! Messages are immutable after creation; decoration produces a new
//! value via [`Message::with_body`] rather than mutating in place,
//! preserving referential transparency for testing.

use super::{MessageId, Severity};
use serde::{Deserialize, Serialize};

/// A message admitted into the pipeline.
///
/// Carries a unique identity, a severity, and a text body. The identity
/// is assigned at construction and never reused; decorators produce
/// successor values with the same identity and severity.
///
/// # Invariants
///
/// - `id` is always a valid, non-nil UUID
/// - `body` is non-empty on admission (enforced by the batch validator)
/// - Messages cannot be modified after creation
///
/// # Examples
///
/// ```
/// use linotype::message::domain::{Message, Severity};
///
/// let message = Message::new(Severity::Regular, "disk nearly full");
/// let decorated = message.clone().with_body("1 disk nearly full");
///
/// assert_eq!(decorated.id(), message.id());
/// assert_eq!(decorated.severity(), Severity::Regular);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// Importance level driving marker selection.
    severity: Severity,

    /// The text content of the message.
    body: String,
}

impl Message {
    /// Creates a new message with a fresh identifier.
    #[must_use]
    pub fn new(severity: Severity, body: impl Into<String>) -> Self {
        Self::new_with_id(MessageId::new(), severity, body)
    }

    /// Creates a new message with a specified identifier.
    #[must_use]
    pub fn new_with_id(id: MessageId, severity: Severity, body: impl Into<String>) -> Self {
        Self {
            id,
            severity,
            body: body.into(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the message severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns a successor value with the body replaced.
    ///
    /// Identity and severity are carried forward unchanged; this is the
    /// only way decorators may derive one message from another.
    #[must_use]
    pub fn with_body(self, body: impl Into<String>) -> Self {
        Self {
            id: self.id,
            severity: self.severity,
            body: body.into(),
        }
    }

    /// Returns `true` if `other` carries the same severity and body.
    ///
    /// This is the full value equality used by deduplication; identity
    /// is deliberately excluded so that re-submitted content collapses
    /// to a single message.
    #[must_use]
    pub fn content_equals(&self, other: &Self) -> bool {
        self.severity == other.severity && self.body == other.body
    }
}

/// An unvalidated message draft submitted by a caller.
///
/// Drafts are the deserialisable ingress shape: the severity may be
/// absent and the body may be empty, and a batch slot may be empty
/// altogether (`Option<MessageDraft>`). The batch validator inspects
/// each of these absences and promotes well-formed drafts to
/// [`Message`] values with freshly assigned identifiers.
///
/// # Examples
///
/// ```
/// use linotype::message::domain::{MessageDraft, Severity};
///
/// let draft = MessageDraft::new(Severity::Minor, "cache warmed");
/// assert_eq!(draft.severity, Some(Severity::Minor));
///
/// // A draft missing its severity is representable but inadmissible.
/// let bad = MessageDraft {
///     severity: None,
///     body: "orphaned".into(),
/// };
/// assert!(bad.severity.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    /// Importance level, absent when the caller never supplied one.
    pub severity: Option<Severity>,

    /// The proposed text content, possibly empty.
    pub body: String,
}

impl MessageDraft {
    /// Creates a draft with both fields populated.
    #[must_use]
    pub fn new(severity: Severity, body: impl Into<String>) -> Self {
        Self {
            severity: Some(severity),
            body: body.into(),
        }
    }
}
