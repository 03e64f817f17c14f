//! Severity marker decoration.

use crate::message::{domain::Message, ports::decorator::MessageDecorator};

/// Appends the severity marker to the message body.
///
/// The marker is fixed per severity level: minor → `()`, regular →
/// `(!)`, major → `(!!!)`. No configuration; deterministic. Decorating
/// an already-marked body stacks markers — the transform is documented
/// as non-idempotent rather than silently suppressed.
///
/// # Examples
///
/// ```
/// use linotype::message::decorators::SeverityDecorator;
/// use linotype::message::domain::{Message, Severity};
/// use linotype::message::ports::decorator::MessageDecorator;
///
/// let decorated = SeverityDecorator::new()
///     .decorate(Message::new(Severity::Major, "disk failed"));
/// assert_eq!(decorated.body(), "disk failed (!!!)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityDecorator;

impl SeverityDecorator {
    /// Creates the severity decorator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MessageDecorator for SeverityDecorator {
    fn decorate(&self, message: Message) -> Message {
        let body = format!("{} {}", message.body(), message.severity().marker());
        message.with_body(body)
    }
}
