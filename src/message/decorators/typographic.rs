//! Typographic decoration: line numbering and pagination.

use crate::message::{domain::Message, ports::decorator::MessageDecorator};

/// Number of messages per page before a delimiter is appended.
pub const PAGE_SIZE: u64 = 2;

/// Appended to the last line of each page.
pub const PAGE_DELIMITER: &str = "\n---";

/// Prepends the processed-message ordinal to the body and closes pages.
///
/// Constructed by the pipeline with a snapshot of the shared counter
/// immediately before invocation. The ordinal is global to the counter,
/// not to the batch, so pages span independent `process` calls: a call
/// whose first message receives an even ordinal starts by closing the
/// page the previous call opened.
///
/// # Examples
///
/// ```
/// use linotype::message::decorators::TypographicDecorator;
/// use linotype::message::domain::{Message, Severity};
/// use linotype::message::ports::decorator::MessageDecorator;
///
/// let first = TypographicDecorator::new(1)
///     .decorate(Message::new(Severity::Minor, "started"));
/// assert_eq!(first.body(), "1 started");
///
/// let second = TypographicDecorator::new(2)
///     .decorate(Message::new(Severity::Minor, "stopped"));
/// assert_eq!(second.body(), "2 stopped \n---");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypographicDecorator {
    ordinal: u64,
}

impl TypographicDecorator {
    /// Creates a typographic decorator for a given ordinal snapshot.
    #[must_use]
    pub const fn new(ordinal: u64) -> Self {
        Self { ordinal }
    }

    /// Returns the ordinal this decorator stamps onto the body.
    #[must_use]
    pub const fn ordinal(&self) -> u64 {
        self.ordinal
    }
}

impl MessageDecorator for TypographicDecorator {
    fn decorate(&self, message: Message) -> Message {
        let mut body = format!("{} {}", self.ordinal, message.body());
        if self.ordinal.is_multiple_of(PAGE_SIZE) {
            body = format!("{body} {PAGE_DELIMITER}");
        }
        message.with_body(body)
    }
}
