//! Decorator port for message body transforms.
//!
//! Defines the single-method contract shared by the built-in decorator
//! chain and the caller-supplied contextual decorator.

use crate::message::domain::Message;

/// Port for message decoration.
///
/// A decorator derives a successor message from its input, adding
/// formatting to the body. The pipeline composes a fixed chain of
/// concrete decorators and is parameterised over one pluggable
/// contextual decorator satisfying this trait.
///
/// # Contract
///
/// - Total: never fails for a well-formed input message
/// - Implementers may add prefix or suffix text freely, but must not
///   alter the message's severity or identity (use
///   [`Message::with_body`] to derive the successor)
/// - Decoration is not required to be idempotent: applying the same
///   decorator twice may stack its markup
pub trait MessageDecorator: Send + Sync {
    /// Produces a successor message with additional body formatting.
    fn decorate(&self, message: Message) -> Message;
}
