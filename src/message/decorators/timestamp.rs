//! Timestamp decoration, the bundled contextual decorator.

use mockable::Clock;

use crate::message::{domain::Message, ports::decorator::MessageDecorator};

/// RFC 3339 layout with second precision, e.g. `2026-08-27T09:15:00Z`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Prepends the creation timestamp to the message body.
///
/// This is the bundled example of a contextual decorator: the pipeline
/// accepts any [`MessageDecorator`] in its contextual slot and never
/// assumes this concrete type. The clock is injected so tests can
/// substitute a deterministic source.
///
/// # Examples
///
/// ```
/// use linotype::message::decorators::TimestampDecorator;
/// use linotype::message::domain::{Message, Severity};
/// use linotype::message::ports::decorator::MessageDecorator;
/// use mockable::DefaultClock;
///
/// let decorator = TimestampDecorator::new(DefaultClock);
/// let decorated = decorator.decorate(Message::new(Severity::Minor, "ping"));
/// assert!(decorated.body().ends_with("ping"));
/// ```
pub struct TimestampDecorator<K: Clock> {
    clock: K,
}

impl<K: Clock> TimestampDecorator<K> {
    /// Creates a timestamp decorator over the given clock.
    #[must_use]
    pub const fn new(clock: K) -> Self {
        Self { clock }
    }
}

impl<K> MessageDecorator for TimestampDecorator<K>
where
    K: Clock + Send + Sync,
{
    fn decorate(&self, message: Message) -> Message {
        let body = format!(
            "{} {}",
            self.clock.utc().format(TIMESTAMP_FORMAT),
            message.body()
        );
        message.with_body(body)
    }
}
