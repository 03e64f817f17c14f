//! The concrete decorator chain.
//!
//! A small closed set of [`MessageDecorator`] implementations composed
//! linearly by the pipeline: severity marker, contextual annotation,
//! typographic pagination. The contextual slot is open — any
//! caller-supplied decorator satisfying the port fits there;
//! [`TimestampDecorator`] is the bundled example.
//!
//! [`MessageDecorator`]: crate::message::ports::decorator::MessageDecorator

mod severity;
mod timestamp;
mod typographic;

pub use severity::SeverityDecorator;
pub use timestamp::TimestampDecorator;
pub use typographic::{PAGE_DELIMITER, PAGE_SIZE, TypographicDecorator};
