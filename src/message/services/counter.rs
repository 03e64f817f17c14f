//! Shared ordinal counter for the typographic stage.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing ordinal source for processed messages.
///
/// Initialised to 1 and consumed exactly once per message that reaches
/// the typographic stage. The counter is the sole piece of mutable
/// shared state in the core: increments are atomic, so concurrent
/// `process` calls never assign the same ordinal, though the relative
/// order of ordinals across concurrent calls is unspecified.
///
/// Cloning shares the underlying counter, which is how multiple
/// pipeline instances join one ordinal space — explicitly, never
/// through process-wide state.
///
/// # Examples
///
/// ```
/// use linotype::message::services::OrdinalCounter;
///
/// let counter = OrdinalCounter::new();
/// let shared = counter.clone();
/// // `counter` and `shared` now draw from the same ordinal space.
/// ```
#[derive(Debug, Clone)]
pub struct OrdinalCounter {
    next: Arc<AtomicU64>,
}

impl OrdinalCounter {
    /// Creates a counter whose first ordinal is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Takes the next ordinal, advancing the counter.
    ///
    /// Relaxed ordering suffices: only uniqueness and monotonicity of
    /// the values matter, not any ordering relative to other memory.
    pub(crate) fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for OrdinalCounter {
    fn default() -> Self {
        Self::new()
    }
}
