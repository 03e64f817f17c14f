//! Unit tests for the decorator chain, each stage in isolation.

use crate::message::decorators::{
    PAGE_DELIMITER, SeverityDecorator, TimestampDecorator, TypographicDecorator,
};
use crate::message::domain::{Message, Severity};
use crate::message::ports::decorator::MessageDecorator;
use mockable::DefaultClock;
use rstest::rstest;

// ============================================================================
// Severity decorator
// ============================================================================

#[rstest]
#[case(Severity::Minor, "Example ()")]
#[case(Severity::Regular, "Example (!)")]
#[case(Severity::Major, "Example (!!!)")]
fn severity_stage_appends_exact_marker(#[case] severity: Severity, #[case] expected: &str) {
    let decorated = SeverityDecorator::new().decorate(Message::new(severity, "Example"));
    assert_eq!(decorated.body(), expected);
}

#[rstest]
fn severity_stage_preserves_identity_and_severity() {
    let message = Message::new(Severity::Regular, "Sample");
    let id = message.id();

    let decorated = SeverityDecorator::new().decorate(message);

    assert_eq!(decorated.id(), id);
    assert_eq!(decorated.severity(), Severity::Regular);
}

/// Severity decoration is a known non-idempotent transform: applying it
/// to an already-marked body stacks markers rather than detecting them.
#[rstest]
fn severity_stage_stacks_markers_when_applied_twice() {
    let decorator = SeverityDecorator::new();
    let once = decorator.decorate(Message::new(Severity::Minor, "Example"));
    let twice = decorator.decorate(once);

    assert_eq!(twice.body(), "Example () ()");
}

// ============================================================================
// Typographic decorator
// ============================================================================

#[rstest]
fn typographic_stage_prepends_ordinal() {
    let decorated = TypographicDecorator::new(1).decorate(Message::new(Severity::Minor, "started"));
    assert_eq!(decorated.body(), "1 started");
}

#[rstest]
fn typographic_stage_closes_page_on_even_ordinal() {
    let decorated = TypographicDecorator::new(2).decorate(Message::new(Severity::Minor, "stopped"));
    assert_eq!(decorated.body(), format!("2 stopped {PAGE_DELIMITER}"));
}

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(3, false)]
#[case(4, true)]
#[case(7, false)]
#[case(100, true)]
fn typographic_stage_pages_every_second_ordinal(#[case] ordinal: u64, #[case] page_break: bool) {
    let decorated =
        TypographicDecorator::new(ordinal).decorate(Message::new(Severity::Minor, "tick"));
    assert_eq!(decorated.body().ends_with(PAGE_DELIMITER), page_break);
}

#[rstest]
fn typographic_stage_holds_its_ordinal_snapshot() {
    let decorator = TypographicDecorator::new(42);
    assert_eq!(decorator.ordinal(), 42);
}

#[rstest]
fn typographic_stage_preserves_identity() {
    let message = Message::new(Severity::Major, "crash");
    let id = message.id();

    let decorated = TypographicDecorator::new(3).decorate(message);

    assert_eq!(decorated.id(), id);
    assert_eq!(decorated.severity(), Severity::Major);
}

// ============================================================================
// Timestamp decorator (bundled contextual strategy)
// ============================================================================

#[rstest]
fn timestamp_stage_prepends_to_body() {
    let decorator = TimestampDecorator::new(DefaultClock);
    let decorated = decorator.decorate(Message::new(Severity::Minor, "ping"));

    assert!(decorated.body().ends_with(" ping"));
    assert!(decorated.body().len() > "ping".len());
}

#[rstest]
fn timestamp_stage_preserves_identity_and_severity() {
    let message = Message::new(Severity::Major, "crash");
    let id = message.id();

    let decorated = TimestampDecorator::new(DefaultClock).decorate(message);

    assert_eq!(decorated.id(), id);
    assert_eq!(decorated.severity(), Severity::Major);
}

// ============================================================================
// Chain composition
// ============================================================================

/// The typographic stage sees the fully annotated body, so the ordinal
/// prefix is the first visible token and the severity marker the last.
#[rstest]
fn chain_order_puts_ordinal_first_and_marker_last() {
    let marked = SeverityDecorator::new().decorate(Message::new(Severity::Minor, "Example"));
    let finished = TypographicDecorator::new(1).decorate(marked);

    assert_eq!(finished.body(), "1 Example ()");
}
