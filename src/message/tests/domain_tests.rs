//! Unit tests for domain types.

use crate::message::domain::{Message, MessageDraft, MessageId, Severity};
use rstest::rstest;
use uuid::Uuid;

// ============================================================================
// MessageId tests
// ============================================================================

#[rstest]
fn message_id_new_is_not_nil() {
    let id = MessageId::new();
    assert!(!id.as_ref().is_nil());
}

#[rstest]
fn message_id_new_is_unique() {
    assert_ne!(MessageId::new(), MessageId::new());
}

#[rstest]
fn message_id_round_trips_through_uuid() {
    let uuid = Uuid::new_v4();
    let id = MessageId::from_uuid(uuid);
    assert_eq!(id.into_inner(), uuid);
    assert_eq!(id.to_string(), uuid.to_string());
}

// ============================================================================
// Severity tests
// ============================================================================

#[rstest]
#[case(Severity::Minor, "()")]
#[case(Severity::Regular, "(!)")]
#[case(Severity::Major, "(!!!)")]
fn severity_marker_mapping_is_exact(#[case] severity: Severity, #[case] marker: &str) {
    assert_eq!(severity.marker(), marker);
}

#[rstest]
#[case(Severity::Minor, "minor")]
#[case(Severity::Regular, "regular")]
#[case(Severity::Major, "major")]
fn severity_as_str_round_trips(#[case] severity: Severity, #[case] text: &str) {
    assert_eq!(severity.as_str(), text);
    assert_eq!(severity.to_string(), text);
    assert_eq!(Severity::try_from(text).expect("parseable"), severity);
}

#[rstest]
fn severity_rejects_unknown_string() {
    let err = Severity::try_from("fatal").expect_err("unknown severity");
    assert_eq!(err.to_string(), "invalid severity: 'fatal'");
}

#[rstest]
fn severity_importance_is_totally_ordered() {
    assert!(Severity::Minor < Severity::Regular);
    assert!(Severity::Regular < Severity::Major);
}

#[rstest]
fn severity_serialises_snake_case() {
    let json = serde_json::to_string(&Severity::Major).expect("serialize");
    assert_eq!(json, "\"major\"");
}

// ============================================================================
// Message tests
// ============================================================================

#[rstest]
fn message_new_assigns_fresh_identity() {
    let first = Message::new(Severity::Minor, "same");
    let second = Message::new(Severity::Minor, "same");
    assert_ne!(first.id(), second.id());
}

#[rstest]
fn message_accessors() {
    let id = MessageId::new();
    let message = Message::new_with_id(id, Severity::Regular, "disk nearly full");

    assert_eq!(message.id(), id);
    assert_eq!(message.severity(), Severity::Regular);
    assert_eq!(message.body(), "disk nearly full");
}

#[rstest]
fn with_body_preserves_identity_and_severity() {
    let message = Message::new(Severity::Major, "original");
    let id = message.id();

    let successor = message.with_body("1 original (!!!)");

    assert_eq!(successor.id(), id);
    assert_eq!(successor.severity(), Severity::Major);
    assert_eq!(successor.body(), "1 original (!!!)");
}

#[rstest]
fn content_equality_ignores_identity() {
    let first = Message::new(Severity::Major, "Test");
    let second = Message::new(Severity::Major, "Test");
    let other = Message::new(Severity::Minor, "Test");

    assert!(first.content_equals(&second));
    assert!(!first.content_equals(&other));
    assert_ne!(first, second); // full equality includes identity
}

#[rstest]
fn message_serialization_round_trip() {
    let message = Message::new(Severity::Minor, "cache warmed");

    let json = serde_json::to_string(&message).expect("serialize");
    let deserialized: Message = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(message, deserialized);
}

// ============================================================================
// MessageDraft tests
// ============================================================================

#[rstest]
fn draft_new_populates_severity() {
    let draft = MessageDraft::new(Severity::Regular, "Sample");
    assert_eq!(draft.severity, Some(Severity::Regular));
    assert_eq!(draft.body, "Sample");
}

#[rstest]
fn draft_deserialises_missing_severity_as_absent() {
    let draft: MessageDraft = serde_json::from_str(r#"{"body":"orphan"}"#).expect("deserialize");
    assert_eq!(draft.severity, None);
    assert_eq!(draft.body, "orphan");
}

#[rstest]
fn batch_deserialises_null_slots() {
    let batch: Vec<Option<MessageDraft>> =
        serde_json::from_str(r#"[null, {"severity":"major","body":"Test"}]"#)
            .expect("deserialize");

    assert_eq!(batch.len(), 2);
    assert!(batch.first().is_some_and(Option::is_none));
    assert!(
        batch
            .get(1)
            .and_then(Option::as_ref)
            .is_some_and(|draft| draft.severity == Some(Severity::Major))
    );
}
