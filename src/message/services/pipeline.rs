//! The batch-processing pipeline orchestrator.
//!
//! `MessagePipeline` validates an incoming batch, applies the optional
//! batch-level pre-processing (reorder, deduplicate), drives each
//! message through the decorator chain with a shared ordinal counter,
//! and forwards the results to storage.

use std::sync::Arc;

use crate::message::{
    decorators::{SeverityDecorator, TypographicDecorator},
    domain::{Message, MessageDraft, MessageId, Severity},
    error::ProcessError,
    ports::{
        decorator::MessageDecorator,
        repository::{MessageRepository, RepositoryResult},
        validator::BatchValidator,
    },
    services::counter::OrdinalCounter,
};

/// Processing order of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Order {
    /// Process the batch in array order.
    #[default]
    Asc,

    /// Reverse the batch before processing.
    Desc,
}

/// Duplicate handling within a batch.
///
/// Deduplication uses full message value equality — severity and body,
/// identity excluded — and preserves first-occurrence order. It
/// operates only within a single call's batch, never against
/// already-persisted state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Doubling {
    /// Keep every element, duplicates included.
    #[default]
    Doubles,

    /// Collapse the batch to unique messages.
    Distinct,
}

/// Configuration for one `process` call.
///
/// Replaces overloaded entry points with one explicit value: array
/// order and duplicate retention by default.
///
/// # Examples
///
/// ```
/// use linotype::message::services::{Doubling, Order, ProcessOptions};
///
/// let options = ProcessOptions::default()
///     .with_order(Order::Desc)
///     .with_doubling(Doubling::Distinct);
/// assert_eq!(options.order, Order::Desc);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProcessOptions {
    /// Processing order of the batch.
    pub order: Order,

    /// Duplicate handling within the batch.
    pub doubling: Doubling,
}

impl ProcessOptions {
    /// Creates options with both fields explicit.
    #[must_use]
    pub const fn new(order: Order, doubling: Doubling) -> Self {
        Self { order, doubling }
    }

    /// Sets the processing order.
    #[must_use]
    pub const fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Sets the duplicate handling.
    #[must_use]
    pub const fn with_doubling(mut self, doubling: Doubling) -> Self {
        self.doubling = doubling;
        self
    }
}

/// Orchestrator for the decoration and ingestion workflow.
///
/// Drives the complete batch workflow:
/// 1. Validates the batch (all-or-nothing, before any mutation)
/// 2. Reverses the batch when [`Order::Desc`] is requested
/// 3. Deduplicates when [`Doubling::Distinct`] is requested, on the
///    already-reversed sequence
/// 4. Per message: severity marker → contextual decorator → ordinal
///    snapshot and typographic decoration → storage
///
/// The decoration order is fixed and significant: the typographic
/// stage sees the fully annotated body, so the ordinal prefix is the
/// first visible token of every persisted message.
///
/// # Example
///
/// ```ignore
/// use linotype::message::services::{MessagePipeline, ProcessOptions};
///
/// let pipeline = MessagePipeline::new(validator, decorator, repository);
///
/// let stored = pipeline
///     .process(ProcessOptions::default(), Some(batch))
///     .await?;
/// assert!(stored.first().map(Message::body).unwrap_or_default().starts_with("1 "));
/// ```
#[derive(Clone)]
pub struct MessagePipeline<V, D, R>
where
    V: BatchValidator,
    D: MessageDecorator,
    R: MessageRepository,
{
    validator: V,
    decorator: Arc<D>,
    repository: Arc<R>,
    counter: OrdinalCounter,
}

impl<V, D, R> MessagePipeline<V, D, R>
where
    V: BatchValidator,
    D: MessageDecorator,
    R: MessageRepository,
{
    /// Creates a pipeline with a fresh ordinal counter starting at 1.
    #[must_use]
    pub fn new(validator: V, decorator: Arc<D>, repository: Arc<R>) -> Self {
        Self::with_counter(validator, decorator, repository, OrdinalCounter::new())
    }

    /// Creates a pipeline drawing ordinals from an injected counter.
    ///
    /// Cloning one [`OrdinalCounter`] into several pipelines gives them
    /// a shared ordinal space.
    #[must_use]
    pub const fn with_counter(
        validator: V,
        decorator: Arc<D>,
        repository: Arc<R>,
        counter: OrdinalCounter,
    ) -> Self {
        Self {
            validator,
            decorator,
            repository,
            counter,
        }
    }

    /// Validates, decorates, and persists one batch of drafts.
    ///
    /// Returns the decorated messages in the order they were persisted.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Validation`] if the batch is rejected —
    /// in that case nothing is persisted and the ordinal counter is not
    /// advanced. Returns [`ProcessError::Repository`] unchanged if the
    /// storage collaborator fails; messages persisted earlier in the
    /// same call remain stored.
    pub async fn process(
        &self,
        options: ProcessOptions,
        batch: Option<Vec<Option<MessageDraft>>>,
    ) -> Result<Vec<Message>, ProcessError> {
        let admitted = self
            .validator
            .validate(batch)
            .map_err(ProcessError::Validation)?;

        let ordered = reorder(options.order, admitted);
        let unique = deduplicate(options.doubling, ordered);

        let mut stored = Vec::with_capacity(unique.len());
        for message in unique {
            let marked = SeverityDecorator::new().decorate(message);
            let annotated = self.decorator.decorate(marked);
            let finished = TypographicDecorator::new(self.counter.next()).decorate(annotated);

            self.repository.create(&finished).await?;
            stored.push(finished);
        }

        Ok(stored)
    }

    /// Returns all stored messages; pure pass-through to storage.
    ///
    /// # Errors
    ///
    /// Propagates the repository's error unchanged.
    pub async fn find_all(&self) -> RepositoryResult<Vec<Message>> {
        self.repository.find_all().await
    }

    /// Returns stored messages with the given severity; pass-through.
    ///
    /// # Errors
    ///
    /// Propagates the repository's error unchanged.
    pub async fn find_all_by_severity(
        &self,
        severity: Severity,
    ) -> RepositoryResult<Vec<Message>> {
        self.repository.find_all_by_severity(severity).await
    }

    /// Looks up one stored message by id; pass-through.
    ///
    /// # Errors
    ///
    /// Propagates the repository's error unchanged.
    pub async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<Message>> {
        self.repository.find_by_id(id).await
    }
}

/// Reverses the batch when descending order is requested.
fn reorder(order: Order, mut messages: Vec<Message>) -> Vec<Message> {
    if order == Order::Desc {
        messages.reverse();
    }
    messages
}

/// Collapses the batch to first occurrences when requested.
///
/// Keyed on severity + body; runs after reordering, so with a reversed
/// batch "first occurrence" favours the element nearest the front of
/// the reversed sequence.
fn deduplicate(doubling: Doubling, messages: Vec<Message>) -> Vec<Message> {
    if doubling == Doubling::Doubles {
        return messages;
    }

    let mut unique: Vec<Message> = Vec::with_capacity(messages.len());
    for message in messages {
        if !unique.iter().any(|kept| kept.content_equals(&message)) {
            unique.push(message);
        }
    }
    unique
}
