//! Domain error types for message validation and processing.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::domain::MessageId;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during batch validation.
///
/// Each variant carries a fixed, human-readable cause. Callers inspect
/// the cause through [`ProcessError::validation_cause`] or the error
/// source chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The batch itself was absent.
    #[error("batch is null")]
    NullBatch,

    /// A slot within the batch held no draft.
    #[error("message is null")]
    NullMessage,

    /// A draft carried an empty body.
    #[error("empty body")]
    EmptyBody,

    /// A draft carried no severity.
    #[error("null severity")]
    NullSeverity,
}

/// Errors that can occur during message persistence.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A message with this identifier already exists.
    #[error("duplicate message: {0}")]
    DuplicateMessage(MessageId),

    /// A storage backend error occurred.
    #[error("storage error: {0}")]
    Database(Arc<dyn std::error::Error + Send + Sync>),

    /// A connection error occurred.
    #[error("connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    /// Creates a storage backend error from any error type.
    #[must_use]
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Arc::new(err))
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

/// Errors surfaced by the pipeline's `process` operation.
///
/// Validation failures are wrapped into a single reported failure that
/// preserves the original cause; storage failures pass through
/// unmodified.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The batch was rejected before any decoration or storage.
    #[error("message processing error")]
    Validation(#[source] ValidationError),

    /// The storage collaborator rejected a message.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ProcessError {
    /// Returns the validation cause, if this failure was a rejection.
    #[must_use]
    pub const fn validation_cause(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(cause) => Some(cause),
            Self::Repository(_) => None,
        }
    }
}
