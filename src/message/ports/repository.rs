//! Repository port for message persistence.
//!
//! Defines the abstract interface for storing and retrieving messages,
//! allowing different persistence implementations (in-memory, database,
//! etc.).

use crate::message::{
    domain::{Message, MessageId, Severity},
    error::RepositoryError,
};
use async_trait::async_trait;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for message persistence operations.
///
/// Implementations provide the actual storage mechanism while the
/// pipeline remains storage-agnostic. Ownership of a decorated message
/// passes to the repository on `create`; the pipeline retains no
/// reference afterwards.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Message IDs are unique across the entire store
/// - Messages are immutable after storage (no update operations)
/// - Concurrent access is handled safely
/// - `find_all` ordering, if any, is documented by the implementation
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persists one message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if:
    /// - A message with the same ID already exists
    /// - The storage backend fails
    async fn create(&self, message: &Message) -> RepositoryResult<()>;

    /// Retrieves all stored messages.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn find_all(&self) -> RepositoryResult<Vec<Message>>;

    /// Retrieves all stored messages with the given severity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn find_all_by_severity(&self, severity: Severity) -> RepositoryResult<Vec<Message>>;

    /// Retrieves a message by its primary key.
    ///
    /// Returns `None` if the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<Message>>;
}
