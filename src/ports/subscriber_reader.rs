//! Subscriber Reader Port - Read-only access to the SMS digest roster.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::notification::SmsSubscriber;

/// Errors that can occur while listing subscribers
#[derive(Debug, thiserror::Error)]
pub enum SubscriberError {
    #[error("Subscriber roster not found: {0}")]
    NotFound(String),

    #[error("Failed to parse subscriber roster: {0}")]
    ParseFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<SubscriberError> for DomainError {
    fn from(err: SubscriberError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for listing everyone opted in to the SMS digest.
#[async_trait]
pub trait SubscriberReader: Send + Sync {
    /// All subscribers with a phone number and birth date on file.
    ///
    /// # Errors
    /// Returns `SubscriberError` when the roster cannot be read
    async fn list_sms_subscribers(&self) -> Result<Vec<SmsSubscriber>, SubscriberError>;
}
