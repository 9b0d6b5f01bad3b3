//! SMS Sender Port - Interface for delivering text messages.
//!
//! The domain only composes message text; transport (provider API,
//! credentials, retries) lives behind this port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::notification::PhoneNumber;

/// Errors that can occur while sending a message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SmsError {
    #[error("Recipient rejected: {0}")]
    RecipientRejected(String),

    #[error("Message body is empty")]
    EmptyBody,

    #[error("SMS transport unavailable: {0}")]
    Unavailable(String),
}

impl From<SmsError> for DomainError {
    fn from(err: SmsError) -> Self {
        DomainError::new(ErrorCode::SmsDeliveryFailed, err.to_string())
    }
}

/// Port for sending a single SMS.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send `body` to `to`.
    ///
    /// # Errors
    /// Returns `SmsError` when the message was not accepted for delivery
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<(), SmsError>;
}
