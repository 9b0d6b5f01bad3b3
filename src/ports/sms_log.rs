//! SMS Log Port - Record of delivered messages.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp, UserId};

/// One delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsLogEntry {
    pub user_id: UserId,
    pub message: String,
    pub sent_at: Timestamp,
}

/// Port for appending to the SMS log.
#[async_trait]
pub trait SmsLogWriter: Send + Sync {
    /// Append an entry. Only successful deliveries are recorded.
    async fn record(&self, entry: SmsLogEntry) -> Result<(), DomainError>;
}
