//! In-Memory SMS Log
//!
//! Keeps delivered-message entries in memory.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{SmsLogEntry, SmsLogWriter};

#[derive(Debug, Clone, Default)]
pub struct InMemorySmsLog {
    entries: Arc<RwLock<Vec<SmsLogEntry>>>,
}

impl InMemorySmsLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn entries(&self) -> Vec<SmsLogEntry> {
        self.entries.read().await.clone()
    }

    pub async fn entries_for(&self, user_id: &UserId) -> Vec<SmsLogEntry> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SmsLogWriter for InMemorySmsLog {
    async fn record(&self, entry: SmsLogEntry) -> Result<(), DomainError> {
        self.entries.write().await.push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn filters_by_user() {
        let log = InMemorySmsLog::new();
        let alice = UserId::new("alice").unwrap();
        let bob = UserId::new("bob").unwrap();
        for (user, message) in [(&alice, "a1"), (&bob, "b1"), (&alice, "a2")] {
            log.record(SmsLogEntry {
                user_id: user.clone(),
                message: message.to_string(),
                sent_at: Timestamp::now(),
            })
            .await
            .unwrap();
        }

        assert_eq!(log.entries().await.len(), 3);
        let for_alice: Vec<String> = log.entries_for(&alice).await.into_iter().map(|e| e.message).collect();
        assert_eq!(for_alice, vec!["a1", "a2"]);
    }
}
