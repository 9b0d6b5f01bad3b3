//! In-Memory SMS Sender
//!
//! Records outgoing messages instead of sending them.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::notification::PhoneNumber;
use crate::ports::{SmsError, SmsSender};

/// A message accepted by the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub to: PhoneNumber,
    pub body: String,
}

/// Recording sender that can be told to reject given numbers.
#[derive(Debug, Clone, Default)]
pub struct InMemorySmsSender {
    sent: Arc<RwLock<Vec<SentSms>>>,
    rejected: Arc<RwLock<HashSet<PhoneNumber>>>,
}

impl InMemorySmsSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later send to `number` fail.
    pub async fn reject(&self, number: PhoneNumber) {
        self.rejected.write().await.insert(number);
    }

    pub async fn sent(&self) -> Vec<SentSms> {
        self.sent.read().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }
}

#[async_trait]
impl SmsSender for InMemorySmsSender {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<(), SmsError> {
        if body.trim().is_empty() {
            return Err(SmsError::EmptyBody);
        }
        if self.rejected.read().await.contains(to) {
            return Err(SmsError::RecipientRejected(to.masked()));
        }
        self.sent.write().await.push(SentSms {
            to: to.clone(),
            body: body.to_string(),
        });
        Ok(())
    }
}
