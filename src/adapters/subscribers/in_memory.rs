//! In-Memory Subscriber Roster
//!
//! Holds SMS subscribers in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::notification::SmsSubscriber;
use crate::ports::{SubscriberError, SubscriberReader};

#[derive(Debug, Clone, Default)]
pub struct InMemorySubscriberReader {
    subscribers: Arc<RwLock<Vec<SmsSubscriber>>>,
}

impl InMemorySubscriberReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscribers(subscribers: Vec<SmsSubscriber>) -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(subscribers)),
        }
    }

    /// Add a subscriber, replacing any existing entry for the same user.
    pub async fn upsert(&self, subscriber: SmsSubscriber) {
        let mut subscribers = self.subscribers.write().await;
        subscribers.retain(|s| s.user_id != subscriber.user_id);
        subscribers.push(subscriber);
    }
}

#[async_trait]
impl SubscriberReader for InMemorySubscriberReader {
    async fn list_sms_subscribers(&self) -> Result<Vec<SmsSubscriber>, SubscriberError> {
        Ok(self.subscribers.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cosmic::CalendarDate;
    use crate::domain::foundation::UserId;
    use crate::domain::notification::PhoneNumber;

    fn subscriber(id: &str, phone: &str) -> SmsSubscriber {
        SmsSubscriber::new(
            UserId::new(id).unwrap(),
            None,
            PhoneNumber::parse(phone).unwrap(),
            CalendarDate::new(1990, 11, 22).unwrap(),
        )
    }

    #[tokio::test]
    async fn upsert_replaces_same_user() {
        let reader = InMemorySubscriberReader::new();
        reader.upsert(subscriber("u-1", "+15550104477")).await;
        reader.upsert(subscriber("u-1", "+15550104478")).await;
        reader.upsert(subscriber("u-2", "+15550104479")).await;

        let listed = reader.list_sms_subscribers().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].user_id.as_str(), "u-1");
        assert_eq!(listed[0].phone.as_str(), "+15550104478");
    }
}
