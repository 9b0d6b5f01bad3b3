//! SendTestSmsHandler - Sends today's cosmic message to one subscriber on demand.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotSubscribed | 400 |
//! | Cosmic | 400 |
//! | Roster | 500 |
//! | Delivery | 500 |

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::content::compose_daily_message;
use crate::domain::cosmic::{CosmicError, CosmicProfile};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::{Clock, SmsError, SmsSender, SubscriberError, SubscriberReader};

/// Errors from a one-off test message.
#[derive(Debug, thiserror::Error)]
pub enum TestSmsError {
    #[error("No phone number on file for user {0}")]
    NotSubscribed(UserId),

    #[error(transparent)]
    Cosmic(#[from] CosmicError),

    #[error(transparent)]
    Roster(#[from] SubscriberError),

    #[error(transparent)]
    Delivery(#[from] SmsError),
}

impl From<TestSmsError> for DomainError {
    fn from(err: TestSmsError) -> Self {
        match err {
            TestSmsError::NotSubscribed(user_id) => DomainError::new(
                ErrorCode::ValidationFailed,
                format!("No phone number on file for user {}", user_id),
            )
            .with_detail("user_id", user_id.to_string()),
            TestSmsError::Cosmic(e) => e.into(),
            TestSmsError::Roster(e) => e.into(),
            TestSmsError::Delivery(e) => e.into(),
        }
    }
}

/// Command to send one test message.
#[derive(Debug, Clone)]
pub struct SendTestSmsCommand {
    pub user_id: UserId,
}

/// What went out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestSmsReceipt {
    pub user_id: UserId,
    /// Masked recipient number.
    pub to: String,
    pub message: String,
    pub sent_at: Timestamp,
}

pub struct SendTestSmsHandler {
    subscribers: Arc<dyn SubscriberReader>,
    sender: Arc<dyn SmsSender>,
    clock: Arc<dyn Clock>,
}

impl SendTestSmsHandler {
    pub fn new(
        subscribers: Arc<dyn SubscriberReader>,
        sender: Arc<dyn SmsSender>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscribers,
            sender,
            clock,
        }
    }

    pub async fn handle(&self, cmd: SendTestSmsCommand) -> Result<TestSmsReceipt, TestSmsError> {
        let subscriber = self
            .subscribers
            .list_sms_subscribers()
            .await?
            .into_iter()
            .find(|s| s.user_id == cmd.user_id)
            .ok_or_else(|| TestSmsError::NotSubscribed(cmd.user_id.clone()))?;

        let now = self.clock.now();
        let profile = CosmicProfile::compute(subscriber.birth_date, now)?;
        let message =
            compose_daily_message(subscriber.display_name(), profile.life_path, profile.moon_phase);

        if let Err(e) = self.sender.send(&subscriber.phone, &message).await {
            warn!(user_id = %subscriber.user_id, error = %e, "Test SMS failed");
            return Err(e.into());
        }

        info!(user_id = %subscriber.user_id, phone = %subscriber.phone.masked(), "Test SMS sent");
        Ok(TestSmsReceipt {
            user_id: subscriber.user_id,
            to: subscriber.phone.masked(),
            message,
            sent_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemorySmsSender, InMemorySubscriberReader};
    use crate::domain::cosmic::CalendarDate;
    use crate::domain::notification::{PhoneNumber, SmsSubscriber};

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn ada() -> SmsSubscriber {
        SmsSubscriber::new(
            UserId::new("u-1").unwrap(),
            Some("Ada".to_string()),
            PhoneNumber::parse("+15550100001").unwrap(),
            CalendarDate::new(1990, 11, 22).unwrap(),
        )
    }

    fn handler(sender: InMemorySmsSender) -> SendTestSmsHandler {
        let clock = FixedClock::new(Timestamp::parse_rfc3339("2024-01-11T08:00:00Z").unwrap());
        SendTestSmsHandler::new(
            Arc::new(InMemorySubscriberReader::with_subscribers(vec![ada()])),
            Arc::new(sender),
            Arc::new(clock),
        )
    }

    fn command(id: &str) -> SendTestSmsCommand {
        SendTestSmsCommand {
            user_id: UserId::new(id).unwrap(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn sends_the_daily_message_to_one_subscriber() {
        let sender = InMemorySmsSender::new();
        let receipt = handler(sender.clone()).handle(command("u-1")).await.unwrap();

        assert_eq!(
            receipt.message,
            "\u{1F311} Ada, the New Moon whispers: Plant seeds of intention. As Life Path 7, seek the deeper truth. ✧ Cosmic Self"
        );
        assert_eq!(receipt.to, "+*******0001");
        assert_eq!(receipt.sent_at.to_string(), "2024-01-11T08:00:00+00:00");

        let sent = sender.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to.as_str(), "+15550100001");
        assert_eq!(sent[0].body, receipt.message);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unknown_user_has_no_phone_on_file() {
        let sender = InMemorySmsSender::new();
        let err = handler(sender.clone()).handle(command("u-9")).await.unwrap_err();

        assert!(matches!(err, TestSmsError::NotSubscribed(ref id) if id.as_str() == "u-9"));
        assert_eq!(sender.sent_count().await, 0);

        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::ValidationFailed);
        assert_eq!(domain.details.get("user_id"), Some(&"u-9".to_string()));
    }

    #[tokio::test]
    async fn carrier_rejection_is_reported() {
        let sender = InMemorySmsSender::new();
        sender.reject(PhoneNumber::parse("+15550100001").unwrap()).await;

        let err = handler(sender).handle(command("u-1")).await.unwrap_err();

        assert!(matches!(err, TestSmsError::Delivery(SmsError::RecipientRejected(_))));
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::SmsDeliveryFailed);
    }
}
