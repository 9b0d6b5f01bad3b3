//! SendSmsDigestHandler - Sends the daily cosmic message to every subscriber.
//!
//! One subscriber failing (bad data, carrier rejection, log write) never
//! stops the batch. Only failing to list subscribers fails the run.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::content::compose_daily_message;
use crate::domain::cosmic::CosmicProfile;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::notification::SmsSubscriber;
use crate::ports::{SmsLogEntry, SmsLogWriter, SmsSender, SubscriberReader};

/// Outcome of one digest run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SmsDigestReport {
    pub attempted: usize,
    pub sent: usize,
    pub failed: usize,
}

pub struct SendSmsDigestHandler {
    subscribers: Arc<dyn SubscriberReader>,
    sender: Arc<dyn SmsSender>,
    log: Arc<dyn SmsLogWriter>,
}

impl SendSmsDigestHandler {
    pub fn new(
        subscribers: Arc<dyn SubscriberReader>,
        sender: Arc<dyn SmsSender>,
        log: Arc<dyn SmsLogWriter>,
    ) -> Self {
        Self {
            subscribers,
            sender,
            log,
        }
    }

    /// Runs the digest as of `now`.
    ///
    /// # Errors
    ///
    /// Only when the subscriber list cannot be read.
    pub async fn handle(&self, now: Timestamp) -> Result<SmsDigestReport, DomainError> {
        let subscribers = self.subscribers.list_sms_subscribers().await?;
        let mut report = SmsDigestReport {
            attempted: subscribers.len(),
            ..Default::default()
        };

        for subscriber in &subscribers {
            match self.deliver(subscriber, now).await {
                Ok(()) => report.sent += 1,
                Err(e) => {
                    warn!(
                        user_id = %subscriber.user_id,
                        phone = %subscriber.phone.masked(),
                        error = %e,
                        "SMS digest delivery failed"
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            attempted = report.attempted,
            sent = report.sent,
            failed = report.failed,
            "SMS digest run complete"
        );
        Ok(report)
    }

    async fn deliver(&self, subscriber: &SmsSubscriber, now: Timestamp) -> Result<(), DomainError> {
        let profile = CosmicProfile::compute(subscriber.birth_date, now)?;
        let message =
            compose_daily_message(subscriber.display_name(), profile.life_path, profile.moon_phase);

        self.sender.send(&subscriber.phone, &message).await?;

        self.log
            .record(SmsLogEntry {
                user_id: subscriber.user_id.clone(),
                message,
                sent_at: now,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cosmic::CalendarDate;
    use crate::domain::foundation::{ErrorCode, UserId};
    use crate::domain::notification::PhoneNumber;
    use crate::ports::{SmsError, SubscriberError};
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockSubscriberReader {
        subscribers: Vec<SmsSubscriber>,
        fail: bool,
    }

    #[async_trait]
    impl SubscriberReader for MockSubscriberReader {
        async fn list_sms_subscribers(&self) -> Result<Vec<SmsSubscriber>, SubscriberError> {
            if self.fail {
                return Err(SubscriberError::IoError("Simulated read failure".into()));
            }
            Ok(self.subscribers.clone())
        }
    }

    #[derive(Default)]
    struct MockSmsSender {
        sent: Mutex<Vec<(String, String)>>,
        reject: Option<String>,
    }

    #[async_trait]
    impl SmsSender for MockSmsSender {
        async fn send(&self, to: &PhoneNumber, body: &str) -> Result<(), SmsError> {
            if self.reject.as_deref() == Some(to.as_str()) {
                return Err(SmsError::RecipientRejected(to.masked()));
            }
            self.sent.lock().await.push((to.to_string(), body.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockSmsLog {
        entries: Mutex<Vec<SmsLogEntry>>,
        fail: bool,
    }

    #[async_trait]
    impl SmsLogWriter for MockSmsLog {
        async fn record(&self, entry: SmsLogEntry) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::StorageError, "Simulated write failure"));
            }
            self.entries.lock().await.push(entry);
            Ok(())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn subscriber(id: &str, name: Option<&str>, phone: &str, birth: (i32, u32, u32)) -> SmsSubscriber {
        SmsSubscriber::new(
            UserId::new(id).unwrap(),
            name.map(str::to_string),
            PhoneNumber::parse(phone).unwrap(),
            CalendarDate::new(birth.0, birth.1, birth.2).unwrap(),
        )
    }

    fn roster() -> Vec<SmsSubscriber> {
        vec![
            subscriber("u-1", Some("Ada"), "+15550100001", (1990, 11, 22)),
            subscriber("u-2", None, "+15550100002", (1966, 2, 9)),
            subscriber("u-3", Some("Kai"), "+15550100003", (1980, 1, 1)),
        ]
    }

    fn reference_now() -> Timestamp {
        Timestamp::parse_rfc3339("2024-01-11T08:00:00Z").unwrap()
    }

    fn handler(
        reader: MockSubscriberReader,
        sender: Arc<MockSmsSender>,
        log: Arc<MockSmsLog>,
    ) -> SendSmsDigestHandler {
        SendSmsDigestHandler::new(Arc::new(reader), sender, log)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn sends_and_logs_every_subscriber() {
        let sender = Arc::new(MockSmsSender::default());
        let log = Arc::new(MockSmsLog::default());
        let reader = MockSubscriberReader { subscribers: roster(), fail: false };

        let report = handler(reader, sender.clone(), log.clone()).handle(reference_now()).await.unwrap();

        assert_eq!(report, SmsDigestReport { attempted: 3, sent: 3, failed: 0 });
        let sent = sender.sent.lock().await;
        assert_eq!(sent[0].0, "+15550100001");
        assert_eq!(
            sent[0].1,
            "\u{1F311} Ada, the New Moon whispers: Plant seeds of intention. As Life Path 7, seek the deeper truth. ✧ Cosmic Self"
        );
        assert!(sent[1].1.contains("Cosmic traveler"));
        assert!(sent[1].1.contains("Life Path 33"));

        let entries = log.entries.lock().await;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].user_id.as_str(), "u-3");
        assert_eq!(entries[2].sent_at, reference_now());
        assert_eq!(entries[0].message, sent[0].1);
    }

    #[tokio::test]
    async fn empty_roster_is_a_quiet_success() {
        let sender = Arc::new(MockSmsSender::default());
        let log = Arc::new(MockSmsLog::default());
        let reader = MockSubscriberReader { subscribers: vec![], fail: false };

        let report = handler(reader, sender, log).handle(reference_now()).await.unwrap();
        assert_eq!(report, SmsDigestReport::default());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn rejected_recipient_does_not_stop_batch() {
        let sender = Arc::new(MockSmsSender {
            reject: Some("+15550100002".to_string()),
            ..Default::default()
        });
        let log = Arc::new(MockSmsLog::default());
        let reader = MockSubscriberReader { subscribers: roster(), fail: false };

        let report = handler(reader, sender.clone(), log.clone()).handle(reference_now()).await.unwrap();

        assert_eq!(report, SmsDigestReport { attempted: 3, sent: 2, failed: 1 });
        let logged: Vec<String> = log
            .entries
            .lock()
            .await
            .iter()
            .map(|e| e.user_id.to_string())
            .collect();
        assert_eq!(logged, vec!["u-1", "u-3"]);
    }

    #[tokio::test]
    async fn log_failure_counts_as_failed() {
        let sender = Arc::new(MockSmsSender::default());
        let log = Arc::new(MockSmsLog { fail: true, ..Default::default() });
        let reader = MockSubscriberReader { subscribers: roster(), fail: false };

        let report = handler(reader, sender.clone(), log).handle(reference_now()).await.unwrap();

        assert_eq!(report.sent, 0);
        assert_eq!(report.failed, 3);
        assert_eq!(sender.sent.lock().await.len(), 3);
    }

    #[tokio::test]
    async fn listing_failure_fails_the_run() {
        let sender = Arc::new(MockSmsSender::default());
        let log = Arc::new(MockSmsLog::default());
        let reader = MockSubscriberReader { subscribers: roster(), fail: true };

        let result = handler(reader, sender.clone(), log).handle(reference_now()).await;

        let err = result.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(sender.sent.lock().await.is_empty());
    }
}
