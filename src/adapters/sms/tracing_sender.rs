//! SMS sender that writes to the log instead of a carrier.
//!
//! Used when no transport is configured. Every message shows up as an
//! `info` event with the masked recipient.

use async_trait::async_trait;
use tracing::info;

use crate::domain::notification::PhoneNumber;
use crate::ports::{SmsError, SmsSender};

#[derive(Debug, Clone)]
pub struct TracingSmsSender {
    from: Option<PhoneNumber>,
}

impl TracingSmsSender {
    pub fn new(from: Option<PhoneNumber>) -> Self {
        Self { from }
    }
}

#[async_trait]
impl SmsSender for TracingSmsSender {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<(), SmsError> {
        if body.trim().is_empty() {
            return Err(SmsError::EmptyBody);
        }
        info!(
            from = self.from.as_ref().map(PhoneNumber::as_str).unwrap_or("-"),
            to = %to.masked(),
            chars = body.chars().count(),
            body,
            "SMS dispatched to log"
        );
        Ok(())
    }
}
