//! DigestScheduler - Background service that fires the SMS digest.
//!
//! Sleeps until the schedule's next slot, runs `SendSmsDigestHandler`,
//! and repeats. Each slot fires at most once even when the clock stands
//! still (as a `FixedClock` does in tests).
//!
//! ## Graceful Shutdown
//!
//! The loop listens on a `watch` channel and returns as soon as `true` is
//! sent or the sender is dropped. A run already in progress completes
//! first.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{error, info};

use crate::application::{SendSmsDigestHandler, SmsDigestReport};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::notification::DigestSchedule;
use crate::ports::Clock;

pub struct DigestScheduler {
    handler: Arc<SendSmsDigestHandler>,
    clock: Arc<dyn Clock>,
    schedule: DigestSchedule,
}

impl DigestScheduler {
    pub fn new(
        handler: Arc<SendSmsDigestHandler>,
        clock: Arc<dyn Clock>,
        schedule: DigestSchedule,
    ) -> Self {
        Self {
            handler,
            clock,
            schedule,
        }
    }

    pub fn schedule(&self) -> &DigestSchedule {
        &self.schedule
    }

    /// Run the scheduler loop until shutdown is signalled.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut last_slot: Option<Timestamp> = None;

        loop {
            let now = self.clock.now();
            let after = match last_slot {
                Some(slot) if slot.is_after(&now) => slot,
                _ => now,
            };
            let slot = self.schedule.next_run_after(&after);
            let wait = slot.duration_since(&now).to_std().unwrap_or(Duration::ZERO);
            info!(next_run = %slot, wait_secs = wait.as_secs(), "SMS digest scheduled");

            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("SMS digest scheduler stopping");
                        return;
                    }
                }

                _ = time::sleep(wait) => {
                    last_slot = Some(slot);
                    if let Err(e) = self.run_at(slot).await {
                        error!(error = %e, "SMS digest run failed");
                    }
                }
            }
        }
    }

    /// Run the digest once for the given slot.
    pub async fn run_at(&self, slot: Timestamp) -> Result<SmsDigestReport, DomainError> {
        self.handler.handle(slot).await
    }
}
