//! SMS digest configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::notification::{DigestSchedule, PhoneNumber};

/// SMS digest settings
#[derive(Debug, Clone, Deserialize)]
pub struct SmsConfig {
    /// Send through the configured transport
    #[serde(default)]
    pub enabled: bool,

    /// Sender number in E.164 form
    pub from_number: Option<String>,

    /// Comma-separated weekdays, names or cron numbers
    #[serde(default = "default_schedule_days")]
    pub schedule_days: String,

    /// UTC hour, 0-23
    #[serde(default = "default_schedule_hour")]
    pub schedule_hour: u32,

    /// YAML roster of subscribers
    #[serde(default = "default_subscribers_file")]
    pub subscribers_file: PathBuf,
}

impl SmsConfig {
    /// Digest schedule built from `schedule_days` and `schedule_hour`.
    pub fn schedule(&self) -> Result<DigestSchedule, ValidationError> {
        if self.schedule_hour > 23 {
            return Err(ValidationError::InvalidScheduleHour(self.schedule_hour));
        }
        DigestSchedule::parse(&self.schedule_days, self.schedule_hour)
            .map_err(|e| ValidationError::InvalidScheduleDays(e.to_string()))
    }

    /// Parsed sender number, if one is configured.
    pub fn sender(&self) -> Result<Option<PhoneNumber>, ValidationError> {
        match self.from_number.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => PhoneNumber::parse(raw)
                .map(Some)
                .map_err(|_| ValidationError::InvalidSenderNumber(raw.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.schedule()?;
        let sender = self.sender()?;
        if self.enabled && sender.is_none() {
            return Err(ValidationError::MissingRequired("sms.from_number"));
        }
        Ok(())
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            from_number: None,
            schedule_days: default_schedule_days(),
            schedule_hour: default_schedule_hour(),
            subscribers_file: default_subscribers_file(),
        }
    }
}

fn default_schedule_days() -> String {
    "mon,wed,fri".to_string()
}

fn default_schedule_hour() -> u32 {
    8
}

fn default_subscribers_file() -> PathBuf {
    PathBuf::from("./data/sms_subscribers.yaml")
}
