//! Weekly trigger for the SMS digest.
//!
//! Equivalent to a cron line `0 <hour> * * <days>` evaluated in UTC.

use chrono::{Datelike, Duration, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Days of the week and the UTC hour at which the digest goes out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleFields")]
pub struct DigestSchedule {
    weekdays: Vec<Weekday>,
    hour: u32,
}

#[derive(Deserialize)]
struct ScheduleFields {
    weekdays: Vec<Weekday>,
    hour: u32,
}

impl TryFrom<ScheduleFields> for DigestSchedule {
    type Error = ValidationError;

    fn try_from(fields: ScheduleFields) -> Result<Self, Self::Error> {
        Self::new(fields.weekdays, fields.hour)
    }
}

impl Default for DigestSchedule {
    /// Monday, Wednesday and Friday at 08:00 UTC.
    fn default() -> Self {
        Self {
            weekdays: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            hour: 8,
        }
    }
}

impl DigestSchedule {
    pub fn new(mut weekdays: Vec<Weekday>, hour: u32) -> Result<Self, ValidationError> {
        if weekdays.is_empty() {
            return Err(ValidationError::empty_field("schedule_days"));
        }
        if hour > 23 {
            return Err(ValidationError::out_of_range("schedule_hour", 0, 23, i64::from(hour)));
        }
        weekdays.sort_by_key(|d| d.num_days_from_monday());
        weekdays.dedup();
        Ok(Self { weekdays, hour })
    }

    /// Parses a comma-separated day list such as `"mon,wed,fri"`.
    ///
    /// Day names (`mon`, `Monday`) and cron numbers (`0`-`7`, both 0 and 7
    /// being Sunday) are accepted.
    pub fn parse(days: &str, hour: u32) -> Result<Self, ValidationError> {
        let weekdays = days
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(parse_weekday)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(weekdays, hour)
    }

    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn runs_on(&self, day: Weekday) -> bool {
        self.weekdays.contains(&day)
    }

    /// First scheduled instant strictly after `now`.
    pub fn next_run_after(&self, now: &Timestamp) -> Timestamp {
        let today = now.date();
        let hour_offset = i64::from(self.hour) * MILLIS_PER_HOUR;
        // A non-empty weekday set always matches within eight days.
        (0..=7)
            .filter_map(|offset| today.checked_add_signed(Duration::days(offset)))
            .filter(|day| self.runs_on(day.weekday()))
            .map(|day| Timestamp::at_midnight(day).plus_millis(hour_offset))
            .find(|candidate| candidate.is_after(now))
            .unwrap_or_else(|| now.add_days(7))
    }
}

fn parse_weekday(token: &str) -> Result<Weekday, ValidationError> {
    let by_number = match token {
        "0" | "7" => Some(Weekday::Sun),
        "1" => Some(Weekday::Mon),
        "2" => Some(Weekday::Tue),
        "3" => Some(Weekday::Wed),
        "4" => Some(Weekday::Thu),
        "5" => Some(Weekday::Fri),
        "6" => Some(Weekday::Sat),
        _ => None,
    };
    match by_number {
        Some(day) => Ok(day),
        None => token.parse::<Weekday>().map_err(|_| {
            ValidationError::invalid_format("schedule_days", format!("unknown weekday '{}'", token))
        }),
    }
}
