//! Calendar date value object.
//!
//! The single input every calculator consumes. Parsing and validation happen
//! here so the calculators can assume a real Gregorian day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CosmicError;

/// A real (proleptic Gregorian) calendar day with year >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date, rejecting days that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CosmicError> {
        let out_of_range = CosmicError::DateOutOfRange {
            year: i64::from(year),
            month,
            day,
        };
        if year < 1 {
            return Err(out_of_range);
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(out_of_range)
    }

    /// Parses `YYYY-MM-DD`, ignoring an optional time suffix.
    ///
    /// The year must have four digits; month and day may have one or two.
    /// `1990-11-22T14:30` and `1990-11-22 14:30:00` both yield 1990-11-22.
    pub fn parse(input: &str) -> Result<Self, CosmicError> {
        let trimmed = input.trim();
        let date_part = trimmed
            .split(|c: char| c == 'T' || c == ' ')
            .next()
            .unwrap_or_default();

        let parts: Vec<&str> = date_part.split('-').collect();
        if parts.len() != 3 {
            return Err(CosmicError::invalid_format(
                input,
                "expected three dash-separated components (YYYY-MM-DD)",
            ));
        }

        let year = parse_component(input, parts[0], 4, 4, "year")?;
        let month = parse_component(input, parts[1], 1, 2, "month")?;
        let day = parse_component(input, parts[2], 1, 2, "day")?;

        // At most four digits, so the cast cannot truncate.
        Self::new(year as i32, month, day)
    }

    /// Converts from a chrono date.
    pub fn from_naive(date: NaiveDate) -> Result<Self, CosmicError> {
        Self::new(date.year(), date.month(), date.day())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the equivalent chrono date.
    pub fn to_naive(&self) -> NaiveDate {
        self.0
    }

    /// Long English rendering, e.g. "Thursday, November 22, 1990".
    pub fn long_display(&self) -> String {
        self.to_naive().format("%A, %B %-d, %Y").to_string()
    }
}

fn parse_component(
    input: &str,
    raw: &str,
    min_len: usize,
    max_len: usize,
    name: &str,
) -> Result<u32, CosmicError> {
    if raw.len() < min_len || raw.len() > max_len || !raw.bytes().all(|b| b.is_ascii_digit()) {
        let expected = if min_len == max_len {
            format!("{} must be {} digits", name, min_len)
        } else {
            format!("{} must be {} to {} digits", name, min_len, max_len)
        };
        return Err(CosmicError::invalid_format(input, expected));
    }
    raw.parse::<u32>()
        .map_err(|e| CosmicError::invalid_format(input, format!("{}: {}", name, e)))
}

/// Largest day number a month can hold in any year (February allows 29).
///
/// Used where only a month and day are known, such as sun sign lookups.
pub(crate) fn max_day_in_any_year(month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(29),
        _ => None,
    }
}

/// Validates a month/day pair that is not tied to a particular year.
pub(crate) fn validate_month_day(month: u32, day: u32) -> Result<(), CosmicError> {
    let max_day = max_day_in_any_year(month).ok_or_else(|| {
        CosmicError::invalid_input("month", format!("{} is not between 1 and 12", month))
    })?;
    if day == 0 || day > max_day {
        return Err(CosmicError::invalid_input(
            "day",
            format!("{} is not between 1 and {} for month {}", day, max_day, month),
        ));
    }
    Ok(())
}

impl FromStr for CalendarDate {
    type Err = CosmicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CosmicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}
