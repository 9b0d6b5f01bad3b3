//! Personal year: the yearly numerology cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::calendar_date::validate_month_day;
use super::life_path::reduce_date_parts;
use super::{CalendarDate, CosmicError, ReducedNumber};

/// Reduced number from the current year and the birth month and day.
///
/// Advances every calendar year. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalYearNumber(ReducedNumber);

impl PersonalYearNumber {
    /// Computes the personal year for a birth month/day in `current_year`.
    ///
    /// February 29 is accepted for any year.
    pub fn calculate(
        birth_month: u32,
        birth_day: u32,
        current_year: i32,
    ) -> Result<Self, CosmicError> {
        validate_month_day(birth_month, birth_day)?;
        if current_year < 1 {
            return Err(CosmicError::invalid_input(
                "current_year",
                format!("{} is before year 1", current_year),
            ));
        }
        reduce_date_parts(current_year, birth_month, birth_day).map(Self)
    }

    /// Computes the personal year of a birth date in `current_year`.
    pub fn for_birth_date(birth_date: &CalendarDate, current_year: i32) -> Result<Self, CosmicError> {
        Self::calculate(birth_date.month(), birth_date.day(), current_year)
    }

    pub fn number(&self) -> ReducedNumber {
        self.0
    }

    pub fn value(&self) -> u32 {
        self.0.value()
    }
}

impl fmt::Display for PersonalYearNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
