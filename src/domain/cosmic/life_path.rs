//! Life path number: the numerological core of a birth date.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CalendarDate, CosmicError, DigitReducer, ReducedNumber};

/// Reduced number derived from the full birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LifePathNumber(ReducedNumber);

impl LifePathNumber {
    /// Computes the life path for a birth date.
    ///
    /// Year digits, month and day are each reduced on their own (so a year
    /// whose digits sum to 22 enters the total as 22), then the three are
    /// summed and reduced once more.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if any part sums to zero, which a `CalendarDate`
    /// never produces.
    pub fn from_date(date: &CalendarDate) -> Result<Self, CosmicError> {
        reduce_date_parts(date.year(), date.month(), date.day()).map(Self)
    }

    /// Parses a `YYYY-MM-DD` birth date and computes its life path.
    pub fn from_birth_date_str(input: &str) -> Result<Self, CosmicError> {
        Self::from_date(&CalendarDate::parse(input)?)
    }

    pub fn number(&self) -> ReducedNumber {
        self.0
    }

    pub fn value(&self) -> u32 {
        self.0.value()
    }

    pub fn is_master(&self) -> bool {
        self.0.is_master()
    }
}

/// Shared by life path and personal year.
pub(crate) fn reduce_date_parts(
    year: i32,
    month: u32,
    day: u32,
) -> Result<ReducedNumber, CosmicError> {
    let parts = [
        DigitReducer::reduce_digits(year.unsigned_abs())?,
        DigitReducer::reduce(month)?,
        DigitReducer::reduce(day)?,
    ];
    DigitReducer::combine(&parts)
}

impl fmt::Display for LifePathNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn life_path(input: &str) -> u32 {
        LifePathNumber::from_birth_date_str(input).unwrap().value()
    }

    #[test]
    fn reference_example_is_seven() {
        // 1990 -> 19 -> 1; 11 stays; 22 stays; 1 + 11 + 22 = 34 -> 7
        assert_eq!(life_path("1990-11-22"), 7);
    }

    #[test]
    fn master_year_sum_is_kept_before_adding() {
        // 1966 -> 22 (kept); 2; 9; 22 + 2 + 9 = 33. Reducing 22 to 4 first would give 6.
        assert_eq!(life_path("1966-02-09"), 33);
    }

    #[test]
    fn final_sum_can_be_master() {
        // 1991 -> 20 -> 2; 09 -> 9; 09 -> 9; 2 + 9 + 9 = 20 -> 2
        assert_eq!(life_path("1991-09-09"), 2);
        // 1980 -> 18 -> 9; 1; 1 -> 11
        assert_eq!(life_path("1980-01-01"), 11);
    }

    #[test]
    fn month_and_day_master_numbers_are_kept() {
        // 2000 -> 2; 11; 29 -> 11; 2 + 11 + 11 = 24 -> 6
        assert_eq!(life_path("2000-11-29"), 6);
    }

    #[test]
    fn two_digit_day_reduces_independently() {
        // 1987 -> 25 -> 7; 7 -> 7; 16 -> 7; 21 -> 3
        assert_eq!(life_path("1987-07-16"), 3);
    }

    #[test]
    fn invalid_date_fails() {
        assert!(matches!(
            LifePathNumber::from_birth_date_str("1990-11"),
            Err(CosmicError::InvalidDateFormat { .. })
        ));
        assert!(matches!(
            LifePathNumber::from_birth_date_str("1990-02-31"),
            Err(CosmicError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn every_day_of_a_leap_year_reduces() {
        let mut day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while day.year() == 2024 {
            let date = CalendarDate::new(day.year(), day.month(), day.day()).unwrap();
            assert!(LifePathNumber::from_date(&date).is_ok(), "{}", date);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn zero_part_is_an_error_not_a_default() {
        assert!(matches!(
            reduce_date_parts(2024, 0, 1),
            Err(CosmicError::InvalidInput { .. })
        ));
    }

    #[test]
    fn serializes_as_number() {
        let lp = LifePathNumber::from_birth_date_str("1990-11-22").unwrap();
        assert_eq!(serde_json::to_string(&lp).unwrap(), "7");
    }
}
