//! Digit reduction and the reduced numbers it produces.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CosmicError;

/// Numbers that halt reduction when they appear as a running value.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// A reduction result: 1 through 9, or a master number 11, 22, 33.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ReducedNumber(u8);

impl ReducedNumber {
    /// Every value a reduction can produce, ascending.
    pub const ALL: [ReducedNumber; 12] = [
        ReducedNumber(1),
        ReducedNumber(2),
        ReducedNumber(3),
        ReducedNumber(4),
        ReducedNumber(5),
        ReducedNumber(6),
        ReducedNumber(7),
        ReducedNumber(8),
        ReducedNumber(9),
        ReducedNumber(11),
        ReducedNumber(22),
        ReducedNumber(33),
    ];

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        u32::from(self.0)
    }

    /// Returns true for 11, 22 and 33.
    pub fn is_master(&self) -> bool {
        MASTER_NUMBERS.contains(&self.value())
    }
}

impl TryFrom<u32> for ReducedNumber {
    type Error = CosmicError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if (1..=9).contains(&value) || MASTER_NUMBERS.contains(&value) {
            // Bounded by 33 above.
            Ok(Self(value as u8))
        } else {
            Err(CosmicError::invalid_input(
                "reduced_number",
                format!("{} is not 1-9, 11, 22 or 33", value),
            ))
        }
    }
}

impl From<ReducedNumber> for u32 {
    fn from(n: ReducedNumber) -> Self {
        n.value()
    }
}

impl fmt::Display for ReducedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit summing that stops at a single digit or a master number.
pub struct DigitReducer;

impl DigitReducer {
    /// Reduces `n` to 1-9 or a master number.
    ///
    /// A master number halts reduction only when it is the exact running
    /// value: 29 becomes 11 and stops there, never 2.
    ///
    /// # Errors
    ///
    /// Zero has no reduction in the numerology domain and is rejected with
    /// `InvalidInput`. Digit sums of real calendar components are never zero.
    pub fn reduce(n: u32) -> Result<ReducedNumber, CosmicError> {
        if n == 0 {
            return Err(CosmicError::invalid_input(
                "number",
                "zero cannot be reduced",
            ));
        }

        let mut current = n;
        while current > 9 && !MASTER_NUMBERS.contains(&current) {
            current = digit_sum(current);
        }
        ReducedNumber::try_from(current)
    }

    /// Reduces the digit sum of `n`, e.g. a four-digit year.
    pub fn reduce_digits(n: u32) -> Result<ReducedNumber, CosmicError> {
        Self::reduce(digit_sum(n))
    }

    /// Adds already-reduced parts and reduces the total once more.
    pub fn combine(parts: &[ReducedNumber]) -> Result<ReducedNumber, CosmicError> {
        Self::reduce(parts.iter().map(ReducedNumber::value).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(n: u32) -> u32 {
        DigitReducer::reduce(n).unwrap().value()
    }

    #[test]
    fn digit_sum_adds_decimal_digits() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(u32::MAX), 57);
    }

    #[test]
    fn single_digits_are_unchanged() {
        for n in 1..=9 {
            assert_eq!(reduce(n), n);
        }
    }

    #[test]
    fn master_numbers_halt_immediately() {
        assert_eq!(reduce(11), 11);
        assert_eq!(reduce(22), 22);
        assert_eq!(reduce(33), 33);
    }

    #[test]
    fn stops_at_first_master_number() {
        assert_eq!(reduce(29), 11);
        assert_eq!(reduce(38), 11);
        assert_eq!(reduce(499), 22);
    }

    #[test]
    fn reduces_repeatedly() {
        assert_eq!(reduce(19), 1);
        assert_eq!(reduce(34), 7);
        assert_eq!(reduce(99), 9);
        assert_eq!(reduce(1990), 1);
        assert_eq!(reduce(44), 8);
    }

    #[test]
    fn forty_four_is_not_a_master_number() {
        assert!(!DigitReducer::reduce(44).unwrap().is_master());
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(
            DigitReducer::reduce(0),
            Err(CosmicError::InvalidInput { field: "number", .. })
        ));
    }

    #[test]
    fn combine_sums_then_reduces() {
        let parts = [
            ReducedNumber::try_from(1).unwrap(),
            ReducedNumber::try_from(11).unwrap(),
            ReducedNumber::try_from(22).unwrap(),
        ];
        assert_eq!(DigitReducer::combine(&parts).unwrap().value(), 7);
    }

    #[test]
    fn reduced_number_rejects_out_of_set_values() {
        for bad in [0, 10, 12, 21, 23, 34, 44] {
            assert!(ReducedNumber::try_from(bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn all_contains_every_reduction_target() {
        let values: Vec<u32> = ReducedNumber::ALL.iter().map(|n| n.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33]);
        assert_eq!(ReducedNumber::ALL.iter().filter(|n| n.is_master()).count(), 3);
    }

    #[test]
    fn serializes_as_plain_number() {
        let n = ReducedNumber::try_from(22).unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "22");
        assert!(serde_json::from_str::<ReducedNumber>("10").is_err());
    }
}
