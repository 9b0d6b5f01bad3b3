//! E.164 phone numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// A normalized `+<digits>` phone number.
///
/// Spaces, dashes, dots and parentheses are stripped before validation, so
/// `"+1 (555) 010-4477"` and `"+15550104477"` are the same number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let compact: String = input
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
            .collect();
        if compact.is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }
        let digits = compact.strip_prefix('+').ok_or_else(|| {
            ValidationError::invalid_format("phone", "must start with '+' and a country code")
        })?;
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format("phone", "must contain only digits after '+'"));
        }
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
            return Err(ValidationError::out_of_range(
                "phone_digits",
                MIN_DIGITS as i64,
                MAX_DIGITS as i64,
                digits.len() as i64,
            ));
        }
        Ok(Self(compact))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number with all but the last four digits hidden, for logs.
    pub fn masked(&self) -> String {
        let visible = self.0.len().saturating_sub(4);
        format!("+{}{}", "*".repeat(visible.saturating_sub(1)), &self.0[visible..])
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
