//! Western sun signs resolved from fixed calendar ranges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::calendar_date::validate_month_day;
use super::{CalendarDate, CosmicError};

/// One of the twelve Western zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SunSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Classical element of a sun sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassicalElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl ClassicalElement {
    pub fn name(&self) -> &'static str {
        match self {
            ClassicalElement::Fire => "Fire",
            ClassicalElement::Earth => "Earth",
            ClassicalElement::Air => "Air",
            ClassicalElement::Water => "Water",
        }
    }
}

impl fmt::Display for ClassicalElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive date range of a sign. Capricorn wraps the year boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignRange {
    pub sign: SunSign,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl SignRange {
    const fn new(sign: SunSign, start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Self {
        Self {
            sign,
            start_month,
            start_day,
            end_month,
            end_day,
        }
    }

    /// True when `(month, day)` falls inside this range.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start_month && day >= self.start_day)
            || (month == self.end_month && day <= self.end_day)
    }
}

/// Contiguous, non-overlapping ranges covering every day of the year.
pub const SIGN_RANGES: [SignRange; 12] = [
    SignRange::new(SunSign::Aries, 3, 21, 4, 19),
    SignRange::new(SunSign::Taurus, 4, 20, 5, 20),
    SignRange::new(SunSign::Gemini, 5, 21, 6, 20),
    SignRange::new(SunSign::Cancer, 6, 21, 7, 22),
    SignRange::new(SunSign::Leo, 7, 23, 8, 22),
    SignRange::new(SunSign::Virgo, 8, 23, 9, 22),
    SignRange::new(SunSign::Libra, 9, 23, 10, 22),
    SignRange::new(SunSign::Scorpio, 10, 23, 11, 21),
    SignRange::new(SunSign::Sagittarius, 11, 22, 12, 21),
    SignRange::new(SunSign::Capricorn, 12, 22, 1, 19),
    SignRange::new(SunSign::Aquarius, 1, 20, 2, 18),
    SignRange::new(SunSign::Pisces, 2, 19, 3, 20),
];

impl SunSign {
    /// All signs in zodiac order starting from Aries.
    pub const ALL: [SunSign; 12] = [
        SunSign::Aries,
        SunSign::Taurus,
        SunSign::Gemini,
        SunSign::Cancer,
        SunSign::Leo,
        SunSign::Virgo,
        SunSign::Libra,
        SunSign::Scorpio,
        SunSign::Sagittarius,
        SunSign::Capricorn,
        SunSign::Aquarius,
        SunSign::Pisces,
    ];

    /// Resolves the sign for a month and day.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the month is outside 1-12 or the day does not
    /// exist in that month (February accepts 29). There is no fallback sign.
    pub fn for_month_day(month: u32, day: u32) -> Result<Self, CosmicError> {
        validate_month_day(month, day)?;
        Ok(Self::resolve(month, day))
    }

    /// Resolves the sign for a calendar date.
    pub fn for_date(date: &CalendarDate) -> Self {
        Self::resolve(date.month(), date.day())
    }

    /// Exactly one range starts in each month; days before its start day
    /// belong to the preceding range. `month` must be 1-12.
    fn resolve(month: u32, day: u32) -> Self {
        let starting = ((month + 9) % 12) as usize;
        let range = &SIGN_RANGES[starting];
        debug_assert_eq!(range.start_month, month, "SIGN_RANGES must start at March");
        if day >= range.start_day {
            range.sign
        } else {
            SIGN_RANGES[(starting + 11) % 12].sign
        }
    }

    /// Returns the date range of this sign.
    pub fn range(&self) -> SignRange {
        SIGN_RANGES[*self as usize]
    }

    pub fn element(&self) -> ClassicalElement {
        match self {
            SunSign::Aries | SunSign::Leo | SunSign::Sagittarius => ClassicalElement::Fire,
            SunSign::Taurus | SunSign::Virgo | SunSign::Capricorn => ClassicalElement::Earth,
            SunSign::Gemini | SunSign::Libra | SunSign::Aquarius => ClassicalElement::Air,
            SunSign::Cancer | SunSign::Scorpio | SunSign::Pisces => ClassicalElement::Water,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SunSign::Aries => "Aries",
            SunSign::Taurus => "Taurus",
            SunSign::Gemini => "Gemini",
            SunSign::Cancer => "Cancer",
            SunSign::Leo => "Leo",
            SunSign::Virgo => "Virgo",
            SunSign::Libra => "Libra",
            SunSign::Scorpio => "Scorpio",
            SunSign::Sagittarius => "Sagittarius",
            SunSign::Capricorn => "Capricorn",
            SunSign::Aquarius => "Aquarius",
            SunSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for SunSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SunSign {
    type Err = CosmicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SunSign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CosmicError::invalid_input("sun_sign", format!("unknown sign '{}'", s)))
    }
}
