//! Cosmic calculations - Pure, date-driven attribute resolvers.
//!
//! Every function here is a deterministic computation over a calendar date
//! (and, for moon phase and personal year, an explicit "now"). Nothing reads
//! the clock, touches I/O or holds state, so all of it is safe to call
//! concurrently from any number of requests.
//!
//! # Components
//!
//! - `CalendarDate` - Parsing and validation of `YYYY-MM-DD` input
//! - `DigitReducer` - Digit summing that halts at 1-9 or 11/22/33
//! - `LifePathNumber` - Numerology core of a birth date
//! - `SunSign` - Western sign from fixed date ranges
//! - `ChineseAnimal` / `ChineseElement` - Twelve- and ten-year cycles from 1900
//! - `MoonPhase` - Eight phases from a mean synodic month
//! - `PersonalYearNumber` - Yearly numerology cycle
//! - `CosmicProfile` - Aggregate of all of the above

mod calendar_date;
mod chinese_zodiac;
mod errors;
mod life_path;
mod moon_phase;
mod numerology;
mod personal_year;
mod profile;
mod sun_sign;

pub use calendar_date::CalendarDate;
pub use chinese_zodiac::{ChineseAnimal, ChineseElement, Polarity, ZODIAC_ANCHOR_YEAR};
pub use errors::CosmicError;
pub use life_path::LifePathNumber;
pub use moon_phase::{
    lunar_age_days, reference_new_moon, MoonPhase, PHASE_UPPER_BOUNDS, SYNODIC_MONTH_DAYS,
};
pub use numerology::{digit_sum, DigitReducer, ReducedNumber, MASTER_NUMBERS};
pub use personal_year::PersonalYearNumber;
pub use profile::CosmicProfile;
pub use sun_sign::{ClassicalElement, SignRange, SunSign, SIGN_RANGES};
