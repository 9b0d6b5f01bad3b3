//! Cosmic profile: everything the calculators say about one birth date.

use serde::{Deserialize, Serialize};

use super::{
    CalendarDate, ChineseAnimal, ChineseElement, CosmicError, LifePathNumber, MoonPhase,
    PersonalYearNumber, SunSign,
};
use crate::domain::foundation::Timestamp;

/// Natal attributes of a birth date plus the moon phase and personal year
/// relative to `evaluated_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmicProfile {
    pub birth_date: CalendarDate,
    pub life_path: LifePathNumber,
    pub sun_sign: SunSign,
    pub chinese_animal: ChineseAnimal,
    pub chinese_element: ChineseElement,
    pub moon_phase: MoonPhase,
    pub personal_year: PersonalYearNumber,
    pub evaluated_at: Timestamp,
}

impl CosmicProfile {
    /// Computes the profile of `birth_date` as seen at `now`.
    ///
    /// The personal year uses the UTC calendar year of `now`.
    pub fn compute(birth_date: CalendarDate, now: Timestamp) -> Result<Self, CosmicError> {
        Ok(Self {
            birth_date,
            life_path: LifePathNumber::from_date(&birth_date)?,
            sun_sign: SunSign::for_date(&birth_date),
            chinese_animal: ChineseAnimal::for_year(birth_date.year()),
            chinese_element: ChineseElement::for_year(birth_date.year()),
            moon_phase: MoonPhase::at(&now),
            personal_year: PersonalYearNumber::for_birth_date(&birth_date, now.year())?,
            evaluated_at: now,
        })
    }

    /// Parses a `YYYY-MM-DD` birth date and computes its profile.
    pub fn from_birth_date_str(input: &str, now: Timestamp) -> Result<Self, CosmicError> {
        Self::compute(CalendarDate::parse(input)?, now)
    }
}
