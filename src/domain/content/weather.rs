//! Cosmic weather: what the sky looks like right now, for everyone.

use serde::{Deserialize, Serialize};

use crate::domain::cosmic::{CalendarDate, CosmicError, MoonPhase, SunSign};
use crate::domain::foundation::Timestamp;

/// Moon phase and transiting sun sign at one instant, with guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmicWeather {
    pub moon_phase: MoonPhase,
    pub moon_energy: String,
    pub sun_sign: SunSign,
    pub guidance: String,
    pub observed_at: Timestamp,
}

impl CosmicWeather {
    /// Weather at `now`. The sun sign follows `now`'s UTC calendar date.
    ///
    /// # Errors
    ///
    /// `DateOutOfRange` when `now` falls before year 1.
    pub fn at(now: Timestamp) -> Result<Self, CosmicError> {
        let today = CalendarDate::from_naive(now.date())?;
        let moon_phase = MoonPhase::at(&now);
        let sun_sign = SunSign::for_date(&today);
        Ok(Self {
            moon_phase,
            moon_energy: moon_phase.energy().to_string(),
            sun_sign,
            guidance: format!(
                "The {} invites {}. The Sun in {} colors the day. Honor both rhythms.",
                moon_phase,
                moon_phase.energy(),
                sun_sign
            ),
            observed_at: now,
        })
    }
}
