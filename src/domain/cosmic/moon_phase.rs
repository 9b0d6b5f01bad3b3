//! Moon phase approximated from a mean synodic month.
//!
//! No ephemeris: the phase is the position inside a 29.53058867-day cycle
//! measured from a fixed new moon, mapped onto eight unequal arcs. Content
//! only uses the phase thematically, so the approximation is acceptable as
//! long as the epoch and the boundary table stay fixed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CosmicError;
use crate::domain::foundation::Timestamp;

/// Mean length of a lunation in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53058867;

/// 2024-01-11T00:00:00Z in Unix milliseconds.
const REFERENCE_NEW_MOON_MILLIS: i64 = 1_704_931_200_000;

/// Reference new moon: 2024-01-11T00:00:00Z.
pub fn reference_new_moon() -> Timestamp {
    Timestamp::UNIX_EPOCH.plus_millis(REFERENCE_NEW_MOON_MILLIS)
}

/// One of eight named phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// Exclusive upper bound (in days of lunar age) of each phase but the last.
///
/// A boundary value belongs to the phase that starts there: an age of
/// exactly 14.77 is Full Moon.
pub const PHASE_UPPER_BOUNDS: [(f64, MoonPhase); 7] = [
    (1.85, MoonPhase::NewMoon),
    (7.38, MoonPhase::WaxingCrescent),
    (9.23, MoonPhase::FirstQuarter),
    (14.77, MoonPhase::WaxingGibbous),
    (16.61, MoonPhase::FullMoon),
    (22.15, MoonPhase::WaningGibbous),
    (24.00, MoonPhase::LastQuarter),
];

/// Lunar age in days, in `[0, SYNODIC_MONTH_DAYS]`.
///
/// Instants before the reference wrap backwards into the previous cycle.
pub fn lunar_age_days(reference: &Timestamp, now: &Timestamp) -> f64 {
    now.days_since(reference).rem_euclid(SYNODIC_MONTH_DAYS)
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Classifies a lunar age.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for NaN, infinities, negative ages or ages beyond one
    /// synodic month.
    pub fn from_age_days(age: f64) -> Result<Self, CosmicError> {
        if !age.is_finite() || !(0.0..=SYNODIC_MONTH_DAYS).contains(&age) {
            return Err(CosmicError::invalid_input(
                "lunar_age",
                format!("{} is outside 0..={}", age, SYNODIC_MONTH_DAYS),
            ));
        }
        Ok(Self::classify(age))
    }

    /// Phase at `now` relative to an arbitrary reference new moon.
    pub fn between(reference: &Timestamp, now: &Timestamp) -> Self {
        Self::classify(lunar_age_days(reference, now))
    }

    /// Ages past the last upper bound are Waning Crescent.
    fn classify(age: f64) -> Self {
        debug_assert!((0.0..=SYNODIC_MONTH_DAYS).contains(&age), "lunar age {} out of range", age);
        PHASE_UPPER_BOUNDS
            .iter()
            .find(|(upper, _)| age < *upper)
            .map_or(MoonPhase::WaningCrescent, |(_, phase)| *phase)
    }

    /// Phase at `now` relative to the fixed reference new moon.
    pub fn at(now: &Timestamp) -> Self {
        Self::between(&reference_new_moon(), now)
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Qualitative energy tag used by content.
    pub fn energy(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "beginnings",
            MoonPhase::WaxingCrescent => "intention",
            MoonPhase::FirstQuarter => "action",
            MoonPhase::WaxingGibbous => "refinement",
            MoonPhase::FullMoon => "illumination",
            MoonPhase::WaningGibbous => "gratitude",
            MoonPhase::LastQuarter => "release",
            MoonPhase::WaningCrescent => "surrender",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "\u{1F311}",
            MoonPhase::WaxingCrescent => "\u{1F312}",
            MoonPhase::FirstQuarter => "\u{1F313}",
            MoonPhase::WaxingGibbous => "\u{1F314}",
            MoonPhase::FullMoon => "\u{1F315}",
            MoonPhase::WaningGibbous => "\u{1F316}",
            MoonPhase::LastQuarter => "\u{1F317}",
            MoonPhase::WaningCrescent => "\u{1F318}",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
