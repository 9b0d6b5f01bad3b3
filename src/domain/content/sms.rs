//! Daily SMS text.

use super::tables::{life_path_affirmation, moon_phase_message};
use crate::domain::cosmic::{LifePathNumber, MoonPhase};

/// Greeting used when a subscriber has no name on file.
pub const DEFAULT_SMS_NAME: &str = "Cosmic traveler";

/// Composes the short message sent to digest subscribers.
///
/// Format: `<icon> <name>, the <phase> whispers: <moon message>. As Life
/// Path <n>, <affirmation in lower case>. ✧ Cosmic Self`
pub fn compose_daily_message(
    name: Option<&str>,
    life_path: LifePathNumber,
    moon_phase: MoonPhase,
) -> String {
    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n,
        _ => DEFAULT_SMS_NAME,
    };
    format!(
        "{} {}, the {} whispers: {}. As Life Path {}, {}. ✧ Cosmic Self",
        moon_phase.icon(),
        name,
        moon_phase,
        moon_phase_message(moon_phase),
        life_path,
        life_path_affirmation(life_path.number()).to_lowercase(),
    )
}
