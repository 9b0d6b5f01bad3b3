//! Long-form readings rendered from a cosmic profile.
//!
//! Rendering is pure: the same profile, name and year always produce the
//! same text. Every lookup goes through the total tables in
//! [`super::tables`], so there are no "Unknown" placeholders.

use super::tables::{
    animal_traits, element_book, first_trait, life_path_books, life_path_traits,
    personal_year_theme, sun_sign_traits,
};
use crate::domain::cosmic::CosmicProfile;

/// Name used when the reader did not give one.
pub const DEFAULT_DISPLAY_NAME: &str = "Cosmic Traveler";

const RULE: &str = "═══════════════════════════════════════════════════════════════";

fn display_name(name: Option<&str>) -> &str {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n,
        _ => DEFAULT_DISPLAY_NAME,
    }
}

fn header(title: &str, name: Option<&str>) -> String {
    format!(
        "{rule}\n                    {title}\n                        {name}\n{rule}",
        rule = RULE,
        title = title,
        name = display_name(name).to_uppercase(),
    )
}

fn footer(verb: &str) -> String {
    format!(
        "{rule}\n                         ✧ ✧ ✧\n              {verb} with intention by Cosmic Self\n              An All Walks of Life Production\n{rule}",
        rule = RULE,
        verb = verb,
    )
}

fn section(title: &str) -> String {
    format!("                    ✧ {} ✧", title)
}

/// Renders the natal essay "THE COSMIC BLUEPRINT OF <NAME>".
pub fn render_life_essay(profile: &CosmicProfile, name: Option<&str>) -> String {
    let path = life_path_traits(profile.life_path.number());
    let sign = sun_sign_traits(profile.sun_sign);
    let animal = animal_traits(profile.chinese_animal);
    let year = personal_year_theme(profile.personal_year.number());

    let lp = profile.life_path;
    let sun = profile.sun_sign;
    let element = sun.element();
    let zodiac = format!("{} {}", profile.chinese_element, profile.chinese_animal);
    let compatible = animal
        .compatible
        .iter()
        .map(|a| a.name())
        .collect::<Vec<_>>()
        .join(", ");

    let parts = [
        header("THE COSMIC BLUEPRINT OF", name),
        section("Introduction"),
        format!(
            "You entered this world on {}, at a precise moment when the cosmos aligned to create the unique energetic signature that is you. This essay explores three traditions of cosmic wisdom, Western Astrology, Numerology and Chinese Astrology, and how they weave together to illuminate your path.",
            profile.birth_date.long_display()
        ),
        section("Your Numerological Core"),
        format!(
            "At the heart of your numerological identity lies Life Path {}: {}. This number was derived from your complete birth date, reduced through the ancient practice of digit summing.",
            lp, path.essence
        ),
        format!(
            "Those who walk Life Path {} carry the essence of being {}. Your purpose is {}.",
            lp, path.traits, path.purpose
        ),
        format!(
            "The gifts you bring include {}. Your challenges involve {}. These are not flaws but edges where growth happens.",
            path.gifts, path.challenges
        ),
        section("Your Solar Identity"),
        format!(
            "The Sun was moving through {} when you took your first breath, marking you as a {} sign with the qualities of being {}.",
            sun, element, sign.traits
        ),
        format!(
            "In Western Astrology the Sun sign represents your core identity. The shadow side includes tendencies toward {}. Understanding these shadows brings awareness and growth.",
            sign.shadow
        ),
        section("Your Eastern Wisdom"),
        format!(
            "In Chinese astrology, you were born in the Year of the {}. The {} carries the energy of being {}.",
            zodiac, profile.chinese_animal, animal.traits
        ),
        format!(
            "Your particular strengths include {}. In relationships, the {} traditionally finds harmony with {}.",
            animal.strengths, profile.chinese_animal, compatible
        ),
        section("The Synthesis"),
        format!(
            "You are simultaneously a Life Path {} {}, a {} with {} energy, and a {} from the Eastern tradition.\n\nThis creates a cosmic fingerprint that belongs to you alone.",
            lp, path.essence, sun, element, zodiac
        ),
        section("Your Current Cycle"),
        format!(
            "As of this year, you are moving through Personal Year {}, a year of {}. {}",
            profile.personal_year, year.theme, year.focus
        ),
        section("Living Your Blueprint"),
        format!(
            "Your cosmic blueprint is not a cage but a map. The {} within you will always seek {}. The {} Sun will always express through {} energy.",
            path.essence,
            path.purpose,
            sun,
            first_trait(sign.traits)
        ),
        section("Practical Wisdom"),
        format!(
            "Honor your Life Path {} by engaging with activities that allow you {}. For your {} nature, spend time in environments that support your {} element.",
            lp, path.purpose, sun, element
        ),
        section("Closing Reflection"),
        format!(
            "You are {}: a Life Path {} {}, born under the {} Sun, carrying the {}'s ancient wisdom.\n\nThe stars do not compel, they impel. What you do with your cosmic blueprint is your choice, your art, your gift to make.",
            display_name(name),
            lp,
            path.essence,
            sun,
            zodiac
        ),
        footer("Generated"),
    ];
    parts.join("\n\n")
}

/// Emphasis of the first quarter of a personal year.
pub fn first_quarter_emphasis(personal_year: u32) -> &'static str {
    if personal_year <= 3 {
        "initiating new directions"
    } else if personal_year <= 6 {
        "building on foundations"
    } else {
        "completing cycles"
    }
}

/// Renders the forecast "<YEAR> COSMIC FORECAST FOR <NAME>".
///
/// `profile` should be evaluated in `year` so the personal year and moon
/// phase match the forecast.
pub fn render_year_essay(profile: &CosmicProfile, name: Option<&str>, year: i32) -> String {
    let path = life_path_traits(profile.life_path.number());
    let sign = sun_sign_traits(profile.sun_sign);
    let theme = personal_year_theme(profile.personal_year.number());
    let py = profile.personal_year;
    let moon = profile.moon_phase;

    let parts = [
        header(&format!("{} COSMIC FORECAST FOR", year), name),
        section(&format!("Your Personal Year: {}", py)),
        format!(
            "{}, you are moving through Personal Year {}, a year of {}.\n\n{}",
            display_name(name),
            py,
            theme.theme,
            theme.focus
        ),
        format!(
            "For someone walking Life Path {} ({}), this Personal Year creates a specific dynamic. Your natural tendency toward being {} now meets the {} energy.",
            profile.life_path,
            path.essence,
            first_trait(path.traits),
            theme.theme.to_lowercase()
        ),
        section("Astrological Currents"),
        format!(
            "As a {}, you bring {} element energy to this year's journey. This invites attention to how you balance {} expression with growth.",
            profile.sun_sign,
            profile.sun_sign.element(),
            first_trait(sign.traits)
        ),
        section("Practical Navigation"),
        format!(
            "The first quarter of {} emphasizes {}.",
            year,
            first_quarter_emphasis(py.value())
        ),
        format!(
            "The middle of the year brings the fullest expression of Personal Year {} energy, when {} themes reach their peak.",
            py,
            theme.theme.to_lowercase()
        ),
        "The final quarter begins the transition toward your next Personal Year. Use this time to consolidate lessons and prepare for the coming cycle.".to_string(),
        section("Monthly Rhythms"),
        format!(
            "Currently, we're in the {}, a time of {}. This cosmic rhythm offers wisdom about timing and natural flow.",
            moon,
            moon.energy()
        ),
        section("Closing Guidance"),
        format!(
            "{} offers you opportunities aligned with Personal Year {}'s theme of {}. Your Life Path {} gives you the tools of {}.\n\nMay this year bring you deeper into alignment with your cosmic blueprint.",
            year,
            py,
            theme.theme,
            profile.life_path,
            first_trait(path.gifts)
        ),
        footer("Generated"),
    ];
    parts.join("\n\n")
}

/// Renders the book list for the life path and the sun sign's element.
pub fn render_reading_list(profile: &CosmicProfile, name: Option<&str>) -> String {
    let path = life_path_traits(profile.life_path.number());
    let element = profile.sun_sign.element();

    let parts = [
        header("PERSONALIZED READING LIST FOR", name),
        format!(
            "{}\n                         ({})",
            section(&format!("For Your Life Path {}", profile.life_path)),
            path.essence
        ),
        life_path_books(profile.life_path.number()).join("\n"),
        format!(
            "These books resonate with your {} nature and support your purpose: {}.",
            path.traits, path.purpose
        ),
        format!(
            "{}\n                         ({})",
            section(&format!("For Your {} Nature", element)),
            profile.sun_sign
        ),
        element_book(element).to_string(),
        section("Universal Recommendations"),
        "\"The Power of Myth\" by Joseph Campbell - Understanding archetypal patterns".to_string(),
        "\"The Astrology of Fate\" by Liz Greene - Deep psychological astrology".to_string(),
        section("How to Use This List"),
        "Start with the book that calls to you most strongly. Let each book be a conversation with the author's wisdom and your own cosmic blueprint.".to_string(),
        footer("Curated"),
    ];
    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn profile(birth: &str, now: &str) -> CosmicProfile {
        CosmicProfile::from_birth_date_str(birth, Timestamp::parse_rfc3339(now).unwrap()).unwrap()
    }

    fn reference() -> CosmicProfile {
        profile("1990-11-22", "2024-01-11T00:00:00Z")
    }

    #[test]
    fn life_essay_header_uses_upper_cased_name() {
        let essay = render_life_essay(&reference(), Some("Ada"));
        assert!(essay.starts_with(RULE));
        assert!(essay.contains("THE COSMIC BLUEPRINT OF\n                        ADA"));
    }

    #[test]
    fn missing_or_blank_name_falls_back() {
        for name in [None, Some("   ")] {
            let essay = render_life_essay(&reference(), name);
            assert!(essay.contains("COSMIC TRAVELER"));
            assert!(essay.contains("You are Cosmic Traveler:"));
        }
    }

    #[test]
    fn life_essay_weaves_all_traditions() {
        let essay = render_life_essay(&reference(), Some("Ada"));
        assert!(essay.contains("Thursday, November 22, 1990"));
        assert!(essay.contains("Life Path 7: The Seeker"));
        assert!(essay.contains("moving through Sagittarius"));
        assert!(essay.contains("a Fire sign"));
        assert!(essay.contains("Year of the Metal Horse"));
        assert!(essay.contains("harmony with Tiger, Goat, Rabbit"));
        assert!(essay.contains("Personal Year 5, a year of Change & Freedom"));
        assert!(essay.contains("through optimistic energy"));
        assert!(essay.ends_with(RULE));
        assert!(!essay.contains("Unknown"));
    }

    #[test]
    fn year_essay_states_year_and_personal_year() {
        let essay = render_year_essay(&reference(), Some("Ada"), 2024);
        assert!(essay.contains("2024 COSMIC FORECAST FOR\n                        ADA"));
        assert!(essay.contains("Your Personal Year: 5"));
        assert!(essay.contains("The first quarter of 2024 emphasizes building on foundations."));
        assert!(essay.contains("we're in the New Moon, a time of beginnings"));
        assert!(essay.contains("change & freedom energy"));
        assert!(essay.contains("the tools of profound insight"));
    }

    #[test]
    fn first_quarter_thresholds() {
        assert_eq!(first_quarter_emphasis(1), "initiating new directions");
        assert_eq!(first_quarter_emphasis(3), "initiating new directions");
        assert_eq!(first_quarter_emphasis(4), "building on foundations");
        assert_eq!(first_quarter_emphasis(6), "building on foundations");
        assert_eq!(first_quarter_emphasis(7), "completing cycles");
        assert_eq!(first_quarter_emphasis(11), "completing cycles");
        assert_eq!(first_quarter_emphasis(33), "completing cycles");
    }

    #[test]
    fn reading_list_includes_path_element_and_universal_books() {
        let list = render_reading_list(&reference(), None);
        assert!(list.contains("PERSONALIZED READING LIST FOR\n                        COSMIC TRAVELER"));
        assert!(list.contains("\"The Power of Now\" by Eckhart Tolle"));
        assert!(list.contains("\"Siddhartha\" by Hermann Hesse"));
        assert!(list.contains("For Your Fire Nature"));
        assert!(list.contains("\"Start with Why\" by Simon Sinek"));
        assert!(list.contains("\"The Power of Myth\" by Joseph Campbell"));
        assert!(list.contains("\"The Astrology of Fate\" by Liz Greene"));
        assert!(list.contains("Curated with intention by Cosmic Self"));
    }

    #[test]
    fn master_number_reading_list() {
        let list = render_reading_list(&profile("1966-02-09", "2024-01-11T00:00:00Z"), Some("Lee"));
        assert!(list.contains("For Your Life Path 33"));
        assert!(list.contains("The Master Teacher"));
        assert!(list.contains("\"The Book of Joy\" by Dalai Lama"));
        assert!(list.contains("For Your Air Nature"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let p = reference();
        assert_eq!(render_life_essay(&p, Some("Ada")), render_life_essay(&p, Some("Ada")));
        assert_eq!(render_year_essay(&p, None, 2024), render_year_essay(&p, None, 2024));
    }
}
