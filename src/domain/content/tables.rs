//! Static interpretation tables keyed by the cosmic enums.
//!
//! Every lookup is total over its key type, so rendering never needs a
//! fallback entry.

use crate::domain::cosmic::{ChineseAnimal, ClassicalElement, MoonPhase, ReducedNumber, SunSign};

/// Interpretation of a life path number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifePathTraits {
    pub essence: &'static str,
    pub traits: &'static str,
    pub purpose: &'static str,
    pub challenges: &'static str,
    pub gifts: &'static str,
}

/// Interpretation of a sun sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunSignTraits {
    pub traits: &'static str,
    pub shadow: &'static str,
}

/// Interpretation of a Chinese zodiac animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimalTraits {
    pub traits: &'static str,
    pub strengths: &'static str,
    pub compatible: &'static [ChineseAnimal],
}

/// Theme of a personal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalYearTheme {
    pub theme: &'static str,
    pub focus: &'static str,
}

/// Returns the first comma-separated item of a trait list.
pub fn first_trait(list: &str) -> &str {
    list.split(',').next().unwrap_or(list).trim()
}

pub fn life_path_traits(number: ReducedNumber) -> &'static LifePathTraits {
    match number.value() {
        1 => &LifePathTraits {
            essence: "The Pioneer",
            traits: "independent, ambitious, innovative",
            purpose: "to develop individuality and lead by example",
            challenges: "overcoming self-doubt, avoiding arrogance",
            gifts: "natural leadership, original thinking, courage",
        },
        2 => &LifePathTraits {
            essence: "The Peacemaker",
            traits: "diplomatic, intuitive, cooperative",
            purpose: "to bring harmony and partnership into the world",
            challenges: "setting boundaries, trusting your judgment",
            gifts: "deep empathy, mediation skills, sensitivity",
        },
        3 => &LifePathTraits {
            essence: "The Communicator",
            traits: "creative, expressive, optimistic",
            purpose: "to inspire others through creative self-expression",
            challenges: "avoiding scattered energy, channeling talents",
            gifts: "artistic ability, infectious joy, communication",
        },
        4 => &LifePathTraits {
            essence: "The Builder",
            traits: "practical, disciplined, loyal",
            purpose: "to create lasting foundations and bring order",
            challenges: "avoiding rigidity, embracing change",
            gifts: "reliability, organization, determination",
        },
        5 => &LifePathTraits {
            essence: "The Freedom Seeker",
            traits: "adventurous, versatile, curious",
            purpose: "to experience life fully and teach about freedom",
            challenges: "avoiding excess, developing commitment",
            gifts: "adaptability, magnetism, resourcefulness",
        },
        6 => &LifePathTraits {
            essence: "The Nurturer",
            traits: "responsible, caring, protective",
            purpose: "to serve family and community through love",
            challenges: "avoiding martyrdom, setting healthy boundaries",
            gifts: "unconditional love, healing presence, harmony",
        },
        7 => &LifePathTraits {
            essence: "The Seeker",
            traits: "analytical, introspective, spiritual",
            purpose: "to seek truth and share wisdom with the world",
            challenges: "avoiding isolation, trusting intuition",
            gifts: "profound insight, research abilities, wisdom",
        },
        8 => &LifePathTraits {
            essence: "The Powerhouse",
            traits: "ambitious, authoritative, efficient",
            purpose: "to achieve material mastery and use power wisely",
            challenges: "balancing material and spiritual",
            gifts: "business acumen, manifestation, leadership",
        },
        9 => &LifePathTraits {
            essence: "The Humanitarian",
            traits: "compassionate, generous, idealistic",
            purpose: "to serve humanity and bring cycles to completion",
            challenges: "letting go of the past, accepting endings",
            gifts: "universal love, artistic talent, wisdom",
        },
        11 => &LifePathTraits {
            essence: "The Intuitive Illuminator",
            traits: "visionary, inspirational, sensitive",
            purpose: "to channel higher wisdom and inspire awakening",
            challenges: "grounding visions, managing sensitivity",
            gifts: "psychic ability, inspiration, spiritual insight",
        },
        22 => &LifePathTraits {
            essence: "The Master Builder",
            traits: "visionary, practical, powerful",
            purpose: "to turn dreams into reality for humanity's benefit",
            challenges: "enormous pressure, patience",
            gifts: "manifesting large-scale visions, practical idealism",
        },
        _ => &LifePathTraits {
            essence: "The Master Teacher",
            traits: "selfless, nurturing, wise",
            purpose: "to uplift humanity through unconditional love",
            challenges: "self-sacrifice, maintaining boundaries",
            gifts: "profound healing, spiritual leadership, compassion",
        },
    }
}

pub fn sun_sign_traits(sign: SunSign) -> &'static SunSignTraits {
    match sign {
        SunSign::Aries => &SunSignTraits {
            traits: "bold, direct, competitive",
            shadow: "impatience, aggression",
        },
        SunSign::Taurus => &SunSignTraits {
            traits: "reliable, patient, practical",
            shadow: "stubbornness, possessiveness",
        },
        SunSign::Gemini => &SunSignTraits {
            traits: "adaptable, clever, curious",
            shadow: "inconsistency, superficiality",
        },
        SunSign::Cancer => &SunSignTraits {
            traits: "intuitive, protective, nurturing",
            shadow: "moodiness, clinginess",
        },
        SunSign::Leo => &SunSignTraits {
            traits: "confident, dramatic, generous",
            shadow: "pride, attention-seeking",
        },
        SunSign::Virgo => &SunSignTraits {
            traits: "analytical, helpful, precise",
            shadow: "criticism, perfectionism",
        },
        SunSign::Libra => &SunSignTraits {
            traits: "diplomatic, graceful, fair",
            shadow: "indecision, people-pleasing",
        },
        SunSign::Scorpio => &SunSignTraits {
            traits: "passionate, determined, intuitive",
            shadow: "jealousy, secrecy",
        },
        SunSign::Sagittarius => &SunSignTraits {
            traits: "optimistic, adventurous, honest",
            shadow: "tactlessness, restlessness",
        },
        SunSign::Capricorn => &SunSignTraits {
            traits: "responsible, disciplined, ambitious",
            shadow: "pessimism, coldness",
        },
        SunSign::Aquarius => &SunSignTraits {
            traits: "progressive, original, independent",
            shadow: "detachment, rebellion",
        },
        SunSign::Pisces => &SunSignTraits {
            traits: "compassionate, artistic, intuitive",
            shadow: "escapism, victimhood",
        },
    }
}

pub fn animal_traits(animal: ChineseAnimal) -> &'static AnimalTraits {
    use ChineseAnimal::*;
    match animal {
        Rat => &AnimalTraits {
            traits: "quick-witted, resourceful",
            strengths: "adaptability, charm",
            compatible: &[Dragon, Monkey, Ox],
        },
        Ox => &AnimalTraits {
            traits: "diligent, dependable",
            strengths: "patience, reliability",
            compatible: &[Rat, Snake, Rooster],
        },
        Tiger => &AnimalTraits {
            traits: "brave, competitive",
            strengths: "courage, leadership",
            compatible: &[Dragon, Horse, Pig],
        },
        Rabbit => &AnimalTraits {
            traits: "gentle, elegant",
            strengths: "diplomacy, intuition",
            compatible: &[Goat, Monkey, Dog, Pig],
        },
        Dragon => &AnimalTraits {
            traits: "confident, intelligent",
            strengths: "charisma, ambition",
            compatible: &[Rooster, Rat, Monkey],
        },
        Snake => &AnimalTraits {
            traits: "enigmatic, wise",
            strengths: "intuition, elegance",
            compatible: &[Dragon, Rooster],
        },
        Horse => &AnimalTraits {
            traits: "animated, energetic",
            strengths: "freedom-loving, warm",
            compatible: &[Tiger, Goat, Rabbit],
        },
        Goat => &AnimalTraits {
            traits: "calm, gentle",
            strengths: "creativity, kindness",
            compatible: &[Rabbit, Horse, Pig],
        },
        Monkey => &AnimalTraits {
            traits: "sharp, curious",
            strengths: "cleverness, innovation",
            compatible: &[Ox, Dragon, Rabbit],
        },
        Rooster => &AnimalTraits {
            traits: "observant, hardworking",
            strengths: "honesty, confidence",
            compatible: &[Ox, Snake],
        },
        Dog => &AnimalTraits {
            traits: "loyal, honest",
            strengths: "faithfulness, justice",
            compatible: &[Rabbit],
        },
        Pig => &AnimalTraits {
            traits: "compassionate, generous",
            strengths: "sincerity, tolerance",
            compatible: &[Tiger, Rabbit, Goat],
        },
    }
}

pub fn personal_year_theme(number: ReducedNumber) -> &'static PersonalYearTheme {
    match number.value() {
        1 => &PersonalYearTheme {
            theme: "New Beginnings",
            focus: "Plant seeds, start fresh projects, assert independence.",
        },
        2 => &PersonalYearTheme {
            theme: "Partnership & Patience",
            focus: "Relationships matter. Cooperate, be patient, attend to details.",
        },
        3 => &PersonalYearTheme {
            theme: "Creative Expression",
            focus: "Express yourself creatively. Social opportunities abound.",
        },
        4 => &PersonalYearTheme {
            theme: "Building Foundations",
            focus: "Hard work required. Build structures for your future.",
        },
        5 => &PersonalYearTheme {
            theme: "Change & Freedom",
            focus: "Expect the unexpected. Embrace flexibility and adventure.",
        },
        6 => &PersonalYearTheme {
            theme: "Love & Responsibility",
            focus: "Family and relationships demand attention. Create harmony.",
        },
        7 => &PersonalYearTheme {
            theme: "Inner Journey",
            focus: "Reflect, study, develop spiritually. Trust your intuition.",
        },
        8 => &PersonalYearTheme {
            theme: "Power & Achievement",
            focus: "Material success possible. Step into your authority.",
        },
        9 => &PersonalYearTheme {
            theme: "Completion & Release",
            focus: "Let go of what no longer serves. Prepare for new cycle.",
        },
        11 => &PersonalYearTheme {
            theme: "Spiritual Awakening",
            focus: "Heightened intuition. Balance practical with visionary.",
        },
        22 => &PersonalYearTheme {
            theme: "Master Building",
            focus: "Large-scale achievement potential. Think big, work methodically.",
        },
        _ => &PersonalYearTheme {
            theme: "Master Teaching",
            focus: "Compassion and wisdom uplift many. Lead through love.",
        },
    }
}

/// Two recommended books for a life path.
pub fn life_path_books(number: ReducedNumber) -> [&'static str; 2] {
    match number.value() {
        1 => ["\"The War of Art\" by Steven Pressfield", "\"Man's Search for Meaning\" by Viktor Frankl"],
        2 => ["\"The Dance of Intimacy\" by Harriet Lerner", "\"Nonviolent Communication\" by Marshall Rosenberg"],
        3 => ["\"Big Magic\" by Elizabeth Gilbert", "\"The Artist's Way\" by Julia Cameron"],
        4 => ["\"Atomic Habits\" by James Clear", "\"Deep Work\" by Cal Newport"],
        5 => ["\"The Alchemist\" by Paulo Coelho", "\"Vagabonding\" by Rolf Potts"],
        6 => ["\"All About Love\" by bell hooks", "\"Boundaries\" by Henry Cloud"],
        7 => ["\"The Power of Now\" by Eckhart Tolle", "\"Siddhartha\" by Hermann Hesse"],
        8 => ["\"Think and Grow Rich\" by Napoleon Hill", "\"Principles\" by Ray Dalio"],
        9 => ["\"A New Earth\" by Eckhart Tolle", "\"The Prophet\" by Kahlil Gibran"],
        11 => ["\"The Seat of the Soul\" by Gary Zukav", "\"Many Lives, Many Masters\" by Brian Weiss"],
        22 => ["\"Good to Great\" by Jim Collins", "\"Mastery\" by Robert Greene"],
        _ => ["\"The Book of Joy\" by Dalai Lama", "\"Letters to a Young Poet\" by Rilke"],
    }
}

/// One recommended book for a classical element.
pub fn element_book(element: ClassicalElement) -> &'static str {
    match element {
        ClassicalElement::Fire => "\"Start with Why\" by Simon Sinek - fueling your natural enthusiasm",
        ClassicalElement::Earth => "\"Essentialism\" by Greg McKeown - honoring your practical nature",
        ClassicalElement::Air => "\"Thinking, Fast and Slow\" by Daniel Kahneman - understanding your mind",
        ClassicalElement::Water => {
            "\"The Language of Emotions\" by Karla McLaren - navigating emotional depths"
        }
    }
}

/// Short daily affirmation for a life path.
pub fn life_path_affirmation(number: ReducedNumber) -> &'static str {
    match number.value() {
        1 => "Lead with courage today",
        2 => "Trust your intuition deeply",
        3 => "Express your creativity now",
        4 => "Build something meaningful",
        5 => "Embrace today's changes",
        6 => "Nurture what you love",
        7 => "Seek the deeper truth",
        8 => "Step into your power",
        9 => "Release what's complete",
        11 => "Channel your vision now",
        22 => "Build your legacy today",
        _ => "Teach through love today",
    }
}

/// Short daily message for a moon phase.
pub fn moon_phase_message(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::NewMoon => "Plant seeds of intention",
        MoonPhase::WaxingCrescent => "Nurture what you've started",
        MoonPhase::FirstQuarter => "Push through resistance",
        MoonPhase::WaxingGibbous => "Refine and adjust",
        MoonPhase::FullMoon => "Receive what's revealed",
        MoonPhase::WaningGibbous => "Share your wisdom",
        MoonPhase::LastQuarter => "Release what's heavy",
        MoonPhase::WaningCrescent => "Rest and surrender",
    }
}
