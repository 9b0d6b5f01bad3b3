//! Chinese zodiac animal and element cycles keyed by year.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CosmicError;

/// Reference year of both cycles. 1900 is a Metal Rat year (yang).
pub const ZODIAC_ANCHOR_YEAR: i64 = 1900;

/// Position of `year` within a cycle of `len` years starting at the anchor.
///
/// Euclidean remainder, so years before the anchor wrap backwards
/// (1899 sits at the end of the cycle, not at a negative index).
fn cycle_index(year: i32, len: i64) -> usize {
    // rem_euclid on i64 is always in 0..len.
    (i64::from(year) - ZODIAC_ANCHOR_YEAR).rem_euclid(len) as usize
}

/// One of the twelve animals, in cycle order starting from Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseAnimal {
    pub const ALL: [ChineseAnimal; 12] = [
        ChineseAnimal::Rat,
        ChineseAnimal::Ox,
        ChineseAnimal::Tiger,
        ChineseAnimal::Rabbit,
        ChineseAnimal::Dragon,
        ChineseAnimal::Snake,
        ChineseAnimal::Horse,
        ChineseAnimal::Goat,
        ChineseAnimal::Monkey,
        ChineseAnimal::Rooster,
        ChineseAnimal::Dog,
        ChineseAnimal::Pig,
    ];

    /// Animal of a year. Every integer year has one.
    pub fn for_year(year: i32) -> Self {
        Self::ALL[cycle_index(year, 12)]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChineseAnimal::Rat => "Rat",
            ChineseAnimal::Ox => "Ox",
            ChineseAnimal::Tiger => "Tiger",
            ChineseAnimal::Rabbit => "Rabbit",
            ChineseAnimal::Dragon => "Dragon",
            ChineseAnimal::Snake => "Snake",
            ChineseAnimal::Horse => "Horse",
            ChineseAnimal::Goat => "Goat",
            ChineseAnimal::Monkey => "Monkey",
            ChineseAnimal::Rooster => "Rooster",
            ChineseAnimal::Dog => "Dog",
            ChineseAnimal::Pig => "Pig",
        }
    }
}

impl fmt::Display for ChineseAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChineseAnimal {
    type Err = CosmicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CosmicError::invalid_input("chinese_animal", format!("unknown animal '{}'", s)))
    }
}

/// One of the five elements. Each spans two consecutive years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseElement {
    Metal,
    Water,
    Wood,
    Fire,
    Earth,
}

const ELEMENT_CYCLE: [ChineseElement; 10] = [
    ChineseElement::Metal,
    ChineseElement::Metal,
    ChineseElement::Water,
    ChineseElement::Water,
    ChineseElement::Wood,
    ChineseElement::Wood,
    ChineseElement::Fire,
    ChineseElement::Fire,
    ChineseElement::Earth,
    ChineseElement::Earth,
];

impl ChineseElement {
    pub const ALL: [ChineseElement; 5] = [
        ChineseElement::Metal,
        ChineseElement::Water,
        ChineseElement::Wood,
        ChineseElement::Fire,
        ChineseElement::Earth,
    ];

    /// Element of a year on the ten-year cycle.
    pub fn for_year(year: i32) -> Self {
        ELEMENT_CYCLE[cycle_index(year, 10)]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChineseElement::Metal => "Metal",
            ChineseElement::Water => "Water",
            ChineseElement::Wood => "Wood",
            ChineseElement::Fire => "Fire",
            ChineseElement::Earth => "Earth",
        }
    }
}

impl fmt::Display for ChineseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChineseElement {
    type Err = CosmicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CosmicError::invalid_input("chinese_element", format!("unknown element '{}'", s)))
    }
}

/// Yang for the first year of each element pair, yin for the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub fn for_year(year: i32) -> Self {
        if cycle_index(year, 2) == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Polarity::Yang => "Yang",
            Polarity::Yin => "Yin",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
