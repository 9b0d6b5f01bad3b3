//! Kinds of paid reading.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A reading that must be unlocked before it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingKind {
    /// Natal essay "The Cosmic Blueprint".
    LifeEssay,
    /// Forecast for the current calendar year.
    YearEssay,
    /// Book recommendations.
    ReadingList,
}

impl ReadingKind {
    pub const ALL: [ReadingKind; 3] = [
        ReadingKind::LifeEssay,
        ReadingKind::YearEssay,
        ReadingKind::ReadingList,
    ];

    /// Identifier used in configuration and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            ReadingKind::LifeEssay => "life_essay",
            ReadingKind::YearEssay => "year_essay",
            ReadingKind::ReadingList => "reading_list",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReadingKind::LifeEssay => "Life Essay",
            ReadingKind::YearEssay => "Year Essay",
            ReadingKind::ReadingList => "Reading List",
        }
    }
}

impl fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ReadingKind {
    type Err = ValidationError;

    /// Accepts the slug with either `_` or `-` as separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.slug() == wanted)
            .ok_or_else(|| ValidationError::invalid_format("reading_kind", format!("unknown reading '{}'", s)))
    }
}
