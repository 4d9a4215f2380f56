//! Free-text academic term ("Fall", "Spring 2024", "Summer 2023")

use serde::{Deserialize, Serialize};
use std::fmt;

/// Season named by the first word of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// Fall term
    Fall,
    /// Spring term
    Spring,
    /// Summer session
    Summer,
}

impl Season {
    /// Sort position within a school year (Fall=1, Spring=2, Summer=3)
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Self::Fall => 1,
            Self::Spring => 2,
            Self::Summer => 3,
        }
    }
}

/// Academic term as entered by the student.
///
/// The text is kept verbatim. Summer detection is a case-insensitive
/// substring match, while the season used for ordering comes from an exact
/// match on the leading word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    /// Wrap raw term text
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw term text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the term mentions "summer" anywhere, ignoring case
    #[must_use]
    pub fn is_summer(&self) -> bool {
        self.0.to_lowercase().contains("summer")
    }

    /// Season named by the leading word, if it is exactly `Fall`, `Spring` or `Summer`
    #[must_use]
    pub fn season(&self) -> Option<Season> {
        match self.0.split(' ').next()? {
            "Fall" => Some(Season::Fall),
            "Spring" => Some(Season::Spring),
            "Summer" => Some(Season::Summer),
            _ => None,
        }
    }

    /// Sort key within a grade level; unrecognized terms sort first with 0
    #[must_use]
    pub fn season_order(&self) -> u8 {
        self.season().map_or(0, Season::order)
    }
}

impl From<&str> for Term {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Term {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
