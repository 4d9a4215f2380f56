//! Letter grades and their grade-point values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A letter grade as recorded on a transcript.
///
/// Only unmodified letters are recognized. Anything else (`"A-"`, `"P"`,
/// `"IP"`, ...) is kept verbatim in [`Grade::Other`] and is worth zero points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    /// A (4 points)
    A,
    /// B (3 points)
    B,
    /// C (2 points)
    C,
    /// D (1 point)
    D,
    /// F (0 points)
    F,
    /// Unrecognized grade text
    Other(String),
}

impl Grade {
    /// Base grade points on the UC 4-point scale
    #[must_use]
    pub const fn points(&self) -> u32 {
        match self {
            Self::A => 4,
            Self::B => 3,
            Self::C => 2,
            Self::D => 1,
            Self::F | Self::Other(_) => 0,
        }
    }

    /// Whether this grade is high enough to earn an honors bonus point
    #[must_use]
    pub const fn earns_honors_point(&self) -> bool {
        matches!(self, Self::A | Self::B | Self::C)
    }

    /// Whether the grade text was recognized
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Display text for this grade
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for Grade {
    fn from(raw: &str) -> Self {
        match raw {
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            "D" => Self::D,
            "F" => Self::F,
            _ => Self::Other(raw.to_string()),
        }
    }
}

impl From<String> for Grade {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
