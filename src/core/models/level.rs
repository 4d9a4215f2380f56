//! Course rigor and school grade level classifications

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rigor classification of a course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CourseLevel {
    /// Regular (unweighted) course
    Regular,
    /// School honors course
    Honors,
    /// Advanced Placement
    Ap,
    /// International Baccalaureate Higher Level
    IbHl,
    /// International Baccalaureate Standard Level
    IbSl,
    /// College course taken in high school
    College,
    /// Unrecognized level text
    Other(String),
}

impl CourseLevel {
    /// Whether this level qualifies for an honors bonus point
    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        matches!(
            self,
            Self::Honors | Self::Ap | Self::IbHl | Self::IbSl | Self::College
        )
    }

    /// Display text for this level
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Regular => "Regular",
            Self::Honors => "Honors",
            Self::Ap => "AP",
            Self::IbHl => "IB HL",
            Self::IbSl => "IB SL",
            Self::College => "College",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for CourseLevel {
    fn from(raw: &str) -> Self {
        match raw {
            "Regular" => Self::Regular,
            "Honors" => Self::Honors,
            "AP" => Self::Ap,
            "IB HL" => Self::IbHl,
            "IB SL" => Self::IbSl,
            "College" => Self::College,
            _ => Self::Other(raw.to_string()),
        }
    }
}

impl From<String> for CourseLevel {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<CourseLevel> for String {
    fn from(level: CourseLevel) -> Self {
        match level {
            CourseLevel::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// School grade level in which a course was taken
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GradeLevel {
    /// 9th Grade
    Ninth,
    /// 10th Grade
    Tenth,
    /// 11th Grade
    Eleventh,
    /// 12th Grade
    Twelfth,
    /// Unrecognized grade level text
    Other(String),
}

impl GradeLevel {
    /// Known grade levels in chronological order
    pub const ORDER: [Self; 4] = [Self::Ninth, Self::Tenth, Self::Eleventh, Self::Twelfth];

    /// Position in [`GradeLevel::ORDER`], `None` for unrecognized text
    ///
    /// `None` sorts before every known level.
    #[must_use]
    pub const fn order(&self) -> Option<usize> {
        match self {
            Self::Ninth => Some(0),
            Self::Tenth => Some(1),
            Self::Eleventh => Some(2),
            Self::Twelfth => Some(3),
            Self::Other(_) => None,
        }
    }

    /// Display text for this grade level
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ninth => "9th Grade",
            Self::Tenth => "10th Grade",
            Self::Eleventh => "11th Grade",
            Self::Twelfth => "12th Grade",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for GradeLevel {
    fn from(raw: &str) -> Self {
        match raw {
            "9th Grade" => Self::Ninth,
            "10th Grade" => Self::Tenth,
            "11th Grade" => Self::Eleventh,
            "12th Grade" => Self::Twelfth,
            _ => Self::Other(raw.to_string()),
        }
    }
}

impl From<String> for GradeLevel {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<GradeLevel> for String {
    fn from(level: GradeLevel) -> Self {
        match level {
            GradeLevel::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_levels() {
        for level in ["Honors", "AP", "IB HL", "IB SL", "College"] {
            assert!(CourseLevel::from(level).is_weighted(), "{level}");
        }
        assert!(!CourseLevel::Regular.is_weighted());
        assert!(!CourseLevel::from("Dual Enrollment").is_weighted());
    }

    #[test]
    fn test_course_level_display() {
        assert_eq!(CourseLevel::IbHl.to_string(), "IB HL");
        assert_eq!(CourseLevel::from("IB SL"), CourseLevel::IbSl);
        assert_eq!(String::from(CourseLevel::Ap), "AP");
    }

    #[test]
    fn test_grade_level_order() {
        let orders: Vec<_> = GradeLevel::ORDER.iter().map(GradeLevel::order).collect();
        assert_eq!(orders, vec![Some(0), Some(1), Some(2), Some(3)]);
        assert_eq!(GradeLevel::from("Freshman").order(), None);
        assert!(GradeLevel::from("Freshman").order() < GradeLevel::Ninth.order());
    }

    #[test]
    fn test_grade_level_parsing() {
        assert_eq!(GradeLevel::from("10th Grade"), GradeLevel::Tenth);
        assert_eq!(
            GradeLevel::from("10th grade"),
            GradeLevel::Other("10th grade".to_string())
        );
    }
}
