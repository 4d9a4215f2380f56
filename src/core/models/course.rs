//! Course model

use super::{CourseLevel, Grade, GradeLevel, Term};
use serde::{Deserialize, Serialize};

/// A high school course on the student's transcript
///
/// Field names serialize in camelCase to match the backend record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Opaque unique identifier; course identity
    pub id: String,

    /// Course name (e.g., "AP Chemistry")
    pub name: String,

    /// Letter grade earned
    pub grade: Grade,

    /// Rigor classification (e.g., Honors, AP)
    pub level: CourseLevel,

    /// School grade level the course was taken in
    pub grade_level: GradeLevel,

    /// Term text (e.g., "Fall", "Summer 2023")
    pub term: Term,

    /// School year label (e.g., "2023-2024"); display only
    #[serde(default)]
    pub school_year: String,
}

impl Course {
    /// Create a new course with an empty school year
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `name` - Display name
    /// * `grade` - Letter grade text
    /// * `level` - Rigor classification text
    /// * `grade_level` - Grade level text (e.g., "10th Grade")
    /// * `term` - Term text
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grade: impl Into<Grade>,
        level: impl Into<CourseLevel>,
        grade_level: impl Into<GradeLevel>,
        term: impl Into<Term>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade: grade.into(),
            level: level.into(),
            grade_level: grade_level.into(),
            term: term.into(),
            school_year: String::new(),
        }
    }

    /// Set the school year label
    #[must_use]
    pub fn with_school_year(mut self, school_year: impl Into<String>) -> Self {
        self.school_year = school_year.into();
        self
    }

    /// Whether this course earns an honors bonus point, before any caps
    ///
    /// Requires both a weighted level and a grade of C or better.
    #[must_use]
    pub const fn earns_honors_point(&self) -> bool {
        self.level.is_weighted() && self.grade.earns_honors_point()
    }

    /// Whether the course was taken in a summer session after `grade_level`
    #[must_use]
    pub fn is_summer_after(&self, grade_level: &GradeLevel) -> bool {
        self.grade_level == *grade_level && self.term.is_summer()
    }
}
