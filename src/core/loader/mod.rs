//! Course snapshot loading
//!
//! Course records live in an external store; this module reads exported
//! snapshots of them from local CSV or JSON files and checks the record shape
//! before anything reaches the calculator.

pub mod csv_parser;
pub mod json;

pub use csv_parser::{parse_courses_csv, parse_courses_str};
pub use json::{parse_courses_json, parse_courses_json_str};

use crate::core::models::Course;
use crate::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::path::{Path, PathBuf};

/// A source of course snapshots
pub trait CourseSource {
    /// Load the full course snapshot
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be read or fails validation
    fn load(&self) -> Result<Vec<Course>, Box<dyn Error>>;
}

/// Course snapshot stored as CSV
#[derive(Debug, Clone)]
pub struct CsvCourseSource {
    path: PathBuf,
}

impl CsvCourseSource {
    /// Create a CSV source for `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CourseSource for CsvCourseSource {
    fn load(&self) -> Result<Vec<Course>, Box<dyn Error>> {
        let courses = parse_courses_csv(&self.path)?;
        validate_snapshot(&courses)?;
        Ok(courses)
    }
}

/// Course snapshot stored as a JSON array of records
#[derive(Debug, Clone)]
pub struct JsonCourseSource {
    path: PathBuf,
}

impl JsonCourseSource {
    /// Create a JSON source for `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CourseSource for JsonCourseSource {
    fn load(&self) -> Result<Vec<Course>, Box<dyn Error>> {
        let courses = parse_courses_json(&self.path)?;
        validate_snapshot(&courses)?;
        Ok(courses)
    }
}

/// Pick a source by file extension: `.json` is JSON, anything else CSV
#[must_use]
pub fn source_for(path: &Path) -> Box<dyn CourseSource> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Box::new(JsonCourseSource::new(path))
    } else {
        Box::new(CsvCourseSource::new(path))
    }
}

/// Load and validate a course snapshot from `path`
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or validated
pub fn load_courses(path: &Path) -> Result<Vec<Course>, Box<dyn Error>> {
    let courses = source_for(path).load()?;
    info!("Loaded {} course(s) from {}", courses.len(), path.display());
    Ok(courses)
}

/// Check the invariants the calculator relies on.
///
/// Ids must be non-empty and unique. Grade, level and term text is allowed to
/// be anything; unrecognized values are only reported as warnings.
///
/// # Errors
/// Returns an error listing every empty or duplicate id
pub fn validate_snapshot(courses: &[Course]) -> Result<(), Box<dyn Error>> {
    let mut seen = HashSet::new();
    let mut problems = Vec::new();

    for (idx, course) in courses.iter().enumerate() {
        if course.id.trim().is_empty() {
            problems.push(format!("course #{} has an empty id", idx + 1));
        } else if !seen.insert(course.id.as_str()) {
            problems.push(format!("duplicate course id '{}'", course.id));
        }

        if !course.grade.is_recognized() {
            warn!(
                "Course '{}' has unrecognized grade '{}'; it counts as 0 points",
                course.id, course.grade
            );
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(format!("Invalid course snapshot: {}", problems.join("; ")).into())
    }
}
