//! JSON course snapshots in the backend record shape

use crate::core::models::Course;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a JSON array of course records from a file
///
/// # Errors
/// Returns an error if the file cannot be read or is not a JSON array of courses
pub fn parse_courses_json<P: AsRef<Path>>(path: P) -> Result<Vec<Course>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_courses_json_str(&content)
}

/// Parse a JSON array of course records
///
/// Records use camelCase keys (`gradeLevel`, `schoolYear`); `schoolYear` may be
/// omitted.
///
/// # Errors
/// Returns an error if the text is not a JSON array of course records
pub fn parse_courses_json_str(content: &str) -> Result<Vec<Course>, Box<dyn Error>> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseLevel, Grade, GradeLevel};

    #[test]
    fn test_parse_backend_records() {
        let json = r#"[
            {"id": "a1", "name": "AP US History", "grade": "A", "level": "AP",
             "gradeLevel": "11th Grade", "term": "Fall", "schoolYear": "2023-2024"},
            {"id": "a2", "name": "Ceramics", "grade": "Pass", "level": "Elective",
             "gradeLevel": "10th Grade", "term": "Spring"}
        ]"#;
        let courses = parse_courses_json_str(json).expect("parse json");

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].level, CourseLevel::Ap);
        assert_eq!(courses[0].grade_level, GradeLevel::Eleventh);
        assert_eq!(courses[1].grade, Grade::Other("Pass".to_string()));
        assert_eq!(courses[1].level, CourseLevel::Other("Elective".to_string()));
        assert!(courses[1].school_year.is_empty());
    }

    #[test]
    fn test_missing_required_key() {
        let json = r#"[{"id": "a1", "name": "Math", "grade": "A"}]"#;
        assert!(parse_courses_json_str(json).is_err());
    }
}
