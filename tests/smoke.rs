//! Integration smoke tests for `uc_gpa`

use uc_gpa::{calculate_uc_gpa, get_version, Course};

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn single_course_gpa() {
    let course = Course::new("1", "AP Lang", "A", "AP", "11th Grade", "Fall 2023");
    let result = calculate_uc_gpa(&[course]);
    assert_eq!(result.gpa, Some(5.0));
}
