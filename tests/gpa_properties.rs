//! Behavioral properties of the UC GPA calculator

use uc_gpa::core::models::GradeLevel;
use uc_gpa::{calculate_uc_gpa, Course};

fn course(id: &str, grade: &str, level: &str, grade_level: &str, term: &str) -> Course {
    Course::new(id, format!("Course {id}"), grade, level, grade_level, term)
}

fn eligible_ids(courses: &[Course]) -> Vec<String> {
    calculate_uc_gpa(courses)
        .eligible_courses
        .into_iter()
        .map(|c| c.id)
        .collect()
}

#[test]
fn twelfth_grade_is_never_eligible() {
    let courses: Vec<Course> = ["Fall", "Spring", "Summer", "Summer 2025", "Winter", ""]
        .iter()
        .enumerate()
        .map(|(i, term)| course(&format!("s{i}"), "A", "AP", "12th Grade", term))
        .collect();

    let result = calculate_uc_gpa(&courses);
    assert!(result.eligible_courses.is_empty());
    assert_eq!(result.ineligible_courses.len(), courses.len());
    assert!(result
        .ineligible_courses
        .iter()
        .all(|c| c.grade_level == GradeLevel::Twelfth));
}

#[test]
fn ninth_grade_needs_a_summer_term() {
    let courses = vec![
        course("summer", "A", "Regular", "9th Grade", "Summer 2022"),
        course("fall", "A", "Regular", "9th Grade", "Fall 2022"),
        course("lower", "A", "Regular", "9th Grade", "summer session"),
        course("spring", "A", "Regular", "9th Grade", "Spring 2022"),
    ];

    assert_eq!(eligible_ids(&courses), vec!["lower", "summer"]);
}

#[test]
fn eleventh_grade_is_eligible_in_every_term() {
    let courses = vec![
        course("f", "B", "Regular", "11th Grade", "Fall"),
        course("s", "B", "Regular", "11th Grade", "Spring"),
        course("u", "B", "Regular", "11th Grade", "Summer"),
    ];

    let result = calculate_uc_gpa(&courses);
    assert_eq!(result.total_courses, 3);
    assert!(result.ineligible_courses.is_empty());
}

#[test]
fn honor_points_cap_at_eight() {
    let courses: Vec<Course> = (0..10)
        .map(|i| {
            let grade_level = if i % 2 == 0 { "10th Grade" } else { "11th Grade" };
            course(&format!("ap{i}"), "A", "AP", grade_level, "Fall")
        })
        .collect();

    let result = calculate_uc_gpa(&courses);
    assert_eq!(result.total_courses, 10);
    assert_eq!(result.honor_points, 8);
    assert_eq!(result.total_grade_points, 40 + 8);
}

#[test]
fn d_in_ap_earns_no_bonus() {
    let result = calculate_uc_gpa(&[course("d", "D", "AP", "11th Grade", "Fall")]);

    assert_eq!(result.honor_points, 0);
    assert_eq!(result.total_grade_points, 1);
    assert_eq!(result.gpa, Some(1.0));
}

#[test]
fn empty_snapshot_has_no_gpa() {
    let result = calculate_uc_gpa(&[]);

    assert_eq!(result.gpa, None);
    assert_eq!(result.total_courses, 0);
    assert_eq!(result.honor_points, 0);
    assert_eq!(result.total_grade_points, 0);
    assert!(result.eligible_courses.is_empty());
    assert!(result.ineligible_courses.is_empty());
}

#[test]
fn gpa_is_total_points_over_eligible_count() {
    let courses = vec![
        course("a", "A", "Regular", "10th Grade", "Fall"),
        course("b", "B", "AP", "10th Grade", "Spring"),
    ];

    let result = calculate_uc_gpa(&courses);
    assert_eq!(result.total_grade_points, 8);
    assert_eq!(result.total_courses, 2);
    assert_eq!(result.gpa, Some(4.0));
}

#[test]
fn earlier_grade_level_sorts_first() {
    let courses = vec![
        course("junior", "A", "Regular", "11th Grade", "Fall"),
        course("sophomore", "A", "Regular", "10th Grade", "Spring"),
    ];

    assert_eq!(eligible_ids(&courses), vec!["sophomore", "junior"]);
}

#[test]
fn repeated_calculation_is_identical() {
    let courses = vec![
        course("1", "A", "Honors", "10th Grade", "Fall"),
        course("2", "C", "IB SL", "11th Grade", "Spring"),
        course("3", "Pass", "Regular", "11th Grade", "Summer"),
        course("4", "B", "College", "9th Grade", "Summer"),
        course("5", "A", "AP", "12th Grade", "Fall"),
    ];

    let first = calculate_uc_gpa(&courses);
    let second = calculate_uc_gpa(&courses);
    assert_eq!(first, second);
    assert_eq!(
        first.gpa.map(f64::to_bits),
        second.gpa.map(f64::to_bits)
    );
}

#[test]
fn same_fields_different_ids_are_distinct() {
    let courses = vec![
        course("x1", "A", "Regular", "12th Grade", "Fall"),
        course("x2", "A", "Regular", "12th Grade", "Fall"),
    ];

    let result = calculate_uc_gpa(&courses);
    assert_eq!(result.ineligible_courses.len(), 2);
}

#[test]
fn caps_are_applied_independently() {
    // Six 10th-grade honors courses: the 10th-grade figure caps at 4 but the
    // total still counts all six.
    let courses: Vec<Course> = (0..6)
        .map(|i| course(&format!("h{i}"), "B", "Honors", "10th Grade", "Fall"))
        .collect();

    let result = calculate_uc_gpa(&courses);
    assert_eq!(result.tenth_grade_honor_points, 4);
    assert_eq!(result.honor_points, 6);
    assert_eq!(result.gpa, Some(4.0));
}
