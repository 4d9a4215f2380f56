//! UC course eligibility window
//!
//! UC counts courses from the summer after 9th grade through the summer after
//! 11th grade. Everything outside that window is reported as ineligible.

use crate::core::models::{Course, GradeLevel};
use std::collections::HashSet;

/// Whether a course falls inside the UC grade-level window.
///
/// This is the union of three sets: summer after 9th grade, all of 10th and
/// 11th grade, and summer after 11th grade. The last set is contained in the
/// second, so a course is counted at most once.
#[must_use]
pub fn is_uc_eligible(course: &Course) -> bool {
    let summer_after_ninth = course.is_summer_after(&GradeLevel::Ninth);
    let regular_window = matches!(
        course.grade_level,
        GradeLevel::Tenth | GradeLevel::Eleventh
    );
    let summer_after_eleventh = course.is_summer_after(&GradeLevel::Eleventh);

    summer_after_ninth || regular_window || summer_after_eleventh
}

/// Whether a course counts toward the 10th-grade honors window
/// (10th grade plus the summer before it).
#[must_use]
pub fn in_tenth_grade_window(course: &Course) -> bool {
    course.grade_level == GradeLevel::Tenth || course.is_summer_after(&GradeLevel::Ninth)
}

/// Stable sort by grade level, then by term season within a grade level.
pub fn sort_chronologically(courses: &mut [Course]) {
    courses.sort_by(|a, b| {
        a.grade_level
            .order()
            .cmp(&b.grade_level.order())
            .then_with(|| a.term.season_order().cmp(&b.term.season_order()))
    });
}

/// Split a course snapshot into `(eligible, ineligible)`.
///
/// Eligible courses come back sorted chronologically. Ineligible courses keep
/// input order and are every course whose id does not appear among the
/// eligible ones, so identity is by id rather than by field equality.
#[must_use]
pub fn partition_courses(courses: &[Course]) -> (Vec<Course>, Vec<Course>) {
    let mut eligible: Vec<Course> = courses
        .iter()
        .filter(|course| is_uc_eligible(course))
        .cloned()
        .collect();
    sort_chronologically(&mut eligible);

    let eligible_ids: HashSet<&str> = eligible.iter().map(|c| c.id.as_str()).collect();
    let ineligible = courses
        .iter()
        .filter(|course| !eligible_ids.contains(course.id.as_str()))
        .cloned()
        .collect();

    (eligible, ineligible)
}
