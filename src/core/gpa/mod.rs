//! UC GPA calculation
//!
//! [`calculate_uc_gpa`] is a pure function over a course snapshot. It filters
//! the snapshot to the UC eligibility window, sums base grade points, adds
//! capped honors points and divides by the number of eligible courses.
//! Nothing is cached between calls.

pub mod eligibility;
pub mod honors;

pub use eligibility::{in_tenth_grade_window, is_uc_eligible, partition_courses};
pub use honors::{base_points, HonorsTally, MAX_HONOR_POINTS, MAX_TENTH_GRADE_HONOR_POINTS};

use crate::core::models::Course;
use serde::Serialize;

/// How a single eligible course feeds into the totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseContribution {
    /// Id of the contributing course
    pub course_id: String,
    /// Base grade points from the letter grade
    pub base_points: u32,
    /// Whether the course earns an honors point before caps
    pub earns_honors_point: bool,
    /// Whether the course falls in the 10th-grade honors window
    pub in_tenth_grade_window: bool,
}

impl CourseContribution {
    fn from_course(course: &Course) -> Self {
        Self {
            course_id: course.id.clone(),
            base_points: course.grade.points(),
            earns_honors_point: course.earns_honors_point(),
            in_tenth_grade_window: in_tenth_grade_window(course),
        }
    }
}

/// Output of a UC GPA calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Weighted and capped GPA, `None` when no course is eligible. Never rounded.
    pub gpa: Option<f64>,
    /// Eligible courses sorted by grade level, then term
    pub eligible_courses: Vec<Course>,
    /// Courses outside the eligibility window, in input order
    pub ineligible_courses: Vec<Course>,
    /// Honors points added to the total, capped at [`MAX_HONOR_POINTS`]
    pub honor_points: u32,
    /// 10th-grade window honors points, capped at [`MAX_TENTH_GRADE_HONOR_POINTS`]; informational
    pub tenth_grade_honor_points: u32,
    /// Base grade points plus `honor_points`
    pub total_grade_points: u32,
    /// Number of eligible courses (the GPA divisor)
    pub total_courses: usize,
    /// Base grade points only, divided by `total_courses`
    pub unweighted_gpa: Option<f64>,
    /// Base grade points plus every earned honors point, without caps
    pub fully_weighted_gpa: Option<f64>,
    /// Per-course breakdown in eligible order
    pub contributions: Vec<CourseContribution>,
}

impl CalculationResult {
    /// Result for a snapshot with no eligible courses
    #[must_use]
    pub fn empty() -> Self {
        Self {
            gpa: None,
            eligible_courses: Vec::new(),
            ineligible_courses: Vec::new(),
            honor_points: 0,
            tenth_grade_honor_points: 0,
            total_grade_points: 0,
            total_courses: 0,
            unweighted_gpa: None,
            fully_weighted_gpa: None,
            contributions: Vec::new(),
        }
    }

    /// Fixed ceiling for [`honor_points`](Self::honor_points)
    #[must_use]
    pub const fn max_honor_points(&self) -> u32 {
        MAX_HONOR_POINTS
    }

    /// Number of eligible courses that earned an honors point before caps
    #[must_use]
    pub fn honors_courses(&self) -> usize {
        self.contributions
            .iter()
            .filter(|c| c.earns_honors_point)
            .count()
    }
}

impl Default for CalculationResult {
    fn default() -> Self {
        Self::empty()
    }
}

#[allow(clippy::cast_precision_loss)]
fn average(points: u32, courses: usize) -> Option<f64> {
    (courses > 0).then(|| f64::from(points) / courses as f64)
}

/// Compute the UC GPA for a course snapshot.
///
/// Never fails: unrecognized grades are worth zero points, unrecognized levels
/// never earn honors points, and unrecognized grade levels are ineligible.
#[must_use]
pub fn calculate_uc_gpa(courses: &[Course]) -> CalculationResult {
    let (eligible_courses, ineligible_courses) = partition_courses(courses);
    let total_courses = eligible_courses.len();

    let base = base_points(&eligible_courses);
    let tally = HonorsTally::scan(&eligible_courses);
    let honor_points = tally.honor_points();
    let total_grade_points = base + honor_points;

    let contributions = eligible_courses
        .iter()
        .map(CourseContribution::from_course)
        .collect();

    CalculationResult {
        gpa: average(total_grade_points, total_courses),
        unweighted_gpa: average(base, total_courses),
        fully_weighted_gpa: average(base + tally.total_count, total_courses),
        eligible_courses,
        ineligible_courses,
        honor_points,
        tenth_grade_honor_points: tally.tenth_grade_honor_points(),
        total_grade_points,
        total_courses,
        contributions,
    }
}
