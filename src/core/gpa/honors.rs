//! Grade points and capped honors points

use super::eligibility::in_tenth_grade_window;
use crate::core::models::Course;

/// Maximum honors points UC adds to the total
pub const MAX_HONOR_POINTS: u32 = 8;

/// Maximum honors points that may come from the 10th-grade window
pub const MAX_TENTH_GRADE_HONOR_POINTS: u32 = 4;

/// Sum of base grade points across `courses`
#[must_use]
pub fn base_points(courses: &[Course]) -> u32 {
    courses.iter().map(|c| c.grade.points()).sum()
}

/// Honors-point counters accumulated over the eligible set.
///
/// Both counters are raw; caps are applied on read so the uncapped counts
/// remain available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HonorsTally {
    /// Honors-eligible courses in 10th grade or the summer after 9th grade
    pub tenth_grade_count: u32,
    /// All honors-eligible courses
    pub total_count: u32,
}

impl HonorsTally {
    /// Count honors-eligible courses in an already-filtered eligible set
    #[must_use]
    pub fn scan(eligible: &[Course]) -> Self {
        eligible
            .iter()
            .filter(|course| course.earns_honors_point())
            .fold(Self::default(), |mut tally, course| {
                if in_tenth_grade_window(course) {
                    tally.tenth_grade_count += 1;
                }
                tally.total_count += 1;
                tally
            })
    }

    /// Honors points added to the GPA numerator (capped at 8)
    #[must_use]
    pub fn honor_points(&self) -> u32 {
        self.total_count.min(MAX_HONOR_POINTS)
    }

    /// 10th-grade honors points capped at 4.
    ///
    /// Reported alongside the total but not subtracted from it: the two caps
    /// are applied independently.
    #[must_use]
    pub fn tenth_grade_honor_points(&self) -> u32 {
        self.tenth_grade_count.min(MAX_TENTH_GRADE_HONOR_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, grade: &str, level: &str, grade_level: &str) -> Course {
        Course::new(id, id, grade, level, grade_level, "Fall")
    }

    #[test]
    fn test_base_points() {
        let courses = vec![
            course("a", "A", "Regular", "10th Grade"),
            course("b", "B", "AP", "10th Grade"),
            course("c", "P", "Regular", "11th Grade"),
        ];
        assert_eq!(base_points(&courses), 7);
        assert_eq!(base_points(&[]), 0);
    }

    #[test]
    fn test_scan_counts_windows() {
        let courses = vec![
            course("a", "A", "AP", "10th Grade"),
            course("b", "B", "Honors", "11th Grade"),
            course("c", "D", "AP", "10th Grade"),
            course("d", "A", "Regular", "11th Grade"),
            Course::new("e", "e", "C", "College", "9th Grade", "Summer 2022"),
        ];
        let tally = HonorsTally::scan(&courses);
        assert_eq!(tally.tenth_grade_count, 2);
        assert_eq!(tally.total_count, 3);
        assert_eq!(tally.honor_points(), 3);
    }

    #[test]
    fn test_caps_are_independent() {
        let mut courses: Vec<Course> = (0..6)
            .map(|i| course(&format!("t{i}"), "A", "AP", "10th Grade"))
            .collect();
        courses.extend((0..5).map(|i| course(&format!("e{i}"), "B", "IB HL", "11th Grade")));

        let tally = HonorsTally::scan(&courses);
        assert_eq!(tally.tenth_grade_count, 6);
        assert_eq!(tally.tenth_grade_honor_points(), 4);
        assert_eq!(tally.total_count, 11);
        assert_eq!(tally.honor_points(), 8);
    }

    #[test]
    fn test_six_tenth_grade_honors_still_count_toward_total() {
        let courses: Vec<Course> = (0..6)
            .map(|i| course(&format!("t{i}"), "A", "Honors", "10th Grade"))
            .collect();
        let tally = HonorsTally::scan(&courses);
        assert_eq!(tally.tenth_grade_honor_points(), 4);
        assert_eq!(tally.honor_points(), 6);
    }
}
