//! Report generation for UC GPA results
//!
//! A report is a read-only projection of a [`CalculationResult`]: the GPA,
//! honors points against the fixed maximum, the eligible course count, and the
//! two categorized course lists. Number formatting happens here; the
//! calculator itself never rounds.

pub mod formats;

use crate::core::gpa::{CalculationResult, MAX_TENTH_GRADE_HONOR_POINTS};
use crate::core::models::Course;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat};

/// Text shown in place of a GPA when no course is eligible
pub const NO_GPA: &str = "N/A";

/// Format a GPA to `precision` decimal places, or [`NO_GPA`]
#[must_use]
pub fn format_gpa(gpa: Option<f64>, precision: usize) -> String {
    gpa.map_or_else(|| NO_GPA.to_string(), |value| format!("{value:.precision$}"))
}

/// One course as it appears in a report table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow<'a> {
    /// Course name
    pub name: &'a str,
    /// Grade level text
    pub grade_level: &'a str,
    /// Term text
    pub term: &'a str,
    /// School year text
    pub school_year: &'a str,
    /// Rigor level text
    pub level: &'a str,
    /// Letter grade text
    pub grade: &'a str,
    /// Base points, or `-` for ineligible courses
    pub points: String,
    /// Whether the course earned an honors point before caps
    pub honors: bool,
}

impl<'a> CourseRow<'a> {
    fn new(course: &'a Course, points: String, honors: bool) -> Self {
        Self {
            name: &course.name,
            grade_level: course.grade_level.as_str(),
            term: course.term.as_str(),
            school_year: &course.school_year,
            level: course.level.as_str(),
            grade: course.grade.as_str(),
            points,
            honors,
        }
    }
}

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Label for the student or snapshot the report describes
    pub student: &'a str,
    /// Calculation being reported
    pub result: &'a CalculationResult,
    /// Decimal places for GPA figures
    pub precision: usize,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(student: &'a str, result: &'a CalculationResult, precision: usize) -> Self {
        Self {
            student,
            result,
            precision,
        }
    }

    /// The UC GPA, formatted
    #[must_use]
    pub fn gpa_display(&self) -> String {
        format_gpa(self.result.gpa, self.precision)
    }

    /// The unweighted GPA, formatted
    #[must_use]
    pub fn unweighted_display(&self) -> String {
        format_gpa(self.result.unweighted_gpa, self.precision)
    }

    /// The uncapped fully weighted GPA, formatted
    #[must_use]
    pub fn fully_weighted_display(&self) -> String {
        format_gpa(self.result.fully_weighted_gpa, self.precision)
    }

    /// Honors points against the maximum, e.g. `"5 / 8"`
    #[must_use]
    pub fn honor_points_display(&self) -> String {
        format!(
            "{} / {}",
            self.result.honor_points,
            self.result.max_honor_points()
        )
    }

    /// 10th-grade honors points against their cap, e.g. `"4 / 4"`
    #[must_use]
    pub fn tenth_grade_display(&self) -> String {
        format!(
            "{} / {MAX_TENTH_GRADE_HONOR_POINTS}",
            self.result.tenth_grade_honor_points
        )
    }

    /// Rows for the eligible course table, in eligible order
    #[must_use]
    pub fn eligible_rows(&self) -> Vec<CourseRow<'a>> {
        self.result
            .eligible_courses
            .iter()
            .zip(&self.result.contributions)
            .map(|(course, contribution)| {
                CourseRow::new(
                    course,
                    contribution.base_points.to_string(),
                    contribution.earns_honors_point,
                )
            })
            .collect()
    }

    /// Rows for the ineligible course table, in input order
    #[must_use]
    pub fn ineligible_rows(&self) -> Vec<CourseRow<'a>> {
        self.result
            .ineligible_courses
            .iter()
            .map(|course| CourseRow::new(course, "-".to_string(), false))
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for a given format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpa::calculate_uc_gpa;

    #[test]
    fn test_format_gpa() {
        assert_eq!(format_gpa(Some(3.456), 2), "3.46");
        assert_eq!(format_gpa(Some(4.0), 2), "4.00");
        assert_eq!(format_gpa(Some(3.9), 0), "4");
        assert_eq!(format_gpa(None, 2), "N/A");
    }

    #[test]
    fn test_context_displays() {
        let courses = vec![
            Course::new("1", "AP Lang", "A", "AP", "11th Grade", "Fall"),
            Course::new("2", "PE", "A", "Regular", "12th Grade", "Fall"),
        ];
        let result = calculate_uc_gpa(&courses);
        let ctx = ReportContext::new("sample", &result, 2);

        assert_eq!(ctx.gpa_display(), "5.00");
        assert_eq!(ctx.unweighted_display(), "4.00");
        assert_eq!(ctx.honor_points_display(), "1 / 8");
        assert_eq!(ctx.tenth_grade_display(), "0 / 4");

        let eligible = ctx.eligible_rows();
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].points, "4");
        assert!(eligible[0].honors);

        let ineligible = ctx.ineligible_rows();
        assert_eq!(ineligible[0].name, "PE");
        assert_eq!(ineligible[0].points, "-");
    }
}
