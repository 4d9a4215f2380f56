//! HTML report generator
//!
//! Produces a self-contained HTML page (inline CSS, no scripts) from an
//! `askama` template. Course text is HTML-escaped by the template engine.

use crate::core::report::{CourseRow, ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReportTemplate<'a> {
    student: &'a str,
    gpa: String,
    unweighted_gpa: String,
    fully_weighted_gpa: String,
    honor_points: String,
    tenth_grade_honor_points: String,
    total_grade_points: u32,
    total_courses: usize,
    eligible: Vec<CourseRow<'a>>,
    ineligible: Vec<CourseRow<'a>>,
    version: &'static str,
}

impl<'a> HtmlReportTemplate<'a> {
    fn from_context(ctx: &ReportContext<'a>) -> Self {
        Self {
            student: ctx.student,
            gpa: ctx.gpa_display(),
            unweighted_gpa: ctx.unweighted_display(),
            fully_weighted_gpa: ctx.fully_weighted_display(),
            honor_points: ctx.honor_points_display(),
            tenth_grade_honor_points: ctx.tenth_grade_display(),
            total_grade_points: ctx.result.total_grade_points,
            total_courses: ctx.result.total_courses,
            eligible: ctx.eligible_rows(),
            ineligible: ctx.ineligible_rows(),
            version: crate::get_version(),
        }
    }
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(HtmlReportTemplate::from_context(ctx).render()?)
    }
}
