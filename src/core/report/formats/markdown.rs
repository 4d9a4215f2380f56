//! Markdown report generator
//!
//! Renders GPA reports as Markdown tables that display well on GitHub and in
//! most editors.

use crate::core::report::{CourseRow, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(ctx: &ReportContext) -> String {
        let result = ctx.result;

        [
            ("{{student}}", ctx.student.to_string()),
            ("{{gpa}}", ctx.gpa_display()),
            ("{{unweighted_gpa}}", ctx.unweighted_display()),
            ("{{fully_weighted_gpa}}", ctx.fully_weighted_display()),
            ("{{honor_points}}", ctx.honor_points_display()),
            ("{{tenth_grade_honor_points}}", ctx.tenth_grade_display()),
            ("{{total_grade_points}}", result.total_grade_points.to_string()),
            ("{{total_courses}}", result.total_courses.to_string()),
            (
                "{{eligible_courses}}",
                Self::course_table(&ctx.eligible_rows(), "_No eligible courses._"),
            ),
            (
                "{{ineligible_courses}}",
                Self::course_table(&ctx.ineligible_rows(), "_Every course counts._"),
            ),
            ("{{version}}", crate::get_version().to_string()),
        ]
        .into_iter()
        .fold(MARKDOWN_TEMPLATE.to_string(), |output, (placeholder, value)| {
            output.replace(placeholder, &value)
        })
    }

    /// Build a course table, or `empty_note` when there are no rows
    fn course_table(rows: &[CourseRow], empty_note: &str) -> String {
        if rows.is_empty() {
            return empty_note.to_string();
        }

        let mut table = String::new();
        table.push_str("| Grade Level | Term | Course | Level | Grade | Points | Honors |\n");
        table.push_str("|---|---|---|---|---|---|---|\n");

        for row in rows {
            let honors = if row.honors { "+1" } else { "" };
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} | {} | {honors} |",
                row.grade_level,
                row.term,
                escape_cell(row.name),
                row.level,
                row.grade,
                row.points
            );
        }

        table
    }
}

/// Escape characters that would break a Markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(ctx))
    }
}
