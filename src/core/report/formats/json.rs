//! JSON report generator

use crate::core::gpa::CalculationResult;
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    student: &'a str,
    generator: String,
    gpa_display: String,
    max_honor_points: u32,
    #[serde(flatten)]
    result: &'a CalculationResult,
}

/// JSON report generator
///
/// Emits the raw calculation (unrounded figures) plus the display string for
/// the GPA, so consumers can choose their own formatting.
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            student: ctx.student,
            generator: format!("ucgpa v{}", crate::get_version()),
            gpa_display: ctx.gpa_display(),
            max_honor_points: ctx.result.max_honor_points(),
            result: ctx.result,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
