//! Export a GPA calculation as a CSV breakdown

use crate::core::gpa::CalculationResult;
use crate::core::models::Course;
use crate::core::report::format_gpa;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Trait for exporting a calculation in different formats
pub trait BreakdownExporter {
    /// Export `result` to `output_path`
    ///
    /// # Errors
    /// Returns an error if export fails
    fn export(&self, result: &CalculationResult, output_path: &Path) -> Result<(), Box<dyn Error>>;
}

/// CSV exporter: a summary block, a blank line, then one row per course
#[derive(Debug, Clone, Copy)]
pub struct CsvExporter {
    /// Decimal places for GPA figures in the summary block
    pub precision: usize,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            precision: crate::config::DEFAULT_PRECISION,
        }
    }
}

impl BreakdownExporter for CsvExporter {
    fn export(&self, result: &CalculationResult, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let mut out = BufWriter::new(File::create(output_path)?);
        write_breakdown(&mut out, result, self.precision)?;
        out.flush()?;
        Ok(())
    }
}

/// Export using the default CSV exporter
///
/// # Errors
/// Returns an error if file writing fails
pub fn export_breakdown_csv<P: AsRef<Path>>(
    result: &CalculationResult,
    output_path: P,
) -> Result<(), Box<dyn Error>> {
    CsvExporter::default().export(result, output_path.as_ref())
}

/// Write the CSV breakdown to any writer
///
/// # Errors
/// Returns an error if writing fails
pub fn write_breakdown<W: Write>(
    out: &mut W,
    result: &CalculationResult,
    precision: usize,
) -> std::io::Result<()> {
    writeln!(out, "UC GPA,{}", format_gpa(result.gpa, precision))?;
    writeln!(
        out,
        "Unweighted GPA,{}",
        format_gpa(result.unweighted_gpa, precision)
    )?;
    writeln!(
        out,
        "Fully Weighted GPA,{}",
        format_gpa(result.fully_weighted_gpa, precision)
    )?;
    writeln!(
        out,
        "Honor Points,{},{}",
        result.honor_points,
        result.max_honor_points()
    )?;
    writeln!(
        out,
        "10th Grade Honor Points,{}",
        result.tenth_grade_honor_points
    )?;
    writeln!(out, "Total Grade Points,{}", result.total_grade_points)?;
    writeln!(out, "Total Courses,{}", result.total_courses)?;
    writeln!(out)?;

    writeln!(
        out,
        "ID,Course Name,Grade,Level,Grade Level,Term,School Year,Eligible,Base Points,Honors Point,10th Grade Window"
    )?;

    for (course, contribution) in result.eligible_courses.iter().zip(&result.contributions) {
        write_course(out, course)?;
        writeln!(
            out,
            ",true,{},{},{}",
            contribution.base_points,
            contribution.earns_honors_point,
            contribution.in_tenth_grade_window
        )?;
    }

    for course in &result.ineligible_courses {
        write_course(out, course)?;
        writeln!(out, ",false,,,")?;
    }

    Ok(())
}

/// Write the identifying columns of a course, without a trailing newline
fn write_course<W: Write>(out: &mut W, course: &Course) -> std::io::Result<()> {
    write!(
        out,
        "{},{},{},{},{},{},{}",
        quote(&course.id),
        quote(&course.name),
        quote(course.grade.as_str()),
        quote(course.level.as_str()),
        quote(course.grade_level.as_str()),
        quote(course.term.as_str()),
        quote(&course.school_year)
    )
}

/// Quote a CSV field when it contains a delimiter, quote or newline
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpa::calculate_uc_gpa;
    use crate::core::loader::parse_courses_str;

    fn sample() -> CalculationResult {
        calculate_uc_gpa(&[
            Course::new("c1", "Chemistry, Honors", "A", "Honors", "10th Grade", "Fall"),
            Course::new("c2", "PE", "B", "Regular", "12th Grade", "Spring"),
        ])
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("a,b"), "\"a,b\"");
        assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_write_breakdown() {
        let mut buf = Vec::new();
        write_breakdown(&mut buf, &sample(), 2).expect("write breakdown");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.starts_with("UC GPA,5.00\n"));
        assert!(text.contains("Honor Points,1,8\n"));
        assert!(text.contains("c1,\"Chemistry, Honors\",A,Honors,10th Grade,Fall,,true,4,true,true\n"));
        assert!(text.contains("c2,PE,B,Regular,12th Grade,Spring,,false,,,\n"));
    }

    #[test]
    fn test_course_rows_parse_back() {
        let mut buf = Vec::new();
        write_breakdown(&mut buf, &sample(), 2).expect("write breakdown");
        let text = String::from_utf8(buf).expect("utf8");

        let table = text.split("\n\n").nth(1).expect("course table");
        let courses = parse_courses_str(table).expect("parse exported rows");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].name, "Chemistry, Honors");
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("breakdown.csv");
        export_breakdown_csv(&sample(), &path).expect("export");
        let text = std::fs::read_to_string(&path).expect("read export");
        assert!(text.contains("Total Courses,1"));
    }
}
