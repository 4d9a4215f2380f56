//! Report command handler
//!
//! Renders a UC GPA report (Markdown, HTML or JSON) for one course snapshot.

use super::{file_stem_or, resolve_input};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uc_gpa::config::Config;
use uc_gpa::core::gpa::{calculate_uc_gpa, CalculationResult};
use uc_gpa::core::loader::load_courses;
use uc_gpa::core::report::{reporter_for, ReportContext, ReportFormat};
use uc_gpa::{error, info};

/// Run the report command. Returns `false` if the report was not written.
pub fn run(
    input_file: &Path,
    output_file: Option<&Path>,
    format: Option<&str>,
    student: Option<&str>,
    config: &Config,
) -> bool {
    match generate_report(input_file, output_file, format, student, config) {
        Ok(()) => true,
        Err(err) => {
            error!(
                "Report generation failed for {}: {err}",
                input_file.display()
            );
            eprintln!("{err}");
            false
        }
    }
}

/// Resolve the report format: an explicit value first, then `report.format`
/// from config, then HTML.
///
/// # Errors
/// Returns an error if the explicit value is not a known format
pub fn resolve_format(explicit: Option<&str>, config: &Config) -> Result<ReportFormat, String> {
    if let Some(value) = explicit {
        return ReportFormat::from_str(value)
            .map_err(|e| format!("✗ {e}. Use: markdown, html, or json"));
    }
    Ok(ReportFormat::from_str(&config.report.format).unwrap_or(ReportFormat::Html))
}

/// Write a report for an already computed result into `output_dir`, named
/// `{stem}_report.{ext}` after the input file.
///
/// # Errors
/// Returns an error if rendering or writing fails
pub fn write_into_dir(
    input_file: &Path,
    result: &CalculationResult,
    student: &str,
    format: ReportFormat,
    output_dir: &Path,
    precision: usize,
) -> Result<PathBuf, String> {
    let stem = file_stem_or(input_file, "courses");
    let output_path = output_dir.join(format!("{stem}_report.{}", format.extension()));
    write_report(result, student, format, &output_path, precision)?;
    Ok(output_path)
}

fn write_report(
    result: &CalculationResult,
    student: &str,
    format: ReportFormat,
    output_path: &Path,
    precision: usize,
) -> Result<(), String> {
    let ctx = ReportContext::new(student, result, precision);
    reporter_for(format)
        .generate(&ctx, output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;
    info!("Report exported to: {}", output_path.display());
    Ok(())
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format: Option<&str>,
    student: Option<&str>,
    config: &Config,
) -> Result<(), String> {
    let format = resolve_format(format, config)?;
    let input_path = resolve_input(input_file, config);

    let courses = load_courses(&input_path)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_path.display()))?;
    let result = calculate_uc_gpa(&courses);

    let stem = file_stem_or(&input_path, "courses");
    let student = student.unwrap_or(&stem);

    let output_path = if let Some(output) = output_file {
        write_report(&result, student, format, output, config.precision())?;
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;
        write_into_dir(
            &input_path,
            &result,
            student,
            format,
            &reports_dir,
            config.precision(),
        )?
    };

    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}
