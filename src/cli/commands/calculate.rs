//! Calculate command handler
//!
//! Loads each snapshot, prints its UC GPA summary, writes the CSV breakdown
//! and optionally a report.

use super::{file_stem_or, resolve_input, report};
use std::path::{Path, PathBuf};
use uc_gpa::config::Config;
use uc_gpa::core::export::export_breakdown_csv;
use uc_gpa::core::gpa::{calculate_uc_gpa, CalculationResult};
use uc_gpa::core::loader::load_courses;
use uc_gpa::core::report::{format_gpa, ReportFormat};
use uc_gpa::{debug, error, info, verbose};

/// Run the calculate command for one or more input files.
///
/// `output_files` must match `input_files` 1:1 when given. Returns `false`
/// if any file failed.
pub fn run(
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    report_format: Option<&str>,
    no_csv: bool,
    config: &Config,
    verbose: bool,
) -> bool {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return false;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return false;
    }

    let format = match report_format
        .map(|f| report::resolve_format(Some(f), config))
        .transpose()
    {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{e}");
            return false;
        }
    };

    let mut all_ok = true;
    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) = calculate_single(input_file, output_file, no_csv, format, config, verbose)
        {
            error!("Calculation failed for {}: {err}", input_file.display());
            eprintln!("{err}");
            all_ok = false;
        }
    }
    all_ok
}

fn calculate_single(
    input_file: &Path,
    output_file: Option<&Path>,
    no_csv: bool,
    format: Option<ReportFormat>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let input_path = resolve_input(input_file, config);
    let courses = load_courses(&input_path)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_path.display()))?;

    if verbose {
        println!(
            "✓ Loaded {} course(s) from: {}",
            courses.len(),
            input_path.display()
        );
    }

    let result = calculate_uc_gpa(&courses);
    debug!(
        "UC GPA for {}: {} eligible, {} ineligible, grade points={}, honors={}/{} (10th grade {})",
        input_path.display(),
        result.total_courses,
        result.ineligible_courses.len(),
        result.total_grade_points,
        result.honor_points,
        result.honors_courses(),
        result.tenth_grade_honor_points
    );
    let stem = file_stem_or(&input_path, "courses");
    print_summary(&stem, &result, config.precision());

    if !no_csv {
        let csv_path = match output_file {
            Some(path) => path.to_path_buf(),
            None => default_export_path(&stem, config)?,
        };
        export_breakdown_csv(&result, &csv_path)
            .map_err(|e| format!("✗ Failed to export {}: {e}", csv_path.display()))?;
        println!("✓ Breakdown exported: {}", csv_path.display());
        info!("Breakdown exported to: {}", csv_path.display());
    }

    if let Some(format) = format {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;
        let report_path = report::write_into_dir(
            &input_path,
            &result,
            &stem,
            format,
            &reports_dir,
            config.precision(),
        )?;
        println!("✓ Report generated: {}", report_path.display());
    }

    Ok(())
}

/// `{exports_dir}/{stem}_uc_gpa.csv`, creating the directory if needed
fn default_export_path(stem: &str, config: &Config) -> Result<PathBuf, String> {
    let exports_dir = PathBuf::from(&config.paths.exports_dir);
    std::fs::create_dir_all(&exports_dir).map_err(|e| {
        format!(
            "✗ Failed to create exports directory {}: {e}",
            exports_dir.display()
        )
    })?;
    Ok(exports_dir.join(format!("{stem}_uc_gpa.csv")))
}

fn print_summary(label: &str, result: &CalculationResult, precision: usize) {
    println!("\n=== {label} ===");
    println!("UC GPA: {}", format_gpa(result.gpa, precision));
    println!(
        "Eligible Courses: {} ({} ineligible)",
        result.total_courses,
        result.ineligible_courses.len()
    );
    println!(
        "Honor Points: {} / {}",
        result.honor_points,
        result.max_honor_points()
    );
    println!(
        "10th Grade Honor Points: {}",
        result.tenth_grade_honor_points
    );
    println!("Total Grade Points: {}", result.total_grade_points);

    verbose!(
        "Unweighted GPA: {}",
        format_gpa(result.unweighted_gpa, precision)
    );
    verbose!(
        "Fully Weighted GPA: {}",
        format_gpa(result.fully_weighted_gpa, precision)
    );
    for course in &result.ineligible_courses {
        verbose!("  excluded: {} ({})", course.name, course.term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::from_defaults();
        config.paths.exports_dir = dir.join("exports").to_string_lossy().to_string();
        config.paths.reports_dir = dir.join("reports").to_string_lossy().to_string();
        config.paths.courses_dir = String::new();
        config
    }

    fn write_snapshot(dir: &Path) -> PathBuf {
        let path = dir.join("jamie.csv");
        std::fs::write(
            &path,
            "ID,Course Name,Grade,Level,Grade Level,Term\n\
             1,English 10,A,Regular,10th Grade,Fall\n\
             2,AP Biology,B,AP,11th Grade,Spring\n\
             3,Algebra 1,A,Regular,9th Grade,Fall\n",
        )
        .expect("write snapshot");
        path
    }

    #[test]
    fn test_run_writes_csv_and_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_in(dir.path());
        let input = write_snapshot(dir.path());

        assert!(run(&[input], &[], Some("json"), false, &config, false));
        assert!(dir.path().join("exports/jamie_uc_gpa.csv").exists());
        assert!(dir.path().join("reports/jamie_report.json").exists());
    }

    #[test]
    fn test_run_honors_explicit_output_and_no_csv() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_in(dir.path());
        let input = write_snapshot(dir.path());
        let out = dir.path().join("custom.csv");

        assert!(run(&[input.clone()], &[out.clone()], None, false, &config, false));
        assert!(out.exists());

        assert!(run(&[input], &[], None, true, &config, false));
        assert!(!dir.path().join("exports").exists());
    }

    #[test]
    fn test_run_rejects_mismatched_outputs() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_in(dir.path());
        let input = write_snapshot(dir.path());

        assert!(!run(
            &[input],
            &[PathBuf::from("a.csv"), PathBuf::from("b.csv")],
            None,
            false,
            &config,
            false
        ));
    }

    #[test]
    fn test_run_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = config_in(dir.path());
        assert!(!run(
            &[dir.path().join("missing.csv")],
            &[],
            None,
            true,
            &config,
            false
        ));
    }
}
