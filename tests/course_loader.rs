//! Integration tests for loading course snapshots from disk

use std::fs;
use tempfile::TempDir;
use uc_gpa::calculate_uc_gpa;
use uc_gpa::core::loader::{load_courses, source_for, CourseSource};
use uc_gpa::core::models::{CourseLevel, Grade};

const SAMPLE_CSV: &str = "samples/courses/sample_transcript.csv";
const SAMPLE_JSON: &str = "samples/courses/sample_transcript.json";

#[test]
fn test_sample_csv_loads() {
    let courses = load_courses(SAMPLE_CSV.as_ref()).expect("load sample csv");

    assert_eq!(courses.len(), 12);
    assert_eq!(courses[8].name, "Precalculus, Honors");
    assert_eq!(courses[8].level, CourseLevel::Honors);
    assert_eq!(courses[9].grade, Grade::D);
    assert_eq!(courses[10].school_year, "2023-2024");
}

#[test]
fn test_sample_csv_gpa() {
    let courses = load_courses(SAMPLE_CSV.as_ref()).expect("load sample csv");
    let result = calculate_uc_gpa(&courses);

    let ids: Vec<&str> = result.eligible_courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["c03", "c04", "c05", "c06", "c07", "c08", "c09", "c10", "c11"]
    );

    let ineligible: Vec<&str> = result
        .ineligible_courses
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ineligible, vec!["c01", "c02", "c12"]);

    assert_eq!(result.honor_points, 5);
    assert_eq!(result.tenth_grade_honor_points, 2);
    assert_eq!(result.total_grade_points, 34);
    let gpa = result.gpa.expect("gpa");
    assert!((gpa - 34.0 / 9.0).abs() < 1e-12);
}

#[test]
fn test_csv_and_json_samples_agree() {
    let from_csv = load_courses(SAMPLE_CSV.as_ref()).expect("load csv");
    let from_json = load_courses(SAMPLE_JSON.as_ref()).expect("load json");

    assert_eq!(from_csv, from_json);
    assert_eq!(calculate_uc_gpa(&from_csv), calculate_uc_gpa(&from_json));
}

#[test]
fn test_source_chosen_by_extension() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("snapshot.JSON");
    fs::write(
        &path,
        r#"[{"id":"1","name":"Chem","grade":"A","level":"Honors","gradeLevel":"10th Grade","term":"Fall"}]"#,
    )
    .expect("write json");

    let courses = source_for(&path).load().expect("load json by extension");
    assert_eq!(courses.len(), 1);
    assert!(courses[0].school_year.is_empty());
}

#[test]
fn test_duplicate_ids_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("dupes.csv");
    fs::write(
        &path,
        "ID,Course Name,Grade,Level,Grade Level,Term\n\
         a,One,A,Regular,10th Grade,Fall\n\
         a,Two,B,Regular,10th Grade,Spring\n",
    )
    .expect("write csv");

    let err = load_courses(&path).expect_err("duplicate ids must fail");
    assert!(err.to_string().contains("duplicate course id 'a'"));
}

#[test]
fn test_missing_column_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("short.csv");
    fs::write(&path, "ID,Course Name,Grade\na,One,A\n").expect("write csv");

    let err = load_courses(&path).expect_err("missing columns must fail");
    assert!(err.to_string().contains("Grade Level"));
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(load_courses("samples/courses/does_not_exist.csv".as_ref()).is_err());
}
