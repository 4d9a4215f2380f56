//! CSV parser for course snapshots
//!
//! Expected layout: an optional preamble of `#` comment lines, then a header
//! row naming the columns, then one course per row. Column order is free.
//!
//! ```text
//! # Jordan's transcript
//! ID,Course Name,Grade,Level,Grade Level,Term,School Year
//! c1,English 10,A,Regular,10th Grade,Fall,2022-2023
//! c2,"AP Chemistry, Lab",B,AP,11th Grade,Spring,2023-2024
//! ```

use crate::core::models::Course;
use std::error::Error;
use std::fs;
use std::path::Path;

const ID: &str = "ID";
const NAME: &str = "Course Name";
const GRADE: &str = "Grade";
const LEVEL: &str = "Level";
const GRADE_LEVEL: &str = "Grade Level";
const TERM: &str = "Term";
const SCHOOL_YEAR: &str = "School Year";

/// Columns that must be present in the header
const REQUIRED_COLUMNS: [&str; 6] = [ID, NAME, GRADE, LEVEL, GRADE_LEVEL, TERM];

/// Column positions resolved from the header row
#[derive(Debug, Clone)]
struct Columns {
    headers: Vec<String>,
}

impl Columns {
    fn from_header(line: &str) -> Result<Self, Box<dyn Error>> {
        let headers = split_csv_line(line);
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !headers.iter().any(|h| h.eq_ignore_ascii_case(name)))
            .collect();

        if !missing.is_empty() {
            return Err(format!("Missing column(s) in header: {}", missing.join(", ")).into());
        }

        Ok(Self { headers })
    }

    fn get<'a>(&self, fields: &'a [String], header_name: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(header_name))
            .and_then(|idx| fields.get(idx))
            .map(String::as_str)
    }

    fn field<'a>(&self, fields: &'a [String], header_name: &str) -> &'a str {
        self.get(fields, header_name).unwrap_or_default()
    }
}

/// Parse a course snapshot CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or its contents cannot be parsed
pub fn parse_courses_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Course>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_courses_str(&content)
}

/// Parse course snapshot CSV text
///
/// Grade, level and term values are taken verbatim; only the row shape and
/// the presence of an id are checked here.
///
/// # Errors
/// Returns an error if no header is found or a row has an empty id
pub fn parse_courses_str(content: &str) -> Result<Vec<Course>, Box<dyn Error>> {
    let mut rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_skippable(line));

    let (_, header_line) = rows.next().ok_or("No course header found")?;
    let columns = Columns::from_header(header_line)?;

    rows.map(|(idx, line)| {
        parse_course_line(line, &columns)
            .map_err(|e| Box::<dyn Error>::from(format!("line {}: {e}", idx + 1)))
    })
    .collect()
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse a single course row
fn parse_course_line(line: &str, columns: &Columns) -> Result<Course, Box<dyn Error>> {
    let fields = split_csv_line(line);

    let id = columns.field(&fields, ID);
    if id.is_empty() {
        return Err("Missing course ID".into());
    }

    Ok(Course::new(
        id,
        columns.field(&fields, NAME),
        columns.field(&fields, GRADE),
        columns.field(&fields, LEVEL),
        columns.field(&fields, GRADE_LEVEL),
        columns.field(&fields, TERM),
    )
    .with_school_year(columns.field(&fields, SCHOOL_YEAR)))
}

/// Split a CSV line into trimmed fields.
///
/// Double-quoted fields may contain commas; `""` inside quotes is a literal quote.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
