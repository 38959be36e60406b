//! CSV parser for course rosters
//!
//! Rosters are plain CSV with a header row naming the columns, e.g.:
//!
//! ```csv
//! Name,Credits,Grade,Semester,Major,Memo
//! Data Structures,3,A+,2025-1,true,
//! Capstone Project,3,-,2025-2,true,in progress
//! ```
//!
//! Parsing is deliberately lenient at the record level: a row with an
//! unrecognized grade or unparsable credits still produces a record (which
//! the aggregator then treats as inert) rather than failing the whole file.

use crate::core::models::{CourseRecord, Grade};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a roster CSV file into course records
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or has no usable header
pub fn parse_roster_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CourseRecord>, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_roster(&content)
}

/// Parse roster CSV content into course records
///
/// # Errors
/// Returns an error if no header row with a `Name` column is found
pub fn parse_roster(content: &str) -> Result<Vec<CourseRecord>, Box<dyn Error>> {
    let mut lines = content.lines();

    let header_line = lines
        .find(|line| !line.trim().is_empty())
        .ok_or("Roster file is empty")?;
    let headers = parse_csv_line(header_line);

    if find_column(&headers, "name").is_none() {
        return Err("Roster header is missing a 'Name' column".into());
    }

    let mut courses = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(course) = parse_course_line(line, &headers) {
            courses.push(course);
        }
    }

    Ok(courses)
}

/// Parse a single roster row; returns `None` for rows without a course name
fn parse_course_line(line: &str, headers: &[String]) -> Option<CourseRecord> {
    let fields = parse_csv_line(line);

    let name = get_field(&fields, headers, "name")?;
    if name.is_empty() {
        return None;
    }

    // Unparsable credits become 0.0 so the record survives but never
    // contributes to aggregation
    let credits = get_field(&fields, headers, "credits")
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(0.0);

    let grade = get_field(&fields, headers, "grade")
        .as_deref()
        .and_then(Grade::parse);

    let semester = get_field(&fields, headers, "semester").filter(|s| !s.is_empty());

    let major = get_field(&fields, headers, "major")
        .map(|v| parse_flag(&v))
        .unwrap_or(false);

    let memo = get_field(&fields, headers, "memo").filter(|s| !s.is_empty());

    Some(CourseRecord {
        name,
        credits,
        grade,
        semester,
        major,
        memo,
    })
}

/// Look up a field value by (case-insensitive) column name
fn get_field(fields: &[String], headers: &[String], column: &str) -> Option<String> {
    let idx = find_column(headers, column)?;
    fields.get(idx).map(|v| v.trim().to_string())
}

fn find_column(headers: &[String], column: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(column))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "major"
    )
}

/// Split a CSV line into fields, honoring double quotes
///
/// A doubled quote inside a quoted field is an escaped quote.
fn parse_csv_line(line: &str) -> Vec<String> {
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
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Credits,Grade,Semester,Major,Memo
Data Structures,3,A+,2025-1,true,
Operating Systems,3,B0,2025-1,true,retake candidate
World History,2,C+,2025-1,false,
Capstone Project,3,-,2025-2,true,in progress
";

    #[test]
    fn parses_a_full_roster() {
        let courses = parse_roster(SAMPLE).expect("roster parses");

        assert_eq!(courses.len(), 4);
        assert_eq!(courses[0].name, "Data Structures");
        assert_eq!(courses[0].grade, Some(Grade::APlus));
        assert!((courses[0].credits - 3.0).abs() < f64::EPSILON);
        assert!(courses[0].major);
        assert_eq!(courses[0].semester.as_deref(), Some("2025-1"));
        assert_eq!(courses[1].memo.as_deref(), Some("retake candidate"));
        assert!(!courses[2].major);
        assert_eq!(courses[3].grade, Some(Grade::Unscored));
    }

    #[test]
    fn header_order_is_flexible() {
        let content = "Grade,Name,Credits\nA0,Linear Algebra,3\n";
        let courses = parse_roster(content).expect("roster parses");

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "Linear Algebra");
        assert_eq!(courses[0].grade, Some(Grade::AZero));
        assert!(courses[0].semester.is_none());
    }

    #[test]
    fn missing_name_column_is_an_error() {
        assert!(parse_roster("Credits,Grade\n3,A+\n").is_err());
        assert!(parse_roster("").is_err());
    }

    #[test]
    fn malformed_rows_survive_as_inert_records() {
        let content = "Name,Credits,Grade\nMystery Course,lots,Z+\n";
        let courses = parse_roster(content).expect("roster parses");

        assert_eq!(courses.len(), 1);
        assert!((courses[0].credits - 0.0).abs() < f64::EPSILON);
        assert_eq!(courses[0].grade, None);
        assert!(!courses[0].is_scored());
    }

    #[test]
    fn rows_without_a_name_are_skipped() {
        let content = "Name,Credits,Grade\n,3,A+\nReal Course,3,A+\n";
        let courses = parse_roster(content).expect("roster parses");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "Real Course");
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let content = "Name,Credits,Grade,Memo\n\"Reading, Writing\",3,B+,\"easy, fun\"\n";
        let courses = parse_roster(content).expect("roster parses");

        assert_eq!(courses[0].name, "Reading, Writing");
        assert_eq!(courses[0].memo.as_deref(), Some("easy, fun"));
    }

    #[test]
    fn escaped_quotes_are_unescaped() {
        let content = "Name,Credits,Grade\n\"The \"\"Fun\"\" Seminar\",1,A+\n";
        let courses = parse_roster(content).expect("roster parses");
        assert_eq!(courses[0].name, "The \"Fun\" Seminar");
    }
}
