//! Delimited-text parser for advising course data.
//!
//! Input files are plain comma-delimited text, one course per line, with no
//! header row and no quoting:
//!
//! ```text
//! CSCI101,Introduction to Programming,CSCI100
//! ```
//!
//! Malformed lines are skipped with a warning; only an unreadable source is
//! a hard error.

use std::io::Read;
use std::path::Path;

use crate::catalog::CourseCatalog;
use crate::course::{Course, is_valid_course_code, normalize_code};
use crate::error::CatalogError;

/// Read and parse a course data file, building a fresh catalog.
///
/// The returned catalog is fully built before this function returns, so a
/// caller holding a previous catalog can swap it out atomically on `Ok` and
/// keep it untouched on `Err`.
pub fn load_catalog(path: &Path) -> Result<CourseCatalog, CatalogError> {
    let mut file = std::fs::File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let courses = parse_courses(&contents)?;
    if courses.is_empty() {
        return Err(CatalogError::no_valid_courses(path.display().to_string()));
    }

    Ok(CourseCatalog::from_courses(courses))
}

/// Parse course data from a string.
///
/// Returns every valid course in source order; invalid lines and invalid
/// prerequisite tokens are dropped with a `log::warn!` naming the line.
pub fn parse_courses(content: &str) -> Result<Vec<Course>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut courses = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed row: {e}");
                continue;
            }
        };
        let line = record.position().map_or(0, |p| p.line());

        // Fields that trim to nothing carry no data. A record with no
        // remaining fields was a blank line.
        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 2 {
            log::warn!(
                "Skipping line {line}: expected at least 2 fields (course number, title), got {}",
                fields.len()
            );
            continue;
        }

        let code = normalize_code(fields[0]);
        if !is_valid_course_code(&code) {
            log::warn!("Skipping line {line}: invalid course number \"{}\"", fields[0]);
            continue;
        }

        let title = fields[1].to_string();

        let mut prerequisites = Vec::new();
        for &token in &fields[2..] {
            let prereq = normalize_code(token);
            if is_valid_course_code(&prereq) {
                prerequisites.push(prereq);
            } else {
                log::warn!("Dropping invalid prerequisite \"{token}\" on line {line}");
            }
        }

        courses.push(Course {
            code,
            title,
            prerequisites,
        });
    }

    Ok(courses)
}
