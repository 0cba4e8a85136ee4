//! In-memory course index for code lookups and sorted listings.
//!
//! Builds an index from parsed courses, keyed by canonical course code.
//! Duplicate codes are resolved last-wins, and the sorted listing is derived
//! from the index so a superseded duplicate can never reappear in a listing.

use std::collections::HashMap;

use crate::course::{Course, is_valid_course_code, normalize_code};
use crate::error::CatalogError;

/// An index of courses, keyed by canonical course code.
pub struct CourseCatalog {
    by_code: HashMap<String, usize>,
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Build a catalog from a list of parsed courses.
    ///
    /// Courses are expected to carry canonical codes (the parser guarantees
    /// this). When the same code appears more than once, the later entry
    /// replaces the earlier one.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut by_code = HashMap::with_capacity(courses.len());

        for (i, course) in courses.iter().enumerate() {
            by_code.insert(course.code.clone(), i);
        }

        Self { by_code, courses }
    }

    /// Look up a course by code.
    ///
    /// The query is trimmed and uppercased before matching, so lookups are
    /// case-insensitive. A query that does not even have the shape of a
    /// course code is rejected without a lookup.
    pub fn find(&self, query: &str) -> Result<&Course, CatalogError> {
        let code = normalize_code(query);
        if !is_valid_course_code(&code) {
            return Err(CatalogError::invalid_course_code(query.trim()));
        }
        self.by_code
            .get(&code)
            .map(|&i| &self.courses[i])
            .ok_or_else(|| CatalogError::course_not_found(code))
    }

    /// Returns all courses sorted ascending by course code.
    ///
    /// One entry per unique code; superseded duplicates are not included.
    pub fn courses_sorted(&self) -> Vec<&Course> {
        let mut listing: Vec<&Course> = self.by_code.values().map(|&i| &self.courses[i]).collect();
        listing.sort_by(|a, b| a.code.cmp(&b.code));
        listing
    }

    /// Resolve a course's prerequisites against the index.
    ///
    /// Returns `(code, title)` pairs in stored order, with `None` for a
    /// prerequisite code not present in the catalog.
    pub fn resolve_prerequisites<'a>(&'a self, course: &'a Course) -> Vec<(&'a str, Option<&'a str>)> {
        course
            .prerequisites
            .iter()
            .map(|code| (code.as_str(), self.title_of(code)))
            .collect()
    }

    /// Returns the title of the course with the given canonical code.
    pub fn title_of(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(code)
            .map(|&i| self.courses[i].title.as_str())
    }

    /// Returns the number of unique courses in the catalog.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns true if the catalog holds no courses.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_course(code: &str, title: &str, prereqs: &[&str]) -> Course {
        Course {
            code: code.to_string(),
            title: title.to_string(),
            prerequisites: prereqs.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_find() {
        let catalog = CourseCatalog::from_courses(vec![
            make_course("CSCI101", "Intro to Programming", &[]),
            make_course("CSCI200", "Data Structures", &["CSCI101"]),
        ]);

        let course = catalog.find("CSCI200").unwrap();
        assert_eq!(course.title, "Data Structures");
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog =
            CourseCatalog::from_courses(vec![make_course("CSCI101", "Intro to Programming", &[])]);

        let lower = catalog.find("csci101").unwrap();
        let upper = catalog.find("CSCI101").unwrap();
        let padded = catalog.find("  Csci101 ").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, padded);
    }

    #[test]
    fn test_find_not_found() {
        let catalog =
            CourseCatalog::from_courses(vec![make_course("CSCI101", "Intro to Programming", &[])]);

        match catalog.find("CSCI999") {
            Err(CatalogError::CourseNotFound(code)) => assert_eq!(code, "CSCI999"),
            other => panic!("expected CourseNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_find_invalid_query() {
        let catalog =
            CourseCatalog::from_courses(vec![make_course("CSCI101", "Intro to Programming", &[])]);

        match catalog.find("not-a-code") {
            Err(CatalogError::InvalidCourseCode(q)) => assert_eq!(q, "not-a-code"),
            other => panic!("expected InvalidCourseCode, got {other:?}"),
        }
    }

    #[test]
    fn test_sorted_listing() {
        let catalog = CourseCatalog::from_courses(vec![
            make_course("MATH201", "Discrete Mathematics", &[]),
            make_course("CSCI101", "Intro to Programming", &[]),
            make_course("CSCI300", "Algorithms", &[]),
        ]);

        let codes: Vec<&str> = catalog
            .courses_sorted()
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, vec!["CSCI101", "CSCI300", "MATH201"]);
    }

    #[test]
    fn test_duplicate_code_last_wins() {
        let catalog = CourseCatalog::from_courses(vec![
            make_course("CSCI101", "Old Title", &[]),
            make_course("CSCI101", "New Title", &[]),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("CSCI101").unwrap().title, "New Title");

        // The listing comes from the index, so the stale entry is gone too.
        let listing = catalog.courses_sorted();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].title, "New Title");
    }

    #[test]
    fn test_resolve_prerequisites() {
        let catalog = CourseCatalog::from_courses(vec![
            make_course("CSCI101", "Intro to Programming", &["CSCI100"]),
            make_course("CSCI200", "Data Structures", &["CSCI101", "MATH201"]),
        ]);

        let course = catalog.find("CSCI200").unwrap();
        let resolved = catalog.resolve_prerequisites(course);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0], ("CSCI101", Some("Intro to Programming")));
        // MATH201 is not in the catalog
        assert_eq!(resolved[1], ("MATH201", None));
    }

    #[test]
    fn test_resolve_no_prerequisites() {
        let catalog =
            CourseCatalog::from_courses(vec![make_course("CSCI100", "Intro to CS", &[])]);

        let course = catalog.find("CSCI100").unwrap();
        assert!(catalog.resolve_prerequisites(course).is_empty());
    }
}
