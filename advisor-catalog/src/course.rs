//! Course record type and course-code validation.
//!
//! Course codes follow the `CSCI101` shape: four letters and three digits.
//! Codes are matched case-insensitively everywhere, so [`normalize_code`]
//! produces the canonical uppercase form used for storage and lookup.

/// A single course entry parsed from an advising data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Canonical (uppercase) course code (e.g., `"CSCI101"`)
    pub code: String,
    /// Course title, verbatim from the source file (trimmed)
    pub title: String,
    /// Canonical prerequisite codes, in source order
    pub prerequisites: Vec<String>,
}

/// Trim and uppercase a course code into its canonical form.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Check whether a canonical code is a valid course code.
///
/// Valid codes are exactly four ASCII letters followed by exactly three
/// ASCII digits. The check expects canonical (uppercase) input; callers
/// should run [`normalize_code`] first so that `csci101` and `CSCI101`
/// validate identically.
pub fn is_valid_course_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.len() != 7 {
        return false;
    }
    bytes[..4].iter().all(|b| b.is_ascii_uppercase()) && bytes[4..].iter().all(|b| b.is_ascii_digit())
}
