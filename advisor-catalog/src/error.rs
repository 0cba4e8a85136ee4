/// Errors that can occur during catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no valid courses loaded from '{0}'")]
    NoValidCourses(String),

    #[error("invalid course number \"{0}\" (expected a code like CSCI101)")]
    InvalidCourseCode(String),

    #[error("course \"{0}\" not found")]
    CourseNotFound(String),
}

impl CatalogError {
    pub fn no_valid_courses(source: impl Into<String>) -> Self {
        Self::NoValidCourses(source.into())
    }

    pub fn invalid_course_code(code: impl Into<String>) -> Self {
        Self::InvalidCourseCode(code.into())
    }

    pub fn course_not_found(code: impl Into<String>) -> Self {
        Self::CourseNotFound(code.into())
    }
}
