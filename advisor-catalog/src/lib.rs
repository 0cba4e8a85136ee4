//! Course-advising catalog: load delimited course data, index it by course
//! code, and answer sorted-listing and prerequisite-resolution queries.

pub mod catalog;
pub mod course;
pub mod error;
pub mod parser;

pub use catalog::CourseCatalog;
pub use course::{Course, is_valid_course_code, normalize_code};
pub use error::CatalogError;
pub use parser::{load_catalog, parse_courses};
