//! Page parsers for RateMyProfessors
//!
//! Search and profile pages embed their data as a JSON record store
//! inside a script tag. The scanner cuts individual records out of the
//! raw text; the other modules turn records into typed entities.

pub mod professor;
pub mod scan;
pub mod school;
pub mod search;

pub use professor::parse_professor;
pub use school::parse_school_name;
pub use search::{extract_ids, extract_professor_fragments};

/// `__typename` tag of school records
pub const SCHOOL_TYPENAME: &str = "School";

/// `__typename` tag of professor records
pub const TEACHER_TYPENAME: &str = "Teacher";

/// `__typename` tag of rating records
pub const RATING_TYPENAME: &str = "Rating";
