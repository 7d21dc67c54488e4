//! Core data types for the RateMyProfessors scraper
//!
//! Schools and professors come in two tiers: partial values built from
//! search page data, and full values built from a dedicated profile fetch.
//! The identifier is the only field both tiers are guaranteed to share.

use serde::{Deserialize, Serialize};

/// A school with its display name, built from its profile page
///
/// Equality compares both name and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct School {
    /// Site-assigned identifier (`sid`)
    pub id: u64,

    /// Display name (e.g., "Case Western Reserve University")
    pub name: String,
}

/// A school known only by identifier
///
/// When the page data happened to carry the name it is kept as a hint;
/// it does not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialSchool {
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PartialSchool {
    pub fn new(id: u64) -> Self {
        Self { id, name: None }
    }
}

impl PartialEq for PartialSchool {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PartialSchool {}

impl From<&School> for PartialSchool {
    fn from(school: &School) -> Self {
        Self {
            id: school.id,
            name: Some(school.name.clone()),
        }
    }
}

/// Anything that can scope a professor search to one school
pub trait SchoolId {
    fn school_id(&self) -> u64;
}

impl SchoolId for School {
    fn school_id(&self) -> u64 {
        self.id
    }
}

impl SchoolId for PartialSchool {
    fn school_id(&self) -> u64 {
        self.id
    }
}

impl SchoolId for u64 {
    fn school_id(&self) -> u64 {
        *self
    }
}

impl<T: SchoolId + ?Sized> SchoolId for &T {
    fn school_id(&self) -> u64 {
        (**self).school_id()
    }
}

/// One student review shown on a professor's profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Review text
    pub comment: String,

    /// Course code as entered by the student (e.g., "MATH121")
    pub class_name: String,

    /// Post date as reported by the site (e.g., "2023-05-01 17:22:10 +0000 UTC")
    pub date: String,

    /// Quality score, 1-5
    pub clarity: f64,

    pub helpfulness: f64,

    pub difficulty: f64,

    /// Letter grade, if the student reported one
    pub grade: Option<String>,

    pub would_take_again: Option<bool>,

    pub attendance_mandatory: Option<bool>,

    pub for_credit: Option<bool>,

    pub online_class: bool,

    pub thumbs_up: u32,

    pub thumbs_down: u32,
}

/// A professor built from a dedicated profile fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullProfessor {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub school: Option<PartialSchool>,

    /// Average quality, 0-5
    pub rating: Option<f64>,

    /// Average difficulty, 0-5
    pub difficulty: Option<f64>,

    /// Percentage of students who would take the class again
    pub would_take_again: Option<f64>,

    pub num_ratings: u32,

    /// Ratings shown on the profile page (first page only)
    pub ratings: Vec<Rating>,
}

/// A professor built from one search-page fragment, without a request
///
/// Averages are the rounded values the search page reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialProfessor {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub school: Option<PartialSchool>,
    pub rating: Option<f64>,
    pub difficulty: Option<f64>,
    pub would_take_again: Option<f64>,
    pub num_ratings: u32,
}

/// A professor at either tier
///
/// Accessors read the same field from either tier. Use
/// [`Professor::upgrade`] to turn a partial value into a full one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum Professor {
    Full(FullProfessor),
    Partial(PartialProfessor),
}

impl Professor {
    /// Site-assigned identifier (`tid`), stable across tiers
    pub fn id(&self) -> u64 {
        match self {
            Professor::Full(p) => p.id,
            Professor::Partial(p) => p.id,
        }
    }

    /// Full name as "First Last"
    ///
    /// # Returns
    /// The joined name, trimmed when either part is missing
    pub fn name(&self) -> String {
        let (first, last) = match self {
            Professor::Full(p) => (&p.first_name, &p.last_name),
            Professor::Partial(p) => (&p.first_name, &p.last_name),
        };
        format!("{} {}", first, last).trim().to_string()
    }

    /// Department as listed by the site (e.g., "Mathematics")
    pub fn department(&self) -> Option<&str> {
        match self {
            Professor::Full(p) => p.department.as_deref(),
            Professor::Partial(p) => p.department.as_deref(),
        }
    }

    /// School the professor is listed under
    ///
    /// # Returns
    /// `None` when the page did not carry the school record
    pub fn school(&self) -> Option<&PartialSchool> {
        match self {
            Professor::Full(p) => p.school.as_ref(),
            Professor::Partial(p) => p.school.as_ref(),
        }
    }

    /// Average quality, 0-5
    ///
    /// Partial values carry the rounded average from the search page.
    pub fn rating(&self) -> Option<f64> {
        match self {
            Professor::Full(p) => p.rating,
            Professor::Partial(p) => p.rating,
        }
    }

    /// Average difficulty, 0-5
    pub fn difficulty(&self) -> Option<f64> {
        match self {
            Professor::Full(p) => p.difficulty,
            Professor::Partial(p) => p.difficulty,
        }
    }

    /// Percentage of students who would take the class again
    ///
    /// # Returns
    /// `None` when no student answered
    pub fn would_take_again(&self) -> Option<f64> {
        match self {
            Professor::Full(p) => p.would_take_again,
            Professor::Partial(p) => p.would_take_again,
        }
    }

    /// Number of ratings; the key used by [`most_rated`](crate::most_rated)
    pub fn num_ratings(&self) -> u32 {
        match self {
            Professor::Full(p) => p.num_ratings,
            Professor::Partial(p) => p.num_ratings,
        }
    }

    /// Ratings from the profile page; `None` for partial values
    pub fn ratings(&self) -> Option<&[Rating]> {
        match self {
            Professor::Full(p) => Some(&p.ratings),
            Professor::Partial(_) => None,
        }
    }

    /// Whether this value came from a profile fetch
    pub fn is_full(&self) -> bool {
        matches!(self, Professor::Full(_))
    }

    /// Borrow the full data, if this is the full tier
    pub fn as_full(&self) -> Option<&FullProfessor> {
        match self {
            Professor::Full(p) => Some(p),
            Professor::Partial(_) => None,
        }
    }
}

impl From<FullProfessor> for Professor {
    fn from(p: FullProfessor) -> Self {
        Professor::Full(p)
    }
}

impl From<PartialProfessor> for Professor {
    fn from(p: PartialProfessor) -> Self {
        Professor::Partial(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(id: u64, num_ratings: u32) -> PartialProfessor {
        PartialProfessor {
            id,
            first_name: "Ada".to_string(),
            last_name: "Smith".to_string(),
            department: Some("Mathematics".to_string()),
            school: Some(PartialSchool::new(186)),
            rating: Some(4.5),
            difficulty: Some(3.0),
            would_take_again: None,
            num_ratings,
        }
    }

    #[test]
    fn test_school_equality_uses_name_and_id() {
        let a = School { id: 1, name: "A".to_string() };
        let b = School { id: 1, name: "B".to_string() };
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_partial_school_equality_uses_id_only() {
        let a = PartialSchool { id: 3, name: Some("Three".to_string()) };
        let b = PartialSchool::new(3);
        assert_eq!(a, b);
        assert_ne!(a, PartialSchool::new(4));
    }

    #[test]
    fn test_school_id_trait() {
        let school = School { id: 9, name: "Nine".to_string() };
        assert_eq!(school.school_id(), 9);
        assert_eq!(PartialSchool::from(&school).school_id(), 9);
        assert_eq!((&school).school_id(), 9);
        assert_eq!(12u64.school_id(), 12);
    }

    #[test]
    fn test_professor_accessors() {
        let professor = Professor::from(partial(101, 12));
        assert_eq!(professor.id(), 101);
        assert_eq!(professor.name(), "Ada Smith");
        assert_eq!(professor.department(), Some("Mathematics"));
        assert_eq!(professor.num_ratings(), 12);
        assert_eq!(professor.school().map(|s| s.id), Some(186));
        assert!(!professor.is_full());
        assert!(professor.ratings().is_none());
        assert!(professor.as_full().is_none());
    }

    #[test]
    fn test_professor_serialization_tags_tier() {
        let professor = Professor::from(partial(5, 1));
        let json = serde_json::to_value(&professor).expect("Serialization should succeed");
        assert_eq!(json["tier"], "partial");
        assert_eq!(json["id"], 5);

        let back: Professor = serde_json::from_value(json).expect("Deserialization should succeed");
        assert_eq!(back, professor);
    }
}
