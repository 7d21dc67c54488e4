//! Professor record parsers
//!
//! Full professors come from a profile page; partial professors from a
//! single fragment cut out of a search page.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use super::scan::{legacy_id, records_of_type};
use super::search::resolve_school_ref;
use super::{RATING_TYPENAME, TEACHER_TYPENAME};
use crate::error::{EntityKind, Result, RmpError};
use crate::types::{FullProfessor, PartialProfessor, PartialSchool, Rating};

/// Teacher record as stored in the page data
///
/// Search pages report rounded averages under their own keys. One record
/// can carry both spellings when several page fragments selected it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeacherRecord {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    department: Option<String>,
    avg_rating: Option<f64>,
    avg_rating_rounded: Option<f64>,
    avg_difficulty: Option<f64>,
    avg_difficulty_rounded: Option<f64>,
    would_take_again_percent: Option<f64>,
    would_take_again_percent_rounded: Option<f64>,
    #[serde(default)]
    num_ratings: u32,
    school: Option<Value>,
}

impl TeacherRecord {
    fn rating(&self) -> Option<f64> {
        self.avg_rating.or(self.avg_rating_rounded)
    }

    fn difficulty(&self) -> Option<f64> {
        self.avg_difficulty.or(self.avg_difficulty_rounded)
    }

    /// The site reports -1 when nobody answered "would take again"
    fn would_take_again(&self) -> Option<f64> {
        self.would_take_again_percent
            .or(self.would_take_again_percent_rounded)
            .filter(|v| *v >= 0.0)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatingRecord {
    #[serde(default)]
    comment: String,
    #[serde(default, rename = "class")]
    class_name: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    clarity_rating: f64,
    #[serde(default)]
    helpful_rating: f64,
    #[serde(default)]
    difficulty_rating: f64,
    grade: Option<String>,
    would_take_again: Option<i64>,
    attendance_mandatory: Option<String>,
    is_for_credit: Option<bool>,
    #[serde(default)]
    is_for_online_class: bool,
    #[serde(default)]
    thumbs_up_total: u32,
    #[serde(default)]
    thumbs_down_total: u32,
}

impl From<RatingRecord> for Rating {
    fn from(r: RatingRecord) -> Self {
        Rating {
            comment: r.comment,
            class_name: r.class_name,
            date: r.date,
            clarity: r.clarity_rating,
            helpfulness: r.helpful_rating,
            difficulty: r.difficulty_rating,
            grade: r.grade.filter(|g| !g.is_empty()),
            would_take_again: match r.would_take_again {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            attendance_mandatory: match r.attendance_mandatory.as_deref() {
                Some("mandatory") => Some(true),
                Some("non mandatory") => Some(false),
                _ => None,
            },
            for_credit: r.is_for_credit,
            online_class: r.is_for_online_class,
            thumbs_up: r.thumbs_up_total,
            thumbs_down: r.thumbs_down_total,
        }
    }
}

/// Reads an inlined school record; unresolved `__ref`s yield `None`
fn school_from_value(value: Option<&Value>) -> Option<PartialSchool> {
    let record = value?.as_object()?;
    Some(PartialSchool {
        id: legacy_id(record)?,
        name: record.get("name").and_then(Value::as_str).map(str::to_owned),
    })
}

/// Parses a professor profile page
///
/// Locates the teacher record whose `legacyId` equals `professor_id`,
/// resolves its school against the page records, and collects every
/// rating record on the page in page order.
///
/// # Errors
/// - `InvalidId` if the page has no teacher record for this identifier
/// - `ParseError` if the record does not have the expected shape
pub fn parse_professor(html: &str, professor_id: u64) -> Result<FullProfessor> {
    let mut record = records_of_type(html, TEACHER_TYPENAME)
        .into_iter()
        .find(|r| legacy_id(r) == Some(professor_id))
        .ok_or(RmpError::InvalidId {
            kind: EntityKind::Professor,
            id: professor_id,
        })?;

    resolve_school_ref(html, &mut record);
    let teacher: TeacherRecord = serde_json::from_value(Value::Object(record))?;

    let mut ratings = Vec::new();
    for rating in records_of_type(html, RATING_TYPENAME) {
        match serde_json::from_value::<RatingRecord>(Value::Object(rating)) {
            Ok(r) => ratings.push(Rating::from(r)),
            Err(e) => warn!(professor_id, error = %e, "skipping malformed rating"),
        }
    }

    let rating = teacher.rating();
    let difficulty = teacher.difficulty();
    let would_take_again = teacher.would_take_again();
    let school = school_from_value(teacher.school.as_ref());
    Ok(FullProfessor {
        id: professor_id,
        first_name: teacher.first_name,
        last_name: teacher.last_name,
        department: teacher.department,
        rating,
        difficulty,
        would_take_again,
        school,
        num_ratings: teacher.num_ratings,
        ratings,
    })
}

impl PartialProfessor {
    /// Builds a partial professor from one search-page fragment
    ///
    /// No request is made. The fragment is a JSON object as produced by
    /// [`extract_professor_fragments`](super::extract_professor_fragments).
    ///
    /// # Errors
    /// Returns `ParseError` if the fragment is not an object, has no
    /// `legacyId`, or has fields of the wrong type
    pub fn from_fragment(fragment: &Value) -> Result<Self> {
        let object: &Map<String, Value> = fragment
            .as_object()
            .ok_or_else(|| RmpError::ParseError("Fragment is not a JSON object".to_string()))?;
        let id = legacy_id(object)
            .ok_or_else(|| RmpError::ParseError("Fragment has no legacyId".to_string()))?;

        let teacher = TeacherRecord::deserialize(fragment)?;

        let rating = teacher.rating();
        let difficulty = teacher.difficulty();
        let would_take_again = teacher.would_take_again();
        let school = school_from_value(teacher.school.as_ref());
        Ok(PartialProfessor {
            id,
            first_name: teacher.first_name,
            last_name: teacher.last_name,
            department: teacher.department,
            rating,
            difficulty,
            would_take_again,
            school,
            num_ratings: teacher.num_ratings,
        })
    }
}
