//! Search results extraction
//!
//! Two modes over one search page: identifiers only, or one full JSON
//! fragment per candidate professor.

use serde_json::{Map, Value};
use tracing::debug;

use super::TEACHER_TYPENAME;
use super::scan::{keyed_object, legacy_id, records_of_type};

/// Legacy identifiers of every `typename` record on the page, in page order
///
/// Records without a usable `legacyId` are skipped.
pub fn extract_ids(text: &str, typename: &str) -> Vec<u64> {
    let ids: Vec<u64> = records_of_type(text, typename)
        .iter()
        .filter_map(legacy_id)
        .collect();
    debug!(typename, count = ids.len(), "extracted identifiers");
    ids
}

/// One JSON object per professor record on a search page
///
/// The record's `school` reference (`{"__ref": key}`) is replaced by the
/// referenced school record when the page carries it, so each fragment
/// stands on its own. Records without a `legacyId` are skipped.
pub fn extract_professor_fragments(text: &str) -> Vec<Value> {
    let fragments: Vec<Value> = records_of_type(text, TEACHER_TYPENAME)
        .into_iter()
        .filter(|record| legacy_id(record).is_some())
        .map(|mut record| {
            resolve_school_ref(text, &mut record);
            Value::Object(record)
        })
        .collect();
    debug!(count = fragments.len(), "extracted professor fragments");
    fragments
}

/// Inline the school record referenced by `record["school"]`, if present
pub(crate) fn resolve_school_ref(text: &str, record: &mut Map<String, Value>) {
    let Some(key) = record
        .get("school")
        .and_then(|s| s.get("__ref"))
        .and_then(Value::as_str)
        .map(str::to_owned)
    else {
        return;
    };

    if let Some(school) = keyed_object(text, &key) {
        record.insert("school".to_string(), Value::Object(school));
    }
}
