//! Balanced-brace scanner for JSON records embedded in page text
//!
//! Finds object boundaries by counting braces outside of string
//! literals, then hands the slice to `serde_json`. Nothing here
//! assumes the surrounding text is JSON.

use serde_json::{Map, Value};

/// How many opening braces to try when walking back from a marker
const MAX_CANDIDATES: usize = 64;

/// Returns the balanced object starting at byte `start`
///
/// `start` must point at `{`. Braces inside string literals (including
/// escaped quotes) are ignored. Returns `None` if the object is never
/// closed.
pub fn object_at(text: &str, start: usize) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &b) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Returns the innermost JSON object that encloses byte `pos` and parses
///
/// Walks back over opening braces nearest first. A brace that sits inside
/// a string literal yields a slice that does not parse, so it is skipped.
pub fn enclosing_object(text: &str, pos: usize) -> Option<Map<String, Value>> {
    let head = text.get(..pos)?;

    head.rmatch_indices('{')
        .take(MAX_CANDIDATES)
        .find_map(|(start, _)| {
            let slice = object_at(text, start)?;
            if start + slice.len() <= pos {
                return None;
            }
            serde_json::from_str::<Map<String, Value>>(slice).ok()
        })
}

/// All records tagged `"__typename":"<typename>"`, in page order
///
/// Only records whose own `__typename` equals `typename` are returned;
/// a nested marker never promotes its parent object.
pub fn records_of_type(text: &str, typename: &str) -> Vec<Map<String, Value>> {
    let marker = format!("\"__typename\":{}", Value::String(typename.to_string()));

    text.match_indices(&marker)
        .filter_map(|(idx, _)| enclosing_object(text, idx))
        .filter(|record| record.get("__typename").and_then(Value::as_str) == Some(typename))
        .collect()
}

/// Looks up a keyed record (`"<key>":{...}`) in the page's record store
pub fn keyed_object(text: &str, key: &str) -> Option<Map<String, Value>> {
    let needle = format!("{}:", Value::String(key.to_string()));

    text.match_indices(&needle).find_map(|(idx, _)| {
        let rest = &text[idx + needle.len()..];
        let brace = idx + needle.len() + (rest.len() - rest.trim_start().len());
        let slice = object_at(text, brace)?;
        serde_json::from_str::<Map<String, Value>>(slice).ok()
    })
}

/// Reads a `legacyId` field that may be a number or a numeric string
pub fn legacy_id(record: &Map<String, Value>) -> Option<u64> {
    match record.get("legacyId")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_object_at_simple() {
        let text = r#"x = {"a":{"b":1}}; y"#;
        assert_eq!(object_at(text, 4), Some(r#"{"a":{"b":1}}"#));
        assert_eq!(object_at(text, 9), Some(r#"{"b":1}"#));
    }

    #[test]
    fn test_object_at_ignores_braces_in_strings() {
        let text = r#"{"comment":"use } and { freely \" }","n":2} tail"#;
        assert_eq!(
            object_at(text, 0),
            Some(r#"{"comment":"use } and { freely \" }","n":2}"#)
        );
    }

    #[test]
    fn test_object_at_not_a_brace() {
        assert_eq!(object_at("abc", 0), None);
        assert_eq!(object_at("{unclosed", 0), None);
    }

    #[test]
    fn test_enclosing_object_innermost() {
        let text = r#"{"outer":{"__typename":"Teacher","legacyId":5}}"#;
        let pos = text.find("__typename").unwrap();
        let record = enclosing_object(text, pos).unwrap();
        assert_eq!(legacy_id(&record), Some(5));
    }

    #[test]
    fn test_enclosing_object_skips_brace_in_string() {
        let text = r#"{"__typename":"Rating","comment":"a { b","legacyId":3}"#;
        let pos = text.find("legacyId").unwrap();
        let record = enclosing_object(text, pos).unwrap();
        assert_eq!(record["comment"], "a { b");
    }

    #[test]
    fn test_records_of_type_exact_tag() {
        let text = r#"<script>window.__RELAY_STORE__ = {
            "e1":{"__typename":"TeacherSearchConnectionEdge","node":{"__ref":"t1"}},
            "t1":{"__typename":"Teacher","legacyId":11,"firstName":"Ann"},
            "t2":{"__typename":"Teacher","legacyId":12,"firstName":"Bob"}
        };</script>"#;
        let records = records_of_type(text, "Teacher");
        assert_eq!(records.len(), 2);
        assert_eq!(legacy_id(&records[0]), Some(11));
        assert_eq!(legacy_id(&records[1]), Some(12));
    }

    #[test]
    fn test_records_of_type_in_html_noise() {
        let text = r#"<div class="a">{ not json</div><script>{"s":{"__typename":"School","legacyId":"77"}}</script>"#;
        let records = records_of_type(text, "School");
        assert_eq!(records.len(), 1);
        assert_eq!(legacy_id(&records[0]), Some(77));
    }

    #[test]
    fn test_records_of_type_matches_tag_literally() {
        let text = r#"{"a":{"__typename":"Teacher","legacyId":1},"b":{"__typename":"Teach.r","legacyId":2}}"#;
        let records = records_of_type(text, "Teach.r");
        assert_eq!(records.len(), 1);
        assert_eq!(legacy_id(&records[0]), Some(2));
        assert!(records_of_type(text, "Teach").is_empty());
    }

    #[test]
    fn test_keyed_object() {
        let text = r#"{"U2Nob29sLTE=": {"__typename":"School","legacyId":1,"name":"Case"}}"#;
        let record = keyed_object(text, "U2Nob29sLTE=").unwrap();
        assert_eq!(record["name"], "Case");
        assert!(keyed_object(text, "missing").is_none());
    }

    #[test]
    fn test_legacy_id_rejects_other_shapes() {
        let record: Map<String, Value> = serde_json::from_str(r#"{"legacyId":null}"#).unwrap();
        assert_eq!(legacy_id(&record), None);
        let record: Map<String, Value> = serde_json::from_str(r#"{"legacyId":"x1"}"#).unwrap();
        assert_eq!(legacy_id(&record), None);
    }

    proptest! {
        #[test]
        fn prop_serialized_record_is_found(
            id in 0u64..10_000_000,
            comment in "[ -~]{0,40}",
            prefix in "[a-z<> ={}\"]{0,30}",
        ) {
            let record = serde_json::json!({
                "__typename": "Rating",
                "comment": comment,
                "legacyId": id,
            });
            let text = format!("{} <script>{{\"r\":{}}}</script>", prefix, record);
            let found = records_of_type(&text, "Rating");
            prop_assert_eq!(found.len(), 1);
            prop_assert_eq!(legacy_id(&found[0]), Some(id));
            prop_assert_eq!(found[0]["comment"].as_str(), Some(comment.as_str()));
        }
    }
}
