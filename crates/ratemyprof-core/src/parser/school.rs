//! School profile parser

use regex::Regex;

use crate::error::{Result, RmpError};

/// Extracts the display name bound to `school_id` on a school profile page
///
/// Matches `"legacyId":<id>,"name":"..."` with the identifier embedded
/// literally, so a name belonging to another school never matches.
///
/// # Returns
/// `Ok(None)` if the page carries no record for this identifier
///
/// # Errors
/// Returns `ParseError` if the captured name is not a valid JSON string
pub fn parse_school_name(html: &str, school_id: u64) -> Result<Option<String>> {
    let pattern = format!(r#""legacyId":{},"name":"((?:[^"\\]|\\.)*)""#, school_id);
    let re = Regex::new(&pattern)
        .map_err(|e| RmpError::ParseError(format!("Invalid pattern: {}", e)))?;

    let Some(raw) = re.captures(html).and_then(|caps| caps.get(1)) else {
        return Ok(None);
    };

    // The capture is still JSON-escaped
    let name: String = serde_json::from_str(&format!("\"{}\"", raw.as_str()))?;
    Ok(Some(name))
}
