//! URL helper functions for RateMyProfessors
//!
//! Builds the search and profile URLs from a site root.

/// Builds the school search URL for a query
///
/// # Example
/// ```
/// use ratemyprof_core::url::build_school_search_url;
/// let url = build_school_search_url("https://www.ratemyprofessors.com", "Ohio State");
/// assert_eq!(url, "https://www.ratemyprofessors.com/search/schools?q=Ohio%20State");
/// ```
pub fn build_school_search_url(base: &str, query: &str) -> String {
    format!("{}/search/schools?q={}", base, urlencoding::encode(query))
}

/// Builds the school profile URL
///
/// # Example
/// ```
/// use ratemyprof_core::url::build_school_url;
/// let url = build_school_url("https://www.ratemyprofessors.com", 1234);
/// assert_eq!(url, "https://www.ratemyprofessors.com/campusRatings.jsp?sid=1234");
/// ```
pub fn build_school_url(base: &str, school_id: u64) -> String {
    format!("{}/campusRatings.jsp?sid={}", base, school_id)
}

/// Builds the professor search URL scoped to one school
///
/// # Example
/// ```
/// use ratemyprof_core::url::build_professor_search_url;
/// let url = build_professor_search_url("https://www.ratemyprofessors.com", 1234, "smith");
/// assert_eq!(url, "https://www.ratemyprofessors.com/search/professors/1234?q=smith");
/// ```
pub fn build_professor_search_url(base: &str, school_id: u64, query: &str) -> String {
    format!(
        "{}/search/professors/{}?q={}",
        base,
        school_id,
        urlencoding::encode(query)
    )
}

/// Builds the professor profile URL
pub fn build_professor_url(base: &str, professor_id: u64) -> String {
    format!("{}/professor/{}", base, professor_id)
}
