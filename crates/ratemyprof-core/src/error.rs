//! Error types for the RateMyProfessors scraper
//!
//! Provides a single error enum with human-readable messages
//! and string serialization for downstream consumers.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Kind of entity an identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    School,
    Professor,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::School => f.write_str("school"),
            EntityKind::Professor => f.write_str("professor"),
        }
    }
}

/// Error type for all scraper operations
#[derive(Error, Debug)]
pub enum RmpError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Profile page carried no record for the requested identifier
    #[error("Invalid {kind} id or bad request: {id}")]
    InvalidId { kind: EntityKind, id: u64 },

    /// Embedded JSON could not be parsed
    #[error("Failed to parse page data: {0}")]
    ParseError(String),

    /// Server answered 404 for a non-profile URL
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by server (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Header payload or client configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RmpError {
    /// Whether the search layer should drop the candidate and keep going.
    ///
    /// Transport failures and rate limiting abort the whole query.
    pub fn is_candidate_failure(&self) -> bool {
        matches!(
            self,
            RmpError::InvalidId { .. } | RmpError::ParseError(_) | RmpError::NotFound(_)
        )
    }
}

impl From<serde_json::Error> for RmpError {
    fn from(e: serde_json::Error) -> Self {
        RmpError::ParseError(e.to_string())
    }
}

impl Serialize for RmpError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, RmpError>;
