//! Client configuration
//!
//! The request headers are a static JSON payload bundled with the crate.
//! Configuration is an immutable value handed to the client at construction.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{Result, RmpError};

/// Default site root
pub const DEFAULT_BASE_URL: &str = "https://www.ratemyprofessors.com";

const BUNDLED_HEADERS: &str = include_str!("../assets/headers.json");

/// Fixed set of request headers sent with every GET
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    headers: BTreeMap<String, String>,
}

impl HeaderSet {
    /// Parse a header payload: a flat JSON object of name to value
    ///
    /// # Errors
    /// Returns `Config` if the payload is not a string-to-string object
    pub fn from_json(payload: &str) -> Result<Self> {
        let headers: BTreeMap<String, String> = serde_json::from_str(payload)
            .map_err(|e| RmpError::Config(format!("Invalid header payload: {}", e)))?;
        Ok(Self { headers })
    }

    /// The header payload shipped in `assets/headers.json`
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_HEADERS)
    }

    /// Look up a header value by exact name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Convert to a reqwest header map
    ///
    /// # Errors
    /// Returns `Config` for names or values that are not valid HTTP headers
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| RmpError::Config(format!("Invalid header name {:?}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| RmpError::Config(format!("Invalid header value for {}: {}", name, e)))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root, without trailing slash (default: [`DEFAULT_BASE_URL`])
    pub base_url: String,
    /// Request timeout in seconds; `None` keeps reqwest's default
    pub timeout_secs: Option<u64>,
    /// Request headers; `None` uses the bundled payload
    pub headers: Option<HeaderSet>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            headers: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another site root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Resolve the header set, loading the bundled payload when none was given
    pub fn resolved_headers(&self) -> Result<HeaderSet> {
        match &self.headers {
            Some(headers) => Ok(headers.clone()),
            None => HeaderSet::bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_headers_parse() {
        let headers = HeaderSet::bundled().unwrap();
        assert!(!headers.is_empty());
        assert!(headers.get("User-Agent").is_some());
    }

    #[test]
    fn test_bundled_headers_convert() {
        let map = HeaderSet::bundled().unwrap().to_header_map().unwrap();
        assert!(map.contains_key(reqwest::header::USER_AGENT));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let result = HeaderSet::from_json("[1, 2]");
        assert!(matches!(result, Err(RmpError::Config(_))));
    }

    #[test]
    fn test_invalid_header_name() {
        let headers = HeaderSet::from_json(r#"{"bad name": "x"}"#).unwrap();
        assert!(matches!(headers.to_header_map(), Err(RmpError::Config(_))));
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://www.ratemyprofessors.com");
        assert_eq!(config.timeout_secs, None);
        assert!(config.headers.is_none());
    }

    #[test]
    fn test_with_base_url_trims_slash() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_resolved_headers_prefers_explicit() {
        let custom = HeaderSet::from_json(r#"{"X-Test": "1"}"#).unwrap();
        let config = ClientConfig {
            headers: Some(custom.clone()),
            ..ClientConfig::default()
        };
        assert_eq!(config.resolved_headers().unwrap(), custom);
    }
}
