//! Main scraper API for RateMyProfessors
//!
//! Combines the HTTP client with the page parsers. Every call issues its
//! requests one after another; nothing runs concurrently.

use tracing::{debug, info};

use crate::client::RmpClient;
use crate::config::ClientConfig;
use crate::error::{EntityKind, Result, RmpError};
use crate::parser::{
    SCHOOL_TYPENAME, TEACHER_TYPENAME, extract_ids, extract_professor_fragments, parse_professor,
    parse_school_name,
};
use crate::rank::most_rated;
use crate::types::{FullProfessor, PartialProfessor, PartialSchool, Professor, School, SchoolId};
use crate::url::{
    build_professor_search_url, build_professor_url, build_school_search_url, build_school_url,
};

/// Main scraper API for RateMyProfessors
///
/// List functions issue one search request, plus one profile request per
/// full entity built from it. The `fast_*` functions issue only the search
/// request and return partial professors.
pub struct RmpScraper {
    client: RmpClient,
}

impl RmpScraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: RmpClient::new()?,
        })
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: RmpClient::with_config(config)?,
        })
    }

    /// Fetch a profile page, reporting a 404 as an invalid identifier
    async fn fetch_profile(&self, url: &str, kind: EntityKind, id: u64) -> Result<String> {
        match self.client.fetch(url).await {
            Err(RmpError::NotFound(_)) => Err(RmpError::InvalidId { kind, id }),
            other => other,
        }
    }

    /// Build a school from its identifier
    ///
    /// Issues exactly one request.
    ///
    /// # Errors
    /// - `InvalidId` if the profile page has no record for `id`
    /// - `HttpError` if the network request fails
    pub async fn school(&self, id: u64) -> Result<School> {
        let url = build_school_url(self.client.base_url(), id);
        let html = self.fetch_profile(&url, EntityKind::School, id).await?;

        let name = parse_school_name(&html, id)?.ok_or(RmpError::InvalidId {
            kind: EntityKind::School,
            id,
        })?;

        Ok(School { id, name })
    }

    /// Build a full professor from its identifier
    ///
    /// Issues exactly one request.
    ///
    /// # Errors
    /// - `InvalidId` if the profile page has no record for `id`
    /// - `ParseError` if the record is malformed
    /// - `HttpError` if the network request fails
    pub async fn professor(&self, id: u64) -> Result<Professor> {
        self.full_professor(id).await.map(Professor::Full)
    }

    async fn full_professor(&self, id: u64) -> Result<FullProfessor> {
        let url = build_professor_url(self.client.base_url(), id);
        let html = self.fetch_profile(&url, EntityKind::Professor, id).await?;
        parse_professor(&html, id)
    }

    /// Search for a school, returning the first one that resolves
    ///
    /// Stops issuing profile requests after the first success.
    ///
    /// # Arguments
    /// * `query` - School name as a user would type it (e.g., "Ohio State")
    ///
    /// # Returns
    /// The first listed school whose profile resolves, or `None`
    ///
    /// # Errors
    /// - `HttpError` / `RateLimited` if any request fails at the transport level
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ratemyprof_core::Result<()> {
    /// use ratemyprof_core::RmpScraper;
    /// let scraper = RmpScraper::new()?;
    /// if let Some(school) = scraper.find_school("Case Western").await? {
    ///     println!("{} ({})", school.name, school.id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find_school(&self, query: &str) -> Result<Option<School>> {
        let ids = self.school_candidates(query).await?;
        for id in ids {
            if let Some(school) = keep_candidate(id, self.school(id).await)? {
                return Ok(Some(school));
            }
        }
        Ok(None)
    }

    /// Search for schools by name
    ///
    /// Only the first results page is read (typically up to 20 schools).
    /// Candidates whose profile does not resolve are skipped.
    ///
    /// # Arguments
    /// * `query` - School name; surrounding whitespace is trimmed
    ///
    /// # Returns
    /// Schools in page order, empty if nothing matches
    ///
    /// # Errors
    /// - `HttpError` / `RateLimited` if any request fails at the transport level
    pub async fn find_schools(&self, query: &str) -> Result<Vec<School>> {
        let ids = self.school_candidates(query).await?;
        let mut schools = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(school) = keep_candidate(id, self.school(id).await)? {
                schools.push(school);
            }
        }
        info!(query, count = schools.len(), "school search finished");
        Ok(schools)
    }

    /// Search for professors at a school, returning the most rated one
    ///
    /// Builds every candidate like [`find_professors`](Self::find_professors),
    /// then keeps the one with the most ratings. Ties go to the one listed first.
    ///
    /// # Arguments
    /// * `school` - School to search in ([`School`], [`PartialSchool`] or a raw id)
    /// * `query` - Professor name
    ///
    /// # Returns
    /// The most rated [`Professor::Full`], or `None` if nothing matches
    ///
    /// # Errors
    /// - `HttpError` / `RateLimited` if any request fails at the transport level
    pub async fn find_professor_best<S: SchoolId>(
        &self,
        school: S,
        query: &str,
    ) -> Result<Option<Professor>> {
        let professors = self.find_professors(school, query).await?;
        Ok(most_rated(professors))
    }

    /// Search for professors at a school, returning the first one listed
    ///
    /// Stops issuing profile requests after the first success, so it
    /// never costs more than [`find_professors`](Self::find_professors).
    /// Candidates whose profile does not resolve are skipped.
    ///
    /// # Arguments
    /// * `school` - School to search in
    /// * `query` - Professor name
    ///
    /// # Returns
    /// The first listed professor whose profile resolves, or `None`
    ///
    /// # Errors
    /// - `HttpError` / `RateLimited` if any request fails at the transport level
    pub async fn find_professor_first<S: SchoolId>(
        &self,
        school: S,
        query: &str,
    ) -> Result<Option<Professor>> {
        let ids = self.professor_candidates(school, query).await?;
        for id in ids {
            if let Some(professor) = keep_candidate(id, self.full_professor(id).await)? {
                return Ok(Some(Professor::Full(professor)));
            }
        }
        Ok(None)
    }

    /// Search for professors at a school
    ///
    /// Only the first results page is read. Every candidate costs one
    /// profile request; candidates whose profile does not resolve are
    /// skipped.
    ///
    /// # Arguments
    /// * `school` - School to search in
    /// * `query` - Professor name; surrounding whitespace is trimmed
    ///
    /// # Returns
    /// [`Professor::Full`] values in page order, empty if nothing matches
    ///
    /// # Errors
    /// - `HttpError` / `RateLimited` if any request fails at the transport level
    pub async fn find_professors<S: SchoolId>(
        &self,
        school: S,
        query: &str,
    ) -> Result<Vec<Professor>> {
        let ids = self.professor_candidates(school, query).await?;
        let mut professors = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(professor) = keep_candidate(id, self.full_professor(id).await)? {
                professors.push(Professor::Full(professor));
            }
        }
        info!(query, count = professors.len(), "professor search finished");
        Ok(professors)
    }

    /// Search for professors at a school, returning the most rated one,
    /// from search page data only
    ///
    /// Issues exactly one request. Ties go to the one listed first.
    ///
    /// # Arguments
    /// * `school` - School to search in
    /// * `query` - Professor name
    ///
    /// # Returns
    /// The most rated [`Professor::Partial`], or `None` if nothing matches
    ///
    /// # Errors
    /// - `HttpError` / `RateLimited` if the search request fails
    pub async fn fast_find_professor_best<S: SchoolId>(
        &self,
        school: S,
        query: &str,
    ) -> Result<Option<Professor>> {
        let professors = self.fast_find_professors(school, query).await?;
        Ok(most_rated(professors))
    }

    /// Search for professors at a school, returning the first one listed,
    /// from search page data only
    ///
    /// Issues exactly one request.
    ///
    /// # Arguments
    /// * `school` - School to search in
    /// * `query` - Professor name
    ///
    /// # Returns
    /// The first [`Professor::Partial`] on the page, or `None`
    ///
    /// # Errors
    /// - `HttpError` / `RateLimited` if the search request fails
    pub async fn fast_find_professor_first<S: SchoolId>(
        &self,
        school: S,
        query: &str,
    ) -> Result<Option<Professor>> {
        let professors = self.fast_find_professors(school, query).await?;
        Ok(professors.into_iter().next())
    }

    /// Search for professors at a school without any profile requests
    ///
    /// Issues exactly one request and returns [`Professor::Partial`]
    /// values. Use [`Professor::upgrade`] to fetch the full profile.
    /// Fragments that do not parse are skipped.
    ///
    /// # Arguments
    /// * `school` - School to search in
    /// * `query` - Professor name; surrounding whitespace is trimmed
    ///
    /// # Returns
    /// Partial professors in page order, empty if nothing matches
    ///
    /// # Errors
    /// - `HttpError` / `RateLimited` if the search request fails
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ratemyprof_core::Result<()> {
    /// use ratemyprof_core::{PartialSchool, RmpScraper};
    /// let scraper = RmpScraper::new()?;
    /// let professors = scraper
    ///     .fast_find_professors(PartialSchool::new(186), "Smith")
    ///     .await?;
    /// for professor in &professors {
    ///     println!("{}: {} ratings", professor.name(), professor.num_ratings());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fast_find_professors<S: SchoolId>(
        &self,
        school: S,
        query: &str,
    ) -> Result<Vec<Professor>> {
        let html = self.professor_search_page(school, query).await?;

        let mut professors = Vec::new();
        for fragment in extract_professor_fragments(&html) {
            match PartialProfessor::from_fragment(&fragment) {
                Ok(professor) => professors.push(Professor::Partial(professor)),
                Err(e) => debug!(error = %e, "dropping professor fragment"),
            }
        }
        Ok(professors)
    }

    /// Fetch the full school behind a partial one
    ///
    /// Not cached: every call issues one request.
    pub async fn upgrade_school(&self, school: &PartialSchool) -> Result<School> {
        self.school(school.id).await
    }

    async fn school_candidates(&self, query: &str) -> Result<Vec<u64>> {
        let url = build_school_search_url(self.client.base_url(), query.trim());
        let html = self.client.fetch(&url).await?;
        Ok(extract_ids(&html, SCHOOL_TYPENAME))
    }

    async fn professor_candidates<S: SchoolId>(&self, school: S, query: &str) -> Result<Vec<u64>> {
        let html = self.professor_search_page(school, query).await?;
        Ok(extract_ids(&html, TEACHER_TYPENAME))
    }

    async fn professor_search_page<S: SchoolId>(&self, school: S, query: &str) -> Result<String> {
        let url =
            build_professor_search_url(self.client.base_url(), school.school_id(), query.trim());
        self.client.fetch(&url).await
    }
}

/// Keep a constructed candidate, drop a per-candidate failure, propagate the rest
fn keep_candidate<T>(id: u64, built: Result<T>) -> Result<Option<T>> {
    match built {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_candidate_failure() => {
            debug!(id, error = %e, "dropping candidate");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

impl PartialSchool {
    /// Fetch the full school; see [`RmpScraper::upgrade_school`]
    pub async fn to_school(&self, scraper: &RmpScraper) -> Result<School> {
        scraper.upgrade_school(self).await
    }
}

impl PartialProfessor {
    /// Fetch the full profile for this professor
    ///
    /// Issues exactly one request.
    pub async fn to_professor(&self, scraper: &RmpScraper) -> Result<FullProfessor> {
        scraper.full_professor(self.id).await
    }
}

impl Professor {
    /// Turn any professor into the full tier
    ///
    /// A partial professor costs one request; a full one is returned as-is.
    pub async fn upgrade(self, scraper: &RmpScraper) -> Result<Professor> {
        match self {
            Professor::Full(_) => Ok(self),
            Professor::Partial(partial) => partial.to_professor(scraper).await.map(Professor::Full),
        }
    }
}
