//! RateMyProfessors Scraper Core Library
//!
//! Provides an async API for looking up schools, professors, and ratings
//! on ratemyprofessors.com by scanning the JSON records embedded in its
//! pages.
//!
//! # Overview
//!
//! - HTTP client sending a fixed header set loaded from a bundled JSON payload
//! - A balanced-brace scanner that cuts records out of raw page text
//! - Two professor tiers: [`Professor::Partial`] built from search page data
//!   at no extra cost, and [`Professor::Full`] built from a profile fetch
//!
//! # Example
//!
//! ```no_run
//! use ratemyprof_core::{RmpScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = RmpScraper::new()?;
//!
//!     let Some(school) = scraper.find_school("Case Western Reserve").await? else {
//!         return Ok(());
//!     };
//!
//!     // One request, partial data
//!     if let Some(professor) = scraper.fast_find_professor_best(&school, "Smith").await? {
//!         println!("{}: {} ratings", professor.name(), professor.num_ratings());
//!
//!         // One more request for the full profile
//!         let full = professor.upgrade(&scraper).await?;
//!         for rating in full.ratings().unwrap_or_default() {
//!             println!("{} - {}", rating.class_name, rating.comment);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure policy
//!
//! Search functions drop candidates whose profile does not resolve and
//! return whatever is left. Transport failures and rate limiting are
//! returned to the caller; nothing is retried.

mod client;
pub mod config;
mod error;
pub mod parser;
pub mod rank;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::RmpClient;
pub use config::{ClientConfig, HeaderSet};

// Re-export error types
pub use error::{EntityKind, Result, RmpError};

// Re-export parser functions
pub use parser::{extract_ids, extract_professor_fragments, parse_professor, parse_school_name};

// Re-export main scraper API
pub use scraper::RmpScraper;

// Re-export data types
pub use rank::{Rated, most_rated};
pub use types::{FullProfessor, PartialProfessor, PartialSchool, Professor, Rating, School, SchoolId};
