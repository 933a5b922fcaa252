//! Catalog configuration
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! gives the plain behavior: one fetch, five rows per page, view-only sorting,
//! no page reset and duplicate enrollments allowed.

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_ENDPOINT: &str = "/api/courses.json";
pub const ROWS_PER_PAGE: usize = 5;

/// Whether sorting reorders the stored course list or only the displayed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    View,
    Persistent,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub endpoint: String,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    pub accept_invalid_certs: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_attempts: 1,
            retry_delay_ms: 500,
            accept_invalid_certs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub fetch: FetchConfig,
    pub rows_per_page: usize,
    pub sort_mode: SortMode,
    pub reset_page_on_query_change: bool,
    pub allow_duplicate_enrollment: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            rows_per_page: ROWS_PER_PAGE,
            sort_mode: SortMode::View,
            reset_page_on_query_change: false,
            allow_duplicate_enrollment: true,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
