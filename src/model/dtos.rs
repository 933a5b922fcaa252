use serde::Serialize;

use super::structs::{Course, SortConfig};

/// What the catalog table shows for the current search, sort and page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub rows: Vec<Course>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub enrolled_count: usize,
    pub loading: bool,
    pub sort: SortConfig,
}

/// What the schedule table shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulePage {
    pub rows: Vec<Course>,
    pub enrolled_count: usize,
    pub total_credits: f64,
    pub total_clock_hours: f64,
}
