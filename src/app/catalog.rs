//! Catalog view state
//!
//! Owns the course store plus the search term, sort configuration and page
//! the user has picked. [`CatalogView::page`] derives the visible rows from
//! those four inputs and nothing else.

use crate::app::pipeline::{self, Pagination};
use crate::app::registry::{EnrollmentRegistry, SharedRegistry};
use crate::app::store::CourseStore;
use crate::config::{CatalogConfig, FetchConfig, SortMode};
use crate::error::{ErrorKind, Result};
use crate::model::dtos::CatalogPage;
use crate::model::structs::{Course, CourseId, SortConfig, SortKey};

#[derive(Debug)]
pub struct CatalogView {
    config: CatalogConfig,
    store: CourseStore,
    search_term: String,
    sort: SortConfig,
    pagination: Pagination,
    registry: SharedRegistry,
}

impl CatalogView {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_store(config, CourseStore::new())
    }

    /// The enrollment registry is created here from `allow_duplicate_enrollment`;
    /// hand [`CatalogView::registry`] to the schedule view.
    pub fn with_store(config: CatalogConfig, store: CourseStore) -> Self {
        let pagination = Pagination::new(config.rows_per_page);
        let registry = EnrollmentRegistry::shared(config.allow_duplicate_enrollment);
        Self {
            config,
            store,
            search_term: String::new(),
            sort: SortConfig::default(),
            pagination,
            registry,
        }
    }

    pub fn registry(&self) -> SharedRegistry {
        self.registry.clone()
    }

    pub fn fetch_config(&self) -> &FetchConfig {
        &self.config.fetch
    }

    /// Mark the store as loading. False means no fetch should be started.
    pub fn begin_load(&mut self) -> bool {
        self.store.begin_load()
    }

    pub fn finish_load(&mut self, result: Result<Vec<Course>>) {
        self.store.finish_load(result);
    }

    /// Call when an in-flight fetch was dropped before it finished.
    pub fn cancel_load(&mut self) {
        self.store.cancel_load();
    }

    pub fn store(&self) -> &CourseStore {
        &self.store
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        if self.config.reset_page_on_query_change {
            self.pagination.reset();
        }
    }

    pub fn sort_by(&mut self, key: SortKey) {
        self.sort.toggle(key);
        if self.config.sort_mode == SortMode::Persistent {
            self.store.sort_in_place(&self.sort);
        }
        if self.config.reset_page_on_query_change {
            self.pagination.reset();
        }
    }

    pub fn next_page(&mut self) -> bool {
        let count = self.filtered_count();
        self.pagination.next(count)
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }

    pub fn enroll(&mut self, id: &CourseId) -> Result<()> {
        let course = self
            .store
            .find(id)
            .cloned()
            .ok_or_else(|| ErrorKind::CourseNotFound(id.clone()))?;
        self.registry.borrow_mut().enroll(course)
    }

    pub fn enrolled_count(&self) -> usize {
        self.registry.borrow().len()
    }

    fn filtered_count(&self) -> usize {
        pipeline::filter(self.store.courses(), &self.search_term).len()
    }

    /// Filtered and sorted, before pagination.
    pub fn visible_courses(&self) -> Vec<&Course> {
        let mut rows = pipeline::filter(self.store.courses(), &self.search_term);
        pipeline::sort(&mut rows, &self.sort);
        rows
    }

    pub fn page(&self) -> CatalogPage {
        let visible = self.visible_courses();
        let filtered_count = visible.len();
        let Pagination {
            current_page,
            rows_per_page,
        } = self.pagination;
        let rows = pipeline::paginate(&visible, current_page, rows_per_page)
            .into_iter()
            .cloned()
            .collect();

        CatalogPage {
            rows,
            current_page,
            total_pages: self.pagination.total_pages(filtered_count),
            filtered_count,
            has_previous: self.pagination.has_previous(),
            has_next: self.pagination.has_next(filtered_count),
            enrolled_count: self.enrolled_count(),
            loading: self.store.is_loading(),
            sort: self.sort,
        }
    }
}
