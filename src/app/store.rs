//! Course store
//!
//! Holds the raw course list and where its one-shot load stands. The async
//! fetch itself lives in [`super::request`]; the store only records the
//! transitions so they can be driven and checked synchronously.

use crate::error::Result;
use crate::model::structs::{Course, CourseId, LoadState, SortConfig};

#[derive(Debug, Default)]
pub struct CourseStore {
    courses: Vec<Course>,
    state: LoadState,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses,
            state: LoadState::Loaded,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Move to `Loading`. Returns false when a load is in flight or already
    /// succeeded, in which case nothing should be fetched.
    pub fn begin_load(&mut self) -> bool {
        match self.state {
            LoadState::Idle | LoadState::Failed(_) => {
                self.state = LoadState::Loading;
                true
            }
            LoadState::Loading | LoadState::Loaded => false,
        }
    }

    pub fn finish_load(&mut self, result: Result<Vec<Course>>) {
        match result {
            Ok(courses) => {
                log::info!("Loaded {} courses", courses.len());
                self.courses = courses;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                log::error!("Error fetching courses: {e}");
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }

    /// The in-flight fetch was dropped.
    pub fn cancel_load(&mut self) {
        if self.is_loading() {
            self.state = LoadState::Idle;
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn find(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| &course.id == id)
    }

    /// Reorder the stored list in place (stable).
    pub fn sort_in_place(&mut self, sort: &SortConfig) {
        self.courses.sort_by(|a, b| sort.compare(a, b));
    }
}
