//! Filter → sort → paginate
//!
//! Pure functions over a course slice. None of them touch the store.

use crate::model::structs::{Course, SortConfig};

/// Courses whose number or name contains `term`, case-insensitively.
/// An empty term keeps everything.
pub fn filter<'a>(courses: &'a [Course], term: &str) -> Vec<&'a Course> {
    let term = term.to_lowercase();
    courses
        .iter()
        .filter(|course| {
            course.course_number.to_lowercase().contains(&term)
                || course.course_name.to_lowercase().contains(&term)
        })
        .collect()
}

/// Stable sort; ties keep their incoming order in both directions, so
/// descending is the exact reverse of ascending only when the key has no ties.
pub fn sort(courses: &mut [&Course], config: &SortConfig) {
    if config.key.is_some() {
        courses.sort_by(|a, b| config.compare(a, b));
    }
}

pub fn total_pages(count: usize, rows_per_page: usize) -> usize {
    count.div_ceil(rows_per_page.max(1)).max(1)
}

/// Rows `[(page-1)*rows, page*rows)`, empty when the page lies past the end.
pub fn paginate<T: Clone>(items: &[T], page: usize, rows_per_page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(rows_per_page);
    items
        .iter()
        .skip(start)
        .take(rows_per_page)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub rows_per_page: usize,
}

impl Pagination {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            current_page: 1,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.rows_per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.current_page < self.total_pages(count)
    }

    /// Returns whether the page moved.
    pub fn next(&mut self, count: usize) -> bool {
        if self.has_next(count) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}
