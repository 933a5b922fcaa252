//! Enrollment registry
//!
//! The one list of enrolled courses. Both views hold a [`SharedRegistry`]
//! handle and only go through `enroll`, `drop_course` and `list`.

use std::{cell::RefCell, rc::Rc};

use crate::error::{ErrorKind, Result};
use crate::model::structs::{Course, CourseId};

pub type SharedRegistry = Rc<RefCell<EnrollmentRegistry>>;

#[derive(Debug, Clone)]
pub struct EnrollmentRegistry {
    courses: Vec<Course>,
    allow_duplicates: bool,
}

impl Default for EnrollmentRegistry {
    fn default() -> Self {
        Self::new(true)
    }
}

impl EnrollmentRegistry {
    pub fn new(allow_duplicates: bool) -> Self {
        Self {
            courses: Vec::new(),
            allow_duplicates,
        }
    }

    pub fn shared(allow_duplicates: bool) -> SharedRegistry {
        Rc::new(RefCell::new(Self::new(allow_duplicates)))
    }

    pub fn enroll(&mut self, course: Course) -> Result<()> {
        if !self.allow_duplicates && self.contains(&course.id) {
            return Err(ErrorKind::AlreadyEnrolled(course.id).into());
        }
        log::debug!("Enrolled {} ({})", course.course_number, course.id);
        self.courses.push(course);
        Ok(())
    }

    /// Removes every entry with `id`; returns how many went.
    pub fn drop_course(&mut self, id: &CourseId) -> usize {
        let before = self.courses.len();
        self.courses.retain(|course| &course.id != id);
        let removed = before - self.courses.len();
        log::debug!("Dropped {removed} enrollment(s) for {id}");
        removed
    }

    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn contains(&self, id: &CourseId) -> bool {
        self.courses.iter().any(|course| &course.id == id)
    }

    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|course| course.semester_credits).sum()
    }

    pub fn total_clock_hours(&self) -> f64 {
        self.courses.iter().map(|course| course.total_clock_hours).sum()
    }
}
