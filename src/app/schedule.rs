//! Schedule view: the enrolled courses, with drop.

use crate::app::registry::SharedRegistry;
use crate::model::dtos::SchedulePage;
use crate::model::structs::CourseId;

#[derive(Debug, Clone)]
pub struct ScheduleView {
    registry: SharedRegistry,
}

impl ScheduleView {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }

    pub fn drop_course(&self, id: &CourseId) -> usize {
        self.registry.borrow_mut().drop_course(id)
    }

    pub fn page(&self) -> SchedulePage {
        let registry = self.registry.borrow();
        SchedulePage {
            rows: registry.list().to_vec(),
            enrolled_count: registry.len(),
            total_credits: registry.total_credits(),
            total_clock_hours: registry.total_clock_hours(),
        }
    }
}
