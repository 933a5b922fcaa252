//! Application module - catalog and schedule state
//!
//! The course store, the filter/sort/paginate pipeline, the shared enrollment
//! registry and the two views built on them. Loading goes through any
//! [`crate::interface::CourseSource`], so the same views run on the reqwest
//! client natively and on the gloo client in the browser.

pub mod catalog;
pub mod command;
pub mod display;
pub mod pipeline;
pub mod registry;
pub mod request;
pub mod schedule;
pub mod store;

pub use catalog::CatalogView;
pub use registry::{EnrollmentRegistry, SharedRegistry};
pub use schedule::ScheduleView;
pub use store::CourseStore;
