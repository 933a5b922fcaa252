#![allow(async_fn_in_trait)] // 允许在内部 trait 中使用 async fn

use crate::config::FetchConfig;
use crate::error::Result;
use crate::model::structs::Course;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance for `config`
    async fn new(config: &FetchConfig) -> Result<Self>
    where
        Self: Sized;
}

/// Anything that can hand back the full course list
pub trait CourseSource {
    /// Fetch every course from `endpoint`; a non-success status is an error
    async fn fetch_courses(&self, endpoint: &str) -> Result<Vec<Course>>;
}
