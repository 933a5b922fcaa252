//! Course loading
//!
//! Drives a [`CourseSource`] into a [`CatalogView`]. The view is borrowed only
//! to begin and to finish the load, never across the fetch, so the view stays
//! usable (and shows `loading`) while the request is in flight. Failures are
//! logged and recorded on the store, never returned to the caller.

use std::cell::RefCell;

use crate::app::catalog::CatalogView;
use crate::config::FetchConfig;
use crate::error::Result;
use crate::interface::CourseSource;
use crate::model::structs::{Course, LoadState};

/// Fetch with up to `max_attempts` tries (at least one).
pub async fn fetch_with_retry<S: CourseSource>(
    source: &S,
    config: &FetchConfig,
) -> Result<Vec<Course>> {
    let attempts = config.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match source.fetch_courses(&config.endpoint).await {
            Ok(courses) => return Ok(courses),
            Err(e) if attempt < attempts => {
                log::warn!("Fetching courses failed (attempt {attempt}/{attempts}): {e}");
                attempt += 1;
                #[cfg(feature = "no-wasm")]
                tokio::time::sleep(std::time::Duration::from_millis(config.retry_delay_ms)).await;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn load_if<S, F>(view: &RefCell<CatalogView>, source: &S, allowed: F) -> bool
where
    S: CourseSource,
    F: FnOnce(&LoadState) -> bool,
{
    let fetch = {
        let mut view = view.borrow_mut();
        if !allowed(view.store().state()) || !view.begin_load() {
            log::debug!("Course load skipped, store is {:?}", view.store().state());
            return false;
        }
        view.fetch_config().clone()
    };

    let result = fetch_with_retry(source, &fetch).await;
    view.borrow_mut().finish_load(result);
    true
}

/// One-shot load on mount; does nothing unless the store is still idle.
/// Returns whether a fetch was made.
pub async fn mount<S: CourseSource>(view: &RefCell<CatalogView>, source: &S) -> bool {
    load_if(view, source, |state| state == &LoadState::Idle).await
}

/// Explicit reload after a failed mount.
pub async fn retry<S: CourseSource>(view: &RefCell<CatalogView>, source: &S) -> bool {
    load_if(view, source, |state| matches!(state, LoadState::Failed(_))).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::CatalogConfig;
    use crate::error::ErrorKind;
    use crate::model::structs::CourseId;
    use std::cell::Cell;
    use std::time::Duration;

    /// In-memory source failing the first `failures` calls.
    pub(crate) struct FakeSource {
        pub courses: Vec<Course>,
        pub failures: u32,
        pub delay: Option<Duration>,
        pub calls: Cell<u32>,
    }

    impl FakeSource {
        pub(crate) fn ok(courses: Vec<Course>) -> Self {
            Self {
                courses,
                failures: 0,
                delay: None,
                calls: Cell::new(0),
            }
        }

        pub(crate) fn failing(failures: u32) -> Self {
            Self {
                failures,
                ..Self::ok(Vec::new())
            }
        }
    }

    impl CourseSource for FakeSource {
        async fn fetch_courses(&self, _endpoint: &str) -> Result<Vec<Course>> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if call <= self.failures {
                return Err(ErrorKind::HttpStatus(503).into());
            }
            Ok(self.courses.clone())
        }
    }

    fn course(id: u64) -> Course {
        Course {
            id: id.into(),
            trimester: "Fall".into(),
            course_number: format!("CS{id}"),
            course_name: "Intro".into(),
            semester_credits: 3.0,
            total_clock_hours: 45.0,
        }
    }

    fn quick(max_attempts: u32) -> FetchConfig {
        FetchConfig {
            max_attempts,
            retry_delay_ms: 1,
            ..FetchConfig::default()
        }
    }

    fn view() -> RefCell<CatalogView> {
        RefCell::new(CatalogView::new(CatalogConfig::default()))
    }

    #[tokio::test]
    async fn mount_loads_exactly_once() {
        let source = FakeSource::ok(vec![course(1), course(2)]);
        let view = view();

        assert!(mount(&view, &source).await);
        assert!(!mount(&view, &source).await);

        assert_eq!(source.calls.get(), 1);
        let view = view.borrow();
        assert_eq!(view.store().len(), 2);
        assert_eq!(view.store().state(), &LoadState::Loaded);
        assert!(!view.page().loading);
    }

    #[tokio::test]
    async fn failure_is_recorded_without_retry_by_default() {
        let source = FakeSource::failing(1);
        let view = view();

        assert!(mount(&view, &source).await);

        assert_eq!(source.calls.get(), 1);
        let page = view.borrow().page();
        assert!(page.rows.is_empty());
        assert!(!page.loading);
        assert!(matches!(view.borrow().store().state(), LoadState::Failed(_)));
    }

    #[tokio::test]
    async fn retry_only_reloads_a_failed_store() {
        let source = FakeSource {
            failures: 1,
            ..FakeSource::ok(vec![course(1), course(2)])
        };
        let view = view();

        assert!(!retry(&view, &source).await);
        assert_eq!(source.calls.get(), 0);

        mount(&view, &source).await;
        // mount does not refetch, retry does
        assert!(!mount(&view, &source).await);
        assert_eq!(source.calls.get(), 1);

        assert!(retry(&view, &source).await);
        assert_eq!(view.borrow().page().filtered_count, 2);
        assert!(!retry(&view, &source).await);
        assert_eq!(source.calls.get(), 2);
    }

    #[tokio::test]
    async fn view_stays_usable_while_fetch_is_in_flight() {
        let source = FakeSource {
            delay: Some(Duration::from_millis(50)),
            ..FakeSource::ok(vec![course(1), course(2)])
        };
        let view = view();

        let observe = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let page = view.borrow().page();
            view.borrow_mut().set_search_term("cs2");
            let err = view.borrow_mut().enroll(&CourseId::Number(2)).unwrap_err();
            (page, err)
        };

        let (fetched, (during, err)) = tokio::join!(mount(&view, &source), observe);

        assert!(fetched);
        assert!(during.loading);
        assert!(during.rows.is_empty());
        assert!(matches!(err.kind(), ErrorKind::CourseNotFound(_)));

        let after = view.borrow().page();
        assert!(!after.loading);
        assert_eq!(view.borrow().search_term(), "cs2");
        assert_eq!(after.filtered_count, 1);
    }

    #[tokio::test]
    async fn retries_up_to_max_attempts() {
        let source = FakeSource {
            failures: 2,
            ..FakeSource::ok(vec![course(7)])
        };
        let courses = fetch_with_retry(&source, &quick(3)).await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(source.calls.get(), 3);

        let source = FakeSource::failing(5);
        assert!(fetch_with_retry(&source, &quick(2)).await.is_err());
        assert_eq!(source.calls.get(), 2);
    }

    #[tokio::test]
    async fn zero_attempts_still_fetches_once() {
        let source = FakeSource::ok(vec![course(1)]);
        assert!(fetch_with_retry(&source, &quick(0)).await.is_ok());
        assert_eq!(source.calls.get(), 1);
    }
}
