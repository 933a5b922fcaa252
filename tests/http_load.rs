use std::cell::RefCell;

use funky_catalog::app::request::mount;
use funky_catalog::app::{CatalogView, ScheduleView};
use funky_catalog::config::{CatalogConfig, FetchConfig};
use funky_catalog::interface::{CourseSource, HttpClient};
use funky_catalog::model::structs::{CourseId, LoadState, SortKey};
use funky_catalog::NoWasmClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const COURSES: &str = r#"[
  {"id":1,"trimester":"Fall","courseNumber":"CS101","courseName":"Intro",
   "semesterCredits":3,"totalClockHours":45},
  {"id":2,"trimester":"Spring","courseNumber":"CS102","courseName":"Data",
   "semesterCredits":4,"totalClockHours":60}
]"#;

/// Serves one canned HTTP response per accepted connection.
async fn serve(status: &'static str, body: &'static str, connections: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        for _ in 0..connections {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await.unwrap();
            let response = format!(
                "HTTP/1.1 {status}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        }
    });

    format!("http://{addr}/api/courses.json")
}

fn config_for(endpoint: String) -> CatalogConfig {
    CatalogConfig {
        fetch: FetchConfig {
            endpoint,
            ..FetchConfig::default()
        },
        ..CatalogConfig::default()
    }
}

#[tokio::test]
async fn client_decodes_course_list() {
    let url = serve("200 OK", COURSES, 1).await;
    let client = NoWasmClient::new(&FetchConfig::default()).await.unwrap();

    let courses = client.fetch_courses(&url).await.unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[1].course_number, "CS102");
    assert_eq!(courses[1].total_clock_hours, 60.0);
}

#[tokio::test]
async fn non_success_status_fails_the_load() {
    let url = serve("404 Not Found", "{}", 1).await;
    let config = config_for(url);
    let client = NoWasmClient::new(&config.fetch).await.unwrap();
    let catalog = RefCell::new(CatalogView::new(config));

    assert!(mount(&catalog, &client).await);

    let catalog = catalog.into_inner();
    let page = catalog.page();
    assert!(!page.loading);
    assert!(page.rows.is_empty());
    assert_eq!(page.total_pages, 1);
    assert!(!page.has_previous && !page.has_next);
    assert!(matches!(
        catalog.store().state(),
        LoadState::Failed(reason) if reason.contains("404")
    ));
}

#[tokio::test]
async fn unreachable_endpoint_fails_the_load() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = config_for(format!("http://{addr}/api/courses.json"));
    let client = NoWasmClient::new(&config.fetch).await.unwrap();
    let catalog = RefCell::new(CatalogView::new(config));

    mount(&catalog, &client).await;
    let catalog = catalog.into_inner();
    assert!(matches!(catalog.store().state(), LoadState::Failed(_)));
    assert!(catalog.store().is_empty());
}

#[tokio::test]
async fn search_sort_enroll_and_drop_over_http() {
    let url = serve("200 OK", COURSES, 1).await;
    let config = config_for(url);
    let client = NoWasmClient::new(&config.fetch).await.unwrap();
    let mut catalog = CatalogView::new(config);
    let schedule = ScheduleView::new(catalog.registry());

    assert!(catalog.begin_load());
    assert!(catalog.page().loading);
    let result = client.fetch_courses(&catalog.fetch_config().endpoint).await;
    catalog.finish_load(result);
    assert!(!catalog.page().loading);

    catalog.set_search_term("cs10");
    assert_eq!(catalog.page().rows.len(), 2);

    catalog.sort_by(SortKey::CourseName);
    let names: Vec<String> = catalog
        .page()
        .rows
        .iter()
        .map(|c| c.course_name.clone())
        .collect();
    assert_eq!(names, ["Data", "Intro"]);

    catalog.enroll(&CourseId::Number(2)).unwrap();
    assert_eq!(schedule.page().rows.len(), 1);
    assert_eq!(schedule.page().rows[0].course_number, "CS102");
    assert_eq!(catalog.page().enrolled_count, 1);

    schedule.drop_course(&CourseId::Number(2));
    assert!(schedule.page().rows.is_empty());
    assert_eq!(catalog.page().enrolled_count, 0);
}
