use crate::model::dtos::{CatalogPage, SchedulePage};
use crate::model::structs::{Course, SortDirection, SortKey};

const HEADERS: [(&str, SortKey); 5] = [
    ("Trimester", SortKey::Trimester),
    ("Course Number", SortKey::CourseNumber),
    ("Course Name", SortKey::CourseName),
    ("Semester Credits", SortKey::SemesterCredits),
    ("Total Clock Hours", SortKey::TotalClockHours),
];

fn header_line(page_sort: Option<(SortKey, SortDirection)>) -> String {
    HEADERS
        .iter()
        .map(|(title, key)| {
            let marker = match page_sort {
                Some((active, SortDirection::Ascending)) if active == *key => " ^",
                Some((active, SortDirection::Descending)) if active == *key => " v",
                _ => "",
            };
            format!("{:<20}", format!("{title}{marker}"))
        })
        .collect()
}

fn row_line(course: &Course) -> String {
    format!(
        "{:<20}{:<20}{:<20}{:<20}{:<20}id: {}",
        course.trimester,
        course.course_number,
        course.course_name,
        course.semester_credits,
        course.total_clock_hours,
        course.id
    )
}

pub fn render_catalog(page: &CatalogPage) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "==================School Catalog================== enrolled: {}",
        page.enrolled_count
    ));
    out.push(header_line(page.sort.key.map(|key| (key, page.sort.direction))));

    if page.loading {
        out.push("Loading...".to_string());
    } else {
        out.extend(page.rows.iter().map(row_line));
    }

    out.push(format!(
        "[{}Previous]  page {}/{}  [{}Next]  ({} matching)",
        if page.has_previous { "" } else { "x " },
        page.current_page,
        page.total_pages,
        if page.has_next { "" } else { "x " },
        page.filtered_count
    ));
    out.join("\n")
}

pub fn render_schedule(page: &SchedulePage) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "==================Class Schedule================== enrolled: {}",
        page.enrolled_count
    ));
    out.push(header_line(None));
    out.extend(page.rows.iter().map(row_line));
    out.push(format!(
        "total credits: {}  total clock hours: {}",
        page.total_credits, page.total_clock_hours
    ));
    out.join("\n")
}

pub fn print_catalog(page: &CatalogPage) {
    println!("{}", render_catalog(page));
}

pub fn print_schedule(page: &SchedulePage) {
    println!("{}", render_schedule(page));
}
