use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::{Error, ErrorKind};

/// Course identifier as served by the catalog endpoint: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(u64),
    Text(String),
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CourseId::Number(n) => write!(f, "{n}"),
            CourseId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for CourseId {
    fn from(n: u64) -> Self {
        CourseId::Number(n)
    }
}

impl FromStr for CourseId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ErrorKind::ParseError("empty course id".to_string()).into());
        }
        Ok(s.parse::<u64>()
            .map(CourseId::Number)
            .unwrap_or_else(|_| CourseId::Text(s.to_string())))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub trimester: String,
    pub course_number: String,
    pub course_name: String,
    pub semester_credits: f64,
    pub total_clock_hours: f64,
}

/// Sortable catalog columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Trimester,
    CourseNumber,
    CourseName,
    SemesterCredits,
    TotalClockHours,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Trimester,
        SortKey::CourseNumber,
        SortKey::CourseName,
        SortKey::SemesterCredits,
        SortKey::TotalClockHours,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Trimester => "trimester",
            SortKey::CourseNumber => "courseNumber",
            SortKey::CourseName => "courseName",
            SortKey::SemesterCredits => "semesterCredits",
            SortKey::TotalClockHours => "totalClockHours",
        }
    }

    /// Natural ordering of the column: lexicographic for text, numeric for numbers.
    pub fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortKey::Trimester => a.trimester.cmp(&b.trimester),
            SortKey::CourseNumber => a.course_number.cmp(&b.course_number),
            SortKey::CourseName => a.course_name.cmp(&b.course_name),
            SortKey::SemesterCredits => a.semester_credits.total_cmp(&b.semester_credits),
            SortKey::TotalClockHours => a.total_clock_hours.total_cmp(&b.total_clock_hours),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ErrorKind::ParseError(format!("unknown sort key: {s}")).into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Header click: the active ascending key flips to descending, anything else
    /// sorts ascending by `key`.
    pub fn toggle(&mut self, key: SortKey) {
        self.direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = Some(key);
    }

    pub fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self.key {
            None => Ordering::Equal,
            Some(key) => match self.direction {
                SortDirection::Ascending => key.compare(a, b),
                SortDirection::Descending => key.compare(b, a),
            },
        }
    }
}

/// Where a course list is in its one-shot load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}
