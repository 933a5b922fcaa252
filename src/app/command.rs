//! Terminal commands for driving the two views.

use std::str::FromStr;

use crate::error::{Error, ErrorKind};
use crate::model::structs::{CourseId, SortKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Sort(SortKey),
    Next,
    Previous,
    Enroll(CourseId),
    Drop(CourseId),
    Catalog,
    Schedule,
    Retry,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <text>   filter by course number or name (empty clears)
  sort <column>   trimester | courseNumber | courseName | semesterCredits | totalClockHours
  next | prev     move one page
  enroll <id>     add a course to the schedule
  drop <id>       remove a course from the schedule
  catalog         show the catalog page
  schedule        show the schedule
  retry           reload after a failed fetch
  help | quit";

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "search" | "s" => Command::Search(rest.to_string()),
            "sort" => Command::Sort(rest.parse()?),
            "next" | "n" => Command::Next,
            "prev" | "previous" | "p" => Command::Previous,
            "enroll" => Command::Enroll(rest.parse()?),
            "drop" => Command::Drop(rest.parse()?),
            "catalog" | "ls" | "" => Command::Catalog,
            "schedule" => Command::Schedule,
            "retry" => Command::Retry,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(ErrorKind::ParseError(format!("unknown command: {other}")).into())
            }
        };
        Ok(command)
    }
}
