use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::time::{parse_date, CalendarInstant};
use crate::error::CalendarResult;

/// One contiguous instruction period, bounded by day/month strings without a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub start: String,
    pub end: String,
}

impl Term {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Start and end instants of the term in `year`.
    pub fn dates(&self, year: &str, tz: Tz) -> CalendarResult<(CalendarInstant, CalendarInstant)> {
        let start = parse_date(&self.start, year, tz)?;
        let end = parse_date(&self.end, year, tz)?;
        Ok((start, end))
    }
}

/// A named date: a public holiday, another key date, or a synthesized term boundary.
///
/// `date` is either a bare day/month (`"6 February"`) or carries its own year
/// (`"6 February 2024"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDate {
    pub name: String,
    pub date: String,
}

impl KeyDate {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
        }
    }

    /// Resolve the date, using `year` only when the date has none of its own.
    pub fn date_in(&self, year: &str, tz: Tz) -> CalendarResult<CalendarInstant> {
        parse_date(&self.date, year, tz)
    }
}
