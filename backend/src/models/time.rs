//! Calendar instants in the home timezone.
//!
//! All dates in the datasets are day/month strings such as `"2 February"`,
//! optionally followed by a year (`"2 February 2024"`). They are resolved to
//! local midnight in a single fixed timezone and compared as instants.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{CalendarError, CalendarResult};

/// A parsed date: local midnight of a calendar day in the home timezone.
pub type CalendarInstant = DateTime<Tz>;

const DATE_FORMAT: &str = "%d %B %Y";
const DAY_MONTH_FORMAT: &str = "%-d %B";

/// Parse a `"<day> <month>"` string in `year`, or a `"<day> <month> <year>"`
/// string using its own year.
///
/// Month names must be spelled out in full; case does not matter.
///
/// # Errors
/// Returns [`CalendarError::MalformedDate`] when the text does not have two or
/// three words or abbreviates the month, and [`CalendarError::InvalidDate`]
/// when chrono rejects it. An empty `year` with a bare day/month is invalid.
pub fn parse_date(date: &str, year: &str, tz: Tz) -> CalendarResult<CalendarInstant> {
    let parts: Vec<&str> = date.split_whitespace().collect();
    let (month, text) = match parts.as_slice() {
        [day, month] => (*month, format!("{} {} {}", day, month, year.trim())),
        [day, month, own_year] => (*month, format!("{} {} {}", day, month, own_year)),
        _ => return Err(CalendarError::MalformedDate(date.to_string())),
    };

    let day = NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|source| {
        CalendarError::InvalidDate {
            input: text.trim().to_string(),
            source,
        }
    })?;

    // %B also accepts three-letter abbreviations
    if !day.format("%B").to_string().eq_ignore_ascii_case(month) {
        return Err(CalendarError::MalformedDate(date.to_string()));
    }

    local_midnight(day, tz)
}

/// Step used to walk past a DST gap; current tz offsets change in multiples of it.
const GAP_STEP_MINUTES: i64 = 15;

/// Start of `day` in `tz`: local midnight, or the first local time after a
/// DST gap when the clocks skip midnight (e.g. Chile, Cuba).
pub fn local_midnight(day: NaiveDate, tz: Tz) -> CalendarResult<CalendarInstant> {
    let midnight = day.and_time(NaiveTime::MIN);
    (0..24 * 60 / GAP_STEP_MINUTES)
        .map(|step| midnight + Duration::minutes(step * GAP_STEP_MINUTES))
        .take_while(|local| local.date() == day)
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .ok_or(CalendarError::NonexistentLocalTime(day))
}

/// Zero-based weekday index, Monday = 0 through Sunday = 6.
pub fn weekday_index(instant: &CalendarInstant) -> u32 {
    instant.weekday().num_days_from_monday()
}

/// Number of calendar days from `start`'s day to `end`'s day.
///
/// Uses the local calendar dates, so a DST change between the two never
/// shortens or lengthens the count.
pub fn days_between(start: &CalendarInstant, end: &CalendarInstant) -> i64 {
    (end.date_naive() - start.date_naive()).num_days()
}

/// Start of the following calendar day, i.e. the end of `instant`'s day.
pub fn end_of_day(instant: &CalendarInstant) -> CalendarResult<CalendarInstant> {
    let day = instant.date_naive();
    let next = day
        .succ_opt()
        .ok_or(CalendarError::NonexistentLocalTime(day))?;
    local_midnight(next, instant.timezone())
}

/// Format the day and month without a year, e.g. `"7 March"`.
pub fn day_month(instant: &CalendarInstant) -> String {
    instant.format(DAY_MONTH_FORMAT).to_string()
}
