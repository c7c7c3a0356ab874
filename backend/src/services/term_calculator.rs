//! Per-term school day arithmetic.
//!
//! A term is split into a partial first week, a run of full weeks and a
//! partial last week:
//!
//! ```text
//!   start                                                       end
//!     │ first week │ full week │ full week │ ... │ last week │
//! ```
//!
//! Full weeks are counted by integer division, so any days left over after
//! removing the partial weeks are dropped from the school-day count.

use crate::data::CalendarDataset;
use crate::error::CalendarResult;
use crate::models::{days_between, weekday_index, Term};
use crate::routes::terms::{TermDetail, TermSummary};

use super::ranges::{holidays_in_range, key_dates_in_range};

/// School days credited to the week the term starts in.
pub(crate) fn first_week_days(start_weekday: u32) -> i64 {
    (5 - i64::from(start_weekday) - 1).max(0)
}

/// School days credited to the week the term ends in, Monday through the end day.
pub(crate) fn last_week_days(end_weekday: u32) -> i64 {
    i64::from(end_weekday) + 1
}

/// Compute the statistics of `term` in `year`, minus in-term holidays.
pub fn calculate_term(
    dataset: &CalendarDataset,
    term: &Term,
    year: &str,
) -> CalendarResult<TermSummary> {
    let tz = dataset.timezone();
    let (start, end) = term.dates(year, tz)?;

    let first = first_week_days(weekday_index(&start));
    let last = last_week_days(weekday_index(&end));
    let total_calendar_days = days_between(&start, &end) + 1;
    let school_weeks = (total_calendar_days - first - last) / 7;
    let holidays = holidays_in_range(dataset.holidays(), &start, &end, year, tz)?;
    let school_days = school_weeks * 5 + first + last - holidays.len() as i64;

    log::debug!(
        "Term {} - {} {}: {} days, {} full weeks, {} + {} boundary days, {} holidays",
        term.start,
        term.end,
        year,
        total_calendar_days,
        school_weeks,
        first,
        last,
        holidays.len()
    );

    Ok(TermSummary {
        year: year.to_string(),
        start_date: term.start.clone(),
        end_date: term.end.clone(),
        total_calendar_days,
        school_weeks,
        school_days,
        weekends: school_weeks + 1,
        days_remaining: None,
    })
}

/// Term summary plus the holidays and key dates it contains.
///
/// `number` is the 1-based position of the term within its year.
pub fn describe_term(
    dataset: &CalendarDataset,
    number: usize,
    term: &Term,
    year: &str,
) -> CalendarResult<TermDetail> {
    let tz = dataset.timezone();
    let summary = calculate_term(dataset, term, year)?;
    let (start, end) = term.dates(year, tz)?;

    Ok(TermDetail {
        term: number,
        summary,
        holidays: holidays_in_range(dataset.holidays(), &start, &end, year, tz)?,
        key_dates: key_dates_in_range(dataset.key_dates(), &start, &end, year, tz)?,
    })
}
