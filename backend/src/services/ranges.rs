//! Selection of holidays and key dates that fall inside a term.

use chrono_tz::Tz;

use crate::error::CalendarResult;
use crate::models::{end_of_day, CalendarInstant, KeyDate};

/// Holidays falling strictly inside `(start, end)`, in dataset order.
///
/// A holiday occupies its whole calendar day, so it counts only when it begins
/// after `start` and its day is over by `end`. A holiday on the term's first or
/// last day is therefore excluded, one on the day before the last is included.
pub fn holidays_in_range(
    holidays: &[KeyDate],
    start: &CalendarInstant,
    end: &CalendarInstant,
    year: &str,
    tz: Tz,
) -> CalendarResult<Vec<KeyDate>> {
    let mut selected = Vec::new();
    for holiday in holidays {
        let date = holiday.date_in(year, tz)?;
        if *start < date && end_of_day(&date)? <= *end {
            selected.push(holiday.clone());
        }
    }
    Ok(selected)
}

/// Key dates falling strictly inside `(start, end)`, in dataset order.
pub fn key_dates_in_range(
    key_dates: &[KeyDate],
    start: &CalendarInstant,
    end: &CalendarInstant,
    year: &str,
    tz: Tz,
) -> CalendarResult<Vec<KeyDate>> {
    let mut selected = Vec::new();
    for key_date in key_dates {
        let date = key_date.date_in(year, tz)?;
        if *start < date && date < *end {
            selected.push(key_date.clone());
        }
    }
    Ok(selected)
}
