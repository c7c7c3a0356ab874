//! Merged timeline of holidays, key dates and term boundaries.

use chrono::Datelike;

use crate::data::CalendarDataset;
use crate::error::CalendarResult;
use crate::models::{end_of_day, CalendarInstant, KeyDate};

/// Year used to resolve bare day/month dates on the timeline.
///
/// Holidays and key dates are stored without a year, so they are placed in
/// the current year of `now`. Term boundary events always carry their own year.
pub fn placeholder_year(now: &CalendarInstant) -> String {
    now.year().to_string()
}

/// "Term N Starts" / "Term N Ends" events for every configured term of every year.
pub fn term_boundary_events(dataset: &CalendarDataset) -> Vec<KeyDate> {
    let mut events = Vec::new();
    for (year, terms) in dataset.terms() {
        for (i, term) in terms.iter().enumerate() {
            events.push(KeyDate::new(
                format!("Term {} Starts", i + 1),
                format!("{} {}", term.start, year),
            ));
            events.push(KeyDate::new(
                format!("Term {} Ends", i + 1),
                format!("{} {}", term.end, year),
            ));
        }
    }
    events
}

/// All events in date order, starting from the first one whose day is not over at `now`.
///
/// Events on the same day keep their relative order: holidays, then key
/// dates, then term boundaries.
pub fn merge_events_at(
    dataset: &CalendarDataset,
    now: &CalendarInstant,
) -> CalendarResult<Vec<KeyDate>> {
    let tz = dataset.timezone();
    let year = placeholder_year(&now.with_timezone(&tz));

    let mut dated = Vec::new();
    for event in dataset
        .holidays()
        .iter()
        .chain(dataset.key_dates())
        .cloned()
        .chain(term_boundary_events(dataset))
    {
        let date = event.date_in(&year, tz)?;
        dated.push((date, event));
    }
    dated.sort_by_key(|(date, _)| *date);

    let mut first_upcoming = dated.len();
    for (i, (date, _)) in dated.iter().enumerate() {
        if end_of_day(date)? > *now {
            first_upcoming = i;
            break;
        }
    }

    log::debug!(
        "Timeline: {} events, {} upcoming",
        dated.len(),
        dated.len() - first_upcoming
    );

    Ok(dated
        .into_iter()
        .skip(first_upcoming)
        .map(|(_, event)| event)
        .collect())
}

/// Upcoming events relative to the current wall-clock time.
pub fn get_events(dataset: &CalendarDataset) -> CalendarResult<Vec<KeyDate>> {
    merge_events_at(dataset, &dataset.now())
}
