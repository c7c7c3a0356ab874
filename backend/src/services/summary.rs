//! Year-level aggregation over the configured terms.

use crate::data::CalendarDataset;
use crate::error::CalendarResult;
use crate::models::{day_month, CalendarInstant, Term};
use crate::routes::summary::{CurrentTerm, YearSummary};
use crate::routes::terms::{TermDetail, TermSummary};

use super::term_calculator::{calculate_term, describe_term};

/// Summarize every term of `year` as seen at `now`.
///
/// The first term with `start < now < end` is the current term; its
/// `days_remaining` counts school days from today through the term's end.
/// `school_days_remaining` adds that figure for the current term and the full
/// `school_days` of every other term, including terms that are already over.
/// A year with no configured terms yields [`YearSummary::empty`].
pub fn summarize_year_at(
    dataset: &CalendarDataset,
    year: &str,
    now: &CalendarInstant,
) -> CalendarResult<YearSummary> {
    let tz = dataset.timezone();
    let now = now.with_timezone(&tz);
    let terms = dataset.terms_for(year);
    if terms.is_empty() {
        log::debug!("No terms configured for {}", year);
    }

    let mut summary = YearSummary::empty();
    for (i, term) in terms.iter().enumerate() {
        let mut this = calculate_term(dataset, term, year)?;
        let (start, end) = term.dates(year, tz)?;

        if summary.current_term == CurrentTerm::Holidays && start < now && now < end {
            let rest_of_term = Term::new(day_month(&now), term.end.clone());
            let days_remaining = calculate_term(dataset, &rest_of_term, year)?.school_days;

            this.days_remaining = Some(days_remaining);
            summary.school_days_remaining += days_remaining;
            summary.current_term = CurrentTerm::Term(i + 1);
            summary.term = Some(this.clone());
        } else {
            summary.school_days_remaining += this.school_days;
        }

        summary.school_days_total += this.school_days;
    }

    Ok(summary)
}

/// Summaries of every term of `year`, in configured order.
pub fn get_terms(dataset: &CalendarDataset, year: &str) -> CalendarResult<Vec<TermSummary>> {
    dataset
        .terms_for(year)
        .iter()
        .map(|term| calculate_term(dataset, term, year))
        .collect()
}

/// Detail of the `number`-th (1-based) term of `year`, or `None` if there is no such term.
pub fn get_term_detail(
    dataset: &CalendarDataset,
    year: &str,
    number: usize,
) -> CalendarResult<Option<TermDetail>> {
    let Some(term) = number
        .checked_sub(1)
        .and_then(|index| dataset.terms_for(year).get(index))
    else {
        return Ok(None);
    };
    describe_term(dataset, number, term, year).map(Some)
}

/// Summaries of the terms of `year` that have not started at `now`.
pub fn upcoming_terms_at(
    dataset: &CalendarDataset,
    year: &str,
    now: &CalendarInstant,
) -> CalendarResult<Vec<TermSummary>> {
    let tz = dataset.timezone();
    let mut upcoming = Vec::new();
    for term in dataset.terms_for(year) {
        let (start, _) = term.dates(year, tz)?;
        if start < *now {
            continue;
        }
        upcoming.push(calculate_term(dataset, term, year)?);
    }
    Ok(upcoming)
}

/// Year summary relative to the current wall-clock time.
pub fn get_summary(dataset: &CalendarDataset, year: &str) -> CalendarResult<YearSummary> {
    summarize_year_at(dataset, year, &dataset.now())
}

/// Upcoming terms relative to the current wall-clock time.
pub fn get_upcoming_terms(
    dataset: &CalendarDataset,
    year: &str,
) -> CalendarResult<Vec<TermSummary>> {
    upcoming_terms_at(dataset, year, &dataset.now())
}
