//! Service layer for the calendar computations.
//!
//! This module contains the pure computations that sit between the loaded
//! dataset and the HTTP/CLI front ends. Every function borrows the dataset
//! immutably; the `*_at` variants take the present moment explicitly, the
//! `get_*` variants read the wall clock once per call.

pub mod ranges;

pub mod summary;

pub mod term_calculator;

pub mod timeline;


#[cfg(test)]
#[path = "summary_tests.rs"]
mod summary_tests;

pub use ranges::{holidays_in_range, key_dates_in_range};
pub use summary::{
    get_summary, get_term_detail, get_terms, get_upcoming_terms, summarize_year_at,
    upcoming_terms_at,
};
pub use term_calculator::{calculate_term, describe_term};
pub use timeline::{get_events, merge_events_at};
