//! Public API surface for the calendar backend.
//!
//! This file consolidates the input records, the computed payload types, and
//! the query functions used by the HTTP layer and the CLI.
//! All payload types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{CalendarInstant, KeyDate, Term};
pub use crate::routes::summary::{CurrentTerm, YearSummary, HOLIDAYS_LABEL};
pub use crate::routes::terms::{TermDetail, TermSummary};

pub use crate::data::CalendarDataset;
pub use crate::error::{CalendarError, CalendarResult};

pub use crate::services::{
    get_events, get_summary, get_term_detail, get_terms, get_upcoming_terms,
};
