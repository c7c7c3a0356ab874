//! The static calendar datasets.
//!
//! Terms, holidays and key dates are loaded once at startup and never change
//! afterwards. Every query borrows the dataset immutably; the server shares it
//! behind an `Arc`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Utc;
use chrono_tz::Tz;
use serde::de::DeserializeOwned;

use crate::error::{CalendarError, CalendarResult};
use crate::models::{CalendarInstant, KeyDate, Term};

/// Term ranges keyed by school year (e.g. `"2024"`), in configured order.
pub type TermsByYear = BTreeMap<String, Vec<Term>>;

pub const TERMS_FILE: &str = "terms.json";
pub const HOLIDAYS_FILE: &str = "holidays.json";
pub const KEY_DATES_FILE: &str = "key-dates.json";

/// Read-only calendar data plus the home timezone used to interpret it.
#[derive(Debug, Clone)]
pub struct CalendarDataset {
    terms: TermsByYear,
    holidays: Vec<KeyDate>,
    key_dates: Vec<KeyDate>,
    timezone: Tz,
}

impl CalendarDataset {
    pub fn new(
        terms: TermsByYear,
        holidays: Vec<KeyDate>,
        key_dates: Vec<KeyDate>,
        timezone: Tz,
    ) -> Self {
        Self {
            terms,
            holidays,
            key_dates,
            timezone,
        }
    }

    /// Load `terms.json`, `holidays.json` and `key-dates.json` from `dir`.
    ///
    /// # Errors
    /// Returns [`CalendarError::Io`] if a file is missing or unreadable and
    /// [`CalendarError::Json`] if a file has the wrong shape. Date strings are
    /// not validated here; a bad date fails the first query that touches it.
    pub fn load<P: AsRef<Path>>(dir: P, timezone: Tz) -> CalendarResult<Self> {
        let dir = dir.as_ref();
        let terms: TermsByYear = read_json(&dir.join(TERMS_FILE))?;
        let holidays: Vec<KeyDate> = read_json(&dir.join(HOLIDAYS_FILE))?;
        let key_dates: Vec<KeyDate> = read_json(&dir.join(KEY_DATES_FILE))?;

        if terms.is_empty() {
            log::warn!("No terms configured in {}", dir.join(TERMS_FILE).display());
        }
        log::info!(
            "Loaded calendar data from {}: {} years, {} holidays, {} key dates",
            dir.display(),
            terms.len(),
            holidays.len(),
            key_dates.len()
        );

        Ok(Self::new(terms, holidays, key_dates, timezone))
    }

    pub fn terms(&self) -> &TermsByYear {
        &self.terms
    }

    /// Terms of `year` in configured order; empty when the year is not configured.
    pub fn terms_for(&self, year: &str) -> &[Term] {
        self.terms.get(year).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    pub fn holidays(&self) -> &[KeyDate] {
        &self.holidays
    }

    pub fn key_dates(&self) -> &[KeyDate] {
        &self.key_dates
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Current wall-clock time in the home timezone.
    pub fn now(&self) -> CalendarInstant {
        Utc::now().with_timezone(&self.timezone)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> CalendarResult<T> {
    let raw = fs::read_to_string(path).map_err(|source| CalendarError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CalendarError::Json {
        path: path.to_path_buf(),
        source,
    })
}
