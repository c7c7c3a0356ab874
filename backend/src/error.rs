//! Error types for calendar computations and dataset loading.
//!
//! Every fallible operation in the crate returns [`CalendarResult`]. A date
//! that cannot be parsed aborts the whole computation it belongs to; there is
//! no partial output.

use std::path::PathBuf;

use chrono::NaiveDate;

/// Result type for calendar operations
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Error type for calendar operations
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// The text looked like a date but chrono rejected it (unknown month, day out of range, ...).
    #[error("Invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The text does not have the `<day> <month> [year]` shape.
    #[error("Malformed date '{0}': expected '<day> <month name>' or '<day> <month name> <year>'")]
    MalformedDate(String),

    /// The whole day is missing from the home timezone (e.g. Samoa, 30 December 2011).
    #[error("{0} does not exist in the home timezone")]
    NonexistentLocalTime(NaiveDate),

    /// Timezone name not present in the tz database.
    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    /// A dataset or configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file is not valid JSON for its expected shape.
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    Config(String),
}
