use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::terms::TermSummary;

// =========================================================
// Year summary types
// =========================================================

/// Label reported as the current term during a break.
pub const HOLIDAYS_LABEL: &str = "Holidays";

/// Which term is in progress.
///
/// Serializes as the 1-based term number, or as `"Holidays"` when no term
/// contains the present moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentTerm {
    Term(usize),
    Holidays,
}

impl Serialize for CurrentTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CurrentTerm::Term(n) => serializer.serialize_u64(*n as u64),
            CurrentTerm::Holidays => serializer.serialize_str(HOLIDAYS_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for CurrentTerm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(usize),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(CurrentTerm::Term(n)),
            Raw::Label(label) if label == HOLIDAYS_LABEL => Ok(CurrentTerm::Holidays),
            Raw::Label(label) => Err(serde::de::Error::custom(format!(
                "expected a term number or \"{}\", got \"{}\"",
                HOLIDAYS_LABEL, label
            ))),
        }
    }
}

/// Aggregate statistics for every term of a school year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub school_days_total: i64,
    pub school_days_remaining: i64,
    pub current_term: CurrentTerm,
    /// Summary of the current term, with `days_remaining` filled in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<TermSummary>,
}

impl YearSummary {
    /// Summary of a year with no terms.
    pub fn empty() -> Self {
        Self {
            school_days_total: 0,
            school_days_remaining: 0,
            current_term: CurrentTerm::Holidays,
            term: None,
        }
    }
}

/// Route path for the year summary
pub const GET_SUMMARY: &str = "/{year}/summary";
