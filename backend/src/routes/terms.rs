use serde::{Deserialize, Serialize};

use crate::models::KeyDate;

// =========================================================
// Term summary types
// =========================================================

/// Computed statistics for one term of one school year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSummary {
    pub year: String,
    pub start_date: String, // As configured, e.g. "3 February"
    pub end_date: String,
    pub total_calendar_days: i64,
    pub school_weeks: i64,
    pub school_days: i64,
    pub weekends: i64,
    /// School days left including today; only set while the term is in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
}

/// A term summary with the holidays and key dates that fall inside the term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDetail {
    pub term: usize, // 1-based
    #[serde(flatten)]
    pub summary: TermSummary,
    pub holidays: Vec<KeyDate>,
    pub key_dates: Vec<KeyDate>,
}

/// Route path for the per-year term list
pub const GET_TERMS: &str = "/{year}/terms";
/// Route path for a single term with its itemized dates
pub const GET_TERM_DETAIL: &str = "/{year}/terms/{term}";

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> TermSummary {
        TermSummary {
            year: "2024".to_string(),
            start_date: "3 February".to_string(),
            end_date: "12 April".to_string(),
            total_calendar_days: 70,
            school_weeks: 9,
            school_days: 49,
            weekends: 10,
            days_remaining: None,
        }
    }

    #[test]
    fn test_term_summary_uses_camel_case() {
        let json = serde_json::to_value(sample_summary()).unwrap();
        assert_eq!(json["startDate"], "3 February");
        assert_eq!(json["totalCalendarDays"], 70);
        assert_eq!(json["schoolDays"], 49);
        assert!(json.get("daysRemaining").is_none());
    }

    #[test]
    fn test_days_remaining_serialized_when_present() {
        let mut summary = sample_summary();
        summary.days_remaining = Some(12);
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["daysRemaining"], 12);
    }

    #[test]
    fn test_term_detail_flattens_summary() {
        let detail = TermDetail {
            term: 1,
            summary: sample_summary(),
            holidays: vec![KeyDate::new("Waitangi Day", "6 February")],
            key_dates: vec![],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["term"], 1);
        assert_eq!(json["schoolWeeks"], 9);
        assert_eq!(json["holidays"][0]["name"], "Waitangi Day");
        assert!(json["keyDates"].as_array().unwrap().is_empty());

        let back: TermDetail = serde_json::from_value(json).unwrap();
        assert_eq!(back, detail);
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_TERMS, "/{year}/terms");
        assert_eq!(GET_TERM_DETAIL, "/{year}/terms/{term}");
    }
}
