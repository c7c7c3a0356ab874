#[cfg(test)]
mod tests {
    use crate::data::{CalendarDataset, TermsByYear};
    use crate::models::{KeyDate, Term};
    use crate::routes::summary::{CurrentTerm, YearSummary};
    use crate::services::summary::{
        get_term_detail, get_terms, summarize_year_at, upcoming_terms_at,
    };
    use chrono::TimeZone;
    use chrono_tz::Pacific::Auckland;

    // School days per term with the holidays below:
    // term 1: 47, term 2: 47, term 3: 49, term 4: 46 (total 189).
    fn create_dataset() -> CalendarDataset {
        let mut terms = TermsByYear::new();
        terms.insert(
            "2024".to_string(),
            vec![
                Term::new("3 February", "12 April"),
                Term::new("29 April", "5 July"),
                Term::new("22 July", "27 September"),
                Term::new("14 October", "18 December"),
            ],
        );
        let holidays = [
            ("Waitangi Day", "6 February"),
            ("Good Friday", "29 March"),
            ("Easter Monday", "1 April"),
            ("Anzac Day", "25 April"),
            ("King's Birthday", "3 June"),
            ("Matariki", "28 June"),
            ("Labour Day", "28 October"),
            ("Christmas Day", "25 December"),
        ]
        .into_iter()
        .map(|(name, date)| KeyDate::new(name, date))
        .collect();

        CalendarDataset::new(
            terms,
            holidays,
            vec![KeyDate::new("Athletics day", "14 March")],
            Auckland,
        )
    }

    #[test]
    fn test_get_terms() {
        let terms = get_terms(&create_dataset(), "2024").unwrap();
        let days: Vec<i64> = terms.iter().map(|t| t.school_days).collect();
        assert_eq!(days, vec![47, 47, 49, 46]);
        assert!(terms.iter().all(|t| t.days_remaining.is_none()));
        assert_eq!(terms[3].total_calendar_days, 66);
    }

    #[test]
    fn test_get_terms_missing_year() {
        assert!(get_terms(&create_dataset(), "2031").unwrap().is_empty());
    }

    #[test]
    fn test_summary_during_term() {
        let now = Auckland.with_ymd_and_hms(2024, 5, 15, 10, 0, 0).unwrap();
        let summary = summarize_year_at(&create_dataset(), "2024", &now).unwrap();

        assert_eq!(summary.current_term, CurrentTerm::Term(2));
        assert_eq!(summary.school_days_total, 189);

        let term = summary.term.expect("current term summary");
        assert_eq!(term.start_date, "29 April");
        assert_eq!(term.school_days, 47);
        // Wednesday 15 May to Friday 5 July, minus King's Birthday and Matariki.
        assert_eq!(term.days_remaining, Some(35));
    }

    #[test]
    fn test_remaining_counts_elapsed_terms_in_full() {
        // Term 1 is already over in May, but it still contributes all 47 of its
        // school days to `school_days_remaining`: 47 + 35 + 49 + 46.
        let now = Auckland.with_ymd_and_hms(2024, 5, 15, 10, 0, 0).unwrap();
        let summary = summarize_year_at(&create_dataset(), "2024", &now).unwrap();
        assert_eq!(summary.school_days_remaining, 177);
    }

    #[test]
    fn test_summary_during_break() {
        let now = Auckland.with_ymd_and_hms(2024, 4, 20, 10, 0, 0).unwrap();
        let summary = summarize_year_at(&create_dataset(), "2024", &now).unwrap();

        assert_eq!(summary.current_term, CurrentTerm::Holidays);
        assert_eq!(summary.term, None);
        assert_eq!(summary.school_days_total, 189);
        assert_eq!(summary.school_days_remaining, 189);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["currentTerm"], "Holidays");
        assert!(json.get("term").is_none());
    }

    #[test]
    fn test_summary_missing_year() {
        let now = Auckland.with_ymd_and_hms(2024, 5, 15, 10, 0, 0).unwrap();
        let summary = summarize_year_at(&create_dataset(), "1999", &now).unwrap();
        assert_eq!(summary, YearSummary::empty());
        assert_eq!(summary.school_days_total, 0);
        assert_eq!(summary.school_days_remaining, 0);
        assert_eq!(summary.current_term, CurrentTerm::Holidays);
    }

    #[test]
    fn test_term_start_midnight_is_not_current() {
        let now = Auckland.with_ymd_and_hms(2024, 4, 29, 0, 0, 0).unwrap();
        let summary = summarize_year_at(&create_dataset(), "2024", &now).unwrap();
        assert_eq!(summary.current_term, CurrentTerm::Holidays);
    }

    #[test]
    fn test_first_school_day_morning_is_current() {
        let now = Auckland.with_ymd_and_hms(2024, 4, 29, 8, 30, 0).unwrap();
        let summary = summarize_year_at(&create_dataset(), "2024", &now).unwrap();
        assert_eq!(summary.current_term, CurrentTerm::Term(2));
        assert_eq!(summary.term.unwrap().days_remaining, Some(47));
        assert_eq!(summary.school_days_remaining, 189);
    }

    #[test]
    fn test_last_day_of_term_is_a_break() {
        // The end instant is midnight at the start of the last day.
        let now = Auckland.with_ymd_and_hms(2024, 7, 5, 9, 0, 0).unwrap();
        let summary = summarize_year_at(&create_dataset(), "2024", &now).unwrap();
        assert_eq!(summary.current_term, CurrentTerm::Holidays);
    }

    #[test]
    fn test_now_given_in_utc() {
        // 14 May 2024 22:00 UTC is 15 May 10:00 in Auckland.
        let now = chrono_tz::UTC.with_ymd_and_hms(2024, 5, 14, 22, 0, 0).unwrap();
        let summary = summarize_year_at(&create_dataset(), "2024", &now).unwrap();
        assert_eq!(summary.term.unwrap().days_remaining, Some(35));
    }

    #[test]
    fn test_summary_is_idempotent() {
        let dataset = create_dataset();
        let now = Auckland.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap();
        let first = summarize_year_at(&dataset, "2024", &now).unwrap();
        let second = summarize_year_at(&dataset, "2024", &now).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.current_term, CurrentTerm::Term(3));
    }

    #[test]
    fn test_summary_aborts_on_bad_term() {
        let mut terms = TermsByYear::new();
        terms.insert(
            "2024".to_string(),
            vec![Term::new("3 February", "12 April"), Term::new("29 Apr", "5 Jully")],
        );
        let dataset = CalendarDataset::new(terms, vec![], vec![], Auckland);
        let now = Auckland.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert!(summarize_year_at(&dataset, "2024", &now).is_err());
    }

    #[test]
    fn test_upcoming_terms() {
        let now = Auckland.with_ymd_and_hms(2024, 5, 15, 10, 0, 0).unwrap();
        let upcoming = upcoming_terms_at(&create_dataset(), "2024", &now).unwrap();
        let starts: Vec<&str> = upcoming.iter().map(|t| t.start_date.as_str()).collect();
        assert_eq!(starts, vec!["22 July", "14 October"]);
    }

    #[test]
    fn test_term_detail() {
        let dataset = create_dataset();
        let detail = get_term_detail(&dataset, "2024", 1).unwrap().unwrap();
        assert_eq!(detail.term, 1);
        assert_eq!(detail.summary.school_days, 47);
        let holidays: Vec<&str> = detail.holidays.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(holidays, vec!["Waitangi Day", "Good Friday", "Easter Monday"]);
        assert_eq!(detail.key_dates, vec![KeyDate::new("Athletics day", "14 March")]);
    }

    #[test]
    fn test_term_detail_out_of_range() {
        let dataset = create_dataset();
        assert!(get_term_detail(&dataset, "2024", 0).unwrap().is_none());
        assert!(get_term_detail(&dataset, "2024", 5).unwrap().is_none());
        assert!(get_term_detail(&dataset, "2030", 1).unwrap().is_none());
    }
}
