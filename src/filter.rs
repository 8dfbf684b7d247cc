//! Scoping of trip records by month and weekday.

use crate::query::FilterSpec;
use crate::record::TripRecord;

/// Keeps only the records matching `spec`, preserving relative order.
///
/// The two selectors compose with AND semantics; `FilterSpec::ALL` is the
/// identity. Applying the same spec twice is idempotent.
pub fn apply(records: Vec<TripRecord>, spec: &FilterSpec) -> Vec<TripRecord> {
    records
        .into_iter()
        .filter(|r| spec.month.matches(r.month) && spec.weekday.matches(r.weekday))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Day, DayFilter, Month, MonthFilter};
    use crate::record::{RawRecord, enrich};
    use chrono::NaiveDateTime;

    fn trips(starts: &[&str]) -> Vec<TripRecord> {
        let raws = starts
            .iter()
            .map(|s| {
                let start_time =
                    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
                RawRecord {
                    start_time,
                    end_time: start_time,
                    duration_seconds: 60.0,
                    start_station: "A".to_string(),
                    end_station: "B".to_string(),
                    user_type: "Subscriber".to_string(),
                    gender: None,
                    birth_year: None,
                }
            })
            .collect();
        enrich(raws)
    }

    #[test]
    fn test_all_all_is_identity() {
        let input = trips(&[
            "2017-01-01 08:00:00",
            "2017-02-05 09:00:00",
            "2017-03-10 10:00:00",
        ]);
        let starts: Vec<_> = input.iter().map(|r| r.start_time).collect();

        let out = apply(input, &FilterSpec::ALL);
        let out_starts: Vec<_> = out.iter().map(|r| r.start_time).collect();
        assert_eq!(out_starts, starts);
    }

    #[test]
    fn test_month_filter_keeps_only_matching() {
        let input = trips(&[
            "2017-01-01 08:00:00",
            "2017-02-05 09:00:00",
            "2017-01-20 10:00:00",
        ]);
        let spec = FilterSpec::new(MonthFilter::Month(Month::January), DayFilter::All);

        let out = apply(input, &spec);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.month == Month::January));
    }

    #[test]
    fn test_filters_compose_with_and_semantics() {
        // 2017-01-01 Sunday, 2017-01-02 Monday, 2017-02-06 Monday
        let input = trips(&[
            "2017-01-01 08:00:00",
            "2017-01-02 09:00:00",
            "2017-02-06 10:00:00",
        ]);
        let spec = FilterSpec::new(
            MonthFilter::Month(Month::January),
            DayFilter::Day(Day::Monday),
        );

        let out = apply(input, &spec);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].month, Month::January);
        assert_eq!(out[0].weekday, Day::Monday);
    }

    #[test]
    fn test_output_never_larger_than_input() {
        let input = trips(&["2017-01-01 08:00:00", "2017-02-05 09:00:00"]);
        let n = input.len();
        let spec = FilterSpec::new(MonthFilter::Month(Month::June), DayFilter::All);
        assert!(apply(input, &spec).len() <= n);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let input = trips(&[
            "2017-01-01 08:00:00",
            "2017-01-02 09:00:00",
            "2017-02-06 10:00:00",
        ]);
        let spec = FilterSpec::new(MonthFilter::Month(Month::January), DayFilter::All);

        let once = apply(input, &spec);
        let once_starts: Vec<_> = once.iter().map(|r| r.start_time).collect();
        let twice = apply(once, &spec);
        let twice_starts: Vec<_> = twice.iter().map(|r| r.start_time).collect();
        assert_eq!(once_starts, twice_starts);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let input = trips(&["2017-01-01 08:00:00"]);
        let spec = FilterSpec::new(MonthFilter::Month(Month::June), DayFilter::All);
        assert!(apply(input, &spec).is_empty());
    }
}
