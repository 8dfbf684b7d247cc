//! Most frequent times of travel.

use crate::analyzers::types::{DayPart, TimeStats};
use crate::analyzers::utility::{mode, mode_by_key};
use crate::error::StatsError;
use crate::query::{DayFilter, FilterSpec, MonthFilter};
use crate::record::TripRecord;

/// Computes the most common month, weekday, and start hour of the
/// filtered set.
///
/// Month and weekday modes are skipped when the spec already pins them.
/// Ties go to the lexicographically smallest month/weekday name and the
/// smallest hour.
///
/// # Errors
///
/// [`StatsError::EmptyDataset`] when `records` is empty.
pub fn compute_time_stats(
    records: &[TripRecord],
    spec: &FilterSpec,
) -> Result<TimeStats, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let common_month = match spec.month {
        MonthFilter::All => {
            mode_by_key(records.iter().map(|r| r.month), |m| m.as_str()).map(|(m, _)| m)
        }
        MonthFilter::Month(_) => None,
    };

    let common_weekday = match spec.weekday {
        DayFilter::All => {
            mode_by_key(records.iter().map(|r| r.weekday), |d| d.as_str()).map(|(d, _)| d)
        }
        DayFilter::Day(_) => None,
    };

    let (common_hour, _) =
        mode(records.iter().map(|r| r.hour)).ok_or(StatsError::EmptyDataset)?;

    Ok(TimeStats {
        common_month,
        common_weekday,
        common_hour,
        day_part: DayPart::from_hour(common_hour),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Day, DayFilter, Month};
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
    fn test_common_hour_and_day_part() {
        // Hours 8, 8, 14, 22, 8 -> mode 8, morning
        let records = trips(&[
            "2017-01-01 08:00:00",
            "2017-01-02 08:30:00",
            "2017-01-03 14:00:00",
            "2017-01-04 22:00:00",
            "2017-01-05 08:59:59",
        ]);
        let stats = compute_time_stats(&records, &FilterSpec::ALL).unwrap();
        assert_eq!(stats.common_hour, 8);
        assert_eq!(stats.day_part, DayPart::Morning);
    }

    #[test]
    fn test_hour_tie_picks_smallest() {
        let records = trips(&["2017-01-01 19:00:00", "2017-01-02 07:00:00"]);
        let stats = compute_time_stats(&records, &FilterSpec::ALL).unwrap();
        assert_eq!(stats.common_hour, 7);
    }

    #[test]
    fn test_common_month_gated_on_filter() {
        let records = trips(&[
            "2017-03-01 08:00:00",
            "2017-03-02 08:00:00",
            "2017-04-01 08:00:00",
        ]);

        let unfiltered = compute_time_stats(&records, &FilterSpec::ALL).unwrap();
        assert_eq!(unfiltered.common_month, Some(Month::March));

        let pinned = FilterSpec::new(MonthFilter::Month(Month::March), DayFilter::All);
        let filtered = compute_time_stats(&records, &pinned).unwrap();
        assert_eq!(filtered.common_month, None);
    }

    #[test]
    fn test_common_weekday_gated_on_filter() {
        // Both trips on a Wednesday
        let records = trips(&["2017-01-04 08:00:00", "2017-01-11 09:00:00"]);

        let unfiltered = compute_time_stats(&records, &FilterSpec::ALL).unwrap();
        assert_eq!(unfiltered.common_weekday, Some(Day::Wednesday));

        let pinned = FilterSpec::new(MonthFilter::All, DayFilter::Day(Day::Wednesday));
        let filtered = compute_time_stats(&records, &pinned).unwrap();
        assert_eq!(filtered.common_weekday, None);
    }

    #[test]
    fn test_month_tie_breaks_on_name_not_calendar_order() {
        // One March trip, one June trip: "june" < "march" lexicographically
        let records = trips(&["2017-03-01 08:00:00", "2017-06-01 08:00:00"]);
        let stats = compute_time_stats(&records, &FilterSpec::ALL).unwrap();
        assert_eq!(stats.common_month, Some(Month::June));
    }

    #[test]
    fn test_empty_dataset_errors() {
        let err = compute_time_stats(&[], &FilterSpec::ALL).unwrap_err();
        assert_eq!(err, StatsError::EmptyDataset);
    }
}
