//! Total and average trip durations.

use crate::analyzers::types::{DurationBreakdown, DurationStats, MeanBreakdown};
use crate::record::TripRecord;

/// Sums and averages trip durations over the filtered set.
///
/// Never fails: the total over an empty set is 0 and the mean is simply
/// absent. Breakdowns operate on whole seconds; fractional durations
/// (the Washington dataset has them) are truncated for display only, the
/// raw totals keep full precision.
pub fn compute_duration_stats(records: &[TripRecord]) -> DurationStats {
    let total: f64 = records.iter().map(|r| r.duration_seconds).sum();
    let mean = if records.is_empty() {
        None
    } else {
        Some(total / records.len() as f64)
    };

    DurationStats {
        total_duration_seconds: total,
        total_breakdown: DurationBreakdown::from_seconds(total as u64),
        mean_duration_seconds: mean,
        mean_breakdown: mean.map(|m| MeanBreakdown::from_seconds(m as u64)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RawRecord, enrich};
    use chrono::NaiveDateTime;

    fn trips(durations: &[f64]) -> Vec<TripRecord> {
        let start_time =
            NaiveDateTime::parse_from_str("2017-01-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let raws = durations
            .iter()
            .map(|&duration_seconds| RawRecord {
                start_time,
                end_time: start_time,
                duration_seconds,
                start_station: "A".to_string(),
                end_station: "B".to_string(),
                user_type: "Subscriber".to_string(),
                gender: None,
                birth_year: None,
            })
            .collect();
        enrich(raws)
    }

    #[test]
    fn test_empty_set_degrades_gracefully() {
        let stats = compute_duration_stats(&[]);
        assert_eq!(stats.total_duration_seconds, 0.0);
        assert_eq!(stats.mean_duration_seconds, None);
        assert_eq!(stats.mean_breakdown, None);
        assert_eq!(stats.total_breakdown.total_seconds(), 0);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let stats = compute_duration_stats(&trips(&[600.0, 300.0, 90.0]));
        assert_eq!(stats.total_duration_seconds, 990.0);
        assert_eq!(stats.mean_duration_seconds, Some(330.0));
    }

    #[test]
    fn test_breakdown_resums_to_total() {
        // 90061 = 1 day 1 hour 1 minute 1 second
        let stats = compute_duration_stats(&trips(&[90_000.0, 61.0]));
        let b = stats.total_breakdown;
        assert_eq!(b.days, 1);
        assert_eq!(b.hours, 1);
        assert_eq!(b.minutes, 1);
        assert_eq!(b.seconds, 1);
        assert_eq!(b.total_seconds() as f64, stats.total_duration_seconds);
    }

    #[test]
    fn test_mean_breakdown_minutes_seconds() {
        let stats = compute_duration_stats(&trips(&[700.0, 690.0]));
        assert_eq!(stats.mean_duration_seconds, Some(695.0));
        let m = stats.mean_breakdown.unwrap();
        assert_eq!(m.minutes, 11);
        assert_eq!(m.seconds, 35);
    }
}
