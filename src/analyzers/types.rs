//! Result types produced by the statistics engine.
//!
//! Everything here is immutable once built; each query produces a fresh
//! [`StatsResult`] from a fresh filtered view.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::query::{City, Day, FilterSpec, Month};

/// Coarse classification of the most common start hour, for presentation.
/// A pure function of the hour, not of the raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    Morning,
    Afternoon,
    Night,
}

impl DayPart {
    pub fn from_hour(hour: u32) -> DayPart {
        if hour < 12 {
            DayPart::Morning
        } else if hour < 17 {
            DayPart::Afternoon
        } else {
            DayPart::Night
        }
    }
}

/// Most frequent travel times in the filtered set.
///
/// `common_month` and `common_weekday` are only populated when the
/// corresponding filter was `all`; a pinned filter makes the mode
/// redundant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub common_month: Option<Month>,
    pub common_weekday: Option<Day>,
    pub common_hour: u32,
    pub day_part: DayPart,
}

/// A start/end station pair and how many trips took it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePair {
    pub start_station: String,
    pub end_station: String,
    pub trips: u64,
}

/// Most popular stations and station pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub common_start_station: String,
    pub common_end_station: String,
    pub common_route: RoutePair,
}

/// A duration split into whole days/hours/minutes/seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    /// Successive division: seconds into minutes, minutes into hours,
    /// hours into days, each remainder kept as the finer unit.
    pub fn from_seconds(total: u64) -> DurationBreakdown {
        let (minutes, seconds) = (total / 60, total % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        let (days, hours) = (hours / 24, hours % 24);
        DurationBreakdown {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Recombines the components back into seconds.
    pub fn total_seconds(&self) -> u64 {
        ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds
    }
}

/// A mean duration split into whole minutes and seconds. No hour/day
/// granularity is needed for a per-trip mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeanBreakdown {
    pub minutes: u64,
    pub seconds: u64,
}

impl MeanBreakdown {
    pub fn from_seconds(total: u64) -> MeanBreakdown {
        MeanBreakdown {
            minutes: total / 60,
            seconds: total % 60,
        }
    }
}

/// Total and average trip durations. Degrades gracefully on an empty
/// set: the total is 0 and the mean is absent rather than a
/// divide-by-zero sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_duration_seconds: f64,
    pub total_breakdown: DurationBreakdown,
    pub mean_duration_seconds: Option<f64>,
    pub mean_breakdown: Option<MeanBreakdown>,
}

/// Birth-year extremes and mode, with the rider ages they correspond to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub oldest_birth_year: i32,
    pub oldest_age: i32,
    pub youngest_birth_year: i32,
    pub youngest_age: i32,
    pub most_common_birth_year: i32,
    pub most_common_age: i32,
}

/// Rider demographic breakdowns.
///
/// `counts_by_gender` and `birth_year_stats` are `None` when no record
/// in the filtered set carries the field at all, which is distinct from
/// an empty mapping over zero matching records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub counts_by_user_type: BTreeMap<String, u64>,
    pub counts_by_gender: Option<BTreeMap<String, u64>>,
    pub birth_year_stats: Option<BirthYearStats>,
}

/// The combined result of one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResult {
    pub trip_count: usize,
    pub time: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}

/// One flattened row for the CSV summary log.
///
/// Appended per query so repeated runs accumulate a history, headers
/// written once on file creation.
#[derive(Debug, Serialize)]
pub struct SummaryRecord {
    pub timestamp: DateTime<Utc>,
    pub city: String,
    pub month_filter: String,
    pub day_filter: String,
    pub trip_count: usize,
    pub common_month: Option<String>,
    pub common_weekday: Option<String>,
    pub common_hour: u32,
    pub common_start_station: String,
    pub common_end_station: String,
    pub route_start_station: String,
    pub route_end_station: String,
    pub route_trips: u64,
    pub total_duration_seconds: f64,
    pub mean_duration_seconds: Option<f64>,
}

impl SummaryRecord {
    pub fn from_result(city: City, spec: &FilterSpec, result: &StatsResult) -> SummaryRecord {
        SummaryRecord {
            timestamp: Utc::now(),
            city: city.as_str().to_string(),
            month_filter: spec.month.as_str().to_string(),
            day_filter: spec.weekday.as_str().to_string(),
            trip_count: result.trip_count,
            common_month: result.time.common_month.map(|m| m.as_str().to_string()),
            common_weekday: result.time.common_weekday.map(|d| d.as_str().to_string()),
            common_hour: result.time.common_hour,
            common_start_station: result.stations.common_start_station.clone(),
            common_end_station: result.stations.common_end_station.clone(),
            route_start_station: result.stations.common_route.start_station.clone(),
            route_end_station: result.stations.common_route.end_station.clone(),
            route_trips: result.stations.common_route.trips,
            total_duration_seconds: result.durations.total_duration_seconds,
            mean_duration_seconds: result.durations.mean_duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_part_boundaries() {
        assert_eq!(DayPart::from_hour(0), DayPart::Morning);
        assert_eq!(DayPart::from_hour(11), DayPart::Morning);
        assert_eq!(DayPart::from_hour(12), DayPart::Afternoon);
        assert_eq!(DayPart::from_hour(16), DayPart::Afternoon);
        assert_eq!(DayPart::from_hour(17), DayPart::Night);
        assert_eq!(DayPart::from_hour(23), DayPart::Night);
    }

    #[test]
    fn test_breakdown_successive_division() {
        // 1 day, 1 hour, 1 minute, 1 second
        let b = DurationBreakdown::from_seconds(90_061);
        assert_eq!(
            b,
            DurationBreakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_breakdown_round_trips_exactly() {
        for total in [0u64, 59, 60, 3_599, 3_600, 86_399, 86_400, 90_061, 123_456_789] {
            assert_eq!(DurationBreakdown::from_seconds(total).total_seconds(), total);
        }
    }

    #[test]
    fn test_mean_breakdown_minutes_and_seconds_only() {
        let m = MeanBreakdown::from_seconds(695);
        assert_eq!(
            m,
            MeanBreakdown {
                minutes: 11,
                seconds: 35
            }
        );
    }
}
