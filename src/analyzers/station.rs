//! Most popular stations and station pairs.

use crate::analyzers::types::{RoutePair, StationStats};
use crate::analyzers::utility::mode;
use crate::error::StatsError;
use crate::record::TripRecord;

/// Computes the most frequent start station, end station, and
/// `(start, end)` route of the filtered set. Ties go to the
/// lexicographically smallest name (for routes, smallest pair).
///
/// # Errors
///
/// [`StatsError::EmptyDataset`] when `records` is empty.
pub fn compute_station_stats(records: &[TripRecord]) -> Result<StationStats, StatsError> {
    let (common_start_station, _) = mode(records.iter().map(|r| r.start_station.clone()))
        .ok_or(StatsError::EmptyDataset)?;

    let (common_end_station, _) =
        mode(records.iter().map(|r| r.end_station.clone())).ok_or(StatsError::EmptyDataset)?;

    let ((start_station, end_station), trips) = mode(
        records
            .iter()
            .map(|r| (r.start_station.clone(), r.end_station.clone())),
    )
    .ok_or(StatsError::EmptyDataset)?;

    Ok(StationStats {
        common_start_station,
        common_end_station,
        common_route: RoutePair {
            start_station,
            end_station,
            trips,
        },
    })
}
