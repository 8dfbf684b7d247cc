//! Orchestration: enrich, filter once, then run every analysis against
//! that same filtered view.

use tracing::debug;

use crate::analyzers::types::StatsResult;
use crate::analyzers::{duration, station, time, user};
use crate::error::StatsError;
use crate::filter;
use crate::query::FilterSpec;
use crate::record::{RawRecord, enrich};

/// Runs the full statistics pipeline over one batch of raw records.
///
/// The four analyses all consume the identical filtered view; nothing
/// re-filters per analysis. Stateless across calls, never prints.
///
/// # Errors
///
/// Propagates [`StatsError::EmptyDataset`] from the mode-based analyses
/// when no record survives the filter; the caller decides how to report
/// that.
#[tracing::instrument(skip(raw_records, spec), fields(records = raw_records.len()))]
pub fn run(raw_records: Vec<RawRecord>, spec: &FilterSpec) -> Result<StatsResult, StatsError> {
    let enriched = enrich(raw_records);
    let filtered = filter::apply(enriched, spec);
    debug!(
        filtered = filtered.len(),
        month = spec.month.as_str(),
        day = spec.weekday.as_str(),
        "Trips in scope after filtering"
    );

    let time = time::compute_time_stats(&filtered, spec)?;
    let stations = station::compute_station_stats(&filtered)?;
    let durations = duration::compute_duration_stats(&filtered);
    let users = user::compute_user_stats(&filtered);

    Ok(StatsResult {
        trip_count: filtered.len(),
        time,
        stations,
        durations,
        users,
    })
}
