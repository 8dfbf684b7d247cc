//! Rider demographic breakdowns.

use std::collections::BTreeMap;

use crate::analyzers::types::{BirthYearStats, UserStats};
use crate::analyzers::utility::mode;
use crate::record::TripRecord;

/// Counts trips by user type and, where the data carries them, by gender
/// and birth year.
///
/// Never fails: user-type counts over an empty set are an empty mapping,
/// and gender/birth-year absence is reported as `None` rather than an
/// error. "No record has the field" is distinct from "zero records
/// matched".
pub fn compute_user_stats(records: &[TripRecord]) -> UserStats {
    let mut counts_by_user_type: BTreeMap<String, u64> = BTreeMap::new();
    for r in records {
        *counts_by_user_type.entry(r.user_type.clone()).or_insert(0) += 1;
    }

    let mut gender_counts: BTreeMap<String, u64> = BTreeMap::new();
    for g in records.iter().filter_map(|r| r.gender.as_ref()) {
        *gender_counts.entry(g.clone()).or_insert(0) += 1;
    }
    let counts_by_gender = if gender_counts.is_empty() {
        None
    } else {
        Some(gender_counts)
    };

    UserStats {
        counts_by_user_type,
        counts_by_gender,
        birth_year_stats: birth_year_stats(records),
    }
}

/// Birth-year extremes and mode over the records that carry one.
///
/// The age beside each year is the extreme `rider_age` among those
/// records; start times straddling a year boundary can give the same
/// birth year two ages, so the maximum is taken for determinism.
fn birth_year_stats(records: &[TripRecord]) -> Option<BirthYearStats> {
    let aged: Vec<(i32, i32)> = records
        .iter()
        .filter_map(|r| match (r.birth_year, r.rider_age) {
            (Some(year), Some(age)) => Some((year, age)),
            _ => None,
        })
        .collect();

    if aged.is_empty() {
        return None;
    }

    let oldest_birth_year = aged.iter().map(|(y, _)| *y).min()?;
    let youngest_birth_year = aged.iter().map(|(y, _)| *y).max()?;
    let oldest_age = aged.iter().map(|(_, a)| *a).max()?;
    let youngest_age = aged.iter().map(|(_, a)| *a).min()?;

    // Smallest year wins ties, so equally frequent years never fail.
    let (most_common_birth_year, _) = mode(aged.iter().map(|(y, _)| *y))?;
    let most_common_age = aged
        .iter()
        .filter(|(y, _)| *y == most_common_birth_year)
        .map(|(_, a)| *a)
        .max()?;

    Some(BirthYearStats {
        oldest_birth_year,
        oldest_age,
        youngest_birth_year,
        youngest_age,
        most_common_birth_year,
        most_common_age,
    })
}
