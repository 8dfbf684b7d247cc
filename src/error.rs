//! Failures surfaced by the statistics core.

use thiserror::Error;

/// Errors from the mode-based analyses.
///
/// Sum- and count-based analyses degrade to zero/empty results instead,
/// because those are well-defined over an empty set; a "most frequent
/// value" is not.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("no trips matched the requested filters")]
    EmptyDataset,
}
