//! CSV loading for city datasets.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::query::City;
use crate::record::RawRecord;

/// Reads every trip row from `data_dir/<city>.csv`.
///
/// The datasets carry an unnamed leading index column, which serde
/// ignores. Rows are returned in file order; the pipeline does the
/// filtering.
#[tracing::instrument(skip(data_dir), fields(city = city.as_str()))]
pub fn load_city(data_dir: &Path, city: City) -> Result<Vec<RawRecord>> {
    let path = data_dir.join(city.data_file());
    let file = File::open(&path)
        .with_context(|| format!("could not open dataset {}", path.display()))?;

    let mut rdr = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: RawRecord =
            result.with_context(|| format!("malformed row in {}", path.display()))?;
        records.push(record);
    }

    info!(rows = records.len(), path = %path.display(), "Dataset loaded");
    Ok(records)
}
