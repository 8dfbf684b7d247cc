//! Trip records and the enrichment step that derives temporal fields.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

use crate::query::{Day, Month};

/// One row as it comes off a city CSV.
///
/// The Washington dataset has no `Gender` or `Birth Year` columns, which
/// deserializes as `None` for every row; optionality is per field, not
/// per collection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawRecord {
    #[serde(rename = "Start Time", deserialize_with = "de_timestamp")]
    pub start_time: NaiveDateTime,
    #[serde(rename = "End Time", deserialize_with = "de_timestamp")]
    pub end_time: NaiveDateTime,
    #[serde(rename = "Trip Duration")]
    pub duration_seconds: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    // Stored as a float in the source CSVs, e.g. `1992.0`
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// Timestamps in the datasets look like `2017-01-01 00:07:57`.
fn de_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S").map_err(serde::de::Error::custom)
}

/// A trip record with its derived temporal fields attached.
///
/// Derived once here so no analysis re-derives them.
#[derive(Debug, Clone, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    pub month: Month,
    pub weekday: Day,
    pub hour: u32,
    /// `start_time.year - birth_year`, only when a birth year is present.
    pub rider_age: Option<i32>,
}

impl TripRecord {
    pub fn from_raw(raw: RawRecord) -> Self {
        let month = Month::from_number(raw.start_time.month());
        let weekday = Day::from_weekday(raw.start_time.weekday());
        let hour = raw.start_time.hour();
        let birth_year = raw.birth_year.map(|y| y as i32);
        let rider_age = birth_year.map(|y| raw.start_time.year() - y);

        TripRecord {
            start_time: raw.start_time,
            end_time: raw.end_time,
            duration_seconds: raw.duration_seconds,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year,
            month,
            weekday,
            hour,
            rider_age,
        }
    }
}

/// Derives the computed temporal fields for every record. Pure and total:
/// never fails on well-formed input, touches nothing outside its arguments.
pub fn enrich(records: Vec<RawRecord>) -> Vec<TripRecord> {
    records.into_iter().map(TripRecord::from_raw).collect()
}
