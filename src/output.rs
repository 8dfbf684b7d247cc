//! Reporting: console report, JSON serialization, CSV summary append,
//! and raw-record sampling.
//!
//! The statistics core never formats anything; every human-readable
//! string lives here.

use anyhow::Result;
use csv::WriterBuilder;
use rand::seq::index::sample;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

use crate::analyzers::types::{DayPart, StatsResult, SummaryRecord};
use crate::record::RawRecord;

const RULE: &str = "----------------------------------------";

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Prints the full console report for one query.
pub fn print_report(result: &StatsResult) {
    print_time_stats(result);
    print_station_stats(result);
    print_duration_stats(result);
    print_user_stats(result);
}

fn print_time_stats(result: &StatsResult) {
    println!("\nThe Most Frequent Times of Travel ({} trips)\n", result.trip_count);

    if let Some(month) = result.time.common_month {
        println!("The most common month is: {}", title_case(month.as_str()));
    }
    if let Some(day) = result.time.common_weekday {
        println!("The most common day is: {}", title_case(day.as_str()));
    }

    let hour = result.time.common_hour;
    match result.time.day_part {
        DayPart::Morning => {
            println!("The most common start time is in the morning at {} AM.", hour)
        }
        DayPart::Afternoon => {
            println!("The most common start time is in the afternoon at {} PM.", hour - 12)
        }
        DayPart::Night => println!("The most common start time is at night at {} PM.", hour - 12),
    }
    println!("{RULE}");
}

fn print_station_stats(result: &StatsResult) {
    println!("\nThe Most Popular Stations and Trip\n");
    println!(
        "The most common start station is: {}",
        result.stations.common_start_station
    );
    println!(
        "The most common end station is: {}",
        result.stations.common_end_station
    );
    let route = &result.stations.common_route;
    println!(
        "The most frequent start-end combination was starting in {} and ending in {} ({} trips).",
        route.start_station, route.end_station, route.trips
    );
    println!("{RULE}");
}

fn print_duration_stats(result: &StatsResult) {
    println!("\nTrip Duration\n");

    let total = result.durations.total_breakdown;
    println!(
        "The total time spent on bikes across all trips was {} days {} hours {} minutes {} seconds",
        total.days, total.hours, total.minutes, total.seconds
    );

    match result.durations.mean_breakdown {
        Some(mean) => println!(
            "The average time spent on bikes across all trips was {}min {}sec",
            mean.minutes, mean.seconds
        ),
        None => println!("No trips, so no average duration."),
    }
    println!("{RULE}");
}

fn print_user_stats(result: &StatsResult) {
    println!("\nUser Stats\n");

    println!("Trip counts by user type:");
    for (user_type, count) in &result.users.counts_by_user_type {
        println!("  {}: {}", user_type, count);
    }

    match &result.users.counts_by_gender {
        Some(counts) => {
            println!("Trip counts by user gender:");
            for (gender, count) in counts {
                println!("  {}: {}", gender, count);
            }
        }
        None => println!("No gender data available"),
    }

    match &result.users.birth_year_stats {
        Some(stats) => {
            println!(
                "The oldest user was {} years old, born in {}",
                stats.oldest_age, stats.oldest_birth_year
            );
            println!(
                "The youngest user was {} years old, born in {}",
                stats.youngest_age, stats.youngest_birth_year
            );
            println!(
                "The most common user was {} years old, born in {}",
                stats.most_common_age, stats.most_common_birth_year
            );
        }
        None => println!("No age data available"),
    }
    println!("{RULE}");
}

/// Prints the result as pretty JSON to stdout.
pub fn print_json(result: &StatsResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Appends a [`SummaryRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &SummaryRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

/// Prints up to `n` randomly sampled raw records in debug form.
pub fn print_raw_sample(records: &[RawRecord], n: usize) {
    let n = n.min(records.len());
    let mut rng = rand::thread_rng();
    for idx in sample(&mut rng, records.len(), n) {
        println!("{:#?}", records[idx]);
    }
}
