//! Interactive prompt loop for the classic console experience.
//!
//! Invalid inputs share one retry budget across the three filter
//! prompts, threaded through as an explicit counter rather than any
//! global state.

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{Result, bail};

use bikeshare_stats::output;
use bikeshare_stats::query::{City, DayFilter, FilterSpec, MonthFilter};
use bikeshare_stats::record::RawRecord;

/// The session aborts once invalid inputs in one pass exceed this.
const MAX_INVALID_INPUTS: u32 = 5;

/// One fully specified interactive query.
pub struct QueryRequest {
    pub city: City,
    pub spec: FilterSpec,
}

/// Asks for a city, month, and day, retrying on bad input until the
/// shared budget runs out.
pub fn get_filters() -> Result<QueryRequest> {
    println!("Filtering data...");
    let mut wrong_count = 0u32;

    let city = prompt_until(
        "Enter a city: ",
        &mut wrong_count,
        |s| City::from_str(s).ok(),
        "Sorry I didn't like that city name! Try `Chicago` for example.",
    )?;

    let month = prompt_until(
        "Enter a month: ",
        &mut wrong_count,
        |s| MonthFilter::from_str(s).ok(),
        "Sorry I didn't like that month! Try `February` for example.",
    )?;

    let weekday = prompt_until(
        "Enter a day of week: ",
        &mut wrong_count,
        |s| DayFilter::from_str(s).ok(),
        "Sorry I didn't like that day of week! Try `Sunday` for example.",
    )?;

    println!("{}", "-".repeat(40));
    Ok(QueryRequest {
        city,
        spec: FilterSpec::new(month, weekday),
    })
}

fn prompt_until<T>(
    prompt: &str,
    wrong_count: &mut u32,
    parse: impl Fn(&str) -> Option<T>,
    complaint: &str,
) -> Result<T> {
    loop {
        let line = read_line(prompt)?;
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        *wrong_count += 1;
        if *wrong_count > MAX_INVALID_INPUTS {
            bail!("ending the session after {} bad inputs", wrong_count);
        }
        println!("{complaint}");
    }
}

/// Offers to print randomly sampled raw records until the user declines.
pub fn offer_raw_data(records: &[RawRecord]) -> Result<()> {
    loop {
        let answer = read_line("\nWould you like to see raw data? Enter yes or no.\n")?
            .trim()
            .to_lowercase();
        match answer.as_str() {
            "no" => break,
            "yes" => {
                let reply =
                    read_line("\nHow many lines would you like to see? Enter a number between 1 to 10.\n")?;
                match reply.trim().parse::<usize>() {
                    Ok(n) if (1..=10).contains(&n) => output::print_raw_sample(records, n),
                    _ => println!("That wasn't a number between 1 and 10."),
                }
            }
            _ => println!("I didn't understand. Let's try again."),
        }
    }
    Ok(())
}

/// Asks whether to run another query.
pub fn wants_restart() -> Result<bool> {
    let answer = read_line("\nWould you like to restart? Enter yes or no.\n")?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
