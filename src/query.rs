//! Query vocabulary: cities, months, weekdays, and the filter spec.
//!
//! All user-facing parsing lives here so the rest of the crate only ever
//! sees normalized enum values. Month and weekday parsing accepts the
//! abbreviations the classic console tool took: 3-letter month prefixes
//! (`jan`..`jun`) and weekday names with the `day` suffix stripped
//! (`mon`, `tues`, `wednes`, ...).

use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;

/// City datasets this tool knows about.
///
/// To support another city, add a variant here and point `data_file` at
/// its CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of this city's dataset (spaces become underscores).
    pub fn data_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl FromStr for City {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new_york_city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            other => Err(format!(
                "unrecognized city {other:?} (expected chicago, new york city, or washington)"
            )),
        }
    }
}

/// Calendar month of a trip's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    /// Converts a chrono month number (1-12) into a [`Month`].
    pub fn from_number(n: u32) -> Month {
        match n {
            1 => Month::January,
            2 => Month::February,
            3 => Month::March,
            4 => Month::April,
            5 => Month::May,
            6 => Month::June,
            7 => Month::July,
            8 => Month::August,
            9 => Month::September,
            10 => Month::October,
            11 => Month::November,
            _ => Month::December,
        }
    }
}

/// Day of week of a trip's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Sunday => "sunday",
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }

    pub fn from_weekday(w: Weekday) -> Day {
        match w {
            Weekday::Sun => Day::Sunday,
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
        }
    }
}

/// Month selector: `all` or one of January through June (the range the
/// city datasets cover).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthFilter {
    All,
    Month(Month),
}

impl MonthFilter {
    const SELECTABLE: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    pub fn matches(&self, month: Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Month(m) => m.as_str(),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Ok(MonthFilter::All);
        }
        for month in Self::SELECTABLE {
            let name = month.as_str();
            if s == name || s == name[..3] {
                return Ok(MonthFilter::Month(month));
            }
        }
        Err(format!(
            "unrecognized month {s:?} (try `february` or `feb`; january through june only)"
        ))
    }
}

/// Day-of-week selector: `all` or a weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayFilter {
    All,
    Day(Day),
}

impl DayFilter {
    const SELECTABLE: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn matches(&self, day: Day) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => *d == day,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayFilter::All => "all",
            DayFilter::Day(d) => d.as_str(),
        }
    }
}

impl FromStr for DayFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "all" {
            return Ok(DayFilter::All);
        }
        for day in Self::SELECTABLE {
            let name = day.as_str();
            // "day"-stripped abbreviation: sun, mon, tues, wednes, ...
            let stem = &name[..name.len() - 3];
            if s == name || s == stem {
                return Ok(DayFilter::Day(day));
            }
        }
        Err(format!(
            "unrecognized day of week {s:?} (try `sunday` or `sun`)"
        ))
    }
}

/// The month/weekday selection narrowing one query. Built once per query
/// and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub month: MonthFilter,
    pub weekday: DayFilter,
}

impl FilterSpec {
    /// The identity filter: keeps every record.
    pub const ALL: FilterSpec = FilterSpec {
        month: MonthFilter::All,
        weekday: DayFilter::All,
    };

    pub fn new(month: MonthFilter, weekday: DayFilter) -> Self {
        FilterSpec { month, weekday }
    }
}
