//! CLI entry point for the bikeshare statistics tool.
//!
//! Provides a one-shot `analyze` subcommand and an `interactive` mode
//! that prompts for a city and filters in a loop.

mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use bikeshare_stats::analyzers::types::SummaryRecord;
use bikeshare_stats::error::StatsError;
use bikeshare_stats::query::{City, DayFilter, FilterSpec, MonthFilter};
use bikeshare_stats::{loader, output, pipeline};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Descriptive statistics over bikeshare trip logs", long_about = None)]
struct Cli {
    /// Directory containing the city CSV datasets
    /// (defaults to $BIKESHARE_DATA_DIR, then the current directory)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one query against a city dataset and print the report
    Analyze {
        /// City to analyze: chicago, "new york city", or washington
        city: City,

        /// Month filter: all, january..june, or a 3-letter abbreviation
        #[arg(short, long, default_value = "all")]
        month: MonthFilter,

        /// Day-of-week filter: all or a weekday name (abbreviations accepted)
        #[arg(short = 'w', long, default_value = "all")]
        day: DayFilter,

        /// Print the result as pretty JSON instead of the console report
        #[arg(long, default_value_t = false)]
        json: bool,

        /// CSV file to append a summary row to
        #[arg(short, long)]
        output: Option<String>,

        /// Print this many randomly sampled raw records after the report (1-10)
        #[arg(long)]
        raw: Option<usize>,
    },
    /// Prompt for a city, month, and day in a loop, like the classic console tool
    Interactive,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        std::env::var("BIKESHARE_DATA_DIR")
            .unwrap_or_else(|_| ".".to_string())
            .into()
    });

    match cli.command {
        Commands::Analyze {
            city,
            month,
            day,
            json,
            output: output_path,
            raw,
        } => {
            let spec = FilterSpec::new(month, day);
            let raw_records = loader::load_city(&data_dir, city)?;

            // Keep the raw rows around only if sampling was requested
            let sample_pool = raw.map(|_| raw_records.clone());

            let result = pipeline::run(raw_records, &spec)?;

            if json {
                output::print_json(&result)?;
            } else {
                output::print_report(&result);
            }

            if let Some(path) = output_path {
                let record = SummaryRecord::from_result(city, &spec, &result);
                output::append_record(&path, &record)?;
            }

            if let (Some(n), Some(pool)) = (raw, sample_pool) {
                output::print_raw_sample(&pool, n.clamp(1, 10));
            }
        }
        Commands::Interactive => loop {
            let request = prompt::get_filters()?;
            info!(
                city = request.city.as_str(),
                month = request.spec.month.as_str(),
                day = request.spec.weekday.as_str(),
                "Loading data"
            );

            let raw_records = loader::load_city(&data_dir, request.city)?;
            let sample_pool = raw_records.clone();

            match pipeline::run(raw_records, &request.spec) {
                Ok(result) => {
                    output::print_report(&result);
                    prompt::offer_raw_data(&sample_pool)?;
                }
                Err(StatsError::EmptyDataset) => {
                    println!("No trips matched those filters. Try a different month or day.")
                }
            }

            if !prompt::wants_restart()? {
                break;
            }
        },
    }

    Ok(())
}
