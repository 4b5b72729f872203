//! `muhurat` CLI — reconcile daily panchang timings from the command line.
//!
//! Input is the raw timings document an upstream fetcher produces: a JSON
//! object mapping each category to one window string or a list of them.
//!
//! ## Usage
//!
//! ```sh
//! # One day, raw timings on stdin, JSON on stdout
//! muhurat day 2024-Jan-01 < timings.json
//!
//! # One day, CSV report to a file
//! muhurat day 2024-01-01 -i timings.json -o day.csv --format csv
//!
//! # An inclusive range; input maps each date to its raw timings
//! muhurat --tz Europe/London range 2024-01-01 2024-01-07 -i week.json
//!
//! # Show skipped windows
//! RUST_LOG=debug muhurat day 2024-01-01 -i timings.json
//! ```

mod report;

use std::collections::BTreeMap;
use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};
use muhurat_engine::{compute_day, compute_range, parse_calendar_date, parse_timezone, RawDay};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "muhurat",
    version,
    about = "Reconcile daily panchang timings into free and conducive windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone the timings are published in
    #[arg(long, global = true, default_value = "Asia/Kolkata")]
    tz: String,

    /// Log skipped windows and dates to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile a single day
    Day {
        /// Date, e.g. 2024-01-05 or 2024-Jan-05
        date: String,
        /// Raw timings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format: JSON intervals or a CSV report
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Reconcile every day of an inclusive date range
    Range {
        /// First date of the range
        start: String,
        /// Last date of the range (swapped with START when earlier)
        end: String,
        /// JSON file mapping dates to raw timings (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format: JSON intervals or a CSV report
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tz = parse_timezone(&cli.tz)?;
    let today = Utc::now().with_timezone(&tz).date_naive();

    match cli.command {
        Commands::Day {
            date,
            input,
            output,
            format,
        } => {
            let date = parse_calendar_date(&date, today)?;
            let json = read_input(input.as_deref())?;
            let raw: RawDay =
                serde_json::from_str(&json).context("Failed to parse raw timings JSON")?;

            let day = compute_day(date, tz, &raw)?;
            let rendered = match format {
                Format::Json => report::day_json(&day)?,
                Format::Csv => report::csv(std::slice::from_ref(&day)),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Range {
            start,
            end,
            input,
            output,
            format,
        } => {
            let start = parse_calendar_date(&start, today)?;
            let end = parse_calendar_date(&end, today)?;
            let json = read_input(input.as_deref())?;
            let mut by_date = parse_range_input(&json, today, tz)?;

            let days = compute_range(start, end, tz, |date| by_date.remove(&date))?;
            let rendered = match format {
                Format::Json => report::range_json(&days)?,
                Format::Csv => report::csv(&days),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with the report on stdout.
/// `RUST_LOG` wins over `--verbose` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse `{ "<date>": { "<category>": ... } }`, accepting any date spelling
/// `parse_calendar_date` understands for the keys.
fn parse_range_input(json: &str, today: NaiveDate, tz: Tz) -> Result<BTreeMap<NaiveDate, RawDay>> {
    let by_key: BTreeMap<String, RawDay> =
        serde_json::from_str(json).context("Failed to parse raw timings JSON")?;

    by_key
        .into_iter()
        .map(|(key, raw)| {
            let date = parse_calendar_date(&key, today)
                .with_context(|| format!("Invalid date key '{}' in {} input", key, tz.name()))?;
            Ok((date, raw))
        })
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
