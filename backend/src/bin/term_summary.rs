//! One-shot CLI printing calendar statistics as JSON.
//!
//! ```bash
//! term-summary                 # summary of the current year
//! term-summary 2025 --terms    # every term of 2025
//! term-summary --upcoming      # terms of this year that have not started
//! term-summary --events        # upcoming holidays, key dates and term boundaries
//! ```

use std::path::PathBuf;

use chrono::Datelike;
use clap::{ArgAction, ArgGroup, Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use school_calendar::data::{AppConfig, CalendarDataset};
use school_calendar::services;

/// Print school-term statistics for a year.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("view").args(["terms", "upcoming", "events"])))]
struct Cli {
    /// School year to report on (default: the current year in the home timezone).
    year: Option<String>,

    /// Directory with terms.json, holidays.json and key-dates.json.
    #[arg(long, value_hint = ValueHint::DirPath)]
    data_dir: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Home timezone, e.g. Pacific/Auckland.
    #[arg(long)]
    timezone: Option<String>,

    /// Print every term of the year instead of the summary.
    #[arg(long, action = ArgAction::SetTrue)]
    terms: bool,

    /// Print only the terms that have not started yet.
    #[arg(long, action = ArgAction::SetTrue)]
    upcoming: bool,

    /// Print the merged timeline of upcoming events.
    #[arg(long, action = ArgAction::SetTrue)]
    events: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?.with_env_overrides()?,
        None => AppConfig::load()?,
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(tz) = cli.timezone {
        config.timezone = tz;
    }

    let dataset = CalendarDataset::load(&config.data_dir, config.tz()?)?;
    let year = cli
        .year
        .unwrap_or_else(|| dataset.now().year().to_string());

    let output = if cli.events {
        serde_json::to_string_pretty(&services::get_events(&dataset)?)?
    } else if cli.upcoming {
        serde_json::to_string_pretty(&services::get_upcoming_terms(&dataset, &year)?)?
    } else if cli.terms {
        serde_json::to_string_pretty(&services::get_terms(&dataset, &year)?)?
    } else {
        serde_json::to_string_pretty(&services::get_summary(&dataset, &year)?)?
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["term-summary"]).unwrap();
        assert!(cli.year.is_none());
        assert!(!cli.terms && !cli.upcoming && !cli.events);
    }

    #[test]
    fn test_parse_year_and_view() {
        let cli = Cli::try_parse_from(["term-summary", "2025", "--upcoming", "--data-dir", "/srv/data"])
            .unwrap();
        assert_eq!(cli.year.as_deref(), Some("2025"));
        assert!(cli.upcoming);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/data")));
    }

    #[test]
    fn test_views_are_exclusive() {
        assert!(Cli::try_parse_from(["term-summary", "--terms", "--events"]).is_err());
    }
}
