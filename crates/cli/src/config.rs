//! Command-line / environment configuration.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use foodtrack_core::validation::parse_display_date;
use foodtrack_observability::LogFormat;

use crate::clock::Clock;

/// Track perishable food and what is about to expire.
#[derive(Parser, Debug)]
#[command(name = "foodtrack", version, about, long_about = None)]
pub struct Args {
    /// Backing file for the inventory
    #[arg(long, env = "FOODTRACK_DATA_FILE", default_value = "data.csv")]
    pub data_file: PathBuf,

    /// Keep the inventory in memory only
    #[arg(long, env = "FOODTRACK_NO_PERSIST")]
    pub no_persist: bool,

    /// Default window for near-expiry checks, in days
    #[arg(
        long,
        env = "FOODTRACK_NEAR_EXPIRY_DAYS",
        default_value_t = 3,
        allow_negative_numbers = true
    )]
    pub near_expiry_days: i64,

    /// Log format on stderr (pretty or json)
    #[arg(long, env = "FOODTRACK_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    /// Pin today's date (DD/MM/YYYY) instead of using the system clock
    #[arg(long, env = "FOODTRACK_TODAY", value_parser = parse_display_date)]
    pub today: Option<NaiveDate>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` disables persistence.
    pub data_file: Option<PathBuf>,
    pub near_expiry_days: i64,
    pub log_format: LogFormat,
    pub clock: Clock,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            data_file: (!args.no_persist).then_some(args.data_file),
            near_expiry_days: args.near_expiry_days,
            log_format: args.log_format,
            clock: args.today.map_or(Clock::System, Clock::Fixed),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Some(PathBuf::from("data.csv")),
            near_expiry_days: 3,
            log_format: LogFormat::Pretty,
            clock: Clock::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["foodtrack"];
        argv.extend_from_slice(args);
        Config::from(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn defaults_match_default_config() {
        // Environment overrides would make this flaky; only run when unset.
        if std::env::vars().any(|(k, _)| k.starts_with("FOODTRACK_")) {
            return;
        }
        assert_eq!(parse(&[]), Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--data-file",
            "/tmp/pantry.csv",
            "--near-expiry-days",
            "7",
            "--log-format",
            "json",
            "--today",
            "10/06/2024",
        ]);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/pantry.csv")));
        assert_eq!(config.near_expiry_days, 7);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.clock,
            Clock::Fixed(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
        );
    }

    #[test]
    fn no_persist_drops_the_data_file() {
        assert_eq!(parse(&["--no-persist"]).data_file, None);
    }

    #[test]
    fn negative_window_is_accepted() {
        assert_eq!(parse(&["--near-expiry-days", "-2"]).near_expiry_days, -2);
    }

    #[test]
    fn bad_today_is_rejected() {
        assert!(Args::try_parse_from(["foodtrack", "--today", "2024-06-10"]).is_err());
    }
}
