use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::habits::{parse_date, DateConvention};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Track daily habits and current streaks in the terminal.
#[derive(Debug, Parser)]
#[command(name = "habit-tracker", version)]
pub struct Cli {
    /// Config file (default: <config dir>/habit-tracker/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pin "today" to a fixed YYYY-MM-DD day
    #[arg(long, value_name = "DATE", value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Calendar used for "today" (overrides config)
    #[arg(long, value_enum, value_name = "CONVENTION")]
    pub date_convention: Option<DateConvention>,

    /// Print habits with their streaks and exit
    #[arg(long)]
    pub print: bool,

    /// Output format for --print
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log file used while the UI is running
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|err| err.to_string())
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// CLI flag wins over the config file.
    pub fn effective_convention(&self, config: &Config) -> DateConvention {
        self.date_convention
            .unwrap_or(config.defaults.date_convention)
    }
}
