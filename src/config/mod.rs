pub mod toml_config;

use crate::core::report::{ReportFormat, TimeStyle};
use crate::core::time::ParseMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_input_path, Validate};
use clap::{Parser, ValueEnum};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "peak-visitors", version)]
#[command(about = "Find the period with the most visitors present at once")]
pub struct CliConfig {
    /// Input file, one `HH:MM,HH:MM` (entry,exit) record per line
    pub input: String,

    /// How to treat malformed or out-of-range times [default: strict]
    #[arg(long, value_enum)]
    pub mode: Option<ParseMode>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Clock rendering [default: legacy]
    #[arg(long, value_enum)]
    pub time_style: Option<TimeStyle>,

    /// TOML settings file; command line flags take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Settings after merging the command line over the optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub input_path: String,
    pub mode: ParseMode,
    pub format: ReportFormat,
    pub time_style: TimeStyle,
}

impl AppSettings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Reading settings from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        Ok(Self::merge(cli, &file))
    }

    pub fn merge(cli: &CliConfig, file: &TomlConfig) -> Self {
        Self {
            input_path: cli.input.clone(),
            mode: cli.mode.or(file.input.mode).unwrap_or_default(),
            format: cli.format.or(file.output.format).unwrap_or_default(),
            time_style: cli.time_style.or(file.output.time_style).unwrap_or_default(),
        }
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        validate_input_path("input", &self.input_path)
    }
}
