use crate::adapters::clipboard::ClipboardBackend;
use crate::config::settings::Overrides;
use crate::domain::model::RowKind;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tip-calc")]
#[command(about = "Tip calculator with per-person split")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        help = "Locale for currency formatting, e.g. de_DE (default: from LC_ALL/LC_MONETARY/LANG)"
    )]
    pub locale: Option<String>,

    #[arg(long, help = "Clipboard backend: system, memory or none")]
    pub clipboard: Option<ClipboardBackend>,

    #[arg(long, help = "Initial tip percentage (0, 5, ..., 30)")]
    pub percent: Option<u8>,

    #[arg(long, help = "Initial number of people (1-10)")]
    pub split: Option<u8>,

    #[arg(
        long,
        help = "Compute once for this amount and print the result instead of opening the UI"
    )]
    pub amount: Option<String>,

    #[arg(long, requires = "amount", help = "Print the one-shot result as JSON")]
    pub json: bool,

    #[arg(long, requires = "amount", help = "Copy a result row: base, tip, total or per-person")]
    pub copy: Option<RowKind>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs to this file (the UI owns the terminal)")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Log level for tip_calc targets, e.g. debug (RUST_LOG takes precedence)")]
    pub log_level: Option<String>,

    #[arg(long, help = "Log format: compact or json")]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    pub fn is_headless(&self) -> bool {
        self.amount.is_some()
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            locale: self.locale.clone(),
            percentage: self.percent,
            split: self.split,
            clipboard: self.clipboard,
            verbose: self.verbose,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
            log_format: self.log_format,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(percent) = self.percent {
            crate::config::settings::percentage_setting(percent)?;
        }
        if let Some(split) = self.split {
            crate::config::settings::split_setting(split)?;
        }
        if let Some(locale) = &self.locale {
            validation::validate_non_empty_string("locale", locale)?;
        }
        if let Some(level) = &self.log_level {
            validation::validate_non_empty_string("log_level", level)?;
        }
        if let Some(path) = &self.log_file {
            validation::validate_path("log_file", &path.to_string_lossy())?;
        }
        Ok(())
    }
}
