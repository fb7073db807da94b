use crate::adapters::clipboard::ClipboardBackend;
use crate::app::state::FormState;
use crate::config::toml_config::TomlConfig;
use crate::domain::model::{SplitCount, TipPercentage};
use crate::utils::error::{Result, TipCalcError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, parse_setting};
use std::path::PathBuf;

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub locale: Option<String>,
    pub percentage: Option<u8>,
    pub split: Option<u8>,
    pub clipboard: Option<ClipboardBackend>,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub verbose: bool,
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub format: LogFormat,
}

/// Effective configuration after merging command line, file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Explicit locale; `None` means detect from the environment.
    pub locale: Option<String>,
    pub percentage: TipPercentage,
    pub split: SplitCount,
    pub clipboard: ClipboardBackend,
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            percentage: TipPercentage::DEFAULT,
            split: SplitCount::DEFAULT,
            clipboard: ClipboardBackend::default(),
            log: LogSettings {
                verbose: false,
                level: None,
                file: None,
                format: LogFormat::default(),
            },
        }
    }
}

impl Settings {
    /// Command line beats the config file, which beats built-in defaults.
    pub fn resolve(file: Option<&TomlConfig>, overrides: &Overrides) -> Result<Self> {
        let defaults = file.and_then(|f| f.defaults.as_ref());
        let logging = file.and_then(|f| f.logging.as_ref());

        let locale = overrides
            .locale
            .clone()
            .or_else(|| file.and_then(|f| f.locale.as_ref()).and_then(|l| l.tag.clone()));
        if let Some(tag) = &locale {
            validation::validate_non_empty_string("locale.tag", tag)?;
        }

        let percentage = match overrides
            .percentage
            .or_else(|| defaults.and_then(|d| d.percentage))
        {
            Some(value) => percentage_setting(value)?,
            None => TipPercentage::DEFAULT,
        };

        let split = match overrides.split.or_else(|| defaults.and_then(|d| d.split)) {
            Some(value) => split_setting(value)?,
            None => SplitCount::DEFAULT,
        };

        let clipboard = match overrides.clipboard {
            Some(backend) => backend,
            None => match file
                .and_then(|f| f.clipboard.as_ref())
                .and_then(|c| c.backend.as_deref())
            {
                Some(name) => parse_setting("clipboard.backend", name)?,
                None => ClipboardBackend::default(),
            },
        };

        let format = match overrides.log_format {
            Some(format) => format,
            None => match logging.and_then(|l| l.format.as_deref()) {
                Some(name) => parse_setting("logging.format", name)?,
                None => LogFormat::default(),
            },
        };

        let log_file = overrides
            .log_file
            .clone()
            .or_else(|| logging.and_then(|l| l.file.as_ref()).map(PathBuf::from));

        let level = overrides
            .log_level
            .clone()
            .or_else(|| logging.and_then(|l| l.level.clone()));

        Ok(Self {
            locale,
            percentage,
            split,
            clipboard,
            log: LogSettings {
                verbose: overrides.verbose,
                level,
                file: log_file,
                format,
            },
        })
    }

    /// Initial form state: empty amount, configured pickers.
    pub fn initial_state(&self) -> FormState {
        FormState::new(self.percentage, self.split)
    }
}

pub fn percentage_setting(value: u8) -> Result<TipPercentage> {
    TipPercentage::new(value).ok_or_else(|| {
        let options: Vec<String> = TipPercentage::OPTIONS.iter().map(u8::to_string).collect();
        TipCalcError::InvalidConfigValueError {
            field: "defaults.percentage".to_string(),
            value: value.to_string(),
            reason: format!("Value must be one of: {}", options.join(", ")),
        }
    })
}

pub fn split_setting(value: u8) -> Result<SplitCount> {
    SplitCount::new(value).ok_or_else(|| TipCalcError::InvalidConfigValueError {
        field: "defaults.split".to_string(),
        value: value.to_string(),
        reason: format!(
            "Value must be between {} and {}",
            SplitCount::MIN,
            SplitCount::MAX
        ),
    })
}
