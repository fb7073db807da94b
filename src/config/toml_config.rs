use crate::utils::error::{Result, TipCalcError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub locale: Option<LocaleConfig>,
    pub defaults: Option<DefaultsConfig>,
    pub clipboard: Option<ClipboardConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub percentage: Option<u8>,
    pub split: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipboardConfig {
    pub backend: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TipCalcError::IoError)?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TipCalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TIP_CALC_LOCALE})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TipCalcError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(tag) = self.locale.as_ref().and_then(|l| l.tag.as_deref()) {
            validation::validate_non_empty_string("locale.tag", tag)?;
        }

        if let Some(defaults) = &self.defaults {
            if let Some(percentage) = defaults.percentage {
                crate::config::settings::percentage_setting(percentage)?;
            }
            if let Some(split) = defaults.split {
                crate::config::settings::split_setting(split)?;
            }
        }

        if let Some(backend) = self.clipboard.as_ref().and_then(|c| c.backend.as_deref()) {
            validation::parse_setting::<crate::adapters::clipboard::ClipboardBackend>(
                "clipboard.backend",
                backend,
            )?;
        }

        if let Some(logging) = &self.logging {
            if let Some(file) = logging.file.as_deref() {
                validation::validate_path("logging.file", file)?;
            }
            if let Some(format) = logging.format.as_deref() {
                validation::parse_setting::<crate::utils::logger::LogFormat>(
                    "logging.format",
                    format,
                )?;
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
