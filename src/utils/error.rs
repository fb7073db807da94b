use thiserror::Error;

#[derive(Error, Debug)]
pub enum TipCalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Terminal error: {message}")]
    TerminalError { message: String },
}

impl TipCalcError {
    /// Short message suitable for printing to the user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            TipCalcError::IoError(e) => format!("File or terminal access failed: {}", e),
            TipCalcError::SerializationError(_) => {
                "Could not encode the result as JSON".to_string()
            }
            TipCalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            TipCalcError::InvalidConfigValueError { field, value, reason } => {
                format!("Setting '{}' has invalid value '{}': {}", field, value, reason)
            }
            TipCalcError::ConfigValidationError { field, message } => {
                format!("Setting '{}' could not be read: {}", field, message)
            }
            TipCalcError::TerminalError { message } => {
                format!("The terminal UI could not run: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TipCalcError::IoError(_) => "Check the file path and permissions",
            TipCalcError::SerializationError(_) => "Retry without --json",
            TipCalcError::ConfigError { .. }
            | TipCalcError::ConfigValidationError { .. } => {
                "Check the TOML config file and command line flags"
            }
            TipCalcError::InvalidConfigValueError { .. } => {
                "Use a tip percentage of 0, 5, 10, 15, 20, 25 or 30 and a split between 1 and 10"
            }
            TipCalcError::TerminalError { .. } => {
                "Run inside an interactive terminal, or pass --amount for a one-shot result"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TipCalcError>;
