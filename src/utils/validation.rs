use crate::utils::error::{Result, TipCalcError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TipCalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TipCalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TipCalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses a setting with its `FromStr` impl, tagging failures with the field name.
pub fn parse_setting<T>(field_name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|reason| TipCalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::LogFormat;

    #[test]
    fn test_validate_path_and_strings() {
        assert!(validate_path("logging.file", "tip-calc.log").is_ok());
        assert!(validate_path("logging.file", "").is_err());
        assert!(validate_non_empty_string("locale.tag", "  ").is_err());
    }

    #[test]
    fn test_parse_setting_reports_field() {
        let err = parse_setting::<LogFormat>("logging.format", "xml").unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
