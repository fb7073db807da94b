//! Locale-driven currency formatting.
//!
//! The locale is read from the POSIX environment (`LC_ALL`, `LC_MONETARY`,
//! `LANG`). Its region picks the currency; language and region together pick
//! separators and symbol placement. Anything unknown lands on the USD / "$"
//! fallback.

use crate::domain::ports::CurrencyFormatter;

pub const FALLBACK_CURRENCY_CODE: &str = "USD";
pub const FALLBACK_CURRENCY_SYMBOL: &str = "$";

const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Language and optional region of a locale identifier such as `de_DE.UTF-8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    pub language: String,
    pub region: Option<String>,
}

impl LocaleTag {
    /// Parses `en_US`, `en-US`, `de_DE.UTF-8@euro`, `fr`. `C` and `POSIX`
    /// carry no currency and yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        // 去掉編碼與修飾詞 (.UTF-8, @euro)
        let name = raw.split(['.', '@']).next().unwrap_or_default().trim();
        if name.is_empty() || name == "C" || name == "POSIX" {
            return None;
        }

        let mut parts = name.split(['_', '-']);
        let language = parts.next()?.to_ascii_lowercase();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }

        let region = parts
            .find(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
            .map(|p| p.to_ascii_uppercase());

        Some(Self { language, region })
    }

    /// Reads the process locale from the environment.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// First non-empty variable of `LC_ALL`, `LC_MONETARY`, `LANG` decides.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = LOCALE_ENV_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .find(|value| !value.trim().is_empty())?;
        Self::parse(&raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1.00`
    Prefix,
    /// `€ 1,00`
    PrefixSpaced,
    /// `1,00 €`
    SuffixSpaced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberConventions {
    pub decimal_separator: char,
    pub grouping_separator: &'static str,
    pub placement: SymbolPlacement,
}

impl NumberConventions {
    const fn new(decimal: char, grouping: &'static str, placement: SymbolPlacement) -> Self {
        Self {
            decimal_separator: decimal,
            grouping_separator: grouping,
            placement,
        }
    }

    pub fn english() -> Self {
        Self::new('.', ",", SymbolPlacement::Prefix)
    }

    fn for_locale(tag: &LocaleTag) -> Self {
        use SymbolPlacement::*;

        let region = tag.region.as_deref().unwrap_or_default();
        match (tag.language.as_str(), region) {
            // Regional variants first, then the language default.
            ("de" | "it", "CH") => Self::new('.', "\u{2019}", PrefixSpaced),
            ("es", "MX" | "US" | "PR" | "EC" | "SV") => Self::new('.', ",", Prefix),
            ("es", "AR" | "CL" | "CO" | "UY") => Self::new(',', ".", PrefixSpaced),
            ("pt", "PT") => Self::new(',', "\u{a0}", SuffixSpaced),
            ("fr", "CH") => Self::new(',', "\u{202f}", SuffixSpaced),
            ("de" | "es" | "it" | "da" | "el", _) => Self::new(',', ".", SuffixSpaced),
            ("nl" | "pt", _) => Self::new(',', ".", PrefixSpaced),
            ("tr" | "id", _) => Self::new(',', ".", Prefix),
            ("fr", _) => Self::new(',', "\u{202f}", SuffixSpaced),
            ("sv" | "nb" | "nn" | "no" | "fi" | "pl" | "cs" | "ru" | "uk", _) => {
                Self::new(',', "\u{a0}", SuffixSpaced)
            }
            _ => Self::english(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CurrencyInfo {
    code: &'static str,
    symbol: &'static str,
    fraction_digits: usize,
}

const fn currency(
    code: &'static str,
    symbol: &'static str,
    fraction_digits: usize,
) -> CurrencyInfo {
    CurrencyInfo {
        code,
        symbol,
        fraction_digits,
    }
}

fn currency_for_region(region: &str) -> Option<CurrencyInfo> {
    let info = match region {
        "US" | "EC" | "SV" | "PR" => currency("USD", "$", 2),
        "GB" => currency("GBP", "£", 2),
        "DE" | "FR" | "ES" | "IT" | "NL" | "BE" | "AT" | "FI" | "IE" | "PT" | "GR" | "LU"
        | "SK" | "SI" | "EE" | "LV" | "LT" | "HR" => currency("EUR", "€", 2),
        "CH" => currency("CHF", "CHF", 2),
        "JP" => currency("JPY", "¥", 0),
        "CN" => currency("CNY", "¥", 2),
        "TW" => currency("TWD", "$", 2),
        "HK" => currency("HKD", "HK$", 2),
        "KR" => currency("KRW", "₩", 0),
        "IN" => currency("INR", "₹", 2),
        "CA" => currency("CAD", "$", 2),
        "AU" => currency("AUD", "$", 2),
        "NZ" => currency("NZD", "$", 2),
        "SG" => currency("SGD", "$", 2),
        "MX" => currency("MXN", "$", 2),
        "AR" => currency("ARS", "$", 2),
        "CL" => currency("CLP", "$", 0),
        "CO" => currency("COP", "$", 2),
        "UY" => currency("UYU", "$", 2),
        "PE" => currency("PEN", "S/", 2),
        "TR" => currency("TRY", "₺", 2),
        "ID" => currency("IDR", "Rp", 2),
        "TH" => currency("THB", "฿", 2),
        "PH" => currency("PHP", "₱", 2),
        "MY" => currency("MYR", "RM", 2),
        "BR" => currency("BRL", "R$", 2),
        "SE" => currency("SEK", "kr", 2),
        "NO" => currency("NOK", "kr", 2),
        "DK" => currency("DKK", "kr.", 2),
        "PL" => currency("PLN", "zł", 2),
        "CZ" => currency("CZK", "Kč", 2),
        "RU" => currency("RUB", "₽", 2),
        "UA" => currency("UAH", "₴", 2),
        "ZA" => currency("ZAR", "R", 2),
        _ => return None,
    };
    Some(info)
}

/// [`CurrencyFormatter`] backed by a static table of locale conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCurrencyFormatter {
    code: String,
    symbol: String,
    fraction_digits: usize,
    conventions: NumberConventions,
}

impl LocaleCurrencyFormatter {
    /// USD, "$", English separators.
    pub fn fallback() -> Self {
        Self {
            code: FALLBACK_CURRENCY_CODE.to_string(),
            symbol: FALLBACK_CURRENCY_SYMBOL.to_string(),
            fraction_digits: 2,
            conventions: NumberConventions::english(),
        }
    }

    pub fn for_locale(tag: Option<&LocaleTag>) -> Self {
        let Some(tag) = tag else {
            tracing::debug!("No locale available, using {} fallback", FALLBACK_CURRENCY_CODE);
            return Self::fallback();
        };

        match tag.region.as_deref().and_then(currency_for_region) {
            Some(info) => Self {
                code: info.code.to_string(),
                symbol: info.symbol.to_string(),
                fraction_digits: info.fraction_digits,
                conventions: NumberConventions::for_locale(tag),
            },
            None => {
                tracing::debug!(
                    "No currency data for locale {:?}, using {} fallback",
                    tag,
                    FALLBACK_CURRENCY_CODE
                );
                Self::fallback()
            }
        }
    }

    /// Parses a locale identifier, falling back on unknown input.
    pub fn for_tag(raw: &str) -> Self {
        Self::for_locale(LocaleTag::parse(raw).as_ref())
    }

    /// Formatter for the process locale.
    pub fn detect() -> Self {
        let formatter = Self::for_locale(LocaleTag::from_env().as_ref());
        tracing::debug!(
            "Detected currency {} ({})",
            formatter.code,
            formatter.symbol
        );
        formatter
    }

    pub fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }
}

impl Default for LocaleCurrencyFormatter {
    fn default() -> Self {
        Self::fallback()
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn currency_code(&self) -> &str {
        &self.code
    }

    fn currency_symbol(&self) -> &str {
        &self.symbol
    }

    /// Overflowed values render as `∞` (or `NaN`) next to the symbol rather
    /// than as a misleading amount.
    fn format(&self, value: f64) -> String {
        let (negative, number) = if value.is_nan() {
            (false, "NaN".to_string())
        } else if value.is_infinite() {
            (value < 0.0, "∞".to_string())
        } else {
            self.localized_digits(value)
        };

        let body = match self.conventions.placement {
            SymbolPlacement::Prefix => format!("{}{}", self.symbol, number),
            SymbolPlacement::PrefixSpaced => format!("{}\u{a0}{}", self.symbol, number),
            SymbolPlacement::SuffixSpaced => format!("{}\u{a0}{}", number, self.symbol),
        };

        if negative {
            format!("-{}", body)
        } else {
            body
        }
    }
}

impl LocaleCurrencyFormatter {
    /// Rounds to the currency's minor units and applies the locale separators.
    fn localized_digits(&self, value: f64) -> (bool, String) {
        let digits = format!("{:.*}", self.fraction_digits, value.abs());
        let negative = value < 0.0 && digits.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut number = group_thousands(integer, self.conventions.grouping_separator);
        if let Some(fraction) = fraction {
            number.push(self.conventions.decimal_separator);
            number.push_str(fraction);
        }
        (negative, number)
    }
}

fn group_thousands(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_locale_tags() {
        let tag = LocaleTag::parse("de_DE.UTF-8@euro").unwrap();
        assert_eq!(tag.language, "de");
        assert_eq!(tag.region.as_deref(), Some("DE"));

        let tag = LocaleTag::parse("en-gb").unwrap();
        assert_eq!(tag.region.as_deref(), Some("GB"));

        let tag = LocaleTag::parse("fr").unwrap();
        assert_eq!(tag.region, None);

        assert!(LocaleTag::parse("C").is_none());
        assert!(LocaleTag::parse("POSIX").is_none());
        assert!(LocaleTag::parse("C.UTF-8").is_none());
        assert!(LocaleTag::parse("").is_none());
    }

    #[test]
    fn test_env_precedence() {
        let env: HashMap<&str, &str> = [
            ("LC_ALL", ""),
            ("LC_MONETARY", "ja_JP.UTF-8"),
            ("LANG", "en_US.UTF-8"),
        ]
        .into_iter()
        .collect();
        let tag = LocaleTag::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(tag.region.as_deref(), Some("JP"));

        let tag = LocaleTag::from_lookup(|_| None);
        assert!(tag.is_none());
    }

    #[test]
    fn test_format_en_us() {
        let formatter = LocaleCurrencyFormatter::for_tag("en_US.UTF-8");
        assert_eq!(formatter.currency_code(), "USD");
        assert_eq!(formatter.format(0.0), "$0.00");
        assert_eq!(formatter.format(13.5), "$13.50");
        assert_eq!(formatter.format(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_de_de() {
        let formatter = LocaleCurrencyFormatter::for_tag("de_DE");
        assert_eq!(formatter.currency_code(), "EUR");
        assert_eq!(formatter.currency_symbol(), "€");
        assert_eq!(formatter.format(1234.5), "1.234,50\u{a0}€");
    }

    #[test]
    fn test_format_zero_fraction_currency() {
        let formatter = LocaleCurrencyFormatter::for_tag("ja_JP");
        assert_eq!(formatter.fraction_digits(), 0);
        assert_eq!(formatter.format(1234.6), "¥1,235");
    }

    #[test]
    fn test_fallback_for_unknown_locale() {
        let fallback = LocaleCurrencyFormatter::fallback();
        assert_eq!(LocaleCurrencyFormatter::for_tag("C"), fallback);
        assert_eq!(LocaleCurrencyFormatter::for_tag("xx_ZZ"), fallback);
        assert_eq!(LocaleCurrencyFormatter::for_tag("en"), fallback);
        assert_eq!(fallback.currency_code(), "USD");
        assert_eq!(fallback.currency_symbol(), "$");
    }

    #[test]
    fn test_format_non_finite_values() {
        let formatter = LocaleCurrencyFormatter::fallback();
        assert_eq!(formatter.format(f64::INFINITY), "$∞");
        assert_eq!(formatter.format(f64::NEG_INFINITY), "-$∞");
        assert_eq!(formatter.format(f64::NAN), "$NaN");
        assert_eq!(formatter.format(-0.001), "$0.00");

        let euro = LocaleCurrencyFormatter::for_tag("de_DE");
        assert_eq!(euro.format(f64::INFINITY), "∞\u{a0}€");
    }

    #[test]
    fn test_regional_conventions() {
        let mx = LocaleCurrencyFormatter::for_tag("es_MX.UTF-8");
        assert_eq!(mx.currency_code(), "MXN");
        assert_eq!(mx.format(1234.5), "$1,234.50");

        let es = LocaleCurrencyFormatter::for_tag("es_ES");
        assert_eq!(es.format(1234.5), "1.234,50\u{a0}€");

        let ar = LocaleCurrencyFormatter::for_tag("es_AR");
        assert_eq!(ar.currency_code(), "ARS");
        assert_eq!(ar.format(1234.5), "$\u{a0}1.234,50");

        let ie = LocaleCurrencyFormatter::for_tag("en_IE");
        assert_eq!(ie.currency_code(), "EUR");
        assert_eq!(ie.format(1234.5), "€1,234.50");

        let ch = LocaleCurrencyFormatter::for_tag("de_CH");
        assert_eq!(ch.format(1234.5), "CHF\u{a0}1\u{2019}234.50");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", ","), "1");
        assert_eq!(group_thousands("999", ","), "999");
        assert_eq!(group_thousands("1000", ","), "1,000");
        assert_eq!(group_thousands("123456", "."), "123.456");
    }
}
