use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tip percentage drawn from the fixed option set {0, 5, ..., 30}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TipPercentage(u8);

impl TipPercentage {
    pub const OPTIONS: [u8; 7] = [0, 5, 10, 15, 20, 25, 30];
    pub const DEFAULT: TipPercentage = TipPercentage(20);

    /// Returns `None` unless `value` is one of [`TipPercentage::OPTIONS`].
    pub fn new(value: u8) -> Option<Self> {
        Self::OPTIONS.contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = TipPercentage> {
        Self::OPTIONS.into_iter().map(TipPercentage)
    }

    fn position(self) -> usize {
        Self::OPTIONS
            .iter()
            .position(|&v| v == self.0)
            .unwrap_or_default()
    }

    /// Next option up, staying on the last one.
    pub fn next(self) -> Self {
        let idx = (self.position() + 1).min(Self::OPTIONS.len() - 1);
        Self(Self::OPTIONS[idx])
    }

    /// Next option down, staying on the first one.
    pub fn previous(self) -> Self {
        Self(Self::OPTIONS[self.position().saturating_sub(1)])
    }

    pub fn label(self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for TipPercentage {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "{}% is not an offered tip percentage (expected one of {:?})",
                value,
                Self::OPTIONS
            )
        })
    }
}

impl From<TipPercentage> for u8 {
    fn from(value: TipPercentage) -> Self {
        value.0
    }
}

/// Number of people sharing the bill, always within 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SplitCount(u8);

impl SplitCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: SplitCount = SplitCount(1);

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = SplitCount> {
        (Self::MIN..=Self::MAX).map(SplitCount)
    }

    pub fn next(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    pub fn previous(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    pub fn is_shared(self) -> bool {
        self.0 > 1
    }

    /// "1 person", "2 people", ...
    pub fn label(self) -> String {
        let noun = if self.0 == 1 { "person" } else { "people" };
        format!("{} {}", self.0, noun)
    }
}

impl Default for SplitCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for SplitCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "split of {} is out of range ({}..={})",
                value,
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl From<SplitCount> for u8 {
    fn from(value: SplitCount) -> Self {
        value.0
    }
}

/// The four derived outputs of one computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipBreakdown {
    pub base: f64,
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
}

/// Identifies a row in the result section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowKind {
    Base,
    Tip,
    Total,
    PerPerson,
}

impl RowKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RowKind::Base => "base",
            RowKind::Tip => "tip",
            RowKind::Total => "total",
            RowKind::PerPerson => "per-person",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(RowKind::Base),
            "tip" => Ok(RowKind::Tip),
            "total" => Ok(RowKind::Total),
            "per-person" | "per_person" => Ok(RowKind::PerPerson),
            other => Err(format!(
                "unknown result row '{}' (expected base, tip, total or per-person)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_options() {
        let values: Vec<u8> = TipPercentage::all().map(u8::from).collect();
        assert_eq!(values, vec![0, 5, 10, 15, 20, 25, 30]);
        assert_eq!(TipPercentage::default().value(), 20);
        assert!(TipPercentage::new(12).is_none());
        assert!(TipPercentage::new(35).is_none());
    }

    #[test]
    fn test_percentage_stepping_is_clamped() {
        let max = TipPercentage::new(30).unwrap();
        let min = TipPercentage::new(0).unwrap();
        assert_eq!(max.next(), max);
        assert_eq!(min.previous(), min);
        assert_eq!(TipPercentage::DEFAULT.next().value(), 25);
        assert_eq!(TipPercentage::DEFAULT.previous().value(), 15);
    }

    #[test]
    fn test_split_range_and_labels() {
        assert_eq!(SplitCount::all().count(), 10);
        assert!(SplitCount::new(0).is_none());
        assert!(SplitCount::new(11).is_none());
        assert_eq!(SplitCount::default().label(), "1 person");
        assert_eq!(SplitCount::new(2).unwrap().label(), "2 people");
        assert_eq!(SplitCount::new(10).unwrap().next().value(), 10);
        assert_eq!(SplitCount::default().previous().value(), 1);
    }

    #[test]
    fn test_row_kind_parsing() {
        assert_eq!("per-person".parse::<RowKind>(), Ok(RowKind::PerPerson));
        assert_eq!("Total".parse::<RowKind>(), Ok(RowKind::Total));
        assert!("grand".parse::<RowKind>().is_err());
    }

    #[test]
    fn test_percentage_deserialize_rejects_unknown_option() {
        let ok: TipPercentage = serde_json::from_str("15").unwrap();
        assert_eq!(ok.value(), 15);
        assert!(serde_json::from_str::<TipPercentage>("17").is_err());
    }
}
