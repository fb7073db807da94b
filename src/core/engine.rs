//! Tip Engine: pure arithmetic from (amount, percentage, split) to the four
//! result values. No rounding happens here; display formatting owns precision.

use crate::domain::model::{SplitCount, TipBreakdown, TipPercentage};

/// Parses user-entered amount text. Accepts `.` or `,` as the decimal
/// separator and falls back to 0.0 for anything that is not a finite,
/// non-negative number.
pub fn parse_amount(text: &str) -> f64 {
    let normalized = text.replace(',', ".");
    match normalized.parse::<f64>() {
        // abs() folds "-0" into 0.0
        Ok(value) if value.is_finite() && value >= 0.0 => value.abs(),
        _ => 0.0,
    }
}

pub fn tip_amount(amount: f64, percentage: f64) -> f64 {
    amount * percentage / 100.0
}

pub fn total(amount: f64, tip_amount: f64) -> f64 {
    amount + tip_amount
}

/// Share per person; 0 when `split_count` is not positive.
pub fn per_person(total: f64, split_count: u32) -> f64 {
    if split_count == 0 {
        return 0.0;
    }
    total / f64::from(split_count)
}

pub struct TipEngine;

impl TipEngine {
    pub fn breakdown(
        amount_text: &str,
        percentage: TipPercentage,
        split: SplitCount,
    ) -> TipBreakdown {
        let base = parse_amount(amount_text);
        let tip = tip_amount(base, f64::from(percentage.value()));
        let total = total(base, tip);
        let per_person = per_person(total, u32::from(split.value()));

        TipBreakdown {
            base,
            tip,
            total,
            per_person,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_both_separators() {
        assert_eq!(parse_amount("12.50"), 12.50);
        assert_eq!(parse_amount("12,50"), 12.50);
        assert_eq!(parse_amount("7"), 7.0);
    }

    #[test]
    fn test_parse_amount_defaults_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-5"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("1,234.50"), 0.0);
        assert_eq!(parse_amount(" 12"), 0.0);
        assert!(parse_amount("-0").is_sign_positive());
    }

    #[test]
    fn test_per_person_zero_split() {
        assert_eq!(per_person(120.0, 0), 0.0);
        assert_eq!(per_person(120.0, 4), 30.0);
    }

    #[test]
    fn test_breakdown() {
        let result = TipEngine::breakdown(
            "90",
            TipPercentage::new(15).unwrap(),
            SplitCount::new(3).unwrap(),
        );
        assert!((result.tip - 13.5).abs() < 1e-9);
        assert!((result.total - 103.5).abs() < 1e-9);
        assert!((result.per_person - 34.5).abs() < 1e-9);
        assert_eq!(result.base, 90.0);
    }
}
