use tip_calc::core::engine::{parse_amount, per_person, tip_amount, total};
use tip_calc::{SplitCount, TipEngine, TipPercentage};

const AMOUNTS: [f64; 8] = [0.0, 0.01, 1.0, 12.5, 90.0, 100.0, 999.99, 123456.78];

#[test]
fn test_tip_and_total_match_formula_for_every_option() {
    for amount in AMOUNTS {
        for p in TipPercentage::all() {
            let percentage = f64::from(p.value());
            let tip = tip_amount(amount, percentage);
            assert_eq!(tip, amount * percentage / 100.0);
            assert_eq!(total(amount, tip), amount + amount * percentage / 100.0);
        }
    }
}

#[test]
fn test_per_person_divides_total() {
    for t in AMOUNTS {
        for s in SplitCount::all() {
            let split = u32::from(s.value());
            assert_eq!(per_person(t, split), t / f64::from(split));
        }
        assert_eq!(per_person(t, 0), 0.0);
    }
}

#[test]
fn test_parse_amount_examples() {
    assert_eq!(parse_amount("12.50"), 12.50);
    assert_eq!(parse_amount("12,50"), 12.50);
    assert_eq!(parse_amount(""), 0.0);
    assert_eq!(parse_amount("abc"), 0.0);
}

#[test]
fn test_breakdown_uses_parsed_amount() {
    let breakdown = TipEngine::breakdown("abc", TipPercentage::DEFAULT, SplitCount::DEFAULT);
    assert_eq!(breakdown.base, 0.0);
    assert_eq!(breakdown.tip, 0.0);
    assert_eq!(breakdown.total, 0.0);
    assert_eq!(breakdown.per_person, 0.0);

    let breakdown = TipEngine::breakdown(
        "1000",
        TipPercentage::new(0).unwrap(),
        SplitCount::new(10).unwrap(),
    );
    assert_eq!(breakdown.tip, 0.0);
    assert_eq!(breakdown.total, 1000.0);
    assert_eq!(breakdown.per_person, 100.0);
}
