use tip_calc::app::{self, LatestScreen};
use tip_calc::{
    Action, LocaleCurrencyFormatter, MemoryClipboard, RowKind, SplitCount, Store, TipPercentage,
};

type TestStore = Store<MemoryClipboard, LocaleCurrencyFormatter>;

fn setup(amount: &str, percentage: u8, split: u8) -> (TestStore, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let mut store = Store::new(clipboard.clone(), LocaleCurrencyFormatter::for_tag("en_US"));
    store.dispatch(Action::SetAmount(amount.to_string()));
    store.dispatch(Action::SelectPercentage(TipPercentage::new(percentage).unwrap()));
    store.dispatch(Action::SelectSplit(SplitCount::new(split).unwrap()));
    (store, clipboard)
}

fn value(store: &TestStore, kind: RowKind) -> Option<String> {
    store.screen().row(kind).map(|row| row.value.clone())
}

#[test]
fn test_scenario_single_payer() {
    let (store, _) = setup("100", 20, 1);
    assert_eq!(value(&store, RowKind::Base).as_deref(), Some("$100.00"));
    assert_eq!(value(&store, RowKind::Tip).as_deref(), Some("$20.00"));
    assert_eq!(value(&store, RowKind::Total).as_deref(), Some("$120.00"));
    assert_eq!(value(&store, RowKind::PerPerson), None);
}

#[test]
fn test_scenario_split_three_ways() {
    let (store, _) = setup("90", 15, 3);
    let screen = store.screen();
    assert_eq!(screen.result.rows.len(), 4);
    assert_eq!(value(&store, RowKind::Tip).as_deref(), Some("$13.50"));
    assert_eq!(value(&store, RowKind::Total).as_deref(), Some("$103.50"));
    assert_eq!(value(&store, RowKind::PerPerson).as_deref(), Some("$34.50"));
    assert_eq!(
        screen.row(RowKind::Tip).map(|r| r.title.as_str()),
        Some("Added percentage (15%)")
    );
}

#[test]
fn test_scenario_empty_amount() {
    let (store, _) = setup("", 20, 1);
    let screen = store.screen();
    assert_eq!(screen.input.amount.prefix, None);
    assert_eq!(value(&store, RowKind::Base).as_deref(), Some("$0.00"));
    assert_eq!(value(&store, RowKind::Tip).as_deref(), Some("$0.00"));
    assert_eq!(value(&store, RowKind::Total).as_deref(), Some("$0.00"));
}

#[test]
fn test_boundary_ten_people_no_tip() {
    let (store, _) = setup("1000", 0, 10);
    assert_eq!(value(&store, RowKind::Tip).as_deref(), Some("$0.00"));
    assert_eq!(value(&store, RowKind::Total).as_deref(), Some("$1,000.00"));
    assert_eq!(value(&store, RowKind::PerPerson).as_deref(), Some("$100.00"));
}

#[test]
fn test_rereading_is_idempotent() {
    let (store, _) = setup("37,25", 25, 4);
    let first = store.screen();
    let second = store.screen();
    assert_eq!(first, second);
}

#[test]
fn test_every_change_reaches_subscriber() {
    let (mut store, _) = setup("", 20, 1);
    let latest = LatestScreen::new();
    store.subscribe(Box::new(latest.clone()));

    for ch in "50".chars() {
        store.dispatch(Action::InsertChar(ch));
        assert_eq!(latest.screen(), Some(store.screen()));
    }
    store.dispatch(Action::NextPercentage);
    store.dispatch(Action::NextSplit);

    let screen = latest.screen().unwrap();
    assert_eq!(screen.row(RowKind::Total).unwrap().value, "$62.50");
    assert_eq!(screen.row(RowKind::PerPerson).unwrap().value, "$31.25");
}

#[test]
fn test_copy_each_visible_row() {
    let (mut store, clipboard) = setup("90", 15, 3);
    for (kind, expected) in [
        (RowKind::Base, "$90.00"),
        (RowKind::Tip, "$13.50"),
        (RowKind::Total, "$103.50"),
        (RowKind::PerPerson, "$34.50"),
    ] {
        store.dispatch(Action::Copy(kind));
        assert_eq!(clipboard.contents().as_deref(), Some(expected));
    }
}

#[test]
fn test_run_once_with_copy() {
    let clipboard = MemoryClipboard::new();
    let mut store = Store::new(clipboard.clone(), LocaleCurrencyFormatter::fallback());
    let screen = app::run_once(&mut store, "100", Some(RowKind::Total));
    assert_eq!(clipboard.contents().as_deref(), Some("$120.00"));

    let json = serde_json::to_value(&screen).unwrap();
    assert_eq!(json["title"], "Tip Calculator");
    assert_eq!(json["currency_code"], "USD");
    assert_eq!(json["result"]["rows"][2]["kind"], "total");
    assert_eq!(json["result"]["rows"][2]["value"], "$120.00");
}

#[test]
fn test_locale_formatting_flows_to_rows() {
    let clipboard = MemoryClipboard::new();
    let mut store = Store::new(clipboard, LocaleCurrencyFormatter::for_tag("de_DE.UTF-8"));
    let screen = app::run_once(&mut store, "1234,5", None);
    assert_eq!(screen.currency_code, "EUR");
    assert_eq!(screen.input.amount.prefix.as_deref(), Some("€"));
    assert_eq!(screen.row(RowKind::Base).unwrap().value, "1.234,50\u{a0}€");
}
