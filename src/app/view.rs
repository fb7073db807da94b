//! Pure render function from form state to the screen view model.
//!
//! Nothing here touches the terminal; the TUI and the headless printer both
//! draw the same [`Screen`].

use crate::app::state::FormState;
use crate::core::engine::TipEngine;
use crate::domain::model::{RowKind, SplitCount, TipPercentage};
use crate::domain::ports::CurrencyFormatter;
use serde::Serialize;
use std::fmt;

pub const TITLE: &str = "Tip Calculator";
pub const COPY_HINT: &str = "Press Enter to copy";
pub const COPY_ACTION: &str = "Copy";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub title: String,
    pub currency_code: String,
    pub input: InputSection,
    pub result: ResultSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSection {
    pub heading: String,
    pub amount: AmountField,
    pub percentage: Picker,
    pub split: Picker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountField {
    pub placeholder: String,
    pub text: String,
    /// Currency symbol, present only while `text` is non-empty.
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Picker {
    pub label: String,
    pub options: Vec<String>,
    pub selected: usize,
}

impl Picker {
    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSection {
    pub heading: String,
    pub rows: Vec<ResultRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub kind: RowKind,
    pub title: String,
    pub value: String,
    pub emphasized: bool,
    pub hint: String,
}

impl ResultRow {
    fn new(kind: RowKind, title: String, value: String, emphasized: bool) -> Self {
        Self {
            kind,
            title,
            value,
            emphasized,
            hint: COPY_HINT.to_string(),
        }
    }
}

impl Screen {
    pub fn row(&self, kind: RowKind) -> Option<&ResultRow> {
        self.result.rows.iter().find(|row| row.kind == kind)
    }
}

pub fn render<F>(state: &FormState, formatter: &F) -> Screen
where
    F: CurrencyFormatter + ?Sized,
{
    let breakdown = TipEngine::breakdown(&state.amount_text, state.percentage, state.split);

    let amount = AmountField {
        placeholder: "Amount".to_string(),
        text: state.amount_text.clone(),
        prefix: (!state.amount_text.is_empty()).then(|| formatter.currency_symbol().to_string()),
    };

    let percentage = Picker {
        label: "Percentage".to_string(),
        options: TipPercentage::all().map(TipPercentage::label).collect(),
        selected: TipPercentage::all()
            .position(|p| p == state.percentage)
            .unwrap_or_default(),
    };

    let split = Picker {
        label: "Split".to_string(),
        options: SplitCount::all().map(SplitCount::label).collect(),
        selected: SplitCount::all()
            .position(|s| s == state.split)
            .unwrap_or_default(),
    };

    let mut rows = vec![
        ResultRow::new(
            RowKind::Base,
            "Base amount".to_string(),
            formatter.format(breakdown.base),
            false,
        ),
        ResultRow::new(
            RowKind::Tip,
            format!("Added percentage ({})", state.percentage.label()),
            formatter.format(breakdown.tip),
            false,
        ),
        ResultRow::new(
            RowKind::Total,
            "Total".to_string(),
            formatter.format(breakdown.total),
            true,
        ),
    ];

    if state.split.is_shared() {
        rows.push(ResultRow::new(
            RowKind::PerPerson,
            format!("Per person (x{})", state.split.value()),
            formatter.format(breakdown.per_person),
            true,
        ));
    }

    Screen {
        title: TITLE.to_string(),
        currency_code: formatter.currency_code().to_string(),
        input: InputSection {
            heading: "Input".to_string(),
            amount,
            percentage,
            split,
        },
        result: ResultSection {
            heading: "Result".to_string(),
            rows,
        },
    }
}

/// Plain-text rendering used by the one-shot command line mode.
impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        let width = self
            .result
            .rows
            .iter()
            .map(|row| row.title.chars().count())
            .max()
            .unwrap_or_default();

        for row in &self.result.rows {
            writeln!(f, "{:<width$}  {}", row.title, row.value, width = width)?;
        }
        Ok(())
    }
}
