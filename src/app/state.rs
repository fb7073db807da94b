use crate::app::action::Action;
use crate::domain::model::{SplitCount, TipPercentage};

/// The only mutable state of the form. Derived values are never stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub amount_text: String,
    pub percentage: TipPercentage,
    pub split: SplitCount,
}

impl FormState {
    pub fn new(percentage: TipPercentage, split: SplitCount) -> Self {
        Self {
            amount_text: String::new(),
            percentage,
            split,
        }
    }

    /// Reducer: applies one input event. `Copy` leaves the state untouched.
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::SetAmount(text) => self.amount_text = text.clone(),
            Action::InsertChar(ch) => {
                if is_amount_char(*ch) {
                    self.amount_text.push(*ch);
                }
            }
            Action::Backspace => {
                self.amount_text.pop();
            }
            Action::ClearAmount => self.amount_text.clear(),
            Action::SelectPercentage(p) => self.percentage = *p,
            Action::NextPercentage => self.percentage = self.percentage.next(),
            Action::PreviousPercentage => self.percentage = self.percentage.previous(),
            Action::SelectSplit(s) => self.split = *s,
            Action::NextSplit => self.split = self.split.next(),
            Action::PreviousSplit => self.split = self.split.previous(),
            Action::Copy(_) => {}
        }
    }
}

/// Keys a decimal pad can produce.
pub fn is_amount_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == ','
}
