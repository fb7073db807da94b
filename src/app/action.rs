use crate::domain::model::{RowKind, SplitCount, TipPercentage};

/// Input events accepted by the [`Store`](crate::app::store::Store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces the amount text wholesale (paste, headless input).
    SetAmount(String),
    /// Appends a key from the decimal pad; other characters are dropped.
    InsertChar(char),
    Backspace,
    ClearAmount,
    SelectPercentage(TipPercentage),
    NextPercentage,
    PreviousPercentage,
    SelectSplit(SplitCount),
    NextSplit,
    PreviousSplit,
    /// Sends the row's display value to the clipboard.
    Copy(RowKind),
}
