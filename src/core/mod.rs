pub mod engine;

pub use crate::domain::model::{RowKind, SplitCount, TipBreakdown, TipPercentage};
pub use crate::domain::ports::{Clipboard, CurrencyFormatter};
