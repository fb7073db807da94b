pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod tui;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ClipboardBackend, LocaleCurrencyFormatter, MemoryClipboard};
pub use app::{Action, Screen, Store};
pub use config::{Settings, TomlConfig};
pub use core::engine::TipEngine;
pub use domain::model::{RowKind, SplitCount, TipBreakdown, TipPercentage};
pub use utils::error::{Result, TipCalcError};
