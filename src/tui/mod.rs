//! Terminal front end built on ratatui + crossterm.
//!
//! The [`TuiApp`] subscribes to the store, paints the latest [`Screen`] and
//! turns key presses into store actions. Focus and the copy menu are UI-only
//! state and never reach the store.
//!
//! [`Screen`]: crate::app::view::Screen

pub mod app;
pub mod keymap;
pub mod render;

pub use app::{Focus, TuiApp, UiState};
