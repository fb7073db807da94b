// Adapters layer: concrete implementations of the domain ports for the host platform.

pub mod clipboard;
pub mod currency;

pub use clipboard::{ClipboardBackend, MemoryClipboard, NoopClipboard, SystemClipboard};
pub use currency::{LocaleCurrencyFormatter, LocaleTag};
