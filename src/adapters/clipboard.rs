use crate::domain::ports::Clipboard;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Clipboard implementation picked when the application is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    System,
    Memory,
    None,
}

impl ClipboardBackend {
    pub const NAMES: [&'static str; 3] = ["system", "memory", "none"];

    pub fn build(self) -> Box<dyn Clipboard> {
        tracing::debug!("Using {} clipboard backend", self);
        match self {
            ClipboardBackend::System => Box::new(SystemClipboard::new()),
            ClipboardBackend::Memory => Box::new(MemoryClipboard::new()),
            ClipboardBackend::None => Box::new(NoopClipboard),
        }
    }
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClipboardBackend::System => "system",
            ClipboardBackend::Memory => "memory",
            ClipboardBackend::None => "none",
        };
        f.write_str(name)
    }
}

impl FromStr for ClipboardBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ClipboardBackend::System),
            "memory" => Ok(ClipboardBackend::Memory),
            "none" | "off" => Ok(ClipboardBackend::None),
            other => Err(format!(
                "unknown clipboard backend '{}' (expected one of {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Platform clipboard through `arboard`.
///
/// The handle is opened on first use and kept alive afterwards; on X11 the
/// copied text is only served while the owning handle exists.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn try_copy(&self, text: &str) -> std::result::Result<(), String> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| "clipboard lock poisoned".to_string())?;

        if guard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| format!("clipboard init: {}", e))?;
            *guard = Some(clipboard);
        }

        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .map_err(|e| format!("clipboard set: {}", e)),
            None => Err("clipboard unavailable".to_string()),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) {
        match self.try_copy(text) {
            Ok(()) => tracing::debug!("Copied {} bytes to system clipboard", text.len()),
            Err(e) => tracing::warn!("Clipboard copy ignored: {}", e),
        }
    }
}

/// In-process clipboard. Clones share the same slot, so a test can keep one
/// handle and hand another to the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|slot| slot.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) {
        if let Ok(mut slot) = self.contents.lock() {
            *slot = Some(text.to_string());
        }
    }
}

/// Discards every copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn copy(&self, text: &str) {
        tracing::debug!("Clipboard disabled, dropping {} bytes", text.len());
    }
}
