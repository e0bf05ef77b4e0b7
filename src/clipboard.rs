// clipboard.rs - OS clipboard access for quill
#[cfg(feature = "clipboard")]
use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard is not available: {0}")]
    Unavailable(String),
    #[error("System error: {0}")]
    SystemError(String),
}

/// The system clipboard as seen by the editor.
///
/// Reads return `None` when there is nothing usable to paste (empty,
/// non-text content, or the platform refused access).
pub trait ClipboardPort {
    fn read(&mut self) -> Option<String>;
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard, used when no system clipboard is reachable.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            content: Some(text.to_string()),
        }
    }
}

impl ClipboardPort for MemoryClipboard {
    fn read(&mut self) -> Option<String> {
        self.content.clone().filter(|text| !text.is_empty())
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.content = Some(text.to_string());
        Ok(())
    }
}

#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn connect() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardPort for SystemClipboard {
    fn read(&mut self) -> Option<String> {
        match self.inner.get_text() {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to get clipboard text: {}", e);
                None
            }
        }
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        // set_text replaces whatever the clipboard held before
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::SystemError(e.to_string()))
    }
}

/// Best-effort clipboard: the system one when reachable, otherwise memory.
pub fn system_or_memory() -> Box<dyn ClipboardPort> {
    #[cfg(feature = "clipboard")]
    {
        match SystemClipboard::connect() {
            Ok(clipboard) => return Box::new(clipboard),
            Err(e) => warn!("{}; falling back to in-process clipboard", e),
        }
    }
    Box::new(MemoryClipboard::new())
}
