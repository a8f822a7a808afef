use crate::error::ClipboardError;

/// Narrow capability interface over the OS clipboard so the watcher can be
/// driven with a scripted fake in tests.
pub trait ClipboardReader {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// ClipboardReader backed by arboard for cross-platform clipboard access.
pub struct SystemClipboard {
    clipboard: arboard::Clipboard
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = arboard::Clipboard::new()?;
        Ok(SystemClipboard { clipboard })
    }
}

impl ClipboardReader for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        // Non-text contents surface as an error on some platforms; the
        // caller treats any failure here as fatal.
        Ok(self.clipboard.get_text()?)
    }
}
