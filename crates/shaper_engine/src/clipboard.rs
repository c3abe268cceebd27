use crate::ClipboardError;

pub trait TextClipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes through the OS clipboard via `arboard`.
///
/// A fresh clipboard handle is opened per write; the handle is not kept
/// across calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl TextClipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| ClipboardError::WriteFailed(err.to_string()))
    }
}
