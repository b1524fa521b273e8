//! Clipboard implementations
//!
//! Provides the concrete backends behind the clipboard traits: an
//! in-process clipboard that can be read back, and an OSC 52 terminal
//! escape writer used as the selection-based fallback.

use crate::traits::{ClipboardBackend, SelectionCopy};
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tokio::sync::RwLock;

/// In-process clipboard
///
/// Holds the most recently written text in memory. Used by the terminal
/// front-end for paste support and by tests as a readable primary
/// backend. Availability can be switched off to exercise the fallback.
pub struct MemoryClipboard {
    contents: RwLock<Option<String>>,
    available: AtomicBool,
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryClipboard {
    /// Creates an empty, available clipboard
    pub fn new() -> Self {
        MemoryClipboard {
            contents: RwLock::new(None),
            available: AtomicBool::new(true),
        }
    }

    /// Marks the clipboard as usable or not
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Returns the current contents without going through the async API
    pub async fn contents(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

#[async_trait]
impl ClipboardBackend for MemoryClipboard {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.write().await = Some(text.to_string());
        Ok(())
    }

    async fn read_text(&self) -> Result<String> {
        Ok(self.contents.read().await.clone().unwrap_or_default())
    }
}

/// OSC 52 selection copy
///
/// Stages the text as a base64 payload and emits the `ESC ] 52 ; c ;`
/// escape sequence so the hosting terminal places it on the system
/// clipboard. The terminal gives no acknowledgement, so a successful
/// write to the sink counts as a successful copy.
pub struct Osc52Selection<W: Write + Send> {
    sink: Mutex<W>,
}

impl Osc52Selection<io::Stdout> {
    /// Creates a selection copier writing to the process's stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Osc52Selection<W> {
    /// Creates a selection copier writing to an arbitrary sink
    pub fn new(sink: W) -> Self {
        Osc52Selection {
            sink: Mutex::new(sink),
        }
    }

    /// Consumes the copier and returns its sink
    pub fn into_inner(self) -> Result<W> {
        self.sink
            .into_inner()
            .map_err(|_| anyhow::anyhow!("Clipboard sink lock poisoned"))
    }
}

impl<W: Write + Send> SelectionCopy for Osc52Selection<W> {
    fn copy_selection(&self, text: &str) -> Result<bool> {
        // Nothing selected, nothing copied
        if text.is_empty() {
            return Ok(false);
        }

        let staged = general_purpose::STANDARD.encode(text.as_bytes());

        let mut sink = self
            .sink
            .lock()
            .map_err(|_| anyhow::anyhow!("Clipboard sink lock poisoned"))?;
        write!(sink, "\x1b]52;c;{}\x07", staged).context("Failed to write OSC 52 sequence")?;
        sink.flush().context("Failed to flush OSC 52 sequence")?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_clipboard_round_trip() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.read_text().await.unwrap(), "");

        clipboard.write_text("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh").await.unwrap();
        assert_eq!(
            clipboard.contents().await.as_deref(),
            Some("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh")
        );
    }

    #[test]
    fn test_memory_clipboard_availability() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.is_available());
        clipboard.set_available(false);
        assert!(!clipboard.is_available());
    }

    #[test]
    fn test_osc52_writes_escape_sequence() {
        let selection = Osc52Selection::new(Vec::new());
        assert!(selection.copy_selection("hello").unwrap());

        let written = String::from_utf8(selection.into_inner().unwrap()).unwrap();
        assert_eq!(written, "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_osc52_empty_text_reports_failure() {
        let selection = Osc52Selection::new(Vec::new());
        assert!(!selection.copy_selection("").unwrap());
        assert!(selection.into_inner().unwrap().is_empty());
    }
}
