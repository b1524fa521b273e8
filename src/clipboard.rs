//! Shared clipboard access
//!
//! A single entry point for copying and pasting. Copies go to the primary
//! backend while it reports itself available and otherwise fall back to
//! the selection-based copy, so every component follows the same rule.

use crate::traits::{ClipboardBackend, SelectionCopy};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Why a copy attempt failed
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No primary backend is available and no fallback is configured
    #[error("no clipboard available")]
    Unavailable,

    /// The fallback copy command ran but reported failure
    #[error("copy command was declined")]
    Declined,

    /// The underlying backend returned an error
    #[error("clipboard backend failed: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Clipboard with a primary backend and a selection-based fallback
#[derive(Clone, Default)]
pub struct Clipboard {
    primary: Option<Arc<dyn ClipboardBackend>>,
    fallback: Option<Arc<dyn SelectionCopy>>,
}

impl Clipboard {
    /// Creates a clipboard with neither backend configured
    ///
    /// Every copy fails with [`ClipboardError::Unavailable`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary asynchronous backend
    pub fn with_primary(mut self, primary: Arc<dyn ClipboardBackend>) -> Self {
        self.primary = Some(primary);
        self
    }

    /// Sets the selection-based fallback
    pub fn with_fallback(mut self, fallback: Arc<dyn SelectionCopy>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Copies text to the clipboard
    ///
    /// Uses the primary backend when it is available; otherwise runs the
    /// selection fallback. A failure of the primary backend is not retried
    /// through the fallback.
    ///
    /// # Errors
    /// - [`ClipboardError::Unavailable`] when no usable path exists
    /// - [`ClipboardError::Declined`] when the fallback reports failure
    /// - [`ClipboardError::Backend`] when either backend errors
    pub async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(primary) = self.primary.as_ref().filter(|p| p.is_available()) {
            debug!(len = text.len(), "Copying via primary clipboard");
            primary.write_text(text).await?;
            return Ok(());
        }

        let fallback = self.fallback.as_ref().ok_or(ClipboardError::Unavailable)?;
        debug!(len = text.len(), "Copying via selection fallback");
        if fallback.copy_selection(text)? {
            Ok(())
        } else {
            Err(ClipboardError::Declined)
        }
    }

    /// Reads text from the primary clipboard
    ///
    /// Returns an empty string when the clipboard is unavailable or the
    /// read fails; pasting is best effort.
    pub async fn paste(&self) -> String {
        let Some(primary) = self.primary.as_ref().filter(|p| p.is_available()) else {
            return String::new();
        };

        match primary.read_text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read clipboard: {:#}", e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{MemoryClipboard, Osc52Selection};
    use anyhow::Result;
    use async_trait::async_trait;

    struct FailingBackend;

    #[async_trait]
    impl ClipboardBackend for FailingBackend {
        async fn write_text(&self, _text: &str) -> Result<()> {
            Err(anyhow::anyhow!("permission denied"))
        }

        async fn read_text(&self) -> Result<String> {
            Err(anyhow::anyhow!("permission denied"))
        }
    }

    struct DecliningSelection;

    impl SelectionCopy for DecliningSelection {
        fn copy_selection(&self, _text: &str) -> Result<bool> {
            Ok(false)
        }
    }

    #[tokio::test]
    async fn test_copy_uses_primary_when_available() {
        let memory = Arc::new(MemoryClipboard::new());
        let clipboard = Clipboard::new()
            .with_primary(memory.clone())
            .with_fallback(Arc::new(DecliningSelection));

        clipboard.copy("test text").await.unwrap();
        assert_eq!(memory.contents().await.as_deref(), Some("test text"));
        assert_eq!(clipboard.paste().await, "test text");
    }

    #[tokio::test]
    async fn test_copy_falls_back_when_primary_unavailable() {
        let memory = Arc::new(MemoryClipboard::new());
        memory.set_available(false);
        let clipboard = Clipboard::new()
            .with_primary(memory.clone())
            .with_fallback(Arc::new(Osc52Selection::new(Vec::new())));

        clipboard.copy("test text").await.unwrap();
        assert_eq!(memory.contents().await, None);
    }

    #[tokio::test]
    async fn test_declined_fallback_is_an_error() {
        let clipboard = Clipboard::new().with_fallback(Arc::new(DecliningSelection));
        let err = clipboard.copy("test text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Declined));
    }

    #[tokio::test]
    async fn test_no_backend_is_unavailable() {
        let err = Clipboard::new().copy("x").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable));
    }

    #[tokio::test]
    async fn test_primary_failure_maps_to_backend_error() {
        let clipboard = Clipboard::new().with_primary(Arc::new(FailingBackend));
        let err = clipboard.copy("x").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Backend(_)));
    }

    #[tokio::test]
    async fn test_paste_is_empty_on_failure() {
        let clipboard = Clipboard::new().with_primary(Arc::new(FailingBackend));
        assert_eq!(clipboard.paste().await, "");
        assert_eq!(Clipboard::new().paste().await, "");
    }
}
