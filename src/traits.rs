//! Common trait definitions
//!
//! Defines the clipboard abstractions used by the copy feedback machine.
//! These traits keep the platform clipboard behind a seam so components
//! can be driven by in-memory or terminal implementations and by mocks
//! in tests.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for the primary, asynchronous clipboard
///
/// Production code uses a platform or in-process implementation, tests
/// can use mock objects that fail or stall on demand.
#[async_trait]
pub trait ClipboardBackend: Send + Sync {
    /// Whether the backend can be used right now
    ///
    /// When this returns `false` the selection-based fallback is used
    /// instead.
    fn is_available(&self) -> bool {
        true
    }

    /// Write text to the clipboard
    async fn write_text(&self, text: &str) -> Result<()>;

    /// Read text from the clipboard
    async fn read_text(&self) -> Result<String>;
}

/// Trait for the synchronous, selection-based copy fallback
///
/// Mirrors the legacy "stage, select, copy, discard" sequence. A return
/// value of `Ok(false)` means the copy command ran but reported failure.
pub trait SelectionCopy: Send + Sync {
    /// Copy text by staging it into a scratch selection
    fn copy_selection(&self, text: &str) -> Result<bool>;
}
