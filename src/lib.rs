//! satoshi-ui library
//!
//! Headless, accessible UI components for wallet front-ends, plus the
//! amount formatting and copy feedback machinery they share.
//! Modules are exposed for integration testing.

pub mod clipboard;
pub mod components;
pub mod config;
pub mod currency;
pub mod feedback;
pub mod ids;
pub mod stores;
pub mod timer;
pub mod traits;
pub mod utils;

// Re-export commonly used types for testing
pub use clipboard::{Clipboard, ClipboardError};
pub use config::Config;
pub use currency::{Currency, Locale};
pub use feedback::{CopyFeedback, CopyState, CopyStatus};
pub use ids::IdGenerator;
pub use stores::{MemoryClipboard, Osc52Selection};
pub use traits::{ClipboardBackend, SelectionCopy};
