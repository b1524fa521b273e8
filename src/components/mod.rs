//! Headless UI components
//!
//! Each component pairs a closed configuration struct with the instance
//! state a front-end needs to render it: display text, class names, and
//! the accessible state of its controls. Rendering itself lives in the
//! `ui` module of the terminal front-end.
//!
//! # Components
//!
//! - `currency_input` - Locale-aware amount entry
//! - `password_input` - Password field with reveal toggle
//! - `secret` - Masked secret with reveal and copy
//! - `expandable_text` - Truncated text with expand and copy
//! - `qr_code` - QR code that copies its value when activated
//! - `button` - Generic button with loading state
//! - `toast` - Timed notifications

pub mod button;
pub mod currency_input;
pub mod expandable_text;
pub mod password_input;
pub mod qr_code;
pub mod secret;
pub mod toast;

use crate::feedback::CopyState;

pub use button::{Button, ButtonConfig, ButtonSize, ButtonVariant};
pub use currency_input::{CurrencyInput, CurrencyInputConfig};
pub use expandable_text::{ExpandableText, ExpandableTextConfig, TextKind};
pub use password_input::{PasswordInput, PasswordInputConfig};
pub use qr_code::{ErrorCorrection, QrCode, QrCodeConfig};
pub use secret::{Secret, SecretConfig};
pub use toast::{Toast, ToastKind, ToastQueue};

/// Accessible state of a clickable control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    /// Visible text
    pub text: String,
    /// Accessible name
    pub aria_label: String,
    pub disabled: bool,
    /// `aria-pressed`, for toggle buttons
    pub pressed: Option<bool>,
    /// `aria-expanded`, for disclosure buttons
    pub expanded: Option<bool>,
    /// `data-copy-status`, for copy buttons
    pub copy_status: Option<CopyState>,
    /// Id of the element describing this control
    pub described_by: Option<String>,
    pub test_id: String,
}

impl ControlState {
    fn new(text: impl Into<String>, aria_label: impl Into<String>, test_id: String) -> Self {
        ControlState {
            text: text.into(),
            aria_label: aria_label.into(),
            disabled: false,
            pressed: None,
            expanded: None,
            copy_status: None,
            described_by: None,
            test_id,
        }
    }

    /// Builds the state of a copy button driven by a feedback machine
    fn copy_button(state: CopyState, aria_label: String, status_id: &str, test_id: String) -> Self {
        ControlState {
            disabled: state.is_busy(),
            copy_status: Some(state),
            described_by: Some(status_id.to_string()),
            ..ControlState::new(state.button_text(), aria_label, test_id)
        }
    }
}

/// Derives the test id of a sub-element
///
/// With a custom root id `x` the element is `x-<suffix>`, otherwise the
/// component's default `<default_root>-<suffix>`.
fn part_test_id(custom: Option<&str>, default_root: &str, suffix: &str) -> String {
    match custom {
        Some(root) => format!("{}-{}", root, suffix),
        None => format!("{}-{}", default_root, suffix),
    }
}
