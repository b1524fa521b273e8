//! Masked secret
//!
//! Shows a secret such as a recovery phrase as a fixed-length mask until
//! the user reveals it, and offers a copy button wired to the copy
//! feedback machine.

use super::{part_test_id, ControlState};
use crate::clipboard::Clipboard;
use crate::feedback::{CopyFeedback, CopyState, CopyStatus};
use crate::ids::IdGenerator;
use crate::utils::formatting::{class_names, mask_secret};
use std::time::Duration;
use tokio::sync::watch;

/// Configuration for a [`Secret`]
#[derive(Debug, Clone)]
pub struct SecretConfig {
    pub secret: String,
    pub label: Option<String>,
    pub mask_character: String,
    pub show_copy_button: bool,
    pub class_name: Option<String>,
    pub test_id: Option<String>,
}

impl SecretConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        SecretConfig {
            secret: secret.into(),
            label: None,
            mask_character: "•".to_string(),
            show_copy_button: true,
            class_name: None,
            test_id: None,
        }
    }
}

/// Secret text with reveal and copy controls
pub struct Secret {
    config: SecretConfig,
    revealed: bool,
    feedback: CopyFeedback,
    secret_id: String,
    status_id: String,
    description_id: String,
}

impl Secret {
    pub fn new(config: SecretConfig, ids: &IdGenerator, clipboard: Clipboard) -> Self {
        let announce_as = config.label.clone().unwrap_or_else(|| "Secret".to_string());
        Secret {
            feedback: CopyFeedback::new(announce_as, clipboard),
            revealed: false,
            secret_id: ids.next("secret"),
            status_id: ids.next("secret-status"),
            description_id: ids.next("secret-desc"),
            config,
        }
    }

    /// Overrides how long copy feedback stays visible
    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback = self.feedback.with_revert_after(duration);
        self
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// The secret when revealed, otherwise its mask
    pub fn display_text(&self) -> String {
        if self.revealed {
            self.config.secret.clone()
        } else {
            mask_secret(&self.config.secret, &self.config.mask_character)
        }
    }

    /// Copies the secret, if the copy button is shown
    ///
    /// Returns `false` when copying is disabled for this secret.
    pub fn copy(&mut self) -> bool {
        if !self.config.show_copy_button {
            return false;
        }
        self.feedback.request(self.config.secret.clone());
        true
    }

    pub fn copy_state(&self) -> CopyState {
        self.feedback.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CopyStatus> {
        self.feedback.subscribe()
    }

    fn target(&self) -> String {
        self.config
            .label
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| "secret".to_string())
    }

    fn title(&self) -> &str {
        self.config.label.as_deref().unwrap_or("Secret")
    }

    /// `"Reveal <label>"` or `"Hide <label>"`
    pub fn reveal_text(&self) -> String {
        if self.revealed {
            format!("Hide {}", self.target())
        } else {
            format!("Reveal {}", self.target())
        }
    }

    /// Accessible name of the copy button
    pub fn copy_text(&self) -> String {
        format!("Copy {}", self.target())
    }

    /// Screen reader description of the group
    pub fn description(&self) -> String {
        let visibility = if self.revealed {
            "currently visible"
        } else {
            "currently hidden"
        };
        format!("{}: {}", self.title(), visibility)
    }

    /// Accessible name of the text element
    pub fn text_label(&self) -> String {
        format!("{} text", self.title())
    }

    /// Live region text: the last copy outcome followed by the visibility
    pub fn status_text(&self) -> String {
        let visibility = if self.revealed {
            format!("{} is now visible", self.title())
        } else {
            format!("{} is now hidden", self.title())
        };
        match self.feedback.announcement() {
            Some(announcement) => format!("{} {}", announcement, visibility),
            None => visibility,
        }
    }

    pub fn reveal_control(&self) -> ControlState {
        ControlState {
            pressed: Some(self.revealed),
            described_by: Some(self.status_id.clone()),
            ..ControlState::new(
                self.reveal_text(),
                self.reveal_text(),
                part_test_id(self.config.test_id.as_deref(), "secret", "toggle"),
            )
        }
    }

    /// State of the copy button, `None` when it is hidden
    pub fn copy_control(&self) -> Option<ControlState> {
        self.config.show_copy_button.then(|| {
            ControlState::copy_button(
                self.copy_state(),
                self.copy_text(),
                &self.status_id,
                part_test_id(self.config.test_id.as_deref(), "secret", "copy"),
            )
        })
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    pub fn description_id(&self) -> &str {
        &self.description_id
    }

    pub fn class_name(&self) -> String {
        let state = self.copy_state();
        let feedback = format!("secret--{}", state.as_str());
        class_names([
            Some("secret"),
            self.revealed.then_some("secret--revealed"),
            (state != CopyState::Idle).then_some(feedback.as_str()),
            self.config.class_name.as_deref(),
        ])
    }
}
