//! Password input with a reveal toggle

use super::{part_test_id, ControlState};
use crate::ids::IdGenerator;
use crate::utils::formatting::class_names;

/// Configuration for a [`PasswordInput`]
#[derive(Debug, Clone, Default)]
pub struct PasswordInputConfig {
    pub label: Option<String>,
    pub class_name: Option<String>,
    pub test_id: Option<String>,
}

/// Password field whose contents can be shown or hidden
#[derive(Debug)]
pub struct PasswordInput {
    config: PasswordInputConfig,
    revealed: bool,
    input_id: String,
    status_id: String,
    description_id: String,
}

impl PasswordInput {
    pub fn new(config: PasswordInputConfig, ids: &IdGenerator) -> Self {
        PasswordInput {
            config,
            revealed: false,
            input_id: ids.next("password-input"),
            status_id: ids.next("password-status"),
            description_id: ids.next("password-desc"),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Flips between revealed and hidden
    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Input type the field should use
    pub fn input_type(&self) -> &'static str {
        if self.revealed {
            "text"
        } else {
            "password"
        }
    }

    /// Accessible name of the toggle, e.g. `"Reveal password"`
    pub fn toggle_text(&self) -> String {
        let target = self
            .config
            .label
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| "password".to_string());
        if self.revealed {
            format!("Hide {}", target)
        } else {
            format!("Reveal {}", target)
        }
    }

    /// Accessible name of the input including its visibility
    ///
    /// Empty when no label is configured.
    pub fn input_aria_label(&self) -> String {
        match &self.config.label {
            Some(label) => {
                let state = if self.revealed { "visible" } else { "hidden" };
                format!("{} ({})", label, state)
            }
            None => String::new(),
        }
    }

    /// Live region text
    pub fn status_text(&self) -> &'static str {
        if self.revealed {
            "Password is now visible"
        } else {
            "Password is now hidden"
        }
    }

    pub fn description(&self) -> &'static str {
        "Password input field. Use the toggle button to reveal or hide the password."
    }

    /// Ids describing the input: the static description and the live region
    pub fn described_by(&self) -> String {
        format!("{} {}", self.description_id, self.status_id)
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    pub fn status_id(&self) -> &str {
        &self.status_id
    }

    pub fn toggle_control(&self) -> ControlState {
        let text = self.toggle_text();
        ControlState {
            pressed: Some(self.revealed),
            described_by: Some(self.status_id.clone()),
            ..ControlState::new(
                text.clone(),
                text,
                part_test_id(self.config.test_id.as_deref(), "password-input", "toggle"),
            )
        }
    }

    pub fn class_name(&self) -> String {
        class_names([
            Some("password-input"),
            self.revealed.then_some("password-input--revealed"),
            self.config.class_name.as_deref(),
        ])
    }
}
