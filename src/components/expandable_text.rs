//! Expandable text
//!
//! Long values such as addresses and invoices are shown truncated in the
//! middle until expanded. A copy button always copies the full text.

use super::{part_test_id, ControlState};
use crate::clipboard::Clipboard;
use crate::feedback::{CopyFeedback, CopyState, CopyStatus};
use crate::ids::IdGenerator;
use crate::utils::formatting::{class_names, truncate_text};
use std::time::Duration;
use tokio::sync::watch;

/// Texts up to this many characters are never truncated
const TRUNCATE_THRESHOLD: usize = 15;

/// What the text represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextKind {
    #[default]
    Text,
    Address,
    Invoice,
}

impl TextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TextKind::Text => "text",
            TextKind::Address => "address",
            TextKind::Invoice => "invoice",
        }
    }
}

/// Configuration for an [`ExpandableText`]
#[derive(Debug, Clone)]
pub struct ExpandableTextConfig {
    pub text: String,
    pub label: String,
    pub kind: TextKind,
    pub show_copy_button: bool,
    /// Leading and trailing characters kept when truncated
    pub truncate: (usize, usize),
    pub class_name: Option<String>,
    pub test_id: Option<String>,
}

impl ExpandableTextConfig {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        ExpandableTextConfig {
            text: text.into(),
            label: label.into(),
            kind: TextKind::default(),
            show_copy_button: true,
            truncate: (6, 7),
            class_name: None,
            test_id: None,
        }
    }
}

/// Middle-truncated text with expand and copy controls
pub struct ExpandableText {
    config: ExpandableTextConfig,
    expanded: bool,
    feedback: CopyFeedback,
    text_id: String,
    status_id: String,
}

impl ExpandableText {
    pub fn new(config: ExpandableTextConfig, ids: &IdGenerator, clipboard: Clipboard) -> Self {
        ExpandableText {
            feedback: CopyFeedback::new(config.label.clone(), clipboard),
            expanded: false,
            text_id: ids.next("expandable-text"),
            status_id: ids.next("expandable-status"),
            config,
        }
    }

    /// Overrides how long copy feedback stays visible
    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback = self.feedback.with_revert_after(duration);
        self
    }

    /// Whether the text is long enough to be truncated
    pub fn is_truncatable(&self) -> bool {
        self.config.text.chars().count() > TRUNCATE_THRESHOLD
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expands or collapses the text; does nothing for short text
    pub fn toggle(&mut self) {
        if self.is_truncatable() {
            self.expanded = !self.expanded;
        }
    }

    pub fn display_text(&self) -> String {
        if self.is_truncatable() && !self.expanded {
            let (start, end) = self.config.truncate;
            truncate_text(&self.config.text, start, end)
        } else {
            self.config.text.clone()
        }
    }

    /// Copies the full text, if the copy button is shown
    pub fn copy(&mut self) -> bool {
        if !self.config.show_copy_button {
            return false;
        }
        self.feedback.request(self.config.text.clone());
        true
    }

    pub fn copy_state(&self) -> CopyState {
        self.feedback.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CopyStatus> {
        self.feedback.subscribe()
    }

    /// `"View full <kind>"` or `"Hide full <kind>"`
    pub fn action_text(&self) -> String {
        if self.expanded {
            format!("Hide full {}", self.config.kind.as_str())
        } else {
            format!("View full {}", self.config.kind.as_str())
        }
    }

    pub fn copy_text(&self) -> String {
        format!("Copy {}", self.config.label.to_lowercase())
    }

    /// Live region text: the last copy outcome followed by the expansion state
    pub fn status_text(&self) -> String {
        let label = self.config.label.to_lowercase();
        let expansion = if self.expanded {
            format!("Showing full {}", label)
        } else {
            format!("Showing truncated {}", label)
        };
        match self.feedback.announcement() {
            Some(announcement) => format!("{} {}", announcement, expansion),
            None => expansion,
        }
    }

    /// State of the expand toggle, `None` when the text is short
    pub fn toggle_control(&self) -> Option<ControlState> {
        self.is_truncatable().then(|| ControlState {
            expanded: Some(self.expanded),
            ..ControlState::new(
                self.action_text(),
                self.action_text(),
                part_test_id(self.config.test_id.as_deref(), "expandable-text", "toggle"),
            )
        })
    }

    /// State of the copy button, `None` when it is hidden
    pub fn copy_control(&self) -> Option<ControlState> {
        self.config.show_copy_button.then(|| {
            ControlState::copy_button(
                self.copy_state(),
                self.copy_text(),
                &self.status_id,
                part_test_id(self.config.test_id.as_deref(), "expandable-text", "copy"),
            )
        })
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn text_id(&self) -> &str {
        &self.text_id
    }

    pub fn class_name(&self) -> String {
        let kind = format!("expandable-text--{}", self.config.kind.as_str());
        class_names([
            Some("expandable-text"),
            Some(kind.as_str()),
            self.expanded.then_some("expandable-text--expanded"),
            self.config.class_name.as_deref(),
        ])
    }
}
