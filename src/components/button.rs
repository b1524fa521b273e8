//! Button with variants and a loading state

use crate::utils::formatting::class_names;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

/// Configuration for a [`Button`]
#[derive(Debug, Clone)]
pub struct ButtonConfig {
    pub content: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub loading_text: String,
    pub full_width: bool,
    pub class_name: Option<String>,
}

impl ButtonConfig {
    pub fn new(content: impl Into<String>) -> Self {
        ButtonConfig {
            content: content.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            loading_text: "Loading...".to_string(),
            full_width: false,
            class_name: None,
        }
    }
}

/// Keys that activate a focused button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
    Other,
}

#[derive(Debug, Clone)]
pub struct Button {
    config: ButtonConfig,
}

impl Button {
    pub fn new(config: ButtonConfig) -> Self {
        Button { config }
    }

    /// Disabled buttons and loading buttons both refuse activation
    pub fn is_disabled(&self) -> bool {
        self.config.disabled || self.config.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Whether a click should be delivered to the owner
    pub fn activate(&self) -> bool {
        !self.is_disabled()
    }

    /// Whether a key press should be delivered as a click
    pub fn handles_key(&self, key: ActivationKey) -> bool {
        self.activate() && matches!(key, ActivationKey::Enter | ActivationKey::Space)
    }

    /// Visible content, replaced by the loading text while loading
    pub fn content_label(&self) -> &str {
        if self.config.loading {
            &self.config.loading_text
        } else {
            &self.config.content
        }
    }

    /// Accessible name override, only set while loading
    pub fn aria_label(&self) -> Option<&str> {
        self.config
            .loading
            .then_some(self.config.loading_text.as_str())
    }

    pub fn class_name(&self) -> String {
        let variant = format!("btn--{}", self.config.variant.as_str());
        let size = format!("btn--{}", self.config.size.as_str());
        class_names([
            Some("btn"),
            Some(variant.as_str()),
            Some(size.as_str()),
            self.config.full_width.then_some("btn--full-width"),
            self.config.loading.then_some("btn--loading"),
            self.is_disabled().then_some("btn--disabled"),
            self.config.class_name.as_deref(),
        ])
    }
}
