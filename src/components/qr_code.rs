//! QR code display
//!
//! Encodes a value such as a payment URI and copies the value when the
//! code itself is activated. Changing the value resets any copy feedback.

use super::{part_test_id, ControlState};
use crate::clipboard::Clipboard;
use crate::feedback::{CopyFeedback, CopyState, CopyStatus};
use crate::ids::IdGenerator;
use crate::utils::formatting::class_names;
use anyhow::{Context, Result};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode as Encoder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;

/// QR error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorCorrection {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Configuration for a [`QrCode`]
#[derive(Debug, Clone)]
pub struct QrCodeConfig {
    pub value: String,
    pub label: String,
    /// Rendered edge length in pixels
    pub size: u32,
    pub description: Option<String>,
    pub level: ErrorCorrection,
    pub class_name: Option<String>,
    pub test_id: Option<String>,
}

impl QrCodeConfig {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        QrCodeConfig {
            value: value.into(),
            label: label.into(),
            size: 256,
            description: None,
            level: ErrorCorrection::default(),
            class_name: None,
            test_id: None,
        }
    }
}

/// QR code that copies its value on activation
pub struct QrCode {
    config: QrCodeConfig,
    feedback: CopyFeedback,
    qr_id: String,
    status_id: String,
    description_id: Option<String>,
}

impl QrCode {
    pub fn new(config: QrCodeConfig, ids: &IdGenerator, clipboard: Clipboard) -> Self {
        let qr_id = ids.next("qr-code");
        let status_id = ids.next("qr-status");
        let description_id = config.description.as_ref().map(|_| ids.next("qr-desc"));
        QrCode {
            feedback: CopyFeedback::new(config.label.clone(), clipboard),
            config,
            qr_id,
            status_id,
            description_id,
        }
    }

    /// Overrides how long copy feedback stays visible
    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback = self.feedback.with_revert_after(duration);
        self
    }

    pub fn value(&self) -> &str {
        &self.config.value
    }

    /// Replaces the encoded value and clears any copy feedback
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.config.value {
            self.config.value = value;
            self.feedback.reset();
        }
    }

    /// Copies the encoded value
    pub fn copy(&mut self) {
        self.feedback.request(self.config.value.clone());
    }

    pub fn copy_state(&self) -> CopyState {
        self.feedback.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<CopyStatus> {
        self.feedback.subscribe()
    }

    fn encode(&self) -> Result<Encoder> {
        Encoder::with_error_correction_level(self.config.value.as_bytes(), self.config.level.into())
            .with_context(|| format!("Failed to encode QR code for '{}'", self.config.label))
    }

    /// Renders the code as an SVG document with a quiet zone
    ///
    /// # Errors
    /// Returns an error if the value does not fit in a QR code at the
    /// configured error correction level.
    pub fn render_svg(&self) -> Result<String> {
        let code = self.encode()?;
        Ok(code
            .render::<svg::Color<'_>>()
            .min_dimensions(self.config.size, self.config.size)
            .quiet_zone(true)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build())
    }

    /// Renders the code as block characters for terminal display
    ///
    /// # Errors
    /// Returns an error if the value cannot be encoded.
    pub fn render_text(&self) -> Result<String> {
        let code = self.encode()?;
        Ok(code
            .render::<char>()
            .quiet_zone(true)
            .module_dimensions(2, 1)
            .dark_color('█')
            .light_color(' ')
            .build())
    }

    /// Overlay text shown on the code while feedback is active
    pub fn feedback_text(&self) -> Option<&'static str> {
        match self.copy_state() {
            CopyState::Idle => None,
            state => Some(state.button_text()),
        }
    }

    /// Live region text
    pub fn status_text(&self) -> String {
        self.feedback.announcement().unwrap_or_default()
    }

    pub fn copy_text(&self) -> String {
        format!("Copy {}", self.config.label.to_lowercase())
    }

    /// State of the code-as-button
    pub fn button_control(&self) -> ControlState {
        let mut control = ControlState::copy_button(
            self.copy_state(),
            self.copy_text(),
            &self.status_id,
            part_test_id(self.config.test_id.as_deref(), "qr-code", "button"),
        );
        control.text = self.config.label.clone();
        control
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn description(&self) -> Option<&str> {
        self.config.description.as_deref()
    }

    pub fn qr_id(&self) -> &str {
        &self.qr_id
    }

    pub fn description_id(&self) -> Option<&str> {
        self.description_id.as_deref()
    }

    pub fn class_name(&self) -> String {
        let state = self.copy_state();
        let feedback = format!("qr-code--{}", state.as_str());
        class_names([
            Some("qr-code"),
            (state != CopyState::Idle).then_some(feedback.as_str()),
            self.config.class_name.as_deref(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryClipboard;
    use std::sync::Arc;

    const URI: &str = "bitcoin:bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";

    fn mount(config: QrCodeConfig) -> (Arc<MemoryClipboard>, QrCode) {
        let memory = Arc::new(MemoryClipboard::new());
        let clipboard = Clipboard::new().with_primary(memory.clone());
        (memory, QrCode::new(config, &IdGenerator::new(), clipboard))
    }

    #[test]
    fn test_render_svg() {
        let (_, qr) = mount(QrCodeConfig::new(URI, "Bitcoin Address QR"));
        let svg = qr.render_svg().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn test_render_text() {
        let (_, qr) = mount(QrCodeConfig {
            level: ErrorCorrection::H,
            ..QrCodeConfig::new("https://example.com", "Website QR")
        });
        let text = qr.render_text().unwrap();
        assert!(text.contains('█'));
        assert!(text.lines().count() > 20);
    }

    #[test]
    fn test_description_id_only_with_description() {
        let (_, plain) = mount(QrCodeConfig::new(URI, "Address"));
        assert_eq!(plain.description_id(), None);

        let (_, described) = mount(QrCodeConfig {
            description: Some("Scan to pay".to_string()),
            ..QrCodeConfig::new(URI, "Address")
        });
        assert_eq!(described.description_id(), Some("qr-desc-3"));
        assert_eq!(described.qr_id(), "qr-code-1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_shows_overlay() {
        let (memory, mut qr) = mount(QrCodeConfig::new(URI, "Bitcoin Address QR"));
        assert_eq!(qr.feedback_text(), None);

        qr.copy();
        assert_eq!(qr.feedback_text(), Some("Copying..."));
        assert!(qr.button_control().disabled);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(qr.feedback_text(), Some("Copied!"));
        assert_eq!(qr.status_text(), "Bitcoin Address QR copied to clipboard");
        assert_eq!(qr.class_name(), "qr-code qr-code--success");
        assert_eq!(memory.contents().await.as_deref(), Some(URI));
    }

    #[tokio::test(start_paused = true)]
    async fn test_value_change_resets_feedback() {
        let (_, mut qr) = mount(QrCodeConfig::new(URI, "Address"));
        qr.copy();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(qr.copy_state(), CopyState::Success);

        qr.set_value("bitcoin:bc1qnew");
        assert_eq!(qr.copy_state(), CopyState::Idle);
        assert_eq!(qr.status_text(), "");
    }
}
