//! Copy feedback state machine
//!
//! Drives the `idle -> copying -> success|error -> idle` cycle behind every
//! copy button. Each component instance owns one [`CopyFeedback`]; there is
//! no shared state between instances.
//!
//! # Lifecycle
//!
//! A request moves the machine to `Copying` synchronously and spawns one
//! task that performs the clipboard write, publishes the outcome, waits
//! for the revert delay and publishes `Idle`. A newer request or a reset
//! aborts that task and bumps the instance's generation counter; a task
//! only publishes while its generation is still current, so a superseded
//! request can never overwrite the state of the request that replaced it.
//! Dropping the owner aborts the task as well.

use crate::clipboard::Clipboard;
use crate::timer::ScheduledTask;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, warn};

/// How long a success or error indication stays visible
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Phase of a copy attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copying,
    Success,
    Error,
}

impl CopyState {
    /// Value exposed as the `data-copy-status` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            CopyState::Idle => "idle",
            CopyState::Copying => "copying",
            CopyState::Success => "success",
            CopyState::Error => "error",
        }
    }

    /// Text shown on the copy control
    pub fn button_text(self) -> &'static str {
        match self {
            CopyState::Idle => "Copy",
            CopyState::Copying => "Copying...",
            CopyState::Success => "Copied!",
            CopyState::Error => "Failed",
        }
    }

    /// Whether the copy control should be disabled
    pub fn is_busy(self) -> bool {
        self == CopyState::Copying
    }
}

/// Snapshot published to observers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyStatus {
    pub state: CopyState,
    /// Live region text for the last outcome, cleared on return to idle
    pub announcement: Option<String>,
}

/// Per-instance copy feedback machine
pub struct CopyFeedback {
    label: String,
    clipboard: Clipboard,
    revert_after: Duration,
    status: Arc<watch::Sender<CopyStatus>>,
    generation: Arc<AtomicU64>,
    task: Option<ScheduledTask>,
}

impl CopyFeedback {
    /// Creates an idle machine announcing outcomes for `label`
    pub fn new(label: impl Into<String>, clipboard: Clipboard) -> Self {
        let (status, _) = watch::channel(CopyStatus::default());
        CopyFeedback {
            label: label.into(),
            clipboard,
            revert_after: DEFAULT_FEEDBACK_DURATION,
            status: Arc::new(status),
            generation: Arc::new(AtomicU64::new(0)),
            task: None,
        }
    }

    /// Overrides the revert delay
    pub fn with_revert_after(mut self, revert_after: Duration) -> Self {
        self.revert_after = revert_after;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current phase
    pub fn state(&self) -> CopyState {
        self.status.borrow().state
    }

    /// Current snapshot
    pub fn status(&self) -> CopyStatus {
        self.status.borrow().clone()
    }

    /// Live region text for the current outcome, if any
    pub fn announcement(&self) -> Option<String> {
        self.status.borrow().announcement.clone()
    }

    /// Subscribes to state changes
    pub fn subscribe(&self) -> watch::Receiver<CopyStatus> {
        self.status.subscribe()
    }

    /// Starts copying `text`, superseding any attempt in flight
    ///
    /// The state is `Copying` when this returns. Must be called from
    /// within a tokio runtime.
    pub fn request(&mut self, text: impl Into<String>) {
        let generation = self.supersede();
        self.status.send_replace(CopyStatus {
            state: CopyState::Copying,
            announcement: None,
        });
        debug!(label = %self.label, generation, "Copy requested");

        let text = text.into();
        let label = self.label.clone();
        let clipboard = self.clipboard.clone();
        let revert_after = self.revert_after;
        let status = Arc::clone(&self.status);
        let current = Arc::clone(&self.generation);

        self.task = Some(ScheduledTask::spawn(async move {
            let outcome = match clipboard.copy(&text).await {
                Ok(()) => CopyStatus {
                    state: CopyState::Success,
                    announcement: Some(format!("{} copied to clipboard", label)),
                },
                Err(e) => {
                    warn!(label = %label, "Failed to copy: {}", e);
                    CopyStatus {
                        state: CopyState::Error,
                        announcement: Some(format!("Failed to copy {}", label.to_lowercase())),
                    }
                }
            };

            if !publish(&status, &current, generation, outcome) {
                return;
            }

            tokio::time::sleep(revert_after).await;
            publish(&status, &current, generation, CopyStatus::default());
        }));
    }

    /// Returns to `Idle` immediately and cancels pending work
    pub fn reset(&mut self) {
        self.supersede();
        self.status.send_replace(CopyStatus::default());
    }

    fn supersede(&mut self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        generation
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        self.supersede();
    }
}

fn publish(
    status: &watch::Sender<CopyStatus>,
    current: &AtomicU64,
    generation: u64,
    next: CopyStatus,
) -> bool {
    status.send_if_modified(|value| {
        if current.load(Ordering::SeqCst) != generation {
            return false;
        }
        *value = next;
        true
    });
    current.load(Ordering::SeqCst) == generation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryClipboard;

    fn clipboard() -> (Arc<MemoryClipboard>, Clipboard) {
        let memory = Arc::new(MemoryClipboard::new());
        let clipboard = Clipboard::new().with_primary(memory.clone());
        (memory, clipboard)
    }

    #[test]
    fn test_button_text() {
        assert_eq!(CopyState::Idle.button_text(), "Copy");
        assert_eq!(CopyState::Copying.button_text(), "Copying...");
        assert_eq!(CopyState::Success.button_text(), "Copied!");
        assert_eq!(CopyState::Error.button_text(), "Failed");
        assert!(CopyState::Copying.is_busy());
        assert!(!CopyState::Success.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_then_revert() {
        let (memory, clipboard) = clipboard();
        let mut feedback = CopyFeedback::new("Secret Phrase", clipboard);

        feedback.request("correct horse battery staple");
        assert_eq!(feedback.state(), CopyState::Copying);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(feedback.state(), CopyState::Success);
        assert_eq!(
            feedback.announcement().as_deref(),
            Some("Secret Phrase copied to clipboard")
        );
        assert_eq!(
            memory.contents().await.as_deref(),
            Some("correct horse battery staple")
        );

        tokio::time::sleep(Duration::from_millis(1980)).await;
        assert_eq!(feedback.state(), CopyState::Success);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(feedback.state(), CopyState::Idle);
        assert_eq!(feedback.announcement(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_then_revert() {
        let mut feedback = CopyFeedback::new("API Key", Clipboard::new());

        feedback.request("my-secret-key");
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(feedback.state(), CopyState::Error);
        assert_eq!(feedback.announcement().as_deref(), Some("Failed to copy api key"));

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(feedback.state(), CopyState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_pending_revert() {
        let (_memory, clipboard) = clipboard();
        let mut feedback = CopyFeedback::new("Address", clipboard);
        let mut rx = feedback.subscribe();

        feedback.request("bc1q");
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(feedback.state(), CopyState::Success);

        feedback.reset();
        assert_eq!(feedback.state(), CopyState::Idle);
        rx.borrow_and_update();

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_revert_delay() {
        let (_memory, clipboard) = clipboard();
        let mut feedback =
            CopyFeedback::new("Invoice", clipboard).with_revert_after(Duration::from_millis(500));

        feedback.request("lnbc1");
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(feedback.state(), CopyState::Success);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(feedback.state(), CopyState::Idle);
    }
}
