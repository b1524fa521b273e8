//! Toast notifications
//!
//! Short-lived messages stacked in a queue. Each toast carries its own
//! deadline; the front-end prunes expired toasts on every frame.

use std::time::{Duration, Instant};

/// Default time a toast stays on screen
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

impl Toast {
    pub fn class_name(&self) -> &'static str {
        match self.kind {
            ToastKind::Error => "btc-toast btc-toast--error",
            ToastKind::Success | ToastKind::Info => "btc-toast",
        }
    }
}

/// Queue of visible toasts with per-queue sequential ids
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    default_duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastQueue {
    pub fn new(default_duration: Duration) -> Self {
        ToastQueue {
            toasts: Vec::new(),
            next_id: 0,
            default_duration,
        }
    }

    /// Adds a toast and returns its id
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Option<Duration>,
        now: Instant,
    ) -> String {
        let id = format!("btc-toast-{}", self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id: id.clone(),
            message: message.into(),
            kind,
            expires_at: now + duration.unwrap_or(self.default_duration),
        });
        id
    }

    /// Drops every toast whose deadline has passed
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Toasts still on screen at `now`, oldest first
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| t.expires_at > now)
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
