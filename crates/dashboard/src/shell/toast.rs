//! Global toast surface.
//!
//! Toasts are recorded with their variant and display duration; the
//! renderer (or a test) asks which are visible at a given instant. Every
//! toast is also logged. The log keeps at most [`HISTORY_LIMIT`] toasts,
//! evicting expired or dismissed ones first.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);
pub const SUCCESS_DURATION: Duration = Duration::from_secs(3);
pub const ERROR_DURATION: Duration = Duration::from_secs(5);

/// Toasts retained for [`Toaster::history`] and friends.
pub const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Default,
    Success,
    Error,
    Loading,
}

impl ToastKind {
    /// How long the toast stays up. `None` means until dismissed.
    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::Default => Some(DEFAULT_DURATION),
            Self::Success => Some(SUCCESS_DURATION),
            Self::Error => Some(ERROR_DURATION),
            Self::Loading => None,
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Error => "error",
            Self::Loading => "loading",
        };
        f.write_str(name)
    }
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
    pub dismissed: bool,
}

impl Toast {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        if self.dismissed {
            return false;
        }
        match self.kind.duration() {
            Some(duration) => now < self.shown_at + duration,
            None => true,
        }
    }
}

#[derive(Debug, Default)]
struct ToastLog {
    next_id: ToastId,
    toasts: VecDeque<Toast>,
}

impl ToastLog {
    fn evict(&mut self, now: Instant) {
        while self.toasts.len() > HISTORY_LIMIT {
            let index = self
                .toasts
                .iter()
                .position(|t| !t.is_visible_at(now))
                .unwrap_or(0);
            self.toasts.remove(index);
        }
    }
}

/// Shared toast surface. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    log: Arc<Mutex<ToastLog>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Default, message.into())
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Error, message.into())
    }

    /// A loading toast stays until [`Toaster::dismiss`] is called.
    pub fn loading(&self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Loading, message.into())
    }

    pub fn dismiss(&self, id: ToastId) {
        let mut log = self.lock();
        if let Some(toast) = log.toasts.iter_mut().find(|t| t.id == id) {
            toast.dismissed = true;
        }
    }

    /// Retained toasts, oldest first.
    pub fn history(&self) -> Vec<Toast> {
        self.lock().toasts.iter().cloned().collect()
    }

    pub fn visible(&self) -> Vec<Toast> {
        let now = Instant::now();
        self.lock()
            .toasts
            .iter()
            .filter(|t| t.is_visible_at(now))
            .cloned()
            .collect()
    }

    pub fn last(&self) -> Option<Toast> {
        self.lock().toasts.back().cloned()
    }

    /// Messages of toasts of one kind, oldest first.
    pub fn messages(&self, kind: ToastKind) -> Vec<String> {
        self.lock()
            .toasts
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.message.clone())
            .collect()
    }

    fn push(&self, kind: ToastKind, message: String) -> ToastId {
        match kind {
            ToastKind::Error => tracing::error!(toast = %kind, "{message}"),
            _ => tracing::info!(toast = %kind, "{message}"),
        }
        let now = Instant::now();
        let mut log = self.lock();
        log.next_id += 1;
        let id = log.next_id;
        log.toasts.push_back(Toast {
            id,
            kind,
            message,
            shown_at: now,
            dismissed: false,
        });
        log.evict(now);
        id
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ToastLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn variants_expire_after_their_duration() {
        let toaster = Toaster::new();
        toaster.success("Saved");
        toaster.error("Failed");
        toaster.show("Heads up");
        let loading = toaster.loading("Uploading");

        tokio::time::advance(Duration::from_millis(3500)).await;
        let kinds: Vec<_> = toaster.visible().into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Error, ToastKind::Default, ToastKind::Loading]);

        tokio::time::advance(Duration::from_secs(2)).await;
        let kinds: Vec<_> = toaster.visible().into_iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Loading]);

        toaster.dismiss(loading);
        assert!(toaster.visible().is_empty());
        assert_eq!(toaster.history().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn history_is_bounded_and_keeps_visible_toasts() {
        let toaster = Toaster::new();
        let loading = toaster.loading("Uploading");
        for i in 1..HISTORY_LIMIT {
            toaster.success(format!("Saved {i}"));
        }
        tokio::time::advance(Duration::from_secs(10)).await;

        let latest = toaster.success("Saved again");
        let history = toaster.history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].id, loading);
        assert_eq!(history[1].message, "Saved 2");
        assert_eq!(toaster.last().map(|t| t.id), Some(latest));

        toaster.dismiss(loading);
        toaster.error("Failed");
        assert_eq!(toaster.history()[0].message, "Saved 2");
        assert!(toaster.history().iter().all(|t| t.id != loading));
        assert_eq!(toaster.history().len(), HISTORY_LIMIT);
    }

    #[tokio::test]
    async fn messages_by_kind() {
        let toaster = Toaster::new();
        toaster.error("one");
        toaster.success("two");
        toaster.error("three");
        assert_eq!(toaster.messages(ToastKind::Error), vec!["one", "three"]);
    }
}
