//! User-visible notifications.
//!
//! Stores never render anything. They return [`Toast`] values describing
//! what the user should see, and the shell pushes them into a
//! [`ToastQueue`] which expires them after their display duration.

use std::time::{Duration, Instant};

use crate::achievements::Achievement;

/// Visual weight of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information (jokes, confirmations)
    Info,
    /// An achievement was unlocked
    Achievement,
    /// Mild nudge ("Easy there!")
    Warning,
    /// Strong nudge or failure
    Alert,
}

/// A single transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub duration: Duration,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration,
            kind,
        }
    }

    /// Plain informational toast.
    pub fn info(title: impl Into<String>, description: impl Into<String>, millis: u64) -> Self {
        Self::new(ToastKind::Info, title, description, Duration::from_millis(millis))
    }

    /// Toast shown exactly once when an achievement transitions to unlocked.
    pub fn achievement_unlocked(achievement: &Achievement) -> Self {
        Self::new(
            ToastKind::Achievement,
            "🏆 Achievement Unlocked!",
            format!(
                "{} {}: {}",
                achievement.icon, achievement.title, achievement.description
            ),
            Duration::from_millis(5000),
        )
    }

    /// Fired on every rage click between the sixth and ninth.
    pub fn rage_warning() -> Self {
        Self::new(
            ToastKind::Warning,
            "😅 Easy there!",
            "I'm getting dizzy from all this clicking!",
            Duration::from_millis(2000),
        )
    }

    /// Fired on the tenth rage click, alongside the unlock.
    pub fn rage_unlocked() -> Self {
        Self::new(
            ToastKind::Alert,
            "🤯 Calm down there!",
            "I'm sensitive! But... achievement unlocked! 🏆",
            Duration::from_millis(4000),
        )
    }

    /// Something went wrong and the user may want to retry.
    pub fn failure(description: impl Into<String>) -> Self {
        Self::new(
            ToastKind::Alert,
            "Error 😢",
            description,
            Duration::from_millis(4000),
        )
    }
}

/// A toast currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
    pub expires_at: Instant,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    active: Vec<ActiveToast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast; returns its id.
    pub fn push(&mut self, toast: Toast, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let expires_at = now + toast.duration;
        self.active.push(ActiveToast {
            id,
            toast,
            expires_at,
        });
        id
    }

    /// Show several toasts in order.
    pub fn extend(&mut self, toasts: impl IntoIterator<Item = Toast>, now: Instant) {
        for toast in toasts {
            self.push(toast, now);
        }
    }

    /// Dismiss a toast early.
    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|t| t.id != id);
    }

    /// Drop every toast whose duration has elapsed. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.active.len();
        self.active.retain(|t| t.expires_at > now);
        before - self.active.len()
    }

    /// Earliest pending expiry, if any toast is visible.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.active.iter().map(|t| t.expires_at).min()
    }

    pub fn active(&self) -> &[ActiveToast] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
