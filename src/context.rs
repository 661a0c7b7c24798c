//! Portfolio context shared by every section.
//!
//! The root component creates the stores once, wraps them in signals and
//! provides a single [`Portfolio`] handle. Sections read it with
//! [`use_portfolio`] and route every side effect (toasts, sounds, pulse
//! expiries) through it so timers are owned in one place.
//!
//! ## Usage
//!
//! ```ignore
//! let portfolio = use_portfolio();
//! let mode = portfolio.mode();
//!
//! let on_click = move |_| {
//!     let toasts = portfolio.achievements.write().record_joke_click();
//!     portfolio.notify(toasts);
//! };
//! ```

use std::collections::HashMap;
use std::time::Instant;

use devcomedy_core::{
    AchievementStore, JokeAnalytics, JokeDeck, PulseKind, Shortcut, SoundCue, SoundEmitter,
    ThemeMode, ThemeState, Toast, ToastKind, ToastQueue,
};
use dioxus::prelude::*;

use crate::audio;

/// Handles to the session-wide stores. Cheap to copy.
#[derive(Clone, Copy)]
pub struct Portfolio {
    pub theme: Signal<ThemeState>,
    pub achievements: Signal<AchievementStore>,
    pub sound: Signal<SoundEmitter>,
    pub toasts: Signal<ToastQueue>,
    pub deck: Signal<JokeDeck>,
    pub analytics: Signal<JokeAnalytics>,
    pub show_shortcuts: Signal<bool>,
    pulse_tasks: Signal<HashMap<PulseKind, Task>>,
    toast_task: Signal<Option<Task>>,
}

impl Portfolio {
    pub fn new(
        theme: Signal<ThemeState>,
        achievements: Signal<AchievementStore>,
        sound: Signal<SoundEmitter>,
        deck: Signal<JokeDeck>,
        analytics: Signal<JokeAnalytics>,
    ) -> Self {
        Self {
            theme,
            achievements,
            sound,
            toasts: Signal::new(ToastQueue::new()),
            deck,
            analytics,
            show_shortcuts: Signal::new(false),
            pulse_tasks: Signal::new(HashMap::new()),
            toast_task: Signal::new(None),
        }
    }

    /// Active theme mode (subscribes the caller).
    pub fn mode(&self) -> ThemeMode {
        self.theme.read().mode()
    }

    /// Show toasts and schedule their expiry.
    ///
    /// An achievement toast also plays the achievement chime.
    pub fn notify(mut self, toasts: Vec<Toast>) {
        if toasts.is_empty() {
            return;
        }
        if toasts.iter().any(|t| t.kind == ToastKind::Achievement) {
            self.play(SoundCue::Achievement);
        }
        self.toasts.write().extend(toasts, Instant::now());
        self.schedule_toast_expiry();
    }

    pub fn dismiss_toast(mut self, id: u64) {
        self.toasts.write().dismiss(id);
    }

    /// Play a cue unless muted.
    pub fn play(&self, cue: SoundCue) {
        if let Some(tones) = self.sound.peek().play(cue) {
            audio::play_tones(tones);
        }
    }

    /// Cycle the theme from the navbar button.
    pub fn cycle_theme(mut self) {
        let mode = self.theme.write().cycle();
        tracing::debug!(%mode, "Theme cycled");
        let toasts = self
            .achievements
            .write()
            .record_theme_visits(&self.theme.peek());
        self.notify(toasts);
    }

    /// Apply a shortcut from the keyboard or a button.
    pub fn run_shortcut(mut self, shortcut: Shortcut) {
        tracing::debug!(?shortcut, "Shortcut");
        let effect = shortcut.apply(
            &mut self.theme.write(),
            &mut self.achievements.write(),
            Instant::now(),
        );
        if let Some((kind, generation)) = effect.pulse {
            self.schedule_pulse(kind, generation);
        }
        if let Some(visible) = effect.overlay {
            self.show_shortcuts.set(visible);
        }
        self.notify(effect.toasts);
    }

    /// Schedule the fire-once expiry for a pulse trigger.
    ///
    /// A pending expiry of the same kind is cancelled first; its generation
    /// is stale anyway.
    pub fn schedule_pulse(mut self, kind: PulseKind, generation: u64) {
        if let Some(task) = self.pulse_tasks.write().remove(&kind) {
            task.cancel();
        }
        let mut theme = self.theme;
        let task = spawn_forever(async move {
            tokio::time::sleep(kind.duration()).await;
            theme.write().expire(kind, generation, Instant::now());
        });
        if let Some(task) = task {
            self.pulse_tasks.write().insert(kind, task);
        }
    }

    /// One task sleeps until the earliest toast expiry, then re-arms.
    ///
    /// Timers live on the root scope so they survive route changes.
    fn schedule_toast_expiry(mut self) {
        if let Some(task) = self.toast_task.write().take() {
            task.cancel();
        }
        let mut toasts = self.toasts;
        let task = spawn_forever(async move {
            loop {
                let next = toasts.peek().next_expiry();
                let Some(next) = next else {
                    break;
                };
                tokio::time::sleep(next.saturating_duration_since(Instant::now())).await;
                toasts.write().expire(Instant::now());
            }
        });
        self.toast_task.set(task);
    }

    /// Cancel every outstanding timer (root unmount).
    ///
    /// Signals may already be gone during teardown, so access is fallible.
    pub fn shutdown(mut self) {
        if let Ok(mut tasks) = self.pulse_tasks.try_write() {
            for (_, task) in tasks.drain() {
                task.cancel();
            }
        }
        if let Ok(mut slot) = self.toast_task.try_write() {
            if let Some(task) = slot.take() {
                task.cancel();
            }
        }
    }
}

/// Hook to access the portfolio stores from context.
pub fn use_portfolio() -> Portfolio {
    use_context::<Portfolio>()
}
