//! Keyboard-shortcut dispatcher.
//!
//! | Key      | Shortcut                          | Unlocks                        |
//! |----------|-----------------------------------|--------------------------------|
//! | `p` ×3   | punny mode on/off                 | keyboard-ninja                 |
//! | `f`      | grayscale pulse (3 s)             | easter-egg-hunter              |
//! | `l`      | party pulse (10 s)                | party-animal, easter-egg-hunter|
//! | `?`      | open shortcut overlay             | keyboard-ninja                 |
//! | `Escape` | close shortcut overlay            |                                |
//!
//! The triple press uses a rolling window: every `p` pushes the expiry one
//! second forward, and a press at or after the expiry starts over at one.
//! Keys typed into a text field never reach the state machine.

use std::time::{Duration, Instant};

use crate::achievements::catalog::{EASTER_EGG_HUNTER, KEYBOARD_NINJA, PARTY_ANIMAL};
use crate::achievements::AchievementStore;
use crate::notify::Toast;
use crate::theme::{PulseKind, ThemeState};

/// Rolling window for the triple press
pub const TRIPLE_PRESS_WINDOW: Duration = Duration::from_secs(1);

const TRIPLE_PRESS_KEY: char = 'p';
const TRIPLE_PRESS_COUNT: u8 = 3;

/// A raw key press, reduced to what the dispatcher cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPress {
    /// A printable key, lowercased
    Char(char),
    Escape,
    /// Anything else (arrows, modifiers, function keys)
    Other,
}

impl KeyPress {
    /// Build from a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("escape") || name == "Esc" {
            return KeyPress::Escape;
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => KeyPress::Char(c.to_ascii_lowercase()),
            _ => KeyPress::Other,
        }
    }
}

/// Something the page should do in response to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePunny,
    Grayscale,
    PartyMode,
    ShowHelp,
    HideHelp,
}

impl Shortcut {
    /// Achievements this shortcut unlocks, in order.
    pub fn achievements(&self) -> &'static [&'static str] {
        match self {
            Shortcut::TogglePunny => &[KEYBOARD_NINJA],
            Shortcut::Grayscale => &[EASTER_EGG_HUNTER],
            Shortcut::PartyMode => &[PARTY_ANIMAL, EASTER_EGG_HUNTER],
            Shortcut::ShowHelp => &[KEYBOARD_NINJA],
            Shortcut::HideHelp => &[],
        }
    }

    /// Apply to the theme and achievement stores.
    pub fn apply(
        self,
        theme: &mut ThemeState,
        achievements: &mut AchievementStore,
        now: Instant,
    ) -> ShortcutEffect {
        let mut effect = ShortcutEffect::default();

        match self {
            Shortcut::TogglePunny => {
                theme.toggle_punny();
            }
            Shortcut::Grayscale => {
                let generation = theme.trigger(PulseKind::Grayscale, now);
                effect.pulse = Some((PulseKind::Grayscale, generation));
            }
            Shortcut::PartyMode => {
                let generation = theme.trigger(PulseKind::PartyMode, now);
                effect.pulse = Some((PulseKind::PartyMode, generation));
            }
            Shortcut::ShowHelp => effect.overlay = Some(true),
            Shortcut::HideHelp => effect.overlay = Some(false),
        }

        for id in self.achievements() {
            effect.toasts.extend(achievements.unlock(id));
        }
        if self == Shortcut::TogglePunny {
            effect.toasts.extend(achievements.record_theme_visits(theme));
        }
        effect
    }
}

/// What applying a shortcut produced
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShortcutEffect {
    pub toasts: Vec<Toast>,
    /// A pulse that now needs an expiry scheduled
    pub pulse: Option<(PulseKind, u64)>,
    /// New visibility for the shortcut overlay
    pub overlay: Option<bool>,
}

/// State machine over key presses
#[derive(Debug, Default, Clone)]
pub struct KeyDispatcher {
    presses: u8,
    window_until: Option<Instant>,
}

impl KeyDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key press.
    ///
    /// `in_text_input` is true when focus is inside an input or textarea;
    /// such presses are ignored entirely.
    pub fn handle(&mut self, key: &KeyPress, in_text_input: bool, now: Instant) -> Option<Shortcut> {
        if in_text_input {
            return None;
        }

        match key {
            KeyPress::Char(TRIPLE_PRESS_KEY) => self.count_press(now),
            KeyPress::Char('f') => Some(Shortcut::Grayscale),
            KeyPress::Char('l') => Some(Shortcut::PartyMode),
            KeyPress::Char('?') => Some(Shortcut::ShowHelp),
            KeyPress::Escape => Some(Shortcut::HideHelp),
            _ => None,
        }
    }

    fn count_press(&mut self, now: Instant) -> Option<Shortcut> {
        if self.window_until.is_some_and(|until| now >= until) {
            self.presses = 0;
        }

        self.presses += 1;

        if self.presses >= TRIPLE_PRESS_COUNT {
            self.reset();
            tracing::debug!("Triple press detected");
            return Some(Shortcut::TogglePunny);
        }

        self.window_until = Some(now + TRIPLE_PRESS_WINDOW);
        None
    }

    /// Expiry of the rolling window, if a count is in progress.
    pub fn pending_window(&self) -> Option<Instant> {
        self.window_until
    }

    /// Timer callback: drop the count if the window has really elapsed.
    pub fn expire_window(&mut self, now: Instant) -> bool {
        if self.window_until.is_some_and(|until| now >= until) {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Forget any count in progress (used on teardown).
    pub fn reset(&mut self) {
        self.presses = 0;
        self.window_until = None;
    }

    /// Presses counted in the current window.
    pub fn presses(&self) -> u8 {
        self.presses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    fn ms(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn key_names_normalise() {
        assert_eq!(KeyPress::from_key_name("P"), KeyPress::Char('p'));
        assert_eq!(KeyPress::from_key_name("?"), KeyPress::Char('?'));
        assert_eq!(KeyPress::from_key_name("Escape"), KeyPress::Escape);
        assert_eq!(KeyPress::from_key_name("ArrowUp"), KeyPress::Other);
        assert_eq!(KeyPress::from_key_name(""), KeyPress::Other);
    }

    #[test]
    fn text_input_is_ignored() {
        let t0 = Instant::now();
        let mut keys = KeyDispatcher::new();
        assert_eq!(keys.handle(&KeyPress::Char('f'), true, t0), None);
        assert_eq!(keys.handle(&KeyPress::Char('p'), true, t0), None);
        assert_eq!(keys.presses(), 0);
    }

    #[test]
    fn single_keys_map_directly() {
        let t0 = Instant::now();
        let mut keys = KeyDispatcher::new();
        assert_eq!(keys.handle(&KeyPress::Char('f'), false, t0), Some(Shortcut::Grayscale));
        assert_eq!(keys.handle(&KeyPress::Char('l'), false, t0), Some(Shortcut::PartyMode));
        assert_eq!(keys.handle(&KeyPress::Char('?'), false, t0), Some(Shortcut::ShowHelp));
        assert_eq!(keys.handle(&KeyPress::Escape, false, t0), Some(Shortcut::HideHelp));
        assert_eq!(keys.handle(&KeyPress::Char('z'), false, t0), None);
    }

    #[test]
    fn triple_press_resets_after_firing() {
        let t0 = Instant::now();
        let mut keys = KeyDispatcher::new();
        let p = KeyPress::Char('p');

        assert_eq!(keys.handle(&p, false, ms(t0, 0)), None);
        assert_eq!(keys.handle(&p, false, ms(t0, 100)), None);
        assert_eq!(keys.handle(&p, false, ms(t0, 200)), Some(Shortcut::TogglePunny));
        assert_eq!(keys.presses(), 0);
        assert!(keys.pending_window().is_none());

        // a fourth press starts a new count
        assert_eq!(keys.handle(&p, false, ms(t0, 300)), None);
        assert_eq!(keys.presses(), 1);
    }

    #[test]
    fn window_timer_clears_count() {
        let t0 = Instant::now();
        let mut keys = KeyDispatcher::new();
        keys.handle(&KeyPress::Char('p'), false, t0);

        assert!(!keys.expire_window(ms(t0, 999)));
        assert_eq!(keys.presses(), 1);
        assert!(keys.expire_window(ms(t0, 1000)));
        assert_eq!(keys.presses(), 0);
    }

    #[test]
    fn reset_drops_pending_window() {
        let t0 = Instant::now();
        let mut keys = KeyDispatcher::new();
        let p = KeyPress::Char('p');

        keys.handle(&p, false, ms(t0, 0));
        keys.handle(&p, false, ms(t0, 100));
        assert!(keys.pending_window().is_some());

        keys.reset();
        assert!(keys.pending_window().is_none());
        assert_eq!(keys.presses(), 0);
        assert!(!keys.expire_window(ms(t0, 5000)));

        // the two earlier presses no longer count toward a triple
        assert_eq!(keys.handle(&p, false, ms(t0, 200)), None);
        assert_eq!(keys.presses(), 1);
    }

    #[test]
    fn other_keys_do_not_break_the_count() {
        let t0 = Instant::now();
        let mut keys = KeyDispatcher::new();
        let p = KeyPress::Char('p');

        keys.handle(&p, false, ms(t0, 0));
        keys.handle(&KeyPress::Char('x'), false, ms(t0, 100));
        keys.handle(&p, false, ms(t0, 200));
        assert_eq!(keys.handle(&p, false, ms(t0, 300)), Some(Shortcut::TogglePunny));
    }

    #[test]
    fn apply_party_mode_unlocks_two() {
        let t0 = Instant::now();
        let mut theme = ThemeState::default();
        let mut store = AchievementStore::in_memory();

        let effect = Shortcut::PartyMode.apply(&mut theme, &mut store, t0);
        assert_eq!(effect.toasts.len(), 2);
        assert!(matches!(effect.pulse, Some((PulseKind::PartyMode, _))));
        assert!(theme.is_party_mode(t0));
        assert!(store.is_unlocked(PARTY_ANIMAL));
        assert!(store.is_unlocked(EASTER_EGG_HUNTER));
    }

    #[test]
    fn toggle_punny_can_complete_theme_tour() {
        let t0 = Instant::now();
        let mut theme = ThemeState::new(ThemeMode::NeonHacker);
        theme.set_mode(ThemeMode::Light);
        let mut store = AchievementStore::in_memory();

        let effect = Shortcut::TogglePunny.apply(&mut theme, &mut store, t0);
        assert_eq!(theme.mode(), ThemeMode::PunnyMode);
        assert_eq!(effect.toasts.len(), 2);
        assert!(store.is_unlocked(KEYBOARD_NINJA));
        assert!(store.is_unlocked("theme-switcher"));
    }

    #[test]
    fn apply_help_toggles_overlay() {
        let t0 = Instant::now();
        let mut theme = ThemeState::default();
        let mut store = AchievementStore::in_memory();

        assert_eq!(Shortcut::ShowHelp.apply(&mut theme, &mut store, t0).overlay, Some(true));
        let hide = Shortcut::HideHelp.apply(&mut theme, &mut store, t0);
        assert_eq!(hide.overlay, Some(false));
        assert!(hide.toasts.is_empty());
    }

    #[test]
    fn keyboard_ninja_comes_from_the_help_key_only() {
        let t0 = Instant::now();
        let mut theme = ThemeState::default();
        let mut store = AchievementStore::in_memory();

        // toggling the overlay itself unlocks nothing
        Shortcut::HideHelp.apply(&mut theme, &mut store, t0);
        assert!(!store.is_unlocked(KEYBOARD_NINJA));

        let shown = Shortcut::ShowHelp.apply(&mut theme, &mut store, t0);
        assert_eq!(shown.toasts.len(), 1);
        assert!(store.is_unlocked(KEYBOARD_NINJA));
    }
}
