//! Per-section gags: typewriter headline, hat rack, "Don't Click Me!",
//! skill discovery and the runaway button.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rand::Rng;

use super::portfolio::Skill;
use crate::achievements::catalog::{BUTTON_WHISPERER, SKILL_EXPLORER};
use crate::achievements::AchievementStore;
use crate::notify::Toast;
use crate::theme::Pulse;

/// Typing speed of the hero headline
pub const TYPE_INTERVAL: Duration = Duration::from_millis(50);

/// Reveals a string one character per tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self { text, shown: 0 }
    }

    /// Start over with new text (theme changed).
    pub fn restart(&mut self, text: &'static str) {
        self.text = text;
        self.shown = 0;
    }

    /// Reveal one more character; false once the text is complete.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn visible(&self) -> &'static str {
        match self.text.char_indices().nth(self.shown) {
            Some((end, _)) => &self.text[..end],
            None => self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}

pub const HATS: [&str; 7] = ["🎩", "👑", "🧢", "🎓", "🤠", "👒", "🎪"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HatRack {
    index: usize,
}

impl HatRack {
    pub fn current(&self) -> &'static str {
        HATS[self.index]
    }

    /// Next hat, wrapping around.
    pub fn cycle(&mut self) -> &'static str {
        self.index = (self.index + 1) % HATS.len();
        self.current()
    }
}

/// Element key used for rage-click tracking
pub const DONT_CLICK_ELEMENT: &str = "hero-dont-click";

const DONT_CLICK_MESSAGES: [&str; 4] = [
    "I said don't click me! 😤",
    "Seriously, stop clicking! 🙄",
    "Fine... you win. Here's a cookie: 🍪",
    "You're persistent. I respect that! 🎉",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DontClickButton {
    presses: usize,
}

impl DontClickButton {
    /// Escalating message, saturating at the last one.
    pub fn press(&mut self) -> Toast {
        let message = DONT_CLICK_MESSAGES[self.presses.min(DONT_CLICK_MESSAGES.len() - 1)];
        self.presses += 1;
        Toast::info("😅 Hey!", message, 2000)
    }

    pub fn presses(&self) -> usize {
        self.presses
    }
}

/// Distinct skills needed for "Skill Explorer"
pub const SKILLS_TO_DISCOVER: usize = 5;

pub const CONFETTI_DURATION: Duration = Duration::from_secs(3);

/// Result of clicking a skill badge
#[derive(Debug, Clone, PartialEq)]
pub struct SkillDiscovery {
    pub toasts: Vec<Toast>,
    /// Generation of a confetti burst that now needs its expiry scheduled
    pub confetti: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct SkillBoard {
    discovered: BTreeSet<&'static str>,
    confetti: Pulse,
}

impl Default for SkillBoard {
    fn default() -> Self {
        Self {
            discovered: BTreeSet::new(),
            confetti: Pulse::new(CONFETTI_DURATION),
        }
    }
}

impl SkillBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the skill's joke; the fifth distinct skill unlocks "Skill
    /// Explorer" and fires the confetti.
    pub fn discover(
        &mut self,
        skill: &Skill,
        achievements: &mut AchievementStore,
        now: Instant,
    ) -> SkillDiscovery {
        let mut toasts = vec![Toast::info(format!("{} Joke!", skill.name), skill.joke, 4000)];
        let mut confetti = None;

        let newly_found = self.discovered.insert(skill.name);
        if newly_found && self.discovered.len() == SKILLS_TO_DISCOVER {
            toasts.extend(achievements.unlock(SKILL_EXPLORER));
            confetti = Some(self.confetti.trigger(now));
        }

        SkillDiscovery { toasts, confetti }
    }

    pub fn is_discovered(&self, name: &str) -> bool {
        self.discovered.contains(name)
    }

    pub fn discovered(&self) -> usize {
        self.discovered.len()
    }

    pub fn has_confetti(&self, now: Instant) -> bool {
        self.confetti.is_active(now)
    }

    pub fn end_confetti(&mut self, generation: u64, now: Instant) -> bool {
        self.confetti.expire(generation, now)
    }
}

pub fn secret_egg_toast() -> Toast {
    Toast::info(
        "🕵️ Secret Found!",
        "You found a hidden easter egg! Nice detective work!",
        4000,
    )
}

/// Dodges this many times before it can be caught
pub const RUNAWAY_DODGES: u8 = 3;

const DODGE_RANGE: f64 = 150.0;

/// A button that jumps away from the pointer until it gets tired
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunawayButton {
    dodges: u8,
    offset: (f64, f64),
}

impl RunawayButton {
    /// Pointer entered the button. Returns the new offset if it dodged.
    pub fn approach(&mut self, rng: &mut impl Rng) -> Option<(f64, f64)> {
        if self.is_tired() {
            return None;
        }
        self.dodges += 1;
        self.offset = (
            rng.random_range(-DODGE_RANGE..DODGE_RANGE),
            rng.random_range(-DODGE_RANGE / 2.0..DODGE_RANGE / 2.0),
        );
        Some(self.offset)
    }

    /// Clicked: only counts once the button has stopped running.
    pub fn catch(&mut self, achievements: &mut AchievementStore) -> Vec<Toast> {
        if !self.is_tired() {
            return Vec::new();
        }
        let mut toasts = vec![Toast::info(
            "🤝 Gotcha!",
            "Okay okay, you caught me. I'll stop running.",
            3000,
        )];
        toasts.extend(achievements.unlock(BUTTON_WHISPERER));
        toasts
    }

    pub fn is_tired(&self) -> bool {
        self.dodges >= RUNAWAY_DODGES
    }

    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    pub fn label(&self) -> &'static str {
        if self.is_tired() {
            "Fine, click me 😮‍💨"
        } else {
            "Catch me! 🏃"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn typewriter_respects_char_boundaries() {
        let mut tw = Typewriter::new("hé☕");
        assert_eq!(tw.visible(), "");
        tw.tick();
        tw.tick();
        assert_eq!(tw.visible(), "hé");
        assert!(tw.tick());
        assert!(tw.is_done());
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "hé☕");

        tw.restart("abc");
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn hats_wrap_around() {
        let mut rack = HatRack::default();
        assert_eq!(rack.current(), "🎩");
        for _ in 0..HATS.len() {
            rack.cycle();
        }
        assert_eq!(rack.current(), "🎩");
    }

    #[test]
    fn dont_click_messages_saturate() {
        let mut button = DontClickButton::default();
        let descriptions: Vec<_> = (0..6).map(|_| button.press().description).collect();
        assert_eq!(descriptions[0], DONT_CLICK_MESSAGES[0]);
        assert_eq!(descriptions[3], DONT_CLICK_MESSAGES[3]);
        assert_eq!(descriptions[5], DONT_CLICK_MESSAGES[3]);
    }

    #[test]
    fn fifth_distinct_skill_unlocks_explorer() {
        let t0 = Instant::now();
        let mut board = SkillBoard::new();
        let mut store = AchievementStore::in_memory();

        // repeats do not count
        board.discover(&SKILLS[0], &mut store, t0);
        board.discover(&SKILLS[0], &mut store, t0);
        for skill in &SKILLS[1..4] {
            assert!(board.discover(skill, &mut store, t0).confetti.is_none());
        }
        assert!(!store.is_unlocked(SKILL_EXPLORER));

        let fifth = board.discover(&SKILLS[4], &mut store, t0);
        assert!(fifth.confetti.is_some());
        assert_eq!(fifth.toasts.len(), 2);
        assert!(store.is_unlocked(SKILL_EXPLORER));
        assert!(board.has_confetti(t0 + Duration::from_secs(2)));

        // the sixth does not fire again
        assert!(board.discover(&SKILLS[5], &mut store, t0).confetti.is_none());
    }

    #[test]
    fn runaway_button_needs_three_dodges() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut button = RunawayButton::default();
        let mut store = AchievementStore::in_memory();

        assert!(button.catch(&mut store).is_empty());
        for _ in 0..RUNAWAY_DODGES {
            let (dx, dy) = button.approach(&mut rng).unwrap();
            assert!(dx.abs() <= DODGE_RANGE && dy.abs() <= DODGE_RANGE);
        }
        assert!(button.approach(&mut rng).is_none());

        let toasts = button.catch(&mut store);
        assert_eq!(toasts.len(), 2);
        assert!(store.is_unlocked(BUTTON_WHISPERER));
    }
}
