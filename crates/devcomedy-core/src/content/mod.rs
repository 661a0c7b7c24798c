//! Static portfolio content and the small per-section gags.
//!
//! Copy is keyed by [`ThemeMode`] through [`Themed`]; sections in the shell
//! only ever call [`Themed::pick`].

pub mod copy;
pub mod gags;
pub mod portfolio;

use crate::theme::ThemeMode;

pub use gags::{DontClickButton, HatRack, RunawayButton, SkillBoard, SkillDiscovery, Typewriter};
pub use portfolio::{Project, Skill, Social, TimelineEntry, PROJECTS, SKILLS, SOCIALS, TIMELINE};

/// One value per theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Themed<T> {
    pub light: T,
    pub neon: T,
    pub punny: T,
}

impl<T> Themed<T> {
    pub const fn new(light: T, neon: T, punny: T) -> Self {
        Self { light, neon, punny }
    }

    pub fn pick(&self, mode: ThemeMode) -> &T {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::NeonHacker => &self.neon,
            ThemeMode::PunnyMode => &self.punny,
        }
    }
}

impl<T: Copy> Themed<T> {
    /// Same value in every mode.
    pub const fn all(value: T) -> Self {
        Self {
            light: value,
            neon: value,
            punny: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_follows_mode() {
        let t = Themed::new(1, 2, 3);
        assert_eq!(*t.pick(ThemeMode::Light), 1);
        assert_eq!(*t.pick(ThemeMode::NeonHacker), 2);
        assert_eq!(*t.pick(ThemeMode::PunnyMode), 3);
        assert_eq!(*Themed::all("x").pick(ThemeMode::PunnyMode), "x");
    }
}
