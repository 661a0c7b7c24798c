//! The fixed achievement catalog.
//!
//! Order here is display order. Ids are stored on disk, never rename them.

use super::Achievement;

pub const FIRST_JOKE: &str = "first-joke";
pub const JOKE_COLLECTOR: &str = "joke-collector";
pub const SKILL_EXPLORER: &str = "skill-explorer";
pub const EASTER_EGG_HUNTER: &str = "easter-egg-hunter";
pub const THEME_SWITCHER: &str = "theme-switcher";
pub const KEYBOARD_NINJA: &str = "keyboard-ninja";
pub const RAGE_CLICKER: &str = "rage-clicker";
pub const BUTTON_WHISPERER: &str = "button-whisperer";
pub const PARTY_ANIMAL: &str = "party-animal";

/// Meta achievement, unlocked once every other entry is unlocked
pub const COMPLETIONIST: &str = "completionist";

// (id, title, description, icon)
const CATALOG: &[(&str, &str, &str, &str)] = &[
    (FIRST_JOKE, "First Laugh", "Clicked your first floating joke!", "😂"),
    (JOKE_COLLECTOR, "Joke Collector", "Clicked 10 floating jokes", "🎭"),
    (SKILL_EXPLORER, "Skill Explorer", "Discovered 5 skill jokes", "🎯"),
    (EASTER_EGG_HUNTER, "Easter Egg Hunter", "Found a hidden secret", "🥚"),
    (THEME_SWITCHER, "Style Master", "Tried all three themes", "🎨"),
    (KEYBOARD_NINJA, "Keyboard Ninja", "Used keyboard shortcuts", "⌨️"),
    (RAGE_CLICKER, "Rage Clicker", "Clicked the same button 10 times", "🔥"),
    (BUTTON_WHISPERER, "Button Whisperer", "Caught the runaway button", "🏃‍♂️"),
    (PARTY_ANIMAL, "Party Animal", "Triggered party mode", "🎉"),
    (COMPLETIONIST, "Completionist", "Unlocked all achievements", "👑"),
];

/// Fresh, fully locked copy of the catalog.
pub fn default_achievements() -> Vec<Achievement> {
    CATALOG
        .iter()
        .map(|(id, title, description, icon)| Achievement::locked(id, title, description, icon))
        .collect()
}

/// Whether `id` names a catalog entry.
pub fn contains(id: &str) -> bool {
    CATALOG.iter().any(|(known, ..)| *known == id)
}
