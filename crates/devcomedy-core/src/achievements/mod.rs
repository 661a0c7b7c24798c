//! Achievement system.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  catalog    fixed, ordered list of ten achievements          │
//! │  snapshot   JSON persistence + field-by-field load merge     │
//! │  store      unlock / check / joke + rage click counters      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! `unlocked` only ever goes from false to true. The `completionist`
//! entry is never stored as its own rule: it is re-derived after every
//! unlock from the state of all other entries.

pub mod catalog;
pub mod snapshot;
mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use catalog::COMPLETIONIST;
pub use store::{AchievementStore, JOKE_COLLECTOR_CLICKS, RAGE_CLICK_THRESHOLD};

/// Id of a catalog entry (`"first-joke"`, `"rage-clicker"`, ...)
pub type AchievementId = &'static str;

/// A single achievement and its unlock state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Stable key, also the storage key of the entry
    pub id: String,
    pub title: String,
    pub description: String,
    /// Emoji glyph shown in toasts and the gallery
    pub icon: String,
    pub unlocked: bool,
    /// When the entry was unlocked (absent while locked)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    /// A locked entry with no unlock time.
    pub fn locked(id: &str, title: &str, description: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked: false,
            unlocked_at: None,
        }
    }

    /// Whether this is the derived meta entry.
    pub fn is_meta(&self) -> bool {
        self.id == COMPLETIONIST
    }
}
