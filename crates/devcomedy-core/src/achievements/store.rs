//! Achievement store: unlock state, click counters and persistence.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;

use super::catalog::{
    self, COMPLETIONIST, FIRST_JOKE, JOKE_COLLECTOR, RAGE_CLICKER, THEME_SWITCHER,
};
use super::{snapshot, Achievement};
use crate::error::PortfolioError;
use crate::notify::Toast;
use crate::storage::{KeyValueStore, ACHIEVEMENTS_KEY};
use crate::theme::ThemeState;

/// Joke clicks needed for "Joke Collector"
pub const JOKE_COLLECTOR_CLICKS: u32 = 10;

/// Clicks on one element needed for "Rage Clicker"
pub const RAGE_CLICK_THRESHOLD: u32 = 10;

/// First per-element click count that draws a warning
const RAGE_WARNING_FROM: u32 = 6;

/// Session-wide achievement state.
///
/// Every mutating call returns the toasts the user should see, in order.
/// An empty vector means nothing visible happened.
pub struct AchievementStore {
    achievements: Vec<Achievement>,
    joke_clicks: u32,
    element_clicks: HashMap<String, u32>,
    /// `None` once storage has failed (or was never attached)
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl AchievementStore {
    /// Hydrate from `backend`, falling back to the catalog on any problem.
    ///
    /// A failed read detaches the backend: the session continues in memory.
    /// A snapshot whose regular entries are all unlocked gets the
    /// completionist entry on load, silently.
    pub fn load(backend: Arc<dyn KeyValueStore>) -> Self {
        match backend.get(ACHIEVEMENTS_KEY) {
            Ok(raw) => {
                let mut store = Self {
                    achievements: snapshot::hydrate(raw.as_deref()),
                    joke_clicks: 0,
                    element_clicks: HashMap::new(),
                    backend: Some(backend),
                };
                if store.all_others_unlocked()
                    && store.transition(COMPLETIONIST, &mut Vec::new())
                {
                    tracing::info!("Completionist derived from saved progress");
                    store.persist();
                }
                store
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read achievements, continuing in memory");
                Self::in_memory()
            }
        }
    }

    /// A store with no persistence at all.
    pub fn in_memory() -> Self {
        Self {
            achievements: catalog::default_achievements(),
            joke_clicks: 0,
            element_clicks: HashMap::new(),
            backend: None,
        }
    }

    /// Whether changes are still being written to storage.
    pub fn is_persistent(&self) -> bool {
        self.backend.is_some()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Unlocking
    // ═══════════════════════════════════════════════════════════════════════

    /// Unlock `id`, stamping the current time.
    ///
    /// Unknown and already-unlocked ids are no-ops and return no toast, as
    /// is the completionist id: that entry only follows from the others.
    /// If this unlock completes every non-meta entry, the completionist
    /// entry is unlocked in the same call.
    pub fn unlock(&mut self, id: &str) -> Vec<Toast> {
        let mut toasts = Vec::new();

        if id == COMPLETIONIST {
            tracing::debug!("Ignoring direct completionist unlock");
            return toasts;
        }

        if !self.transition(id, &mut toasts) {
            return toasts;
        }

        if self.all_others_unlocked() {
            self.transition(COMPLETIONIST, &mut toasts);
        }

        self.persist();
        toasts
    }

    /// Pure lookup; false for unknown ids.
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.get(id).is_some_and(|a| a.unlocked)
    }

    /// locked → unlocked for a single entry; true if the transition happened.
    fn transition(&mut self, id: &str, toasts: &mut Vec<Toast>) -> bool {
        let Some(achievement) = self.achievements.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        if achievement.unlocked {
            return false;
        }

        achievement.unlocked = true;
        achievement.unlocked_at = Some(Utc::now());
        tracing::debug!(id = %achievement.id, "Achievement unlocked");
        toasts.push(Toast::achievement_unlocked(achievement));
        true
    }

    /// Derived predicate behind the completionist entry.
    fn all_others_unlocked(&self) -> bool {
        self.achievements
            .iter()
            .filter(|a| !a.is_meta())
            .all(|a| a.unlocked)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Counters
    // ═══════════════════════════════════════════════════════════════════════

    /// Count a floating-joke click.
    ///
    /// The first click unlocks "First Laugh", the tenth "Joke Collector".
    pub fn record_joke_click(&mut self) -> Vec<Toast> {
        self.joke_clicks = self.joke_clicks.saturating_add(1);

        match self.joke_clicks {
            1 => self.unlock(FIRST_JOKE),
            JOKE_COLLECTOR_CLICKS => self.unlock(JOKE_COLLECTOR),
            _ => Vec::new(),
        }
    }

    /// Count a click on `element`.
    ///
    /// Clicks six to nine warn on every call. The tenth unlocks "Rage
    /// Clicker" with a stronger toast instead of the warning.
    pub fn record_element_click(&mut self, element: &str) -> Vec<Toast> {
        let count = self.element_clicks.entry(element.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;

        if count == RAGE_CLICK_THRESHOLD {
            let mut toasts = self.unlock(RAGE_CLICKER);
            if !toasts.is_empty() {
                toasts.push(Toast::rage_unlocked());
            }
            toasts
        } else if (RAGE_WARNING_FROM..RAGE_CLICK_THRESHOLD).contains(&count) {
            vec![Toast::rage_warning()]
        } else {
            Vec::new()
        }
    }

    /// Unlock "Style Master" once every theme mode has been shown.
    pub fn record_theme_visits(&mut self, theme: &ThemeState) -> Vec<Toast> {
        if theme.visited_all() {
            self.unlock(THEME_SWITCHER)
        } else {
            Vec::new()
        }
    }

    /// Clicks on `element` this session.
    pub fn element_clicks(&self, element: &str) -> u32 {
        self.element_clicks.get(element).copied().unwrap_or(0)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Read access
    // ═══════════════════════════════════════════════════════════════════════

    /// All entries in catalog order.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    pub fn total(&self) -> usize {
        self.achievements.len()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Persistence
    // ═══════════════════════════════════════════════════════════════════════

    /// Write the whole list; on failure drop to in-memory mode.
    fn persist(&mut self) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };

        let result = snapshot::serialize(&self.achievements)
            .map_err(PortfolioError::from)
            .and_then(|raw| backend.set(ACHIEVEMENTS_KEY, &raw));

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist achievements, continuing in memory");
            self.backend = None;
        }
    }
}

impl Default for AchievementStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::catalog::PARTY_ANIMAL;
    use crate::notify::ToastKind;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_unlock_stamps_time() {
        let mut store = AchievementStore::in_memory();
        let toasts = store.unlock(PARTY_ANIMAL);

        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Achievement);
        assert!(toasts[0].description.contains("Party Animal"));
        assert!(store.get(PARTY_ANIMAL).unwrap().unlocked_at.is_some());
        assert_eq!(store.unlocked_count(), 1);
    }

    #[test]
    fn test_unlock_persists_snapshot() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = AchievementStore::load(storage.clone());
        store.unlock(FIRST_JOKE);

        let raw = storage.get(ACHIEVEMENTS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"first-joke\""));
        assert!(store.is_persistent());
    }

    #[test]
    fn test_noop_unlock_does_not_write() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = AchievementStore::load(storage.clone());

        store.unlock("nope");
        assert!(storage.get(ACHIEVEMENTS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_element_counters_are_independent() {
        let mut store = AchievementStore::in_memory();
        for _ in 0..9 {
            store.record_element_click("a");
        }
        // "b" is still in the quiet band
        assert!(store.record_element_click("b").is_empty());
        assert_eq!(store.element_clicks("a"), 9);
        assert_eq!(store.element_clicks("b"), 1);
        assert_eq!(store.element_clicks("never"), 0);
        assert!(!store.is_unlocked(RAGE_CLICKER));
    }

    #[test]
    fn test_clicks_past_threshold_are_quiet() {
        let mut store = AchievementStore::in_memory();
        for _ in 0..10 {
            store.record_element_click("x");
        }
        assert!(store.record_element_click("x").is_empty());
        assert_eq!(store.element_clicks("x"), 11);
    }

    #[test]
    fn test_second_element_reaching_ten_is_quiet() {
        let mut store = AchievementStore::in_memory();
        for _ in 0..10 {
            store.record_element_click("x");
        }
        let mut last = Vec::new();
        for _ in 0..10 {
            last = store.record_element_click("y");
        }
        // already unlocked: no duplicate notification
        assert!(last.is_empty());
    }

    #[test]
    fn test_direct_completionist_unlock_is_ignored() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = AchievementStore::load(storage.clone());

        assert!(store.unlock(COMPLETIONIST).is_empty());
        assert!(!store.is_unlocked(COMPLETIONIST));
        assert_eq!(store.unlocked_count(), 0);
        assert!(storage.get(ACHIEVEMENTS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_load_derives_completionist() {
        let mut list = catalog::default_achievements();
        for a in list.iter_mut().filter(|a| !a.is_meta()) {
            a.unlocked = true;
        }
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(ACHIEVEMENTS_KEY, &snapshot::serialize(&list).unwrap())
            .unwrap();

        let store = AchievementStore::load(storage.clone());
        assert!(store.is_unlocked(COMPLETIONIST));
        assert!(store.get(COMPLETIONIST).unwrap().unlocked_at.is_some());

        let raw = storage.get(ACHIEVEMENTS_KEY).unwrap().unwrap();
        let reread = snapshot::hydrate(Some(&raw));
        assert!(reread.iter().all(|a| a.unlocked));
    }
}
