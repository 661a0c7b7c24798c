//! Property-based tests for the portfolio stores
//!
//! Uses proptest to check invariants that must hold for any sequence of
//! user actions or any persisted payload.

use std::sync::Arc;
use std::time::{Duration, Instant};

use devcomedy_core::achievements::{catalog, snapshot};
use devcomedy_core::trail::PARTICLE_LIFETIME;
use devcomedy_core::{
    AchievementStore, CursorTrail, JokeDeck, KeyDispatcher, KeyPress, MemoryStorage, Shortcut,
    ThemeState, COMPLETIONIST,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Things a visitor can do that touch the achievement store
#[derive(Debug, Clone)]
enum VisitorOp {
    Unlock(usize),
    JokeClick,
    ElementClick(u8),
    Shortcut(char),
}

fn visitor_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<VisitorOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0..12usize).prop_map(VisitorOp::Unlock),
            2 => Just(VisitorOp::JokeClick),
            3 => (0..3u8).prop_map(VisitorOp::ElementClick),
            2 => prop::sample::select(vec!['p', 'f', 'l', '?', 'x']).prop_map(VisitorOp::Shortcut),
        ],
        0..max_ops,
    )
}

/// A regular (non-meta) catalog id, or an unknown one past the end
fn catalog_id(index: usize) -> String {
    catalog::default_achievements()
        .into_iter()
        .filter(|a| !a.is_meta())
        .nth(index)
        .map(|a| a.id)
        .unwrap_or_else(|| format!("unknown-{}", index))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Hydration never panics and always yields the full catalog in order
    #[test]
    fn hydrate_always_yields_catalog_shape(raw in ".{0,200}") {
        let hydrated = snapshot::hydrate(Some(&raw));
        let ids: Vec<_> = hydrated.iter().map(|a| a.id.clone()).collect();
        let expected: Vec<_> = catalog::default_achievements().into_iter().map(|a| a.id).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Unlocked entries never relock, completionist tracks the others, and
    /// the persisted snapshot always matches memory
    #[test]
    fn unlocks_are_monotonic(ops in visitor_ops_strategy(60)) {
        let t0 = Instant::now();
        let storage = Arc::new(MemoryStorage::new());
        let mut store = AchievementStore::load(storage.clone());
        let mut theme = ThemeState::default();
        let mut keys = KeyDispatcher::new();
        let mut unlocked_before = 0;

        for (i, op) in ops.into_iter().enumerate() {
            let now = t0 + Duration::from_millis(i as u64 * 200);
            let toasts = match op {
                VisitorOp::Unlock(index) => store.unlock(&catalog_id(index)),
                VisitorOp::JokeClick => store.record_joke_click(),
                VisitorOp::ElementClick(el) => store.record_element_click(&format!("el-{}", el)),
                VisitorOp::Shortcut(c) => keys
                    .handle(&KeyPress::Char(c), false, now)
                    .map(|s: Shortcut| s.apply(&mut theme, &mut store, now).toasts)
                    .unwrap_or_default(),
            };

            let unlocked_now = store.unlocked_count();
            prop_assert!(unlocked_now >= unlocked_before);
            prop_assert!(toasts.len() <= 3);
            unlocked_before = unlocked_now;

            let others_done = store
                .achievements()
                .iter()
                .filter(|a| a.id != COMPLETIONIST)
                .all(|a| a.unlocked);
            prop_assert_eq!(store.is_unlocked(COMPLETIONIST), others_done);
        }

        let reloaded = AchievementStore::load(storage);
        prop_assert_eq!(reloaded.unlocked_count(), store.unlocked_count());
    }

    /// The triple press fires at most once per three presses
    #[test]
    fn triple_press_fires_at_most_every_third(gaps in prop::collection::vec(0u64..1500, 1..40)) {
        let mut now = Instant::now();
        let mut keys = KeyDispatcher::new();
        let mut fired = 0;

        for gap in &gaps {
            now += Duration::from_millis(*gap);
            if keys.handle(&KeyPress::Char('p'), false, now).is_some() {
                fired += 1;
            }
            prop_assert!(keys.presses() < 3);
        }
        prop_assert!(fired <= gaps.len() / 3);
    }

    /// Remote payloads never produce an empty or blank deck
    #[test]
    fn parsed_decks_have_no_blank_jokes(items in prop::collection::vec(".{0,20}", 0..10)) {
        let body = serde_json::to_string(&items).unwrap();
        match JokeDeck::parse(&body) {
            Some(deck) => {
                prop_assert!(!deck.is_empty());
                prop_assert!(deck.jokes().iter().all(|j| !j.trim().is_empty()));
            }
            None => prop_assert!(items.iter().all(|j| j.trim().is_empty())),
        }
    }

    /// After any move sequence no particle older than the lifetime survives
    #[test]
    fn trail_never_keeps_old_particles(moves in prop::collection::vec((0.0f64..2000.0, 0.0f64..2000.0, 0u64..400), 1..80)) {
        let mut now = Instant::now();
        let mut trail = CursorTrail::new(true);

        for (x, y, gap) in moves {
            now += Duration::from_millis(gap);
            trail.push(x, y, now);
            prop_assert!(trail
                .particles()
                .iter()
                .all(|p| now.duration_since(p.born) < PARTICLE_LIFETIME));
        }
    }
}
