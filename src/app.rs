use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use devcomedy_core::{
    AchievementStore, CursorTrail, IntroSequence, JokeAnalytics, JokeDeck, KeyValueStore,
    MemoryStorage, SoundEmitter, Storage, ThemeState,
};
use devcomedy_ui::ToastStack;
use dioxus::prelude::*;

use crate::components::{CursorTrailLayer, FakeCrashIntro, FloatingJokes, ShortcutsOverlay};
use crate::context::Portfolio;
use crate::get_settings;
use crate::keyboard::use_global_shortcuts;
use crate::pages::{Achievements, Home};
use crate::theme::{palette_css, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - The single-page portfolio
/// - `/achievements` - Full achievement gallery
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/achievements")]
    Achievements {},
}

/// Open the redb file, or fall back to a throwaway in-memory store.
fn open_backend(data_dir: &Path) -> Arc<dyn KeyValueStore> {
    let path = data_dir.join("storage.redb");
    match Storage::new(&path) {
        Ok(storage) => {
            tracing::info!(path = ?path, "Storage opened");
            Arc::new(storage)
        }
        Err(e) => {
            tracing::warn!(path = ?path, "Failed to open storage, progress will not persist: {}", e);
            Arc::new(MemoryStorage::new())
        }
    }
}

/// Root application component.
///
/// Creates the stores, provides the portfolio context and renders the
/// page-wide layers (toasts, trail, bubbles, overlay) around the router.
#[component]
pub fn App() -> Element {
    let portfolio = use_hook(|| {
        let settings = get_settings();
        let backend = open_backend(&settings.data_dir);
        Portfolio::new(
            Signal::new(ThemeState::default()),
            Signal::new(AchievementStore::load(backend.clone())),
            Signal::new(SoundEmitter::new(settings.muted)),
            Signal::new(JokeDeck::fallback()),
            Signal::new(JokeAnalytics::load(backend)),
        )
    });
    use_context_provider(|| portfolio);

    let intro = use_signal(|| {
        if get_settings().skip_intro {
            IntroSequence::finished()
        } else {
            IntroSequence::new()
        }
    });
    let mut trail = use_signal(|| CursorTrail::new(get_settings().cursor_trail));
    let palette = use_hook(palette_css);

    use_global_shortcuts(portfolio, intro);

    // Remote jokes replace the built-in deck once fetched
    use_effect(move || {
        spawn(async move {
            let url = get_settings().jokes_url;
            let deck = JokeDeck::load(url.as_deref()).await;
            tracing::info!(jokes = deck.len(), "Joke deck ready");
            let mut slot = portfolio.deck;
            slot.set(deck);
        });
    });

    use_drop(move || portfolio.shutdown());

    let root_class = portfolio.theme.read().root_classes(Instant::now());
    let toasts = portfolio.toasts.read().active().to_vec();
    let intro_done = intro.read().is_done();

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {palette} }
        div {
            class: "{root_class}",
            onmousemove: move |e| {
                if !trail.peek().is_enabled() {
                    return;
                }
                let point = e.client_coordinates();
                trail.write().push(point.x, point.y, Instant::now());
            },
            if intro_done {
                Router::<Route> {}
                FloatingJokes {}
                ShortcutsOverlay {}
            } else {
                FakeCrashIntro { intro }
            }
            CursorTrailLayer { trail }
            ToastStack {
                toasts,
                ondismiss: move |id| portfolio.dismiss_toast(id),
            }
        }
    }
}
