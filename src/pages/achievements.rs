//! Achievement gallery - every catalog entry with its unlock state.

use devcomedy_core::Achievement;
use devcomedy_ui::{AchievementCard, Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::Navbar;
use crate::context::use_portfolio;

#[component]
pub fn Achievements() -> Element {
    let portfolio = use_portfolio();
    let navigator = use_navigator();
    let mode = portfolio.mode();

    let (entries, unlocked, total, persistent) = {
        let store = portfolio.achievements.read();
        let entries: Vec<Achievement> = store.achievements().to_vec();
        (entries, store.unlocked_count(), store.total(), store.is_persistent())
    };

    let (favourite, laughs) = {
        let analytics = portfolio.analytics.read();
        let favourite = analytics
            .favourite()
            .map(|(joke, count)| (joke.to_string(), count));
        (favourite, analytics.total())
    };

    rsx! {
        Navbar {}
        main { class: "section",
            h2 { class: "section-title", "🏆 Achievements" }
            p { class: "section-subtitle", "{unlocked} of {total} unlocked" }

            div { class: "grid",
                for achievement in entries {
                    AchievementCard { key: "{achievement.id}", achievement }
                }
            }

            div { class: "analytics",
                if laughs == 0 {
                    p { "No jokes opened yet. Try clicking a floating bubble!" }
                } else {
                    p { "Jokes opened: {laughs}" }
                    if let Some((joke, count)) = favourite {
                        p { "Favourite ({count}×): \"{joke}\"" }
                    }
                }
                if !persistent {
                    p { "⚠️ Progress is not being saved this session." }
                }
            }

            div { class: "hero-actions", style: "margin-top: 2rem",
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Md,
                    theme: mode,
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "← Back to the show"
                }
            }
        }
    }
}
