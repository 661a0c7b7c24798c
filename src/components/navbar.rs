use devcomedy_core::content::copy::{BRAND, NAV_SECTIONS};
use devcomedy_core::SoundCue;
use devcomedy_ui::{AchievementProgress, Button, ButtonSize, ButtonVariant, IconButton};
use dioxus::prelude::*;

use super::scroll_to_section;
use crate::app::Route;
use crate::context::use_portfolio;

/// Sticky top bar: brand, section links, theme cycle, mute, trophies.
///
/// Off the home route the brand and section links navigate back home.
#[component]
pub fn Navbar() -> Element {
    let portfolio = use_portfolio();
    let mode = portfolio.mode();
    let nav = use_navigator();
    let on_home = matches!(use_route::<Route>(), Route::Home {});

    let (unlocked, total) = {
        let store = portfolio.achievements.read();
        (store.unlocked_count(), store.total())
    };
    let muted = portfolio.sound.read().is_muted();
    let mut sound = portfolio.sound;
    let mut show_shortcuts = portfolio.show_shortcuts;

    rsx! {
        nav { class: "navbar",
            div {
                class: "navbar-brand",
                onclick: move |_| {
                    if on_home {
                        scroll_to_section("hero");
                    } else {
                        nav.push(Route::Home {});
                    }
                },
                "{BRAND.pick(mode)}"
            }

            div { class: "navbar-links",
                for (id, label) in NAV_SECTIONS {
                    button {
                        key: "{id}",
                        class: "nav-link",
                        onclick: move |_| {
                            if on_home {
                                scroll_to_section(id);
                            } else {
                                nav.push(Route::Home {});
                            }
                        },
                        "{label.pick(mode)}"
                    }
                }
            }

            div { class: "navbar-actions",
                AchievementProgress {
                    unlocked,
                    total,
                    onclick: move |_| {
                        nav.push(Route::Achievements {});
                    },
                }
                IconButton {
                    aria_label: "Keyboard shortcuts".to_string(),
                    onclick: move |_| show_shortcuts.set(true),
                    "⌨️"
                }
                IconButton {
                    aria_label: if muted { "Unmute".to_string() } else { "Mute".to_string() },
                    onclick: move |_| {
                        let muted = sound.write().toggle_mute();
                        tracing::debug!(muted, "Sound toggled");
                    },
                    if muted { "🔇" } else { "🔊" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Sm,
                    theme: mode,
                    onclick: move |_| {
                        portfolio.play(SoundCue::Click);
                        portfolio.cycle_theme();
                    },
                    "🎨 {mode.label()}"
                }
            }
        }
    }
}
