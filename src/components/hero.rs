use devcomedy_core::content::copy::{HERO_EMOJIS, HERO_EXPLORE, HERO_FOOTNOTE, HERO_TAGLINE, HERO_TITLE};
use devcomedy_core::content::gags::{DONT_CLICK_ELEMENT, TYPE_INTERVAL};
use devcomedy_core::content::{DontClickButton, Typewriter};
use devcomedy_core::SoundCue;
use devcomedy_ui::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

use super::scroll_to_section;
use crate::context::use_portfolio;

/// Landing section with the typewriter headline and the "Don't Click Me!"
/// button.
#[component]
pub fn Hero() -> Element {
    let portfolio = use_portfolio();
    let mode = portfolio.mode();

    let mut typewriter = use_signal(|| Typewriter::new(*HERO_TITLE.pick(mode)));
    let mut dont_click = use_signal(DontClickButton::default);
    let mut achievements = portfolio.achievements;

    // Restart typing whenever the mode changes
    use_effect(move || {
        let mode = portfolio.theme.read().mode();
        let text = *HERO_TITLE.pick(mode);
        if typewriter.peek().text() != text {
            typewriter.write().restart(text);
        }
    });

    use_future(move || async move {
        loop {
            tokio::time::sleep(TYPE_INTERVAL).await;
            if !typewriter.peek().is_done() {
                typewriter.write().tick();
            }
        }
    });

    let on_dont_click = move |_| {
        let mut toasts = vec![dont_click.write().press()];
        toasts.extend(achievements.write().record_element_click(DONT_CLICK_ELEMENT));
        portfolio.play(SoundCue::Click);
        portfolio.notify(toasts);
    };

    let headline = typewriter.read().visible();

    rsx! {
        section { id: "hero", class: "hero",
            h1 { class: "hero-title",
                "{headline}"
                span { class: "typewriter-caret", "\u{00A0}" }
            }
            p { class: "hero-tagline", "{HERO_TAGLINE.pick(mode)}" }

            div { class: "hero-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Lg,
                    theme: mode,
                    onclick: move |_| scroll_to_section("projects"),
                    "{HERO_EXPLORE.pick(mode)}"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    size: ButtonSize::Lg,
                    theme: mode,
                    onclick: on_dont_click,
                    "Don't Click Me! 🚫"
                }
            }

            div { class: "hero-emojis",
                for (i, emoji) in HERO_EMOJIS.iter().enumerate() {
                    span { key: "{i}", style: "animation-delay: {i * 200}ms", "{emoji}" }
                }
            }
            p { class: "hero-footnote", "{HERO_FOOTNOTE}" }
        }
    }
}
