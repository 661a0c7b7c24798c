use std::time::Instant;

use devcomedy_core::achievements::catalog::EASTER_EGG_HUNTER;
use devcomedy_core::content::copy::{CONFETTI, SKILLS_SUBTITLE, SKILLS_TITLE};
use devcomedy_core::content::gags::{secret_egg_toast, CONFETTI_DURATION, SKILLS_TO_DISCOVER};
use devcomedy_core::content::{SkillBoard, SKILLS};
use devcomedy_core::SoundCue;
use devcomedy_ui::{Badge, BadgeVariant};
use dioxus::prelude::*;

use crate::context::{use_portfolio, Portfolio};

const CONFETTI_PIECES: usize = 24;

/// Skill tiles. Clicking one tells its joke; five distinct skills earn
/// "Skill Explorer" and a confetti burst.
#[component]
pub fn Skills() -> Element {
    let portfolio = use_portfolio();
    let mode = portfolio.mode();
    let board = use_signal(SkillBoard::new);
    let mut achievements = portfolio.achievements;

    let discovered = board.read().discovered();
    let confetti = board.read().has_confetti(Instant::now());

    rsx! {
        section { id: "skills", class: "section",
            h2 { class: "section-title", "{SKILLS_TITLE.pick(mode)}" }
            p { class: "section-subtitle", "{SKILLS_SUBTITLE.pick(mode)}" }

            div { class: "grid",
                for index in 0..SKILLS.len() {
                    SkillTile { key: "{index}", index, board }
                }
            }

            p { class: "section-subtitle", style: "margin-top: 2rem",
                "Skills discovered: {discovered.min(SKILLS_TO_DISCOVER)}/{SKILLS_TO_DISCOVER} "
                span {
                    class: "secret-egg",
                    title: "🤫",
                    onclick: move |_| {
                        let mut toasts = vec![secret_egg_toast()];
                        toasts.extend(achievements.write().unlock(EASTER_EGG_HUNTER));
                        portfolio.notify(toasts);
                    },
                    "🥚"
                }
            }

            if confetti {
                div { class: "confetti",
                    for i in 0..CONFETTI_PIECES {
                        span {
                            key: "{i}",
                            class: "confetti-piece",
                            style: "left: {(i * 37) % 100}%; animation-delay: {(i % 6) * 120}ms;",
                            "{CONFETTI[i % CONFETTI.len()]}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillTile(index: usize, board: Signal<SkillBoard>) -> Element {
    let portfolio = use_portfolio();
    let skill = SKILLS[index];
    let found = board.read().is_discovered(skill.name);
    let class = if found { "card skill-tile discovered" } else { "card skill-tile" };

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| discover(portfolio, board, index),
            div { class: "skill-icon", "{skill.icon}" }
            Badge {
                variant: if found { BadgeVariant::Filled } else { BadgeVariant::Outline },
                "{skill.name}"
            }
            if found {
                p { class: "skill-joke", "{skill.joke}" }
            }
        }
    }
}

fn discover(portfolio: Portfolio, mut board: Signal<SkillBoard>, index: usize) {
    let mut achievements = portfolio.achievements;
    let now = Instant::now();
    let discovery = board
        .write()
        .discover(&SKILLS[index], &mut achievements.write(), now);

    if let Some(generation) = discovery.confetti {
        spawn(async move {
            tokio::time::sleep(CONFETTI_DURATION).await;
            board.write().end_confetti(generation, Instant::now());
        });
    }
    portfolio.play(SoundCue::Click);
    portfolio.notify(discovery.toasts);
}
