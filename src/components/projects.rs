use devcomedy_core::content::copy::{
    PROJECTS_MORE, PROJECTS_MORE_BUTTON, PROJECTS_SUBTITLE, PROJECTS_TITLE,
};
use devcomedy_core::content::{RunawayButton, PROJECTS, SOCIALS};
use devcomedy_core::{SoundCue, ThemeMode};
use devcomedy_ui::{Badge, Button, ButtonSize, ButtonVariant, LinkButton};
use dioxus::prelude::*;

use crate::context::use_portfolio;

#[component]
pub fn Projects() -> Element {
    let portfolio = use_portfolio();
    let mode = portfolio.mode();
    let mut runaway = use_signal(RunawayButton::default);
    let mut achievements = portfolio.achievements;

    let (dx, dy) = runaway.read().offset();
    let runaway_label = runaway.read().label();
    let github = SOCIALS[0].url;

    rsx! {
        section { id: "projects", class: "section",
            h2 { class: "section-title", "{PROJECTS_TITLE.pick(mode)}" }
            p { class: "section-subtitle", "{PROJECTS_SUBTITLE.pick(mode)}" }

            div { class: "grid",
                for index in 0..PROJECTS.len() {
                    ProjectCard { key: "{index}", index, mode }
                }
            }

            div { class: "section-subtitle", style: "margin-top: 3rem",
                p { "{PROJECTS_MORE.pick(mode)}" }
                div { class: "hero-actions", style: "margin-top: 1rem",
                    LinkButton {
                        href: github.to_string(),
                        variant: ButtonVariant::Outline,
                        new_tab: true,
                        "{PROJECTS_MORE_BUTTON.pick(mode)}"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Md,
                        theme: mode,
                        style: "transform: translate({dx}px, {dy}px); transition: transform 200ms ease;",
                        onmouseenter: move |_| {
                            if let Some((x, y)) = runaway.write().approach(&mut rand::rng()) {
                                tracing::trace!(x, y, "Runaway button dodged");
                            }
                        },
                        onclick: move |_| {
                            let toasts = runaway.write().catch(&mut achievements.write());
                            if !toasts.is_empty() {
                                portfolio.play(SoundCue::Click);
                            }
                            portfolio.notify(toasts);
                        },
                        "{runaway_label}"
                    }
                }
            }
        }
    }
}

/// A card that flips to the project's joke when clicked.
#[component]
fn ProjectCard(index: usize, mode: ThemeMode) -> Element {
    let portfolio = use_portfolio();
    let mut flipped = use_signal(|| false);
    let project = PROJECTS[index];

    let class = if flipped() { "flip-card flipped" } else { "flip-card" };

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| {
                portfolio.play(SoundCue::Click);
                flipped.toggle();
            },
            div { class: "flip-card-inner",
                div { class: "card flip-card-front",
                    span { class: "project-emoji", "{project.emoji}" }
                    h3 { class: "project-title", "{project.title.pick(mode)}" }
                    p { class: "text-muted", "{project.description.pick(mode)}" }
                    div { class: "project-tech",
                        for tech in project.technologies.iter() {
                            Badge { key: "{tech}", "{tech}" }
                        }
                    }
                    div { onclick: move |e| e.stop_propagation(),
                        LinkButton {
                            href: project.github_url.to_string(),
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            new_tab: true,
                            "🐙 View Code"
                        }
                    }
                }
                div { class: "card flip-card-back",
                    span { class: "project-emoji", "😂" }
                    p { "{project.joke}" }
                    p { class: "text-muted", "Click to flip back" }
                }
            }
        }
    }
}
