use devcomedy_core::content::copy::{
    ABOUT_BIO, ABOUT_NAME, ABOUT_ROLE, ABOUT_TITLE, ABOUT_TRAITS, CORE_SKILLS_TITLE, TIMELINE_TITLE,
};
use devcomedy_core::content::portfolio::CORE_SKILLS;
use devcomedy_core::content::{HatRack, TIMELINE};
use devcomedy_core::SoundCue;
use dioxus::prelude::*;

use crate::context::use_portfolio;

#[component]
pub fn About() -> Element {
    let portfolio = use_portfolio();
    let mode = portfolio.mode();
    let mut hats = use_signal(HatRack::default);

    let hat = hats.read().current();

    rsx! {
        section { id: "about", class: "section",
            h2 { class: "section-title", "{ABOUT_TITLE.pick(mode)}" }

            div { class: "about-grid",
                div { class: "card",
                    div {
                        class: "avatar",
                        title: "Click to change hats",
                        onclick: move |_| {
                            let hat = hats.write().cycle();
                            tracing::trace!(hat, "Hat changed");
                            portfolio.play(SoundCue::Click);
                        },
                        span { class: "avatar-hat", "{hat}" }
                        "👨‍💻"
                    }
                    h3 { "{ABOUT_NAME.pick(mode)}" }
                    p { class: "text-muted", "{ABOUT_ROLE.pick(mode)}" }
                    ul { class: "traits",
                        for (i, item) in ABOUT_TRAITS.iter().enumerate() {
                            li { key: "{i}", "✓ {item.pick(mode)}" }
                        }
                    }
                    p { "{ABOUT_BIO.pick(mode)}" }
                }

                div { class: "card",
                    h3 { "{TIMELINE_TITLE.pick(mode)}" }
                    div { class: "timeline",
                        for entry in TIMELINE.iter() {
                            div { key: "{entry.year}", class: "timeline-entry",
                                span { class: "timeline-year", "{entry.year}" }
                                div {
                                    strong { "{entry.emoji} {entry.event}" }
                                    p { class: "text-muted", "{entry.description}" }
                                }
                            }
                        }
                    }

                    h3 { style: "margin-top: 2rem", "{CORE_SKILLS_TITLE.pick(mode)}" }
                    for (name, level) in CORE_SKILLS {
                        div { key: "{name}", class: "skill-bar",
                            div { class: "skill-bar-label",
                                span { "{name}" }
                                span { "{level}%" }
                            }
                            div { class: "skill-bar-track",
                                div { class: "skill-bar-fill", style: "width: {level}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}
