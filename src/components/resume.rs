use devcomedy_core::content::copy::{RESUME_BLURB, RESUME_PATH, RESUME_TITLE};
use devcomedy_ui::{ButtonSize, ButtonVariant, LinkButton};
use dioxus::prelude::*;

use crate::context::use_portfolio;

#[component]
pub fn Resume() -> Element {
    let mode = use_portfolio().mode();

    rsx! {
        section { id: "resume", class: "section",
            h2 { class: "section-title", "{RESUME_TITLE.pick(mode)}" }
            p { class: "section-subtitle", "{RESUME_BLURB}" }
            div { class: "resume-actions",
                LinkButton {
                    href: RESUME_PATH.to_string(),
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Lg,
                    download: true,
                    "📄 Download Resume"
                }
                LinkButton {
                    href: RESUME_PATH.to_string(),
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Lg,
                    new_tab: true,
                    "👀 View Online"
                }
            }
        }
    }
}
