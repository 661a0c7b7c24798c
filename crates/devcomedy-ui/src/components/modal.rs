//! Centered dialog over a dimmed backdrop.

use dioxus::prelude::*;

use super::CloseButton;

/// Clicking the backdrop closes the modal; clicks inside the panel do not.
///
/// # Example
///
/// ```rust,ignore
/// if show_game() {
///     Modal { onclose: move |_| show_game.set(false), title: "Mini-Game Placeholder".to_string(),
///         p { "A fun Flappy Bird-like game would go here! 🐦" }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    onclose: EventHandler<()>,
    children: Element,
    #[props(default)] title: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let panel_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("modal-panel {}", extra),
        _ => "modal-panel".to_string(),
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| onclose.call(()),
            div {
                class: "{panel_class}",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    if let Some(title) = &title {
                        h3 { class: "modal-title", "{title}" }
                    }
                    CloseButton { onclick: move |_| onclose.call(()) }
                }
                {children}
            }
        }
    }
}
