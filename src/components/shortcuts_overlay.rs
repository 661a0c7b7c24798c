use devcomedy_core::Shortcut;
use devcomedy_ui::{Kbd, Modal};
use dioxus::prelude::*;

use crate::context::use_portfolio;

const SHORTCUTS: [(&str, &str); 5] = [
    ("P P P", "Toggle punny mode"),
    ("F", "Grayscale for 3 seconds"),
    ("L", "Party mode for 10 seconds"),
    ("?", "Show this list"),
    ("Esc", "Close this list"),
];

/// Help overlay opened with `?`.
#[component]
pub fn ShortcutsOverlay() -> Element {
    let portfolio = use_portfolio();

    if !(portfolio.show_shortcuts)() {
        return rsx! {};
    }

    rsx! {
        Modal {
            title: "⌨️ Keyboard Shortcuts".to_string(),
            onclose: move |_| portfolio.run_shortcut(Shortcut::HideHelp),
            ul { class: "shortcut-list",
                for (keys, description) in SHORTCUTS {
                    li { key: "{keys}", class: "shortcut-row",
                        Kbd { key_label: keys.to_string() }
                        span { "{description}" }
                    }
                }
            }
        }
    }
}
