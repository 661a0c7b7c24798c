//! Small inline tags: technology badges and keyboard keys.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    #[default]
    Outline,
    /// Filled, used for discovered skills
    Filled,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Outline => "badge badge-outline",
            BadgeVariant::Filled => "badge badge-filled",
        }
    }
}

/// A rounded tag
#[component]
pub fn Badge(
    children: Element,
    #[props(default)] variant: BadgeVariant,
    #[props(default)] class: Option<String>,
    #[props(default)] onclick: Option<EventHandler<()>>,
) -> Element {
    let full_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    };

    rsx! {
        span {
            class: "{full_class}",
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            {children}
        }
    }
}

/// A keyboard key, as in the shortcut overlay
#[component]
pub fn Kbd(key_label: String) -> Element {
    rsx! {
        kbd { class: "kbd", "{key_label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_variant_classes() {
        assert_eq!(BadgeVariant::default().class(), "badge badge-outline");
        assert_eq!(BadgeVariant::Filled.class(), "badge badge-filled");
    }
}
