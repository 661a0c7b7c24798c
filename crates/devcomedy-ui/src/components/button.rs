//! Button Components
//!
//! - Primary: filled accent button
//! - Outline: bordered, transparent background
//! - Secondary: muted fill, used on flipped project cards
//! - Ghost: navbar links
//! - Destructive: the "Don't Click Me!" button

use devcomedy_core::ThemeMode;
use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Secondary,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Destructive => "btn-destructive",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

/// Mode-specific decoration: neon borders in hacker mode, a wobble in
/// punny mode.
pub fn theme_flair(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "",
        ThemeMode::NeonHacker => "neon-border",
        ThemeMode::PunnyMode => "wobble",
    }
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Adds [`theme_flair`] for this mode
    #[props(default)]
    pub theme: Option<ThemeMode>,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Pointer entered the button
    #[props(default)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Inline style (used for positional gags)
    #[props(default)]
    pub style: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         size: ButtonSize::Lg,
///         theme: mode,
///         onclick: move |_| explore(),
///         "Explore My Work"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let flair = props.theme.map(theme_flair).unwrap_or("");
    let full_class = join_classes(&[
        "btn",
        props.variant.class(),
        props.size.class(),
        flair,
        props.class.as_deref().unwrap_or(""),
    ]);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            style: props.style.as_deref().unwrap_or(""),
            disabled: props.disabled,
            onclick: move |e| {
                if let Some(handler) = &props.onclick {
                    handler.call(e);
                }
            },
            onmouseenter: move |e| {
                if let Some(handler) = &props.onmouseenter {
                    handler.call(e);
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, mute, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes(&["icon-btn", props.class.as_deref().unwrap_or("")]);

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            title: "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

/// External link styled as a button
#[component]
pub fn LinkButton(
    href: String,
    children: Element,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default = false)] download: bool,
    #[props(default = false)] new_tab: bool,
) -> Element {
    let full_class = join_classes(&["btn", variant.class(), size.class()]);

    rsx! {
        a {
            class: "{full_class}",
            href: "{href}",
            download: download.then_some("resume.pdf"),
            target: new_tab.then_some("_blank"),
            rel: new_tab.then_some("noopener noreferrer"),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Outline.class(), "btn-outline");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Destructive.class(), "btn-destructive");
    }

    #[test]
    fn defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
    }

    #[test]
    fn flair_per_theme() {
        assert_eq!(theme_flair(ThemeMode::Light), "");
        assert_eq!(theme_flair(ThemeMode::NeonHacker), "neon-border");
        assert_eq!(theme_flair(ThemeMode::PunnyMode), "wobble");
    }

    #[test]
    fn empty_classes_are_skipped() {
        assert_eq!(join_classes(&["btn", "", "btn-lg", ""]), "btn btn-lg");
    }
}
