//! Input Field Components
//!
//! The global shortcut listener skips key presses whose target is an
//! `INPUT` or `TEXTAREA`, so these fields need no special key handling.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: name(),
///         oninput: move |s| name.set(s),
///         placeholder: "Your name".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = field_class("input-field", props.class.as_deref());

    rsx! {
        input {
            class: "{input_class}",
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            disabled: props.disabled,
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = field_class("input-field textarea", props.class.as_deref());

    rsx! {
        textarea {
            class: "{textarea_class}",
            rows: "{props.rows}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            disabled: props.disabled,
            value: "{props.value}",
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

fn field_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_classes_append() {
        assert_eq!(field_class("input-field", None), "input-field");
        assert_eq!(field_class("input-field", Some("")), "input-field");
        assert_eq!(
            field_class("input-field", Some("neon-border")),
            "input-field neon-border"
        );
    }
}
