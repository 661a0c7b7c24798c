//! Toast stack in the bottom-right corner.

use devcomedy_core::{ActiveToast, ToastKind};
use dioxus::prelude::*;

use super::CloseButton;

/// CSS class for a toast of this kind
pub fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "toast toast-info",
        ToastKind::Achievement => "toast toast-achievement",
        ToastKind::Warning => "toast toast-warning",
        ToastKind::Alert => "toast toast-alert",
    }
}

/// Renders every active toast, oldest at the top.
#[component]
pub fn ToastStack(toasts: Vec<ActiveToast>, ondismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "toast-stack", role: "status", "aria-live": "polite",
            for (id, active) in toasts.into_iter().map(|t| (t.id, t)) {
                div {
                    key: "{id}",
                    class: toast_class(active.toast.kind),
                    div { class: "toast-body",
                        div { class: "toast-title", "{active.toast.title}" }
                        div { class: "toast-description", "{active.toast.description}" }
                    }
                    CloseButton { onclick: move |_| ondismiss.call(id) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_have_distinct_classes() {
        let classes = [
            toast_class(ToastKind::Info),
            toast_class(ToastKind::Achievement),
            toast_class(ToastKind::Warning),
            toast_class(ToastKind::Alert),
        ];
        for (i, a) in classes.iter().enumerate() {
            assert!(a.starts_with("toast "));
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
