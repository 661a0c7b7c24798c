//! Page-wide keyboard shortcuts.
//!
//! Key events are captured on the document by a small script and streamed
//! back over the eval channel, so shortcuts work no matter which element
//! has focus. The script also reports whether the target is a text field.

use std::time::Instant;

use devcomedy_core::{IntroSequence, KeyDispatcher, KeyPress};
use dioxus::prelude::*;
use serde::Deserialize;

use crate::context::Portfolio;

const LISTEN_SCRIPT: &str = r#"
if (window.__devcomedyKeys) {
    document.removeEventListener('keydown', window.__devcomedyKeys);
}
window.__devcomedyKeys = (e) => {
    const t = e.target;
    const typing = !!t && (t.tagName === 'INPUT' || t.tagName === 'TEXTAREA' || t.isContentEditable === true);
    dioxus.send({ key: e.key, typing: typing });
};
document.addEventListener('keydown', window.__devcomedyKeys);
"#;

const UNLISTEN_SCRIPT: &str = r#"
if (window.__devcomedyKeys) {
    document.removeEventListener('keydown', window.__devcomedyKeys);
    window.__devcomedyKeys = null;
}
"#;

#[derive(Debug, Deserialize)]
struct KeyMessage {
    key: String,
    typing: bool,
}

/// Install the document listener for the lifetime of the calling component.
///
/// While the intro is playing only Escape does anything (it skips).
pub fn use_global_shortcuts(portfolio: Portfolio, intro: Signal<IntroSequence>) {
    let dispatcher = use_signal(KeyDispatcher::new);
    let window_task: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        spawn(async move {
            let mut listener = document::eval(LISTEN_SCRIPT);
            tracing::debug!("Keyboard listener installed");
            loop {
                match listener.recv::<KeyMessage>().await {
                    Ok(message) => on_key(portfolio, intro, dispatcher, window_task, message),
                    Err(e) => {
                        tracing::warn!("Keyboard listener closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    // Signals may already be dropped at teardown
    use_drop(move || {
        let mut window_task = window_task;
        let mut dispatcher = dispatcher;
        if let Ok(mut slot) = window_task.try_write() {
            if let Some(task) = slot.take() {
                task.cancel();
            }
        }
        if let Ok(mut keys) = dispatcher.try_write() {
            keys.reset();
        }
        let _ = document::eval(UNLISTEN_SCRIPT);
        tracing::debug!("Keyboard listener removed");
    });
}

fn on_key(
    portfolio: Portfolio,
    mut intro: Signal<IntroSequence>,
    mut dispatcher: Signal<KeyDispatcher>,
    window_task: Signal<Option<Task>>,
    message: KeyMessage,
) {
    let key = KeyPress::from_key_name(&message.key);

    if !intro.peek().is_done() {
        if key == KeyPress::Escape {
            intro.write().skip();
        }
        return;
    }

    let now = Instant::now();
    let shortcut = dispatcher.write().handle(&key, message.typing, now);
    arm_window_expiry(dispatcher, window_task);

    if let Some(shortcut) = shortcut {
        portfolio.run_shortcut(shortcut);
    }
}

/// Replace the pending window timer with one for the current deadline.
fn arm_window_expiry(mut dispatcher: Signal<KeyDispatcher>, mut window_task: Signal<Option<Task>>) {
    if let Some(task) = window_task.write().take() {
        task.cancel();
    }
    let Some(until) = dispatcher.peek().pending_window() else {
        return;
    };
    let task = spawn(async move {
        tokio::time::sleep(until.saturating_duration_since(Instant::now())).await;
        if dispatcher.write().expire_window(Instant::now()) {
            tracing::trace!("Triple-press window expired");
        }
    });
    window_task.set(Some(task));
}
