use devcomedy_core::IntroSequence;
use dioxus::prelude::*;

/// Full-screen boot gag shown before the page. Escape (handled by the
/// global listener) or the skip button ends it early.
#[component]
pub fn FakeCrashIntro(intro: Signal<IntroSequence>) -> Element {
    use_future(move || async move {
        let mut intro = intro;
        loop {
            let delay = intro.peek().next_delay();
            let Some(delay) = delay else {
                break;
            };
            tokio::time::sleep(delay).await;
            intro.write().advance();
        }
        tracing::debug!("Intro finished");
    });

    let sequence = *intro.read();
    let Some(text) = sequence.text() else {
        return rsx! {};
    };
    let text_class = if sequence.step() == 1 {
        "crash-text error"
    } else {
        "crash-text"
    };

    rsx! {
        div { class: "crash-intro",
            p { class: "{text_class}", "{text}" }
            button {
                class: "crash-skip",
                onclick: move |_| {
                    let mut intro = intro;
                    intro.write().skip();
                },
                "Skip (ESC)"
            }
        }
    }
}
