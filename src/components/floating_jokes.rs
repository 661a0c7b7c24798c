//! Clickable joke bubbles drifting over the page.
//!
//! Three bubbles at start, one more every [`SPAWN_INTERVAL`] while fewer
//! than five exist. A clicked bubble opens the joke, counts toward the
//! joke achievements and is replaced [`RESPAWN_DELAY`] later.

use devcomedy_core::jokes::{INITIAL_BUBBLES, RESPAWN_DELAY, SPAWN_INTERVAL};
use devcomedy_core::{FloatingJoke, JokeField, SoundCue};
use devcomedy_ui::Modal;
use dioxus::prelude::*;

use crate::context::{use_portfolio, Portfolio};

/// Joke shown in the modal and how many times it has been opened
#[derive(Debug, Clone, PartialEq)]
struct OpenJoke {
    text: String,
    count: u32,
}

#[component]
pub fn FloatingJokes() -> Element {
    let portfolio = use_portfolio();
    let field = use_signal(|| JokeField::new(1280.0, 860.0));
    let mut open: Signal<Option<OpenJoke>> = use_signal(|| None);

    use_future(move || async move {
        let mut field = field;
        if let Some((width, height)) = viewport_size().await {
            field.write().resize(width, height);
        }
        for _ in 0..INITIAL_BUBBLES {
            let deck = portfolio.deck.peek();
            field.write().spawn(&deck, &mut rand::rng());
        }
        loop {
            tokio::time::sleep(SPAWN_INTERVAL).await;
            let deck = portfolio.deck.peek();
            if let Some(id) = field.write().tick(&deck, &mut rand::rng()) {
                tracing::trace!(id, "Joke bubble spawned");
            }
        }
    });

    let bubbles: Vec<FloatingJoke> = field.read().bubbles().to_vec();

    rsx! {
        for bubble in bubbles {
            div {
                key: "{bubble.id}",
                class: "joke-bubble",
                style: "left: {bubble.x}px; top: {bubble.y}px;",
                title: "Click for a joke!",
                onclick: move |_| pop_bubble(portfolio, field, open, bubble.id),
                "{bubble.emoji}"
            }
        }

        if let Some(joke) = open() {
            Modal {
                title: "😂 Joke Time!".to_string(),
                onclose: move |_| open.set(None),
                p { "{joke.text}" }
                p { class: "text-muted",
                    if joke.count == 1 {
                        "First time seeing this one!"
                    } else {
                        "You've opened this joke {joke.count} times."
                    }
                }
            }
        }
    }
}

fn pop_bubble(
    portfolio: Portfolio,
    mut field: Signal<JokeField>,
    mut open: Signal<Option<OpenJoke>>,
    id: u64,
) {
    let Some(bubble) = field.write().pop(id) else {
        return;
    };

    let mut achievements = portfolio.achievements;
    let mut analytics = portfolio.analytics;
    let toasts = achievements.write().record_joke_click();
    let count = analytics.write().record(&bubble.joke);
    tracing::debug!(count, "Joke opened");

    portfolio.play(SoundCue::Click);
    portfolio.notify(toasts);
    open.set(Some(OpenJoke {
        text: bubble.joke,
        count,
    }));

    spawn(async move {
        tokio::time::sleep(RESPAWN_DELAY).await;
        let deck = portfolio.deck.peek();
        field.write().spawn(&deck, &mut rand::rng());
    });
}

/// Inner window size, if the webview answers.
async fn viewport_size() -> Option<(f64, f64)> {
    match document::eval("return [window.innerWidth, window.innerHeight];").await {
        Ok(value) => match serde_json::from_value::<(f64, f64)>(value) {
            Ok(size) => Some(size),
            Err(e) => {
                tracing::warn!("Unexpected viewport size: {}", e);
                None
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read viewport size: {:?}", e);
            None
        }
    }
}
