use std::time::Instant;

use devcomedy_core::contact::{
    delivered_toast, incomplete_toast, launched_toast, send_failed_toast, DELIVERY_DELAY,
    WAVE_DURATION,
};
use devcomedy_core::content::copy::{
    CONTACT_SUBTITLE, CONTACT_TITLE, EMAIL_PLACEHOLDER, MESSAGE_PLACEHOLDER, NAME_PLACEHOLDER,
    SEND_LABEL,
};
use devcomedy_core::content::SOCIALS;
use devcomedy_core::{
    ContactField, ContactForm, EmailJsClient, EmailJsConfig, MessageEasterEgg, SendGate, SoundCue,
};
use devcomedy_ui::{Button, ButtonSize, ButtonVariant, Input, LinkButton, Modal, TextArea};
use dioxus::prelude::*;

use crate::context::{use_portfolio, Portfolio};
use crate::get_settings;

/// Contact form with the message easter eggs and the EmailJS send.
#[component]
pub fn Contact() -> Element {
    let portfolio = use_portfolio();
    let mode = portfolio.mode();

    let form = use_signal(ContactForm::new);
    let gate = use_signal(SendGate::default);
    let mut show_game = use_signal(|| false);
    let client = use_hook(|| {
        let config = EmailJsConfig::from_env()
            .map_err(|e| tracing::warn!("Contact form not configured: {}", e))
            .ok();
        let client = EmailJsClient::new(config);
        match get_settings().emailjs_endpoint {
            Some(endpoint) => {
                tracing::info!(%endpoint, "Using custom EmailJS endpoint");
                client.with_endpoint(endpoint)
            }
            None => client,
        }
    });
    let configured = client.is_configured();

    let sending = gate.read().is_sending();
    let waving = form.read().is_waving(Instant::now());
    let (name, email, message) = {
        let form = form.read();
        (
            form.value(ContactField::Name).to_string(),
            form.value(ContactField::Email).to_string(),
            form.value(ContactField::Message).to_string(),
        )
    };

    rsx! {
        section { id: "contact", class: "section",
            h2 { class: "section-title",
                "{CONTACT_TITLE.pick(mode)} "
                if waving {
                    span { class: "wave", "👋" }
                }
            }
            p { class: "section-subtitle", "{CONTACT_SUBTITLE.pick(mode)}" }

            form {
                class: "contact-form card",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit(portfolio, form, gate, client.clone());
                },
                Input {
                    value: name,
                    placeholder: NAME_PLACEHOLDER.pick(mode).to_string(),
                    disabled: sending,
                    oninput: move |value| update(portfolio, form, show_game, ContactField::Name, value),
                }
                Input {
                    value: email,
                    input_type: "email".to_string(),
                    placeholder: EMAIL_PLACEHOLDER.pick(mode).to_string(),
                    disabled: sending,
                    oninput: move |value| update(portfolio, form, show_game, ContactField::Email, value),
                }
                TextArea {
                    value: message,
                    placeholder: MESSAGE_PLACEHOLDER.pick(mode).to_string(),
                    disabled: sending,
                    oninput: move |value| update(portfolio, form, show_game, ContactField::Message, value),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Lg,
                    theme: mode,
                    button_type: "submit".to_string(),
                    disabled: sending,
                    if sending { "🚀 Launching..." } else { "{SEND_LABEL.pick(mode)}" }
                }
                if !configured {
                    p { class: "text-muted",
                        "✉️ Sending is offline right now (EmailJS keys not set). The socials below still work!"
                    }
                }
            }

            div { class: "socials",
                for social in SOCIALS {
                    LinkButton {
                        key: "{social.name}",
                        href: social.url.to_string(),
                        variant: ButtonVariant::Ghost,
                        new_tab: true,
                        "{social.icon} {social.name}"
                    }
                }
            }

            if show_game() {
                Modal {
                    title: "🎮 Mini-Game Placeholder".to_string(),
                    onclose: move |_| show_game.set(false),
                    p { "A fun Flappy Bird-like game would go here! 🐦" }
                    p { class: "text-muted", "For now, imagine dodging bugs while collecting coffee cups." }
                }
            }
        }
    }
}

fn update(
    portfolio: Portfolio,
    mut form: Signal<ContactForm>,
    mut show_game: Signal<bool>,
    field: ContactField,
    value: String,
) {
    let eggs = form.write().set(field, value, Instant::now());
    let mut toasts = Vec::with_capacity(eggs.len());

    for egg in eggs {
        tracing::debug!(?egg, "Message easter egg");
        toasts.push(egg.toast());
        match egg {
            MessageEasterEgg::Wave => {
                let generation = form.peek().wave_generation();
                spawn(async move {
                    tokio::time::sleep(WAVE_DURATION).await;
                    form.write().end_wave(generation, Instant::now());
                });
            }
            MessageEasterEgg::MiniGame => show_game.set(true),
        }
    }
    portfolio.notify(toasts);
}

fn submit(
    portfolio: Portfolio,
    mut form: Signal<ContactForm>,
    mut gate: Signal<SendGate>,
    client: EmailJsClient,
) {
    if let Err(e) = form.peek().validate() {
        tracing::debug!("Contact form rejected: {}", e);
        portfolio.play(SoundCue::Error);
        portfolio.notify(vec![incomplete_toast()]);
        return;
    }
    if let Err(e) = gate.write().begin() {
        tracing::debug!("{}", e);
        return;
    }

    let params = form.peek().params().clone();
    portfolio.play(SoundCue::Launch);

    spawn(async move {
        match client.send(&params).await {
            Ok(()) => {
                portfolio.notify(vec![launched_toast()]);
                tokio::time::sleep(DELIVERY_DELAY).await;
                form.write().clear();
                portfolio.notify(vec![delivered_toast()]);
            }
            Err(e) => {
                tracing::error!("Failed to send message: {}", e);
                portfolio.play(SoundCue::Error);
                portfolio.notify(vec![send_failed_toast()]);
            }
        }
        gate.write().finish();
    });
}
