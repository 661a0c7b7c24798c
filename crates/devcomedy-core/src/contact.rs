//! Contact form: field state, message easter eggs, send gate and the
//! EmailJS transport.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{PortfolioError, PortfolioResult};
use crate::notify::Toast;
use crate::theme::Pulse;

/// EmailJS REST endpoint
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// How long the send button waves after "hello world"
pub const WAVE_DURATION: Duration = Duration::from_secs(2);

/// Pause between "launched" and "delivered" after a successful send
pub const DELIVERY_DELAY: Duration = Duration::from_secs(3);

const SEND_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

/// Phrases in the message box that trigger a gag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageEasterEgg {
    /// "hello world": the send button waves for two seconds
    Wave,
    /// "i'm bored": the mini-game placeholder opens
    MiniGame,
}

impl MessageEasterEgg {
    /// Eggs present in `message`, matched case-insensitively.
    pub fn detect(message: &str) -> Vec<Self> {
        let lower = message.to_lowercase();
        let mut eggs = Vec::new();
        if lower.contains("hello world") {
            eggs.push(MessageEasterEgg::Wave);
        }
        if lower.contains("i'm bored") {
            eggs.push(MessageEasterEgg::MiniGame);
        }
        eggs
    }

    pub fn toast(&self) -> Toast {
        match self {
            MessageEasterEgg::Wave => Toast::info(
                "👋 Hello World detected!",
                "Classic! *waves back enthusiastically*",
                3000,
            ),
            MessageEasterEgg::MiniGame => {
                Toast::info("🎮 Boredom Detected!", "Launching mini-game! 🚀", 3000)
            }
        }
    }
}

pub fn incomplete_toast() -> Toast {
    Toast::info(
        "Oops! 🤔",
        "Please fill in all fields before launching the rocket!",
        3000,
    )
}

pub fn launched_toast() -> Toast {
    Toast::info(
        "🚀 Message Launched!",
        "Your message is flying through cyberspace!",
        4000,
    )
}

pub fn delivered_toast() -> Toast {
    Toast::info(
        "📬 Message Delivered!",
        "Thanks for reaching out! I'll get back to you soon.",
        4000,
    )
}

pub fn send_failed_toast() -> Toast {
    Toast::failure("Failed to send your message. Please try again later.")
}

// ═══════════════════════════════════════════════════════════════════════════
// Form
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    params: TemplateParams,
    wave: Pulse,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            params: TemplateParams::default(),
            wave: Pulse::new(WAVE_DURATION),
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.params.name,
            ContactField::Email => &self.params.email,
            ContactField::Message => &self.params.message,
        }
    }

    /// Update a field; returns the easter eggs that fired.
    ///
    /// Only the message box is scanned. The wave does not re-fire while
    /// the previous wave is still running.
    pub fn set(&mut self, field: ContactField, value: String, now: Instant) -> Vec<MessageEasterEgg> {
        let eggs = match field {
            ContactField::Message => MessageEasterEgg::detect(&value),
            _ => Vec::new(),
        };

        match field {
            ContactField::Name => self.params.name = value,
            ContactField::Email => self.params.email = value,
            ContactField::Message => self.params.message = value,
        }

        eggs.into_iter()
            .filter(|egg| match egg {
                MessageEasterEgg::Wave if self.wave.is_active(now) => false,
                MessageEasterEgg::Wave => {
                    self.wave.trigger(now);
                    true
                }
                MessageEasterEgg::MiniGame => true,
            })
            .collect()
    }

    pub fn is_waving(&self, now: Instant) -> bool {
        self.wave.is_active(now)
    }

    /// Timer callback after [`WAVE_DURATION`].
    pub fn end_wave(&mut self, generation: u64, now: Instant) -> bool {
        self.wave.expire(generation, now)
    }

    /// Generation of the running wave, for its expiry callback.
    pub fn wave_generation(&self) -> u64 {
        self.wave.generation()
    }

    /// All three fields must be non-blank.
    pub fn validate(&self) -> PortfolioResult<()> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.value(field).trim().is_empty() {
                return Err(PortfolioError::IncompleteForm(field.as_str()));
            }
        }
        Ok(())
    }

    pub fn params(&self) -> &TemplateParams {
        &self.params
    }

    pub fn clear(&mut self) {
        self.params = TemplateParams::default();
    }
}

/// At most one send in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendGate {
    sending: bool,
}

impl SendGate {
    pub fn begin(&mut self) -> PortfolioResult<()> {
        if self.sending {
            return Err(PortfolioError::SendInProgress);
        }
        self.sending = true;
        Ok(())
    }

    /// Clear the gate after success or failure.
    pub fn finish(&mut self) {
        self.sending = false;
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Transport
// ═══════════════════════════════════════════════════════════════════════════

/// EmailJS identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    /// Read `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and
    /// `EMAILJS_PUBLIC_KEY`.
    pub fn from_env() -> PortfolioResult<Self> {
        Ok(Self {
            service_id: env_var("EMAILJS_SERVICE_ID")?,
            template_id: env_var("EMAILJS_TEMPLATE_ID")?,
            public_key: env_var("EMAILJS_PUBLIC_KEY")?,
        })
    }
}

fn env_var(name: &'static str) -> PortfolioResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PortfolioError::MissingConfig(name)),
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Sends contact messages through EmailJS
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    config: Option<EmailJsConfig>,
    endpoint: String,
}

impl EmailJsClient {
    /// A client without configuration fails every send with
    /// [`PortfolioError::MissingConfig`].
    pub fn new(config: Option<EmailJsConfig>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            config,
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }

    /// Send to `endpoint` instead of the public EmailJS API.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// JSON body for `params`.
    pub fn payload(&self, params: &TemplateParams) -> PortfolioResult<serde_json::Value> {
        let config = self
            .config
            .as_ref()
            .ok_or(PortfolioError::MissingConfig("EMAILJS_SERVICE_ID"))?;
        let body = serde_json::to_value(SendRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
        })?;
        Ok(body)
    }

    /// One attempt, no retry.
    pub async fn send(&self, params: &TemplateParams) -> PortfolioResult<()> {
        let body = self.payload(params)?;
        self.http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        tracing::info!("Contact message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let t0 = Instant::now();
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada".into(), t0);
        form.set(ContactField::Email, "ada@example.com".into(), t0);
        form.set(ContactField::Message, "Hi there".into(), t0);
        form
    }

    #[test]
    fn validate_reports_first_blank_field() {
        let mut form = filled();
        assert!(form.validate().is_ok());

        form.set(ContactField::Email, "   ".into(), Instant::now());
        assert!(matches!(form.validate(), Err(PortfolioError::IncompleteForm("email"))));

        form.clear();
        assert!(matches!(form.validate(), Err(PortfolioError::IncompleteForm("name"))));
    }

    #[test]
    fn eggs_match_case_insensitively() {
        assert_eq!(
            MessageEasterEgg::detect("HeLLo World, I'm Bored"),
            vec![MessageEasterEgg::Wave, MessageEasterEgg::MiniGame]
        );
        assert!(MessageEasterEgg::detect("hello, world").is_empty());
    }

    #[test]
    fn wave_does_not_refire_while_waving() {
        let t0 = Instant::now();
        let mut form = ContactForm::new();

        let eggs = form.set(ContactField::Message, "hello world".into(), t0);
        assert_eq!(eggs, vec![MessageEasterEgg::Wave]);
        let gen = form.wave_generation();

        let later = t0 + Duration::from_millis(500);
        assert!(form.set(ContactField::Message, "hello world!".into(), later).is_empty());
        assert!(form.is_waving(later));

        let done = t0 + WAVE_DURATION;
        assert!(form.end_wave(gen, done));
        assert!(!form.is_waving(done));
        assert_eq!(
            form.set(ContactField::Message, "hello world!!".into(), done),
            vec![MessageEasterEgg::Wave]
        );
    }

    #[test]
    fn other_fields_are_not_scanned() {
        let mut form = ContactForm::new();
        assert!(form.set(ContactField::Name, "i'm bored".into(), Instant::now()).is_empty());
    }

    #[test]
    fn gate_allows_one_send() {
        let mut gate = SendGate::default();
        assert!(gate.begin().is_ok());
        assert!(matches!(gate.begin(), Err(PortfolioError::SendInProgress)));
        gate.finish();
        assert!(!gate.is_sending());
        assert!(gate.begin().is_ok());
    }

    #[test]
    fn payload_uses_emailjs_field_names() {
        let client = EmailJsClient::new(Some(EmailJsConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pk".into(),
        }));
        let body = client.payload(filled().params()).unwrap();

        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["template_id"], "tpl");
        assert_eq!(body["user_id"], "pk");
        assert_eq!(body["template_params"]["email"], "ada@example.com");
    }

    /// One-shot HTTP server on localhost answering with `status`.
    /// Yields the request body it received.
    fn relay(status: &'static str) -> (String, std::thread::JoinHandle<String>) {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api/v1.0/email/send", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).unwrap();
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                let Some(split) = text.find("\r\n\r\n") else {
                    assert!(n > 0, "connection closed before headers");
                    continue;
                };
                let length = text[..split]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if raw.len() >= split + 4 + length {
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
                        status
                    );
                    stream.write_all(response.as_bytes()).unwrap();
                    return text[split + 4..].to_string();
                }
                assert!(n > 0, "connection closed mid-body");
            }
        });
        (url, handle)
    }

    fn configured() -> EmailJsClient {
        EmailJsClient::new(Some(EmailJsConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pk".into(),
        }))
    }

    #[tokio::test]
    async fn send_posts_payload_to_endpoint() {
        let (url, server) = relay("200 OK");
        let client = configured().with_endpoint(url);
        assert!(client.is_configured());

        client.send(filled().params()).await.unwrap();

        let body: serde_json::Value = serde_json::from_str(&server.join().unwrap()).unwrap();
        assert_eq!(body["service_id"], "svc");
        assert_eq!(body["template_params"]["name"], "Ada");
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let (url, server) = relay("500 Internal Server Error");
        let client = configured().with_endpoint(url);

        let err = client.send(filled().params()).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Http(_)));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn unconfigured_client_fails_without_network() {
        let client = EmailJsClient::new(None);
        assert!(!client.is_configured());
        let err = client.send(filled().params()).await.unwrap_err();
        assert!(matches!(err, PortfolioError::MissingConfig(_)));
    }
}
