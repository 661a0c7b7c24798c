#![allow(non_snake_case)]

mod app;
mod audio;
mod components;
mod context;
mod keyboard;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Launch settings, set once from the command line
static SETTINGS: OnceLock<LaunchSettings> = OnceLock::new();

/// Command-line options after defaults are applied
#[derive(Debug, Clone)]
pub struct LaunchSettings {
    pub data_dir: PathBuf,
    pub jokes_url: Option<String>,
    pub emailjs_endpoint: Option<String>,
    pub skip_intro: bool,
    pub cursor_trail: bool,
    pub muted: bool,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            jokes_url: None,
            emailjs_endpoint: None,
            skip_intro: false,
            cursor_trail: true,
            muted: false,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devcomedy")
}

/// Get the launch settings (defaults if main never set them)
pub fn get_settings() -> LaunchSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// DevComedy - a portfolio that debugs with coffee
#[derive(Parser, Debug)]
#[command(name = "devcomedy-desktop")]
#[command(about = "DevComedy - a themed developer portfolio with achievements and easter eggs")]
struct Args {
    /// Data directory for the local key/value store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// URL of a JSON array of jokes for the floating bubbles
    #[arg(long, env = "DEVCOMEDY_JOKES_URL")]
    jokes_url: Option<String>,

    /// Override the EmailJS send endpoint (e.g. a local relay)
    #[arg(long, env = "DEVCOMEDY_EMAILJS_ENDPOINT")]
    emailjs_endpoint: Option<String>,

    /// Go straight to the page without the fake-crash intro
    #[arg(long)]
    skip_intro: bool,

    /// Disable the cursor trail
    #[arg(long)]
    no_cursor_trail: bool,

    /// Start with sounds muted
    #[arg(long)]
    muted: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("devcomedy_desktop=info,devcomedy_core=info")),
        )
        .init();

    let args = Args::parse();

    let settings = LaunchSettings {
        data_dir: args.data_dir.unwrap_or_else(default_data_dir),
        jokes_url: args.jokes_url.filter(|url| !url.trim().is_empty()),
        emailjs_endpoint: args.emailjs_endpoint.filter(|url| !url.trim().is_empty()),
        skip_intro: args.skip_intro,
        cursor_trail: !args.no_cursor_trail,
        muted: args.muted,
    };

    tracing::info!(
        data_dir = ?settings.data_dir,
        remote_jokes = settings.jokes_url.is_some(),
        "Starting DevComedy"
    );

    let _ = SETTINGS.set(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("DevComedy Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
