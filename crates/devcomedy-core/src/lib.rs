//! DevComedy Core Library
//!
//! UI-independent state behind the DevComedy portfolio: the achievement
//! store, theme and pulse state, the keyboard-shortcut dispatcher, sound
//! cues, floating jokes, the cursor trail and the contact form.
//!
//! ## Overview
//!
//! Every store here is a plain value. The desktop shell owns them inside
//! Dioxus signals and feeds them events (key presses, clicks, timer
//! expiries). Time is always passed in as an `Instant` so behaviour is
//! deterministic under test.
//!
//! ## Quick Start
//!
//! ```ignore
//! use devcomedy_core::{AchievementStore, MemoryStorage};
//! use std::sync::Arc;
//!
//! let mut store = AchievementStore::load(Arc::new(MemoryStorage::new()));
//! for toast in store.record_joke_click() {
//!     println!("{}: {}", toast.title, toast.description);
//! }
//! assert!(store.is_unlocked("first-joke"));
//! ```

pub mod achievements;
pub mod contact;
pub mod content;
pub mod error;
pub mod intro;
pub mod jokes;
pub mod notify;
pub mod shortcuts;
pub mod sound;
pub mod storage;
pub mod theme;
pub mod trail;

// Re-exports
pub use achievements::{Achievement, AchievementId, AchievementStore, COMPLETIONIST};
pub use contact::{
    ContactField, ContactForm, EmailJsClient, EmailJsConfig, MessageEasterEgg, SendGate,
    TemplateParams,
};
pub use content::Themed;
pub use error::{PortfolioError, PortfolioResult};
pub use intro::IntroSequence;
pub use jokes::{FloatingJoke, JokeAnalytics, JokeDeck, JokeField};
pub use notify::{ActiveToast, Toast, ToastKind, ToastQueue};
pub use shortcuts::{KeyDispatcher, KeyPress, Shortcut, ShortcutEffect};
pub use sound::{SoundCue, SoundEmitter, Tone, Waveform};
pub use storage::{KeyValueStore, MemoryStorage, Storage};
pub use theme::{Pulse, PulseKind, ThemeMode, ThemeState};
pub use trail::{CursorTrail, TrailParticle};
