//! DevComedy UI Components
//!
//! Dioxus building blocks shared by the portfolio sections: buttons,
//! badges, form fields, modals, toasts and achievement cards.
//!
//! ## Theming
//!
//! Components never read the theme themselves. Callers pass the active
//! [`ThemeMode`](devcomedy_core::ThemeMode) where a component has
//! mode-specific flair, and the page stylesheet keys everything else off
//! the root class (`light`, `neon-hacker`, `punny-mode`).

pub mod components;

pub use components::*;
