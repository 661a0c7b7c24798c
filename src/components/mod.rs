//! Portfolio sections and page-wide layers.
//!
//! Sections read the [`Portfolio`](crate::context::Portfolio) context and
//! pick their copy by theme mode. Page-wide layers (intro, bubbles, trail,
//! shortcut overlay) are mounted once by the root component.

mod about;
mod contact;
mod cursor_trail;
mod fake_crash_intro;
mod floating_jokes;
mod hero;
mod navbar;
mod projects;
mod resume;
mod shortcuts_overlay;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use cursor_trail::CursorTrailLayer;
pub use fake_crash_intro::FakeCrashIntro;
pub use floating_jokes::FloatingJokes;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use resume::Resume;
pub use shortcuts_overlay::ShortcutsOverlay;
pub use skills::Skills;

use dioxus::prelude::*;

/// Smooth-scroll to a section by element id.
pub fn scroll_to_section(id: &'static str) {
    let script = format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        id
    );
    let _ = document::eval(&script);
}
