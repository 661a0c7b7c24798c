//! Reusable UI components

mod achievement_card;
mod badge;
mod button;
mod input;
mod modal;
mod toast;

pub use achievement_card::*;
pub use badge::*;
pub use button::*;
pub use input::*;
pub use modal::*;
pub use toast::*;
