//! Page components for the DevComedy portfolio.

mod achievements;
mod home;

pub use achievements::Achievements;
pub use home::Home;
