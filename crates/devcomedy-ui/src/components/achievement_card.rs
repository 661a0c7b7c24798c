//! Achievement display: gallery cards and the progress meter.

use chrono::{DateTime, Utc};
use devcomedy_core::Achievement;
use dioxus::prelude::*;

/// "3/10 unlocked"
pub fn progress_label(unlocked: usize, total: usize) -> String {
    format!("{}/{} unlocked", unlocked, total)
}

/// Whole-number percentage, 0 for an empty catalog
pub fn progress_percent(unlocked: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((unlocked.min(total) * 100) / total) as u32
}

pub fn unlocked_label(unlocked_at: Option<&DateTime<Utc>>) -> String {
    match unlocked_at {
        Some(at) => format!("Unlocked {}", at.format("%b %-d, %Y %H:%M")),
        None => "Locked".to_string(),
    }
}

/// One catalog entry. Locked entries hide their icon.
#[component]
pub fn AchievementCard(achievement: Achievement) -> Element {
    let class = if achievement.unlocked {
        "achievement-card unlocked"
    } else {
        "achievement-card locked"
    };
    let icon = if achievement.unlocked {
        achievement.icon.as_str()
    } else {
        "🔒"
    };
    let status = unlocked_label(achievement.unlocked_at.as_ref());

    rsx! {
        div { class: "{class}",
            div { class: "achievement-icon", "{icon}" }
            div { class: "achievement-body",
                div { class: "achievement-title", "{achievement.title}" }
                div { class: "achievement-description", "{achievement.description}" }
                div { class: "achievement-status", "{status}" }
            }
        }
    }
}

/// Trophy counter with a bar
#[component]
pub fn AchievementProgress(
    unlocked: usize,
    total: usize,
    #[props(default)] onclick: Option<EventHandler<()>>,
) -> Element {
    let label = progress_label(unlocked, total);
    let percent = progress_percent(unlocked, total);

    rsx! {
        div {
            class: "achievement-progress",
            title: "Achievements",
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            span { class: "trophy", "🏆" }
            span { class: "progress-label", "{label}" }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn progress_text() {
        assert_eq!(progress_label(3, 10), "3/10 unlocked");
        assert_eq!(progress_percent(3, 10), 30);
        assert_eq!(progress_percent(10, 10), 100);
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn unlock_time_formatting() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0).unwrap();
        assert_eq!(unlocked_label(Some(&at)), "Unlocked Mar 7, 2024 14:05");
        assert_eq!(unlocked_label(None), "Locked");
    }
}
