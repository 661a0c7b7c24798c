//! Persisted achievement snapshot and load-time merge.
//!
//! The snapshot is the JSON array written by the store on every change.
//! On load each catalog entry is overlaid field-by-field with the stored
//! entry carrying the same id, so catalog additions and removals never
//! corrupt an older snapshot:
//! - catalog entries absent from the snapshot stay locked
//! - stored ids no longer in the catalog are dropped
//! - a snapshot that is not a JSON array is discarded wholesale

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::catalog::default_achievements;
use super::Achievement;

/// One stored entry; every field but the id may be missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAchievement {
    id: String,
    title: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    unlocked: Option<bool>,
    unlocked_at: Option<DateTime<Utc>>,
}

impl StoredAchievement {
    fn overlay(self, base: &mut Achievement) {
        if let Some(title) = self.title {
            base.title = title;
        }
        if let Some(description) = self.description {
            base.description = description;
        }
        if let Some(icon) = self.icon {
            base.icon = icon;
        }
        if let Some(unlocked) = self.unlocked {
            base.unlocked = unlocked;
        }
        if self.unlocked_at.is_some() {
            base.unlocked_at = self.unlocked_at;
        }
    }
}

/// Merge a raw snapshot into the catalog.
///
/// Never fails: `None`, invalid JSON and non-array payloads all yield the
/// default catalog. Individual entries that do not parse are skipped.
pub fn hydrate(raw: Option<&str>) -> Vec<Achievement> {
    let mut achievements = default_achievements();

    let Some(raw) = raw else {
        return achievements;
    };

    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            tracing::warn!("Achievement snapshot is not a list, using defaults");
            return achievements;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Achievement snapshot is malformed, using defaults");
            return achievements;
        }
    };

    let mut stored: Vec<StoredAchievement> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    for achievement in &mut achievements {
        // first match wins, like a linear find
        if let Some(pos) = stored.iter().position(|s| s.id == achievement.id) {
            stored.remove(pos).overlay(achievement);
        }
    }

    achievements
}

/// Serialize the full list for storage.
pub fn serialize(achievements: &[Achievement]) -> Result<String, serde_json::Error> {
    serde_json::to_string(achievements)
}
