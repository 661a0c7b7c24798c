//! Floating jokes: the joke deck, click analytics and the bubble field.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::error::{PortfolioError, PortfolioResult};
use crate::storage::{KeyValueStore, JOKE_ANALYTICS_KEY};

/// Used whenever the remote feed is unavailable or useless
pub const FALLBACK_JOKES: [&str; 8] = [
    "I would tell you a UDP joke... but you might not get it. 📡",
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem! 💡",
    "I'm not lazy, I'm just in energy-saving mode! ⚡",
    "There are 10 types of people: those who understand binary and those who don't. 🤖",
    "Why did the developer go broke? Because he used up all his cache! 💰",
    "I put the 'fun' in function! 🎉",
    "404: Joke not found... just kidding! 😄",
];

/// Glyphs shown on the bubbles
pub const BUBBLE_EMOJIS: [&str; 6] = ["😂", "🤪", "🎭", "🚀", "⭐", "🎪"];

/// Bubbles on screen at startup
pub const INITIAL_BUBBLES: usize = 3;

/// The periodic spawner stops at this many bubbles
pub const MAX_BUBBLES: usize = 5;

/// Period of the background spawner
pub const SPAWN_INTERVAL: Duration = Duration::from_secs(10);

/// Delay before a clicked bubble is replaced
pub const RESPAWN_DELAY: Duration = Duration::from_secs(2);

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

// ═══════════════════════════════════════════════════════════════════════════
// Deck
// ═══════════════════════════════════════════════════════════════════════════

/// Ordered, never-empty list of jokes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeDeck {
    jokes: Vec<String>,
}

impl JokeDeck {
    /// The eight built-in jokes.
    pub fn fallback() -> Self {
        Self {
            jokes: FALLBACK_JOKES.iter().map(|j| j.to_string()).collect(),
        }
    }

    /// Parse a remote payload: a JSON array of strings.
    ///
    /// Blank and non-string entries are dropped. Returns `None` when
    /// nothing usable remains.
    pub fn parse(body: &str) -> Option<Self> {
        let values: Vec<serde_json::Value> = serde_json::from_str(body).ok()?;
        let jokes: Vec<String> = values
            .into_iter()
            .filter_map(|v| v.as_str().map(str::trim).map(str::to_string))
            .filter(|j| !j.is_empty())
            .collect();

        if jokes.is_empty() {
            None
        } else {
            Some(Self { jokes })
        }
    }

    /// Fetch `url`, falling back to the built-in deck on any failure.
    pub async fn load(url: Option<&str>) -> Self {
        let Some(url) = url else {
            return Self::fallback();
        };

        match fetch_body(url).await {
            Ok(body) => match Self::parse(&body) {
                Some(deck) => {
                    tracing::info!(count = deck.len(), "Loaded remote jokes");
                    deck
                }
                None => {
                    tracing::warn!(url, "Remote jokes empty or invalid, using built-in jokes");
                    Self::fallback()
                }
            },
            Err(e) => {
                tracing::warn!(url, error = %e, "Failed to fetch jokes, using built-in jokes");
                Self::fallback()
            }
        }
    }

    pub fn jokes(&self) -> &[String] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn random(&self, rng: &mut impl Rng) -> &str {
        &self.jokes[rng.random_range(0..self.jokes.len())]
    }
}

impl Default for JokeDeck {
    fn default() -> Self {
        Self::fallback()
    }
}

async fn fetch_body(url: &str) -> PortfolioResult<String> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

// ═══════════════════════════════════════════════════════════════════════════
// Analytics
// ═══════════════════════════════════════════════════════════════════════════

/// Per-joke click tally, persisted under [`JOKE_ANALYTICS_KEY`]
pub struct JokeAnalytics {
    tally: BTreeMap<String, u32>,
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl JokeAnalytics {
    /// Load the tally; malformed or unreadable data starts from zero.
    pub fn load(backend: Arc<dyn KeyValueStore>) -> Self {
        let tally = match backend.get(JOKE_ANALYTICS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Joke analytics malformed, starting fresh");
                BTreeMap::new()
            }),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read joke analytics, continuing in memory");
                return Self::in_memory();
            }
        };
        Self {
            tally,
            backend: Some(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            tally: BTreeMap::new(),
            backend: None,
        }
    }

    /// Count a click on `joke`; returns the new count.
    pub fn record(&mut self, joke: &str) -> u32 {
        let count = self.tally.entry(joke.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;
        self.persist();
        count
    }

    pub fn count(&self, joke: &str) -> u32 {
        self.tally.get(joke).copied().unwrap_or(0)
    }

    /// Most clicked joke (ties resolve to the lexicographically first).
    pub fn favourite(&self) -> Option<(&str, u32)> {
        self.tally
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(joke, count)| (joke.as_str(), *count))
    }

    pub fn total(&self) -> u32 {
        self.tally.values().sum()
    }

    fn persist(&mut self) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        let result = serde_json::to_string(&self.tally)
            .map_err(PortfolioError::from)
            .and_then(|raw| backend.set(JOKE_ANALYTICS_KEY, &raw));
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist joke analytics, continuing in memory");
            self.backend = None;
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Bubble field
// ═══════════════════════════════════════════════════════════════════════════

/// A clickable bubble floating over the page
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingJoke {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub joke: String,
    pub emoji: &'static str,
}

/// Set of bubbles currently on screen
#[derive(Debug, Clone)]
pub struct JokeField {
    bubbles: Vec<FloatingJoke>,
    next_id: u64,
    width: f64,
    height: f64,
}

/// Bubble size; spawn positions keep this much margin from the edges
const BUBBLE_MARGIN: f64 = 100.0;

impl JokeField {
    /// Empty field for a viewport of `width` × `height` pixels.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bubbles: Vec::new(),
            next_id: 0,
            width,
            height,
        }
    }

    /// Field with the initial bubbles already spawned.
    pub fn populated(width: f64, height: f64, deck: &JokeDeck, rng: &mut impl Rng) -> Self {
        let mut field = Self::new(width, height);
        for _ in 0..INITIAL_BUBBLES {
            field.spawn(deck, rng);
        }
        field
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Add a bubble unconditionally; returns its id.
    pub fn spawn(&mut self, deck: &JokeDeck, rng: &mut impl Rng) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let max_x = (self.width - BUBBLE_MARGIN).max(1.0);
        let max_y = (self.height - BUBBLE_MARGIN).max(1.0);
        self.bubbles.push(FloatingJoke {
            id,
            x: rng.random_range(0.0..max_x),
            y: rng.random_range(0.0..max_y),
            joke: deck.random(rng).to_string(),
            emoji: BUBBLE_EMOJIS[rng.random_range(0..BUBBLE_EMOJIS.len())],
        });
        id
    }

    /// Periodic spawner tick: adds a bubble only below [`MAX_BUBBLES`].
    pub fn tick(&mut self, deck: &JokeDeck, rng: &mut impl Rng) -> Option<u64> {
        if self.bubbles.len() < MAX_BUBBLES {
            Some(self.spawn(deck, rng))
        } else {
            None
        }
    }

    /// Remove a clicked bubble and return it.
    pub fn pop(&mut self, id: u64) -> Option<FloatingJoke> {
        let pos = self.bubbles.iter().position(|b| b.id == id)?;
        Some(self.bubbles.remove(pos))
    }

    pub fn bubbles(&self) -> &[FloatingJoke] {
        &self.bubbles
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fallback_has_eight_jokes() {
        assert_eq!(JokeDeck::fallback().len(), 8);
    }

    #[test]
    fn parse_accepts_string_arrays() {
        let deck = JokeDeck::parse(r#"["  one  ", "", 42, "two"]"#).unwrap();
        assert_eq!(deck.jokes(), ["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn parse_rejects_useless_payloads() {
        assert!(JokeDeck::parse("[]").is_none());
        assert!(JokeDeck::parse(r#"["   ", null]"#).is_none());
        assert!(JokeDeck::parse(r#"{"jokes": ["a"]}"#).is_none());
        assert!(JokeDeck::parse("<html>").is_none());
    }

    #[tokio::test]
    async fn load_without_url_uses_fallback() {
        assert_eq!(JokeDeck::load(None).await, JokeDeck::fallback());
    }

    #[tokio::test]
    async fn load_from_unreachable_url_uses_fallback() {
        let deck = JokeDeck::load(Some("http://127.0.0.1:9/jokes.json")).await;
        assert_eq!(deck, JokeDeck::fallback());
    }

    #[test]
    fn analytics_tally_persists() {
        let storage = Arc::new(MemoryStorage::new());
        let mut analytics = JokeAnalytics::load(storage.clone());
        analytics.record("a");
        analytics.record("b");
        assert_eq!(analytics.record("a"), 2);

        let reloaded = JokeAnalytics::load(storage);
        assert_eq!(reloaded.count("a"), 2);
        assert_eq!(reloaded.count("b"), 1);
        assert_eq!(reloaded.total(), 3);
        assert_eq!(reloaded.favourite(), Some(("a", 2)));
    }

    #[test]
    fn analytics_ignores_malformed_tally() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(JOKE_ANALYTICS_KEY, "[1,2,3]").unwrap();

        let analytics = JokeAnalytics::load(storage);
        assert_eq!(analytics.total(), 0);
        assert!(analytics.favourite().is_none());
    }

    #[test]
    fn field_caps_periodic_spawns() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = JokeDeck::fallback();
        let mut field = JokeField::populated(1280.0, 800.0, &deck, &mut rng);
        assert_eq!(field.len(), INITIAL_BUBBLES);

        assert!(field.tick(&deck, &mut rng).is_some());
        assert!(field.tick(&deck, &mut rng).is_some());
        assert!(field.tick(&deck, &mut rng).is_none());
        assert_eq!(field.len(), MAX_BUBBLES);
    }

    #[test]
    fn field_positions_stay_inside_viewport() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = JokeDeck::fallback();
        let mut field = JokeField::new(400.0, 300.0);
        for _ in 0..50 {
            field.spawn(&deck, &mut rng);
        }
        assert!(field
            .bubbles()
            .iter()
            .all(|b| (0.0..300.0).contains(&b.x) && (0.0..200.0).contains(&b.y)));
    }

    #[test]
    fn pop_removes_only_the_clicked_bubble() {
        let mut rng = StdRng::seed_from_u64(3);
        let deck = JokeDeck::fallback();
        let mut field = JokeField::populated(800.0, 600.0, &deck, &mut rng);
        let target = field.bubbles()[1].id;

        let popped = field.pop(target).unwrap();
        assert_eq!(popped.id, target);
        assert_eq!(field.len(), INITIAL_BUBBLES - 1);
        assert!(field.pop(target).is_none());
    }
}
