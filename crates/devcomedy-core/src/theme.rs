//! Theme store: presentation mode plus the two visual pulses.
//!
//! ## Pulses
//!
//! A pulse (grayscale, party mode) is active from its latest trigger until
//! `trigger + duration`. Re-triggering moves the deadline, it never stacks.
//! Each trigger bumps a generation counter; the shell schedules one expiry
//! per trigger and hands the generation back to [`ThemeState::expire`], so
//! an expiry left over from a superseded trigger does nothing.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Cosmetic presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Light,
    NeonHacker,
    PunnyMode,
}

impl ThemeMode {
    /// Cycle order
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::NeonHacker, ThemeMode::PunnyMode];

    /// Next mode in the fixed circular order.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::NeonHacker,
            ThemeMode::NeonHacker => ThemeMode::PunnyMode,
            ThemeMode::PunnyMode => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::NeonHacker => "neon-hacker",
            ThemeMode::PunnyMode => "punny-mode",
        }
    }

    /// Label for the navbar theme button
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode",
            ThemeMode::NeonHacker => "Hacker Mode",
            ThemeMode::PunnyMode => "Punny Mode",
        }
    }

    fn index(self) -> usize {
        match self {
            ThemeMode::Light => 0,
            ThemeMode::NeonHacker => 1,
            ThemeMode::PunnyMode => 2,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown theme '{}' (expected light, neon-hacker or punny-mode)", s))
    }
}

/// Which temporary effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PulseKind {
    Grayscale,
    PartyMode,
}

impl PulseKind {
    pub fn duration(&self) -> Duration {
        match self {
            PulseKind::Grayscale => Duration::from_secs(3),
            PulseKind::PartyMode => Duration::from_secs(10),
        }
    }
}

/// Auto-expiring boolean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulse {
    duration: Duration,
    until: Option<Instant>,
    generation: u64,
}

impl Pulse {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
            generation: 0,
        }
    }

    /// (Re)start the pulse. Returns the generation the expiry must present.
    pub fn trigger(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.until = Some(now + self.duration);
        self.generation
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Clear the pulse if `generation` is current and its deadline passed.
    pub fn expire(&mut self, generation: u64, now: Instant) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.until {
            Some(until) if now >= until => {
                self.until = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.until
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Generation of the latest trigger (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Active mode, pulses and which modes were seen this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
    grayscale: Pulse,
    party: Pulse,
    visited: [bool; 3],
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        let mut visited = [false; 3];
        visited[mode.index()] = true;
        Self {
            mode,
            grayscale: Pulse::new(PulseKind::Grayscale.duration()),
            party: Pulse::new(PulseKind::PartyMode.duration()),
            visited,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.visited[mode.index()] = true;
    }

    /// Advance to the next mode; returns it.
    pub fn cycle(&mut self) -> ThemeMode {
        self.set_mode(self.mode.next());
        self.mode
    }

    /// Punny mode on/off: punny goes back to light, anything else to punny.
    pub fn toggle_punny(&mut self) -> ThemeMode {
        let target = if self.mode == ThemeMode::PunnyMode {
            ThemeMode::Light
        } else {
            ThemeMode::PunnyMode
        };
        self.set_mode(target);
        target
    }

    /// Whether every mode has been active at some point this session.
    pub fn visited_all(&self) -> bool {
        self.visited.iter().all(|v| *v)
    }

    fn pulse_mut(&mut self, kind: PulseKind) -> &mut Pulse {
        match kind {
            PulseKind::Grayscale => &mut self.grayscale,
            PulseKind::PartyMode => &mut self.party,
        }
    }

    pub fn pulse(&self, kind: PulseKind) -> &Pulse {
        match kind {
            PulseKind::Grayscale => &self.grayscale,
            PulseKind::PartyMode => &self.party,
        }
    }

    /// (Re)start a pulse; returns the generation for the expiry callback.
    pub fn trigger(&mut self, kind: PulseKind, now: Instant) -> u64 {
        tracing::debug!(?kind, "Pulse triggered");
        self.pulse_mut(kind).trigger(now)
    }

    pub fn trigger_grayscale(&mut self, now: Instant) -> u64 {
        self.trigger(PulseKind::Grayscale, now)
    }

    pub fn trigger_party_mode(&mut self, now: Instant) -> u64 {
        self.trigger(PulseKind::PartyMode, now)
    }

    /// Fire-once expiry for the trigger identified by `generation`.
    pub fn expire(&mut self, kind: PulseKind, generation: u64, now: Instant) -> bool {
        self.pulse_mut(kind).expire(generation, now)
    }

    pub fn is_grayscale(&self, now: Instant) -> bool {
        self.grayscale.is_active(now)
    }

    pub fn is_party_mode(&self, now: Instant) -> bool {
        self.party.is_active(now)
    }

    /// CSS classes for the page root.
    pub fn root_classes(&self, now: Instant) -> String {
        let mut classes = vec!["portfolio-root", self.mode.as_str()];
        if self.is_party_mode(now) {
            classes.push("party-mode");
        }
        if self.is_grayscale(now) {
            classes.push("grayscale");
        }
        classes.join(" ")
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_all_modes_in_order() {
        let mut state = ThemeState::default();
        assert!(!state.visited_all());
        assert_eq!(state.cycle(), ThemeMode::NeonHacker);
        assert_eq!(state.cycle(), ThemeMode::PunnyMode);
        assert!(state.visited_all());
        assert_eq!(state.cycle(), ThemeMode::Light);
    }

    #[test]
    fn toggle_punny_round_trip() {
        let mut state = ThemeState::new(ThemeMode::NeonHacker);
        assert_eq!(state.toggle_punny(), ThemeMode::PunnyMode);
        assert_eq!(state.toggle_punny(), ThemeMode::Light);
        assert!(state.visited_all());
    }

    #[test]
    fn mode_strings_parse() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
        }
        assert!("dark".parse::<ThemeMode>().is_err());
        assert_eq!(serde_json::to_string(&ThemeMode::NeonHacker).unwrap(), "\"neon-hacker\"");
    }

    #[test]
    fn grayscale_retrigger_extends_deadline() {
        let t0 = Instant::now();
        let mut state = ThemeState::default();

        let first = state.trigger_grayscale(t0);
        let second = state.trigger_grayscale(t0 + Duration::from_secs(1));

        // Expiry scheduled by the first trigger is stale
        assert!(!state.expire(PulseKind::Grayscale, first, t0 + Duration::from_secs(3)));
        assert!(state.is_grayscale(t0 + Duration::from_millis(3500)));
        assert!(!state.is_grayscale(t0 + Duration::from_secs(4)));

        assert!(state.expire(PulseKind::Grayscale, second, t0 + Duration::from_secs(4)));
        assert!(state.pulse(PulseKind::Grayscale).deadline().is_none());
    }

    #[test]
    fn early_expiry_is_ignored() {
        let t0 = Instant::now();
        let mut state = ThemeState::default();
        let gen = state.trigger_party_mode(t0);

        assert!(!state.expire(PulseKind::PartyMode, gen, t0 + Duration::from_secs(9)));
        assert!(state.is_party_mode(t0 + Duration::from_secs(9)));
        assert!(state.expire(PulseKind::PartyMode, gen, t0 + Duration::from_secs(10)));
        // fire-once
        assert!(!state.expire(PulseKind::PartyMode, gen, t0 + Duration::from_secs(11)));
    }

    #[test]
    fn pulses_are_independent() {
        let t0 = Instant::now();
        let mut state = ThemeState::default();
        state.trigger_party_mode(t0);

        assert!(state.is_party_mode(t0));
        assert!(!state.is_grayscale(t0));
        assert_eq!(state.root_classes(t0), "portfolio-root light party-mode");
    }
}
