//! Cursor trail particles.

use std::time::{Duration, Instant};

use crate::theme::ThemeMode;

/// Particles older than this are pruned
pub const PARTICLE_LIFETIME: Duration = Duration::from_secs(1);

/// Interval of the prune loop (~60 Hz)
pub const PRUNE_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, PartialEq)]
pub struct TrailParticle {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub born: Instant,
}

impl TrailParticle {
    /// 1.0 when fresh, fading linearly to 0.0 at the end of its lifetime.
    pub fn opacity(&self, now: Instant) -> f64 {
        let age = now.saturating_duration_since(self.born);
        (1.0 - age.as_secs_f64() / PARTICLE_LIFETIME.as_secs_f64()).max(0.0)
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.born) >= PARTICLE_LIFETIME
    }
}

#[derive(Debug, Clone, Default)]
pub struct CursorTrail {
    particles: Vec<TrailParticle>,
    next_id: u64,
    enabled: bool,
}

impl CursorTrail {
    pub fn new(enabled: bool) -> Self {
        Self {
            particles: Vec::new(),
            next_id: 0,
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops every particle.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    /// Pointer moved: add a particle and prune old ones.
    pub fn push(&mut self, x: f64, y: f64, now: Instant) {
        if !self.enabled {
            return;
        }
        self.prune(now);
        self.particles.push(TrailParticle {
            id: self.next_id,
            x,
            y,
            born: now,
        });
        self.next_id += 1;
    }

    /// Remove expired particles; returns how many went.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired(now));
        before - self.particles.len()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn glyph(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => "✨",
            ThemeMode::NeonHacker => "💫",
            ThemeMode::PunnyMode => "🎉",
        }
    }

    pub fn class(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => "trail-particle text-primary",
            ThemeMode::NeonHacker => "trail-particle text-neon-green",
            ThemeMode::PunnyMode => "trail-particle text-mango",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_trail_ignores_moves() {
        let mut trail = CursorTrail::new(false);
        trail.push(1.0, 2.0, Instant::now());
        assert!(trail.is_empty());
    }

    #[test]
    fn moves_while_disabled_leave_no_trace() {
        let t0 = Instant::now();
        let mut trail = CursorTrail::new(false);
        for i in 0..50 {
            trail.push(i as f64, i as f64, t0);
        }
        trail.set_enabled(true);
        trail.push(7.0, 8.0, t0);

        assert_eq!(trail.particles().len(), 1);
        assert_eq!(trail.particles()[0].id, 0);
    }

    #[test]
    fn opacity_fades_out() {
        let t0 = Instant::now();
        let mut trail = CursorTrail::new(true);
        trail.push(0.0, 0.0, t0);
        let p = &trail.particles()[0];

        assert_eq!(p.opacity(t0), 1.0);
        assert!((p.opacity(t0 + Duration::from_millis(500)) - 0.5).abs() < 1e-9);
        assert_eq!(p.opacity(t0 + Duration::from_secs(2)), 0.0);
    }

    #[test]
    fn disabling_clears() {
        let mut trail = CursorTrail::new(true);
        trail.push(0.0, 0.0, Instant::now());
        trail.set_enabled(false);
        assert!(trail.is_empty());
    }

    #[test]
    fn glyph_follows_theme() {
        assert_eq!(CursorTrail::glyph(ThemeMode::NeonHacker), "💫");
        assert!(CursorTrail::class(ThemeMode::PunnyMode).contains("text-mango"));
    }
}
