//! Sound cues.
//!
//! UI events map to short synthesized tone sequences. The emitter only
//! decides *what* to play; the shell turns tones into Web Audio calls.

use serde::Serialize;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// One oscillator burst
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tone {
    pub frequency: f32,
    pub duration_ms: u32,
    pub waveform: Waveform,
    /// Offset from the start of the cue
    pub delay_ms: u32,
}

impl Tone {
    const fn new(frequency: f32, duration_ms: u32, waveform: Waveform, delay_ms: u32) -> Self {
        Self {
            frequency,
            duration_ms,
            waveform,
            delay_ms,
        }
    }
}

/// UI event with an associated sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    /// Ascending C-E-G chime
    Achievement,
    Error,
    /// Rocket launch on contact form submit
    Launch,
}

const CLICK: &[Tone] = &[Tone::new(800.0, 100, Waveform::Square, 0)];
const ACHIEVEMENT: &[Tone] = &[
    Tone::new(523.0, 200, Waveform::Sine, 0),
    Tone::new(659.0, 200, Waveform::Sine, 100),
    Tone::new(784.0, 300, Waveform::Sine, 200),
];
const ERROR: &[Tone] = &[Tone::new(200.0, 300, Waveform::Sawtooth, 0)];
const LAUNCH: &[Tone] = &[
    Tone::new(100.0, 500, Waveform::Sawtooth, 0),
    Tone::new(200.0, 300, Waveform::Sine, 200),
    Tone::new(400.0, 200, Waveform::Sine, 400),
];

impl SoundCue {
    pub fn tones(&self) -> &'static [Tone] {
        match self {
            SoundCue::Click => CLICK,
            SoundCue::Achievement => ACHIEVEMENT,
            SoundCue::Error => ERROR,
            SoundCue::Launch => LAUNCH,
        }
    }
}

/// Stateless apart from the mute flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoundEmitter {
    muted: bool,
}

impl SoundEmitter {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the mute flag; returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Tones to play for `cue`, or `None` while muted.
    pub fn play(&self, cue: SoundCue) -> Option<&'static [Tone]> {
        if self.muted {
            None
        } else {
            Some(cue.tones())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_emitter_plays_nothing() {
        let mut sound = SoundEmitter::new(false);
        assert_eq!(sound.play(SoundCue::Click).map(|t| t.len()), Some(1));

        assert!(sound.toggle_mute());
        assert!(sound.play(SoundCue::Achievement).is_none());
    }

    #[test]
    fn achievement_chime_ascends() {
        let tones = SoundCue::Achievement.tones();
        assert!(tones.windows(2).all(|w| w[0].frequency < w[1].frequency));
        assert!(tones.windows(2).all(|w| w[0].delay_ms < w[1].delay_ms));
    }

    #[test]
    fn tones_serialize_for_the_webview() {
        let json = serde_json::to_string(SoundCue::Error.tones()).unwrap();
        assert!(json.contains("\"waveform\":\"sawtooth\""));
        assert!(json.contains("\"delay_ms\":0"));
    }
}
