//! Web Audio playback for sound cues.
//!
//! The webview owns the audio device, so each cue becomes a short script
//! that schedules one oscillator per tone.

use devcomedy_core::Tone;
use dioxus::prelude::*;

/// Script body; `TONES` is replaced with the serialized tone list.
const PLAY_SCRIPT: &str = r#"
const tones = TONES;
const Ctx = window.AudioContext || window.webkitAudioContext;
if (Ctx) {
    window.__devcomedyAudio = window.__devcomedyAudio || new Ctx();
    const ctx = window.__devcomedyAudio;
    for (const tone of tones) {
        const start = ctx.currentTime + tone.delay_ms / 1000;
        const end = start + tone.duration_ms / 1000;
        const osc = ctx.createOscillator();
        const gain = ctx.createGain();
        osc.type = tone.waveform;
        osc.frequency.setValueAtTime(tone.frequency, start);
        gain.gain.setValueAtTime(0.1, start);
        gain.gain.exponentialRampToValueAtTime(0.01, end);
        osc.connect(gain);
        gain.connect(ctx.destination);
        osc.start(start);
        osc.stop(end);
    }
}
return true;
"#;

fn script_for(tones: &[Tone]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(tones)?;
    Ok(PLAY_SCRIPT.replace("TONES", &json))
}

/// Fire-and-forget playback. Failures are logged, never surfaced.
pub fn play_tones(tones: &'static [Tone]) {
    let script = match script_for(tones) {
        Ok(script) => script,
        Err(e) => {
            tracing::warn!("Failed to encode tones: {}", e);
            return;
        }
    };
    spawn_forever(async move {
        if let Err(e) = document::eval(&script).await {
            tracing::warn!("Audio playback failed: {:?}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use devcomedy_core::SoundCue;

    #[test]
    fn script_embeds_every_tone() {
        let script = script_for(SoundCue::Achievement.tones()).unwrap();
        assert!(script.contains("\"frequency\":523.0"));
        assert!(script.contains("\"frequency\":784.0"));
        assert!(script.contains("\"waveform\":\"sine\""));
        assert!(!script.contains("TONES"));
    }
}
