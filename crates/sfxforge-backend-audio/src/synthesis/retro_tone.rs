//! Chip-style tone: quantized oscillator, optional vibrato-like pitch bend,
//! linear attack and release.

use rand_pcg::Pcg32;
use sfxforge_spec::Waveform;

use crate::envelope::RetroEnvelope;
use crate::oscillator;

use super::Synthesizer;

/// Quantization steps per unit amplitude (31 levels across [-1, 1]).
pub const RETRO_STEPS: f64 = 15.0;

/// Output gain of the retro tone.
pub const RETRO_TONE_GAIN: f64 = 0.4;

/// Depth of the pitch bend as a fraction of the base frequency.
pub const BEND_DEPTH: f64 = 0.1;

/// Angular rate of the pitch bend in radians per second.
pub const BEND_RATE: f64 = 4.0;

/// Retro tone synthesizer parameters.
#[derive(Debug, Clone)]
pub struct RetroToneSynth {
    /// Base frequency in Hz.
    pub frequency: f64,
    /// Duration in seconds, used by the envelope.
    pub duration: f64,
    /// Oscillator shape.
    pub waveform: Waveform,
    /// Whether to wobble the pitch.
    pub pitch_bend: bool,
}

impl RetroToneSynth {
    /// Creates a retro tone without pitch bend.
    pub fn new(frequency: f64, duration: f64, waveform: Waveform) -> Self {
        Self {
            frequency,
            duration,
            waveform,
            pitch_bend: false,
        }
    }

    /// Enables or disables the pitch bend.
    pub fn with_pitch_bend(mut self, pitch_bend: bool) -> Self {
        self.pitch_bend = pitch_bend;
        self
    }

    /// Instantaneous frequency at time `t`.
    #[inline]
    pub fn frequency_at(&self, t: f64) -> f64 {
        if self.pitch_bend {
            self.frequency * (1.0 + (t * BEND_RATE).sin() * BEND_DEPTH)
        } else {
            self.frequency
        }
    }
}

impl Synthesizer for RetroToneSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        let envelope = RetroEnvelope::for_duration(self.duration);

        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                let raw = oscillator::waveform(self.waveform, self.frequency_at(t), t);
                oscillator::quantize(raw, RETRO_STEPS) * envelope.at(t) * RETRO_TONE_GAIN
            })
            .collect()
    }
}
