//! Decaying single-oscillator tone.

use rand_pcg::Pcg32;
use sfxforge_spec::Waveform;

use crate::envelope::exp_decay;
use crate::oscillator;

use super::Synthesizer;

/// Decay rate of the tone envelope, per second.
pub const TONE_DECAY: f64 = 2.0;

/// Output gain of the tone.
pub const TONE_GAIN: f64 = 0.3;

/// Tone synthesizer parameters.
#[derive(Debug, Clone)]
pub struct ToneSynth {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Oscillator shape.
    pub waveform: Waveform,
}

impl ToneSynth {
    /// Creates a new tone synthesizer.
    pub fn new(frequency: f64, waveform: Waveform) -> Self {
        Self {
            frequency,
            waveform,
        }
    }
}

impl Synthesizer for ToneSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                oscillator::waveform(self.waveform, self.frequency, t)
                    * exp_decay(t, TONE_DECAY)
                    * TONE_GAIN
            })
            .collect()
    }
}
