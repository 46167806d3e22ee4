//! Noise burst over a sine tone, used for ambient and rough sounds.

use rand_pcg::Pcg32;

use crate::envelope::exp_decay;
use crate::oscillator;
use crate::rng::uniform_bipolar;

use super::Synthesizer;

/// Level of the noise component.
pub const NOISE_LEVEL: f64 = 0.1;

/// Level of the tonal component.
pub const TONE_LEVEL: f64 = 0.3;

/// Decay rate of the burst, per second.
pub const BURST_DECAY: f64 = 1.5;

/// Noise burst synthesizer.
#[derive(Debug, Clone)]
pub struct NoiseBurstSynth {
    /// Frequency of the underlying tone in Hz.
    pub frequency: f64,
}

impl NoiseBurstSynth {
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }
}

impl Synthesizer for NoiseBurstSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                let noise = uniform_bipolar(rng) * NOISE_LEVEL;
                let tone = oscillator::sine(self.frequency, t) * TONE_LEVEL;
                (noise + tone) * exp_decay(t, BURST_DECAY)
            })
            .collect()
    }
}
