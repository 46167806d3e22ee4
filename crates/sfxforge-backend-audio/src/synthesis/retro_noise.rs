//! Chip-style noise: white, pink or a coarse periodic pattern, mixed with a
//! sine tone and faded in and out.

use rand_pcg::Pcg32;
use sfxforge_spec::NoiseType;

use crate::envelope::{edge_fade, NOISE_FADE};
use crate::oscillator;
use crate::rng::uniform_bipolar;

use super::Synthesizer;

/// Level of the noise in the mix.
pub const NOISE_MIX: f64 = 0.7;

/// Level of the tone in the mix.
pub const TONE_MIX: f64 = 0.3;

/// Output gain of retro noise.
pub const RETRO_NOISE_GAIN: f64 = 0.2;

/// Quantization steps of the periodic pattern.
pub const PATTERN_STEPS: f64 = 7.0;

/// Fraction of each period that is attenuated.
pub const PATTERN_DUTY: f64 = 0.3;

/// Attenuation applied inside the duty part of the period.
pub const PATTERN_DIP: f64 = 0.7;

/// Paul Kellet's pink noise filter.
#[derive(Debug, Clone, Default)]
pub struct PinkFilter {
    b: [f64; 7],
}

impl PinkFilter {
    /// Creates a filter with zeroed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters one white noise sample.
    #[inline]
    pub fn process(&mut self, white: f64) -> f64 {
        let b = &mut self.b;
        b[0] = 0.99886 * b[0] + white * 0.0555179;
        b[1] = 0.99332 * b[1] + white * 0.0750759;
        b[2] = 0.96900 * b[2] + white * 0.1538520;
        b[3] = 0.86650 * b[3] + white * 0.3104856;
        b[4] = 0.55000 * b[4] + white * 0.5329522;
        b[5] = -0.7616 * b[5] - white * 0.0168980;
        let out = b[0] + b[1] + b[2] + b[3] + b[4] + b[5] + b[6] + white * 0.5362;
        b[6] = white * 0.115926;
        out
    }
}

/// Retro noise synthesizer parameters.
#[derive(Debug, Clone)]
pub struct RetroNoiseSynth {
    /// Frequency of the tone and of the periodic pattern in Hz.
    pub frequency: f64,
    /// Duration in seconds, used by the fade.
    pub duration: f64,
    /// Noise color.
    pub noise_type: NoiseType,
}

impl RetroNoiseSynth {
    /// Creates a retro noise synthesizer.
    pub fn new(frequency: f64, duration: f64, noise_type: NoiseType) -> Self {
        Self {
            frequency,
            duration,
            noise_type,
        }
    }

    /// Pattern period in samples, at least 1.
    pub fn period(&self, sample_rate: f64) -> usize {
        ((sample_rate / self.frequency).floor() as usize).max(1)
    }
}

impl Synthesizer for RetroNoiseSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        let period = self.period(sample_rate);
        let mut pink = PinkFilter::new();

        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                let white = uniform_bipolar(rng);
                let noise = match self.noise_type {
                    NoiseType::White => white,
                    NoiseType::Pink => pink.process(white),
                    NoiseType::Retro => {
                        let stepped = oscillator::quantize(white, PATTERN_STEPS);
                        if ((i % period) as f64) < period as f64 * PATTERN_DUTY {
                            stepped * PATTERN_DIP
                        } else {
                            stepped
                        }
                    }
                };
                let tone = oscillator::sine(self.frequency, t) * TONE_MIX;
                let fade = edge_fade(t, self.duration, NOISE_FADE);
                (noise * NOISE_MIX + tone) * fade * RETRO_NOISE_GAIN
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_pink_filter_first_sample() {
        let mut pink = PinkFilter::new();
        let white = 0.5;
        let expected = white
            * (0.0555179 + 0.0750759 + 0.1538520 + 0.3104856 + 0.5329522 - 0.0168980 + 0.5362);
        assert!((pink.process(white) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pink_filter_uses_previous_b6() {
        let mut a = PinkFilter::new();
        a.process(1.0);
        let second = a.process(0.0);
        let b = [
            0.0555179, 0.0750759, 0.1538520, 0.3104856, 0.5329522, -0.0168980, 0.115926,
        ];
        let sum = 0.99886 * b[0]
            + 0.99332 * b[1]
            + 0.96900 * b[2]
            + 0.86650 * b[3]
            + 0.55000 * b[4]
            + -0.7616 * b[5]
            + b[6];
        assert!((second - sum).abs() < 1e-12);
    }

    #[test]
    fn test_period_floor_and_minimum() {
        let synth = RetroNoiseSynth::new(100.0, 1.0, NoiseType::Retro);
        assert_eq!(synth.period(44100.0), 441);
        let shrill = RetroNoiseSynth::new(50_000.0, 1.0, NoiseType::Retro);
        assert_eq!(shrill.period(44100.0), 1);
    }

    #[test]
    fn test_pink_state_resets_per_call() {
        let synth = RetroNoiseSynth::new(200.0, 0.2, NoiseType::Pink);
        let a = synth.synthesize(500, 44100.0, &mut create_rng(3));
        let b = synth.synthesize(500, 44100.0, &mut create_rng(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_faded_edges() {
        for noise_type in [NoiseType::White, NoiseType::Pink, NoiseType::Retro] {
            let synth = RetroNoiseSynth::new(150.0, 1.0, noise_type);
            let samples = synth.synthesize(44100, 44100.0, &mut create_rng(5));
            assert_eq!(samples[0], 0.0);
            assert!(samples[44099].abs() < 0.001);
        }
    }
}
