//! Chip-style square-wave melodies with an optional major-triad arpeggio.

use rand_pcg::Pcg32;

use crate::envelope::note_release;
use crate::oscillator;

use super::melody::note_span;
use super::retro_tone::RETRO_STEPS;
use super::Synthesizer;

/// Output gain of the retro melody.
pub const RETRO_MELODY_GAIN: f64 = 0.3;

/// Arpeggio steps per second.
pub const ARPEGGIO_RATE: f64 = 8.0;

/// Frequency ratios of the arpeggio (major triad).
pub const ARPEGGIO_RATIOS: [f64; 3] = [1.0, 1.25, 1.5];

/// Retro melody synthesizer parameters.
#[derive(Debug, Clone)]
pub struct RetroMelodySynth {
    /// Note frequencies in Hz.
    pub notes: Vec<f64>,
    /// Length of every note in seconds.
    pub note_duration: f64,
    /// Arpeggiate even-indexed notes.
    pub arpeggio: bool,
}

impl RetroMelodySynth {
    /// Creates a retro melody without arpeggio.
    pub fn new(notes: Vec<f64>, note_duration: f64) -> Self {
        Self {
            notes,
            note_duration,
            arpeggio: false,
        }
    }

    /// Enables or disables the arpeggio.
    pub fn with_arpeggio(mut self, arpeggio: bool) -> Self {
        self.arpeggio = arpeggio;
        self
    }

    /// Frequency of note `index` at local time `t`.
    #[inline]
    pub fn frequency_at(&self, index: usize, freq: f64, t: f64) -> f64 {
        if self.arpeggio && index % 2 == 0 {
            let step = (t * ARPEGGIO_RATE).floor() as usize % ARPEGGIO_RATIOS.len();
            freq * ARPEGGIO_RATIOS[step]
        } else {
            freq
        }
    }
}

impl Synthesizer for RetroMelodySynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        let mut output = vec![0.0; num_samples];

        for (index, &freq) in self.notes.iter().enumerate() {
            let span = note_span(index, self.note_duration, sample_rate, num_samples);
            for (i, sample) in output[span].iter_mut().enumerate() {
                let t = i as f64 / sample_rate;
                let raw = oscillator::square(self.frequency_at(index, freq, t), t);
                let level = note_release(t / self.note_duration);
                *sample = oscillator::quantize(raw, RETRO_STEPS) * level * RETRO_MELODY_GAIN;
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_arpeggio_cycles_on_even_notes() {
        let synth = RetroMelodySynth::new(vec![400.0, 500.0], 0.5).with_arpeggio(true);
        assert_eq!(synth.frequency_at(0, 400.0, 0.0), 400.0);
        assert_eq!(synth.frequency_at(0, 400.0, 0.13), 500.0);
        assert_eq!(synth.frequency_at(0, 400.0, 0.26), 600.0);
        assert_eq!(synth.frequency_at(0, 400.0, 0.38), 400.0);
        // Odd notes hold their pitch.
        assert_eq!(synth.frequency_at(1, 500.0, 0.13), 500.0);
    }

    #[test]
    fn test_no_arpeggio_holds_pitch() {
        let synth = RetroMelodySynth::new(vec![400.0], 0.5);
        assert_eq!(synth.frequency_at(0, 400.0, 0.13), 400.0);
    }

    #[test]
    fn test_levels_before_release() {
        let synth = RetroMelodySynth::new(vec![262.0, 330.0, 392.0], 0.2);
        let samples = synth.synthesize(26460, 44100.0, &mut create_rng(0));
        for &s in &samples[10..7000] {
            assert!(
                s == 0.0 || (s.abs() - RETRO_MELODY_GAIN).abs() < 1e-12,
                "unexpected level {}",
                s
            );
        }
    }
}
