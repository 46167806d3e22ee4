//! Sine note sequences.
//!
//! Notes are laid out back to back in fixed-length slots. Slot `k` covers
//! samples `round(k·d·sr)` up to `round((k+1)·d·sr)`, clipped to the buffer
//! length, and time restarts at zero at the start of every slot.

use std::ops::Range;

use rand_pcg::Pcg32;

use crate::envelope::exp_decay;
use crate::oscillator;

use super::Synthesizer;

/// Decay rate of each melody note, per second.
pub const NOTE_DECAY: f64 = 3.0;

/// Output gain of the melody.
pub const MELODY_GAIN: f64 = 0.2;

/// Number of samples in a note sequence: `round(sr · d · n)`.
pub fn sequence_length(sample_rate: f64, note_duration: f64, note_count: usize) -> usize {
    (sample_rate * note_duration * note_count as f64).round() as usize
}

/// Sample range of note `index`, clipped to `len`.
pub fn note_span(index: usize, note_duration: f64, sample_rate: f64, len: usize) -> Range<usize> {
    let slot = note_duration * sample_rate;
    let start = ((index as f64 * slot).round() as usize).min(len);
    let end = (((index + 1) as f64 * slot).round() as usize).min(len);
    start..end.max(start)
}

/// Melody synthesizer parameters.
#[derive(Debug, Clone)]
pub struct MelodySynth {
    /// Note frequencies in Hz.
    pub notes: Vec<f64>,
    /// Length of every note in seconds.
    pub note_duration: f64,
}

impl MelodySynth {
    /// Creates a new melody synthesizer.
    pub fn new(notes: Vec<f64>, note_duration: f64) -> Self {
        Self {
            notes,
            note_duration,
        }
    }
}

impl Synthesizer for MelodySynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, _rng: &mut Pcg32) -> Vec<f64> {
        let mut output = vec![0.0; num_samples];

        for (index, &freq) in self.notes.iter().enumerate() {
            let span = note_span(index, self.note_duration, sample_rate, num_samples);
            for (i, sample) in output[span].iter_mut().enumerate() {
                let t = i as f64 / sample_rate;
                *sample = oscillator::sine(freq, t) * exp_decay(t, NOTE_DECAY) * MELODY_GAIN;
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
    fn test_sequence_length() {
        assert_eq!(sequence_length(44100.0, 0.3, 4), 52920);
        assert_eq!(sequence_length(44100.0, 0.25, 3), 33075);
    }

    #[test]
    fn test_note_spans_tile_the_buffer() {
        let len = sequence_length(44100.0, 0.3, 4);
        let mut next = 0;
        for k in 0..4 {
            let span = note_span(k, 0.3, 44100.0, len);
            assert_eq!(span.start, next);
            next = span.end;
        }
        assert_eq!(next, len);
    }

    #[test]
    fn test_note_span_clipped() {
        assert_eq!(note_span(5, 0.3, 44100.0, 100), 100..100);
    }

    #[test]
    fn test_time_resets_each_note() {
        let mut rng = create_rng(0);
        let synth = MelodySynth::new(vec![523.0, 659.0, 784.0, 1047.0], 0.3);
        let samples = synth.synthesize(52920, 44100.0, &mut rng);
        for k in 0..4 {
            let start = note_span(k, 0.3, 44100.0, 52920).start;
            assert_eq!(samples[start], 0.0);
            // First sample after the boundary follows the new note's sine.
            let expected = oscillator::sine(synth.notes[k], 1.0 / 44100.0)
                * exp_decay(1.0 / 44100.0, NOTE_DECAY)
                * MELODY_GAIN;
            assert!((samples[start + 1] - expected).abs() < 1e-12);
        }
    }
}
