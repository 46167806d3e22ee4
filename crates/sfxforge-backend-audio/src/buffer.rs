//! Multi-channel sample buffers.

use crate::error::{AudioError, AudioResult};

/// Rendered audio: one `Vec<f64>` per channel, samples in [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Per-channel samples; all channels have the same length.
    pub channels: Vec<Vec<f64>>,
}

impl SampleBuffer {
    /// Creates a buffer from channel data.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f64>>) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// Creates an all-zero buffer.
    pub fn silent(sample_rate: u32, channel_count: usize, num_samples: usize) -> Self {
        Self::new(sample_rate, vec![vec![0.0; num_samples]; channel_count])
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel (length of the first channel).
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Option<&[f64]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    /// Checks that the buffer has at least one channel and that all channels
    /// have equal length. Returns the per-channel length.
    pub fn frame_count(&self) -> AudioResult<usize> {
        let expected = match self.channels.first() {
            Some(first) => first.len(),
            None => return Err(AudioError::UnsupportedChannelCount { count: 0 }),
        };
        for (channel, samples) in self.channels.iter().enumerate().skip(1) {
            if samples.len() != expected {
                return Err(AudioError::ChannelLengthMismatch {
                    channel,
                    expected,
                    found: samples.len(),
                });
            }
        }
        Ok(expected)
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        self.channels
            .iter()
            .flatten()
            .fold(0.0_f64, |acc, s| acc.max(s.abs()))
    }

    /// Root-mean-square level over all channels.
    pub fn rms(&self) -> f64 {
        let count: usize = self.channels.iter().map(Vec::len).sum();
        if count == 0 {
            return 0.0;
        }
        let sum_sq: f64 = self.channels.iter().flatten().map(|s| s * s).sum();
        (sum_sq / count as f64).sqrt()
    }
}

/// Clamps samples into [-1, 1] in place.
pub fn clamp_samples(samples: &mut [f64]) {
    for s in samples.iter_mut() {
        *s = s.clamp(-1.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_buffer() {
        let buffer = SampleBuffer::silent(44100, 2, 441);
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.len(), 441);
        assert_eq!(buffer.frame_count().unwrap(), 441);
        assert!((buffer.duration_seconds() - 0.01).abs() < 1e-12);
        assert_eq!(buffer.peak(), 0.0);
        assert_eq!(buffer.rms(), 0.0);
    }

    #[test]
    fn test_frame_count_rejects_mismatch() {
        let buffer = SampleBuffer::new(44100, vec![vec![0.0; 4], vec![0.0; 3]]);
        match buffer.frame_count() {
            Err(AudioError::ChannelLengthMismatch {
                channel,
                expected,
                found,
            }) => {
                assert_eq!((channel, expected, found), (1, 4, 3));
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_frame_count_rejects_no_channels() {
        let buffer = SampleBuffer::new(44100, vec![]);
        assert!(buffer.is_empty());
        assert!(buffer.frame_count().is_err());
    }

    #[test]
    fn test_peak_and_rms() {
        let buffer = SampleBuffer::new(8000, vec![vec![0.5, -0.5], vec![-1.0, 1.0]]);
        assert_eq!(buffer.peak(), 1.0);
        let expected = ((0.25 + 0.25 + 1.0 + 1.0) / 4.0_f64).sqrt();
        assert!((buffer.rms() - expected).abs() < 1e-12);
        assert_eq!(buffer.channel(1), Some(&[-1.0, 1.0][..]));
        assert_eq!(buffer.channel(2), None);
    }

    #[test]
    fn test_clamp_samples() {
        let mut samples = vec![-3.0, -0.25, 0.0, 0.75, 2.0];
        clamp_samples(&mut samples);
        assert_eq!(samples, vec![-1.0, -0.25, 0.0, 0.75, 1.0]);
    }
}
