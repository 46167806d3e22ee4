//! Render context: the sample-rate source every generator needs.
//!
//! The context is a plain value created once by the caller and passed by
//! reference; generators never hold on to it.

use sfxforge_spec::DEFAULT_SAMPLE_RATE;

use crate::error::{AudioError, AudioResult};

/// Lowest supported sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8_000;

/// Highest supported sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Channel count used by every catalog sound.
pub const DEFAULT_CHANNELS: u16 = 2;

/// Largest PCM payload in bytes a WAV data chunk can describe.
pub const MAX_DATA_BYTES: u64 = u32::MAX as u64 - 36;

/// Sample rate and channel layout for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    sample_rate: u32,
    channel_count: u16,
}

impl RenderContext {
    /// Creates a stereo context.
    pub fn new(sample_rate: u32) -> AudioResult<Self> {
        Self::with_channels(sample_rate, DEFAULT_CHANNELS)
    }

    /// Creates a context with an explicit channel count.
    pub fn with_channels(sample_rate: u32, channel_count: u16) -> AudioResult<Self> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
            return Err(AudioError::context_unavailable(format!(
                "sample rate {} Hz is outside {}..={} Hz",
                sample_rate, MIN_SAMPLE_RATE, MAX_SAMPLE_RATE
            )));
        }
        if channel_count == 0 {
            return Err(AudioError::context_unavailable(
                "context must have at least one channel",
            ));
        }
        Ok(Self {
            sample_rate,
            channel_count,
        })
    }

    /// Creates a context from an optional sample-rate source.
    ///
    /// `None` means the host could not provide a rate at all.
    pub fn from_source(sample_rate: Option<u32>) -> AudioResult<Self> {
        match sample_rate {
            Some(rate) => Self::new(rate),
            None => Err(AudioError::context_unavailable("no sample rate source")),
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of output channels.
    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    /// Most frames per channel that still encode as a 16-bit WAV.
    pub fn max_frames(&self) -> usize {
        (MAX_DATA_BYTES / (u64::from(self.channel_count) * 2)) as usize
    }

    /// Number of samples per channel for a duration: `round(rate × seconds)`.
    ///
    /// Fails with `InvalidDuration` when the result would not fit a WAV file,
    /// so nothing is allocated for absurd durations.
    pub fn num_samples(&self, duration: f64) -> AudioResult<usize> {
        self.checked_frames((self.sample_rate as f64 * duration).round(), duration)
    }

    /// Number of samples per channel for `count` notes of `note_duration`.
    pub fn sequence_samples(&self, note_duration: f64, count: usize) -> AudioResult<usize> {
        let frames = (self.sample_rate as f64 * note_duration * count as f64).round();
        self.checked_frames(frames, note_duration * count as f64)
    }

    fn checked_frames(&self, frames: f64, duration: f64) -> AudioResult<usize> {
        if frames.is_finite() && frames >= 0.0 && frames <= self.max_frames() as f64 {
            Ok(frames as usize)
        } else {
            Err(AudioError::InvalidDuration { duration })
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channel_count: DEFAULT_CHANNELS,
        }
    }
}
