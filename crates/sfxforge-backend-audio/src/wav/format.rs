//! WAV file format parameters.

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

/// Size of the canonical header in bytes.
pub const HEADER_SIZE: usize = 44;

/// Largest channel count the encoder accepts.
pub const MAX_CHANNELS: u16 = 64;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit format with any channel count.
    pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::pcm16(1, sample_rate)
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::pcm16(2, sample_rate)
    }

    /// Format describing a buffer.
    pub fn for_buffer(buffer: &SampleBuffer) -> AudioResult<Self> {
        let count = buffer.channel_count();
        match u16::try_from(count) {
            Ok(channels) if (1..=MAX_CHANNELS).contains(&channels) => {
                Ok(Self::pcm16(channels, buffer.sample_rate))
            }
            _ => Err(AudioError::UnsupportedChannelCount { count }),
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(self.block_align() as u32)
    }
}
