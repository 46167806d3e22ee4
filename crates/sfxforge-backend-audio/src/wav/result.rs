//! WAV file generation result type.

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

use super::format::WavFormat;
use super::writer::{interleave_to_pcm16, write_wav_to_vec};

/// Encoded WAV file plus metadata.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a buffer and hashes its PCM payload.
    pub fn from_buffer(buffer: &SampleBuffer) -> AudioResult<Self> {
        let format = WavFormat::for_buffer(buffer)?;
        let pcm = interleave_to_pcm16(buffer)?;
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            channels: format.channels,
            sample_rate: format.sample_rate,
            num_samples: buffer.len(),
        })
    }

    /// Whether the output has two channels.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
