//! Core WAV writing and PCM conversion functions.

use std::io::Write;

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

use super::format::{WavFormat, HEADER_SIZE};

/// Writes a complete WAV file to a writer.
///
/// Fails with [`AudioError::DataTooLarge`] before writing anything if the
/// payload does not fit a RIFF chunk.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> AudioResult<()> {
    let too_large = || AudioError::DataTooLarge {
        bytes: pcm_data.len() as u64,
    };
    let data_size = u32::try_from(pcm_data.len()).map_err(|_| too_large())?;
    // Total file size minus 8 bytes for the RIFF header
    let file_size = data_size.checked_add(36).ok_or_else(too_large)?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> AudioResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Converts one sample to 16-bit PCM.
///
/// The sample is clamped to [-1, 1], scaled by 32767 and truncated toward
/// zero. NaN maps to 0.
#[inline]
pub fn sample_to_i16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0) as i16
}

/// Converts a buffer to interleaved little-endian 16-bit PCM bytes.
///
/// Frame `i` holds sample `i` of channel 0, then channel 1, and so on.
pub fn interleave_to_pcm16(buffer: &SampleBuffer) -> AudioResult<Vec<u8>> {
    let frames = buffer.frame_count()?;
    let mut pcm = Vec::with_capacity(frames * buffer.channel_count() * 2);

    for i in 0..frames {
        for channel in &buffer.channels {
            pcm.extend_from_slice(&sample_to_i16(channel[i]).to_le_bytes());
        }
    }

    Ok(pcm)
}

/// Encodes a buffer as a complete WAV file.
///
/// The buffer is checked before any byte is produced: it must have between
/// 1 and [`MAX_CHANNELS`](super::MAX_CHANNELS) channels of equal length.
pub fn encode(buffer: &SampleBuffer) -> AudioResult<Vec<u8>> {
    let format = WavFormat::for_buffer(buffer)?;
    let pcm = interleave_to_pcm16(buffer)?;
    write_wav_to_vec(&format, &pcm)
}
