//! Reading WAV bytes back: header parsing, PCM extraction and hashing.

use super::format::{WavFormat, HEADER_SIZE};

/// Parsed canonical header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Format from the fmt chunk.
    pub format: WavFormat,
    /// Declared size of the data chunk in bytes.
    pub data_len: u32,
}

impl WavHeader {
    /// Number of sample frames described by the header.
    pub fn frames(&self) -> usize {
        match self.format.block_align() {
            0 => 0,
            align => self.data_len as usize / align as usize,
        }
    }
}

fn u16_at(bytes: &[u8], pos: usize) -> u16 {
    u16::from_le_bytes([bytes[pos], bytes[pos + 1]])
}

fn u32_at(bytes: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]])
}

/// Parses the canonical 44-byte header.
///
/// Returns None unless the bytes start with a RIFF/WAVE header whose `fmt `
/// chunk is 16-byte PCM immediately followed by the `data` chunk.
pub fn read_header(wav_data: &[u8]) -> Option<WavHeader> {
    if wav_data.len() < HEADER_SIZE {
        return None;
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }
    if &wav_data[12..16] != b"fmt " || u32_at(wav_data, 16) != 16 || u16_at(wav_data, 20) != 1 {
        return None;
    }
    if &wav_data[36..40] != b"data" {
        return None;
    }

    Some(WavHeader {
        format: WavFormat {
            channels: u16_at(wav_data, 22),
            sample_rate: u32_at(wav_data, 24),
            bits_per_sample: u16_at(wav_data, 34),
        },
        data_len: u32_at(wav_data, 40),
    })
}

/// Extracts PCM data from a WAV file buffer.
///
/// Walks the chunk list, so files with extra chunks are accepted too.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_SIZE {
        return None;
    }

    // Verify RIFF header
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos: usize = 12;
    while pos.checked_add(8)? <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32_at(wav_data, pos + 4) as usize;
        let data_start = pos + 8;

        if chunk_id == b"data" {
            let data_end = data_start.checked_add(chunk_size)?;
            return wav_data.get(data_start..data_end);
        }

        // Chunks are word aligned
        pos = data_start
            .checked_add(chunk_size)?
            .checked_add(chunk_size % 2)?;
    }

    None
}

/// Computes the BLAKE3 hash of the PCM payload of a WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
