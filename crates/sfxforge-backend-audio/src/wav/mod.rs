//! Deterministic 16-bit PCM WAV encoder.
//!
//! Output is a canonical 44-byte RIFF header followed by interleaved
//! little-endian samples, with no timestamps or optional chunks, so equal
//! buffers always encode to equal bytes. The BLAKE3 hash of the PCM payload
//! identifies the audio content independently of the header.

mod format;
mod pcm;
mod result;
mod writer;


pub use format::{WavFormat, HEADER_SIZE, MAX_CHANNELS};
pub use pcm::{compute_pcm_hash, extract_pcm_data, read_header, WavHeader};
pub use result::WavResult;
pub use writer::{encode, interleave_to_pcm16, sample_to_i16, write_wav, write_wav_to_vec};
