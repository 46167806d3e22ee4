//! SfxForge Audio Backend
//!
//! This crate renders the game sound effects described by `sfxforge-spec`
//! and encodes them as 16-bit PCM WAV.
//!
//! # Overview
//!
//! Six generators cover the catalog:
//!
//! - **Tone** - one oscillator (sine, square, sawtooth, triangle) with exponential decay
//! - **Melody** - sine note sequence, every note decaying from its own start
//! - **Noise** - seeded noise burst over a low sine tone
//! - **Retro tone** - 31-level quantized chip tone with optional pitch bend
//! - **Retro melody** - square-wave notes with optional major-triad arpeggio
//! - **Retro noise** - white, pink or periodic chip noise, faded in and out
//!
//! # Determinism
//!
//! Non-noise generators are pure functions of their parameters and the
//! sample rate. Noise generators draw from an explicit PCG32 RNG, so equal
//! seeds give bit-identical buffers; catalog sounds derive their seed from
//! the base seed and the filename with BLAKE3.
//!
//! # Example
//!
//! ```
//! use sfxforge_backend_audio::{generate, wav, RenderContext};
//! use sfxforge_spec::{Recipe, Waveform};
//!
//! let ctx = RenderContext::new(44100).unwrap();
//! let recipe = Recipe::Tone {
//!     frequency: 800.0,
//!     duration: 0.1,
//!     waveform: Waveform::Square,
//! };
//! let buffer = generate(&recipe, &ctx, 42).unwrap();
//! assert_eq!(buffer.len(), 4410);
//!
//! let bytes = wav::encode(&buffer).unwrap();
//! assert_eq!(bytes.len(), 44 + 4410 * 2 * 2);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Recipe dispatch, descriptor rendering and batches
//! - [`synthesis`] - The six generators
//! - [`envelope`] - Amplitude envelopes
//! - [`oscillator`] - Basic waveform functions
//! - [`levels`] - Playback mix levels
//! - [`rng`] - Deterministic RNG
//! - [`wav`] - Deterministic WAV encoder

pub mod buffer;
pub mod context;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod levels;
pub mod oscillator;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use context::RenderContext;
pub use error::{AudioError, AudioResult};
pub use generate::{
    generate, generate_catalog, generate_descriptor, BatchFailure, BatchOutcome, RenderedSound,
};
pub use levels::{apply_gain, MixLevels};
pub use wav::WavResult;
