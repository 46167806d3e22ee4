//! Error types for audio backend.

use sfxforge_spec::{BackendError, SpecError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis and encoding.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No usable sample-rate source.
    #[error("audio context unavailable: {reason}")]
    ContextUnavailable {
        /// Why the context could not be created.
        reason: String,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Melody with no notes.
    #[error("note sequence is empty")]
    EmptyNotes,

    /// Descriptor could not be turned into a recipe.
    #[error(transparent)]
    InvalidDescriptor(#[from] SpecError),

    /// Channels of a buffer differ in length.
    #[error("channel {channel} has {found} samples, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Length of channel 0.
        expected: usize,
        /// Length of the offending channel.
        found: usize,
    },

    /// Buffer with no channels, or more than a WAV header can describe.
    #[error("unsupported channel count: {count}")]
    UnsupportedChannelCount {
        /// The channel count.
        count: usize,
    },

    /// PCM payload larger than a RIFF chunk can hold.
    #[error("PCM data too large for WAV: {bytes} bytes")]
    DataTooLarge {
        /// Payload size in bytes.
        bytes: u64,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates a context-unavailable error.
    pub fn context_unavailable(reason: impl Into<String>) -> Self {
        Self::ContextUnavailable {
            reason: reason.into(),
        }
    }

    /// Returns true for errors raised while encoding a buffer.
    pub fn is_encoding_failure(&self) -> bool {
        matches!(
            self,
            AudioError::ChannelLengthMismatch { .. }
                | AudioError::UnsupportedChannelCount { .. }
                | AudioError::DataTooLarge { .. }
        )
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::ContextUnavailable { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::InvalidFrequency { .. } => "AUDIO_003",
            AudioError::EmptyNotes => "AUDIO_004",
            AudioError::InvalidDescriptor(_) => "AUDIO_005",
            AudioError::ChannelLengthMismatch { .. } => "AUDIO_006",
            AudioError::UnsupportedChannelCount { .. } => "AUDIO_007",
            AudioError::DataTooLarge { .. } => "AUDIO_008",
            AudioError::Io(_) => "AUDIO_009",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
