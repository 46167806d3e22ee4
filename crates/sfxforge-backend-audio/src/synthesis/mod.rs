//! Sound generators.
//!
//! Each module implements one generator:
//! - `tone` - single oscillator with exponential decay
//! - `melody` - sine note sequence with per-note decay
//! - `noise` - noise burst over a sine tone
//! - `retro_tone` - quantized chip tone with optional pitch bend
//! - `retro_melody` - square-wave note sequence with optional arpeggio
//! - `retro_noise` - white, pink or periodic chip noise over a sine tone
//!
//! The free functions at the bottom of this module validate parameters,
//! render every channel of the [`RenderContext`] and clamp the result into
//! [-1, 1].

pub mod melody;
pub mod noise;
pub mod retro_melody;
pub mod retro_noise;
pub mod retro_tone;
pub mod tone;

use rand_pcg::Pcg32;
use sfxforge_spec::{NoiseType, Waveform};

use crate::buffer::{clamp_samples, SampleBuffer};
use crate::context::RenderContext;
use crate::error::{AudioError, AudioResult};
use crate::rng::create_rng;

pub use melody::{sequence_length, MelodySynth};
pub use noise::NoiseBurstSynth;
pub use retro_melody::RetroMelodySynth;
pub use retro_noise::{PinkFilter, RetroNoiseSynth};
pub use retro_tone::RetroToneSynth;
pub use tone::ToneSynth;

/// Common trait for all generators.
pub trait Synthesizer {
    /// Generates one channel of audio.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Deterministic RNG for any randomness
    ///
    /// # Returns
    /// Vector of audio samples, nominally in range [-1.0, 1.0]
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64>;
}

pub(crate) fn check_duration(duration: f64) -> AudioResult<()> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(AudioError::InvalidDuration { duration })
    }
}

pub(crate) fn check_frequency(freq: f64) -> AudioResult<()> {
    if freq.is_finite() && freq > 0.0 {
        Ok(())
    } else {
        Err(AudioError::InvalidFrequency { freq })
    }
}

pub(crate) fn check_notes(notes: &[f64], note_duration: f64) -> AudioResult<()> {
    if notes.is_empty() {
        return Err(AudioError::EmptyNotes);
    }
    check_duration(note_duration)?;
    notes.iter().try_for_each(|&freq| check_frequency(freq))
}

/// Renders a deterministic synth once and copies it to every channel.
fn render_mirrored<S: Synthesizer>(
    synth: &S,
    num_samples: usize,
    ctx: &RenderContext,
) -> SampleBuffer {
    // Deterministic synths never draw from the RNG.
    let mut rng = create_rng(0);
    let mut samples = synth.synthesize(num_samples, ctx.sample_rate() as f64, &mut rng);
    clamp_samples(&mut samples);
    SampleBuffer::new(
        ctx.sample_rate(),
        vec![samples; ctx.channel_count() as usize],
    )
}

/// Renders every channel separately, drawing from the same RNG in channel
/// order.
fn render_independent<S: Synthesizer>(
    synth: &S,
    num_samples: usize,
    ctx: &RenderContext,
    rng: &mut Pcg32,
) -> SampleBuffer {
    let sample_rate = ctx.sample_rate() as f64;
    let channels = (0..ctx.channel_count())
        .map(|_| {
            let mut samples = synth.synthesize(num_samples, sample_rate, rng);
            clamp_samples(&mut samples);
            samples
        })
        .collect();
    SampleBuffer::new(ctx.sample_rate(), channels)
}

/// Single oscillator tone with exponential decay.
pub fn tone(
    ctx: &RenderContext,
    frequency: f64,
    duration: f64,
    waveform: Waveform,
) -> AudioResult<SampleBuffer> {
    check_frequency(frequency)?;
    check_duration(duration)?;
    let synth = ToneSynth::new(frequency, waveform);
    let len = ctx.num_samples(duration)?;
    Ok(render_mirrored(&synth, len, ctx))
}

/// Sequence of sine notes, each `note_duration` seconds long.
pub fn melody(ctx: &RenderContext, notes: &[f64], note_duration: f64) -> AudioResult<SampleBuffer> {
    check_notes(notes, note_duration)?;
    let synth = MelodySynth::new(notes.to_vec(), note_duration);
    let len = ctx.sequence_samples(note_duration, notes.len())?;
    Ok(render_mirrored(&synth, len, ctx))
}

/// Noise burst mixed with a sine tone.
///
/// Each channel draws its own noise from `rng`.
pub fn noise_sound(
    ctx: &RenderContext,
    frequency: f64,
    duration: f64,
    rng: &mut Pcg32,
) -> AudioResult<SampleBuffer> {
    check_frequency(frequency)?;
    check_duration(duration)?;
    let synth = NoiseBurstSynth::new(frequency);
    let len = ctx.num_samples(duration)?;
    Ok(render_independent(&synth, len, ctx, rng))
}

/// Quantized chip tone with an attack/release envelope.
pub fn retro_tone(
    ctx: &RenderContext,
    frequency: f64,
    duration: f64,
    waveform: Waveform,
    pitch_bend: bool,
) -> AudioResult<SampleBuffer> {
    check_frequency(frequency)?;
    check_duration(duration)?;
    let synth = RetroToneSynth::new(frequency, duration, waveform).with_pitch_bend(pitch_bend);
    let len = ctx.num_samples(duration)?;
    Ok(render_mirrored(&synth, len, ctx))
}

/// Square-wave note sequence, optionally arpeggiating even-indexed notes.
pub fn retro_melody(
    ctx: &RenderContext,
    notes: &[f64],
    note_duration: f64,
    arpeggio: bool,
) -> AudioResult<SampleBuffer> {
    check_notes(notes, note_duration)?;
    let synth = RetroMelodySynth::new(notes.to_vec(), note_duration).with_arpeggio(arpeggio);
    let len = ctx.sequence_samples(note_duration, notes.len())?;
    Ok(render_mirrored(&synth, len, ctx))
}

/// Chip noise mixed with a sine tone, faded in and out.
///
/// Each channel draws its own noise from `rng` and starts with fresh pink
/// filter state.
pub fn retro_noise(
    ctx: &RenderContext,
    frequency: f64,
    duration: f64,
    noise_type: NoiseType,
    rng: &mut Pcg32,
) -> AudioResult<SampleBuffer> {
    check_frequency(frequency)?;
    check_duration(duration)?;
    let synth = RetroNoiseSynth::new(frequency, duration, noise_type);
    let len = ctx.num_samples(duration)?;
    Ok(render_independent(&synth, len, ctx, rng))
}
