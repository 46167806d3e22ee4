//! Main entry points for sound generation.
//!
//! [`generate`] dispatches a [`Recipe`] to its generator. The descriptor and
//! catalog helpers add recipe selection, per-sound seeding and encoding on
//! top of it.

use sfxforge_spec::{derive_sound_seed, Recipe, SoundDescriptor};

use crate::buffer::SampleBuffer;
use crate::context::RenderContext;
use crate::error::{AudioError, AudioResult};
use crate::rng::create_rng;
use crate::synthesis;
use crate::wav::WavResult;

/// Generates a buffer from a recipe.
///
/// # Arguments
/// * `recipe` - Which generator to run and its parameters
/// * `ctx` - Sample rate and channel layout
/// * `seed` - RNG seed, only used by noise recipes
///
/// # Returns
/// Buffer with `ctx.channel_count()` equal-length channels in [-1, 1]
pub fn generate(recipe: &Recipe, ctx: &RenderContext, seed: u32) -> AudioResult<SampleBuffer> {
    match recipe {
        Recipe::Tone {
            frequency,
            duration,
            waveform,
        } => synthesis::tone(ctx, *frequency, *duration, *waveform),
        Recipe::Melody {
            notes,
            note_duration,
        } => synthesis::melody(ctx, notes, *note_duration),
        Recipe::Noise {
            frequency,
            duration,
        } => synthesis::noise_sound(ctx, *frequency, *duration, &mut create_rng(seed)),
        Recipe::RetroTone {
            frequency,
            duration,
            waveform,
            pitch_bend,
        } => synthesis::retro_tone(ctx, *frequency, *duration, *waveform, *pitch_bend),
        Recipe::RetroMelody {
            notes,
            note_duration,
            arpeggio,
        } => synthesis::retro_melody(ctx, notes, *note_duration, *arpeggio),
        Recipe::RetroNoise {
            frequency,
            duration,
            noise_type,
        } => synthesis::retro_noise(
            ctx,
            *frequency,
            *duration,
            *noise_type,
            &mut create_rng(seed),
        ),
    }
}

/// Generates a buffer for a catalog sound.
///
/// The noise seed is derived from `base_seed` and the sound's filename, so
/// each sound in a catalog gets its own reproducible noise.
pub fn generate_descriptor(
    sound: &SoundDescriptor,
    ctx: &RenderContext,
    base_seed: u32,
) -> AudioResult<SampleBuffer> {
    render_descriptor(sound, ctx, base_seed).map(|(_, buffer)| buffer)
}

/// Renders a descriptor and reports which generator ran.
fn render_descriptor(
    sound: &SoundDescriptor,
    ctx: &RenderContext,
    base_seed: u32,
) -> AudioResult<(&'static str, SampleBuffer)> {
    let recipe = sound.recipe()?;
    let buffer = generate(&recipe, ctx, derive_sound_seed(base_seed, &sound.filename))?;

    tracing::debug!(
        filename = %sound.filename,
        kind = recipe.kind(),
        samples = buffer.len(),
        "rendered sound"
    );
    Ok((recipe.kind(), buffer))
}

/// A successfully rendered and encoded catalog sound.
#[derive(Debug, Clone)]
pub struct RenderedSound {
    /// Position of the sound in the input slice.
    pub index: usize,
    /// Source filename of the sound.
    pub filename: String,
    /// Name of the generator that produced it.
    pub kind: &'static str,
    /// Encoded WAV and PCM hash.
    pub wav: WavResult,
}

/// A catalog sound that failed to render or encode.
#[derive(Debug)]
pub struct BatchFailure {
    /// Position of the sound in the input slice.
    pub index: usize,
    /// Source filename of the sound.
    pub filename: String,
    /// What went wrong.
    pub error: AudioError,
}

/// Result of rendering a list of sounds.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Sounds that rendered, in input order.
    pub rendered: Vec<RenderedSound>,
    /// Sounds that failed, in input order.
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Returns true if no sound failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of sounds processed.
    pub fn total(&self) -> usize {
        self.rendered.len() + self.failures.len()
    }
}

fn render_one(
    index: usize,
    sound: &SoundDescriptor,
    ctx: &RenderContext,
    base_seed: u32,
) -> AudioResult<RenderedSound> {
    let (kind, buffer) = render_descriptor(sound, ctx, base_seed)?;
    let wav = WavResult::from_buffer(&buffer)?;
    Ok(RenderedSound {
        index,
        filename: sound.filename.clone(),
        kind,
        wav,
    })
}

/// Renders and encodes every sound independently.
///
/// A failing sound is logged and recorded; the remaining sounds are still
/// rendered.
pub fn generate_catalog(
    sounds: &[SoundDescriptor],
    ctx: &RenderContext,
    base_seed: u32,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (index, sound) in sounds.iter().enumerate() {
        match render_one(index, sound, ctx, base_seed) {
            Ok(rendered) => outcome.rendered.push(rendered),
            Err(error) => {
                tracing::warn!(filename = %sound.filename, %error, "failed to render sound");
                outcome.failures.push(BatchFailure {
                    index,
                    filename: sound.filename.clone(),
                    error,
                });
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfxforge_spec::{Catalog, Edition, NoiseType, Waveform};

    fn ctx() -> RenderContext {
        RenderContext::default()
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let recipe = Recipe::Tone {
            frequency: 800.0,
            duration: 0.1,
            waveform: Waveform::Square,
        };
        let via_dispatch = generate(&recipe, &ctx(), 1).unwrap();
        let direct = synthesis::tone(&ctx(), 800.0, 0.1, Waveform::Square).unwrap();
        assert_eq!(via_dispatch, direct);
    }

    #[test]
    fn test_seed_only_affects_noise() {
        let tone = Recipe::RetroTone {
            frequency: 440.0,
            duration: 0.2,
            waveform: Waveform::Triangle,
            pitch_bend: true,
        };
        assert_eq!(
            generate(&tone, &ctx(), 1).unwrap(),
            generate(&tone, &ctx(), 2).unwrap()
        );

        let noise = Recipe::RetroNoise {
            frequency: 150.0,
            duration: 0.2,
            noise_type: NoiseType::White,
        };
        assert_eq!(
            generate(&noise, &ctx(), 1).unwrap(),
            generate(&noise, &ctx(), 1).unwrap()
        );
        assert_ne!(
            generate(&noise, &ctx(), 1).unwrap(),
            generate(&noise, &ctx(), 2).unwrap()
        );
    }

    #[test]
    fn test_descriptor_errors_surface() {
        let sound = SoundDescriptor::melody("broken.mp3", vec![], 1.0);
        let err = generate_descriptor(&sound, &ctx(), 42).unwrap_err();
        assert!(matches!(err, AudioError::InvalidDescriptor(_)));
    }

    #[test]
    fn test_rendered_kind_matches_recipe() {
        for sound in &Catalog::builtin(Edition::Retro).sounds {
            let (kind, buffer) = render_descriptor(sound, &ctx(), 42).unwrap();
            assert_eq!(kind, sound.recipe().unwrap().kind(), "{}", sound.filename);
            assert_eq!(buffer, generate_descriptor(sound, &ctx(), 42).unwrap());
        }
    }

    #[test]
    fn test_builtin_catalogs_render_completely() {
        let short = RenderContext::new(8000).unwrap();
        for &edition in Edition::all() {
            let catalog = Catalog::builtin(edition);
            let outcome = generate_catalog(&catalog.sounds, &short, 42);
            assert!(outcome.is_complete(), "{:?}", outcome.failures);
            assert_eq!(outcome.total(), catalog.len());
            for (i, rendered) in outcome.rendered.iter().enumerate() {
                assert_eq!(rendered.index, i);
                assert_eq!(rendered.filename, catalog.sounds[i].filename);
            }
        }
    }
}
