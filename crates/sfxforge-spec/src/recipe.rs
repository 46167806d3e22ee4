//! Generation recipes and the descriptor-to-recipe selection policy.
//!
//! A [`Recipe`] names exactly one generator together with the parameters it
//! needs. [`SoundDescriptor::recipe`] turns a catalog entry into a recipe.

use serde::{Deserialize, Serialize};

use crate::descriptor::SoundDescriptor;
use crate::error::SpecError;

/// Frequency of the fallback tone used when a descriptor has neither notes
/// nor a frequency.
pub const FALLBACK_FREQUENCY: f64 = 440.0;

/// Oscillator waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    #[default]
    Sine,
    /// Square wave.
    Square,
    /// Sawtooth wave.
    Sawtooth,
    /// Triangle wave.
    Triangle,
}

impl Waveform {
    /// Returns the waveform as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(Waveform::Sine),
            "square" => Ok(Waveform::Square),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            "triangle" => Ok(Waveform::Triangle),
            _ => Err(format!("unknown waveform: {}", s)),
        }
    }
}

/// Noise model for retro noise sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseType {
    /// Uniform white noise.
    White,
    /// Pink noise (Paul Kellet's filter cascade).
    Pink,
    /// Quantized noise with a periodic accent tied to the tone pitch.
    #[default]
    Retro,
}

impl NoiseType {
    /// Returns the noise type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseType::White => "white",
            NoiseType::Pink => "pink",
            NoiseType::Retro => "retro",
        }
    }
}

/// One generator invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Recipe {
    /// Single decaying oscillator tone.
    Tone {
        /// Frequency in Hz.
        frequency: f64,
        /// Length in seconds.
        duration: f64,
        /// Oscillator shape.
        waveform: Waveform,
    },
    /// Sequence of decaying sine notes.
    Melody {
        /// Note frequencies in Hz.
        notes: Vec<f64>,
        /// Length of each note slot in seconds.
        note_duration: f64,
    },
    /// Sine tone with a light white-noise bed.
    Noise {
        /// Frequency in Hz.
        frequency: f64,
        /// Length in seconds.
        duration: f64,
    },
    /// Quantized chip tone with a linear envelope.
    RetroTone {
        /// Frequency in Hz.
        frequency: f64,
        /// Length in seconds.
        duration: f64,
        /// Oscillator shape.
        waveform: Waveform,
        /// Slow vibrato.
        pitch_bend: bool,
    },
    /// Quantized square-wave melody.
    RetroMelody {
        /// Note frequencies in Hz.
        notes: Vec<f64>,
        /// Length of each note slot in seconds.
        note_duration: f64,
        /// Triad arpeggio on even-indexed notes.
        arpeggio: bool,
    },
    /// Chip noise mixed with a steady tone.
    RetroNoise {
        /// Frequency in Hz.
        frequency: f64,
        /// Length in seconds.
        duration: f64,
        /// Noise model.
        noise_type: NoiseType,
    },
}

impl Recipe {
    /// Short generator name (e.g. "retro_tone").
    pub fn kind(&self) -> &'static str {
        match self {
            Recipe::Tone { .. } => "tone",
            Recipe::Melody { .. } => "melody",
            Recipe::Noise { .. } => "noise",
            Recipe::RetroTone { .. } => "retro_tone",
            Recipe::RetroMelody { .. } => "retro_melody",
            Recipe::RetroNoise { .. } => "retro_noise",
        }
    }

    /// Total length of the rendered sound in seconds.
    pub fn total_duration(&self) -> f64 {
        match self {
            Recipe::Tone { duration, .. }
            | Recipe::Noise { duration, .. }
            | Recipe::RetroTone { duration, .. }
            | Recipe::RetroNoise { duration, .. } => *duration,
            Recipe::Melody {
                notes,
                note_duration,
            }
            | Recipe::RetroMelody {
                notes,
                note_duration,
                ..
            } => notes.len() as f64 * note_duration,
        }
    }

    /// Returns true if the generator draws random numbers.
    pub fn uses_rng(&self) -> bool {
        matches!(self, Recipe::Noise { .. } | Recipe::RetroNoise { .. })
    }
}

impl SoundDescriptor {
    /// Selects the generator recipe for this descriptor.
    ///
    /// Notes win over frequency; a frequency drives a noise generator when
    /// [`SoundDescriptor::is_noise`] holds and a tone otherwise; with neither,
    /// a 440 Hz fallback tone is used. Numeric ranges are checked by the
    /// generators, not here.
    ///
    /// `notes: Some([])` is an error; it never falls back to `frequency`.
    pub fn recipe(&self) -> Result<Recipe, SpecError> {
        if let Some(notes) = &self.notes {
            if notes.is_empty() {
                return Err(SpecError::invalid_descriptor(
                    &self.filename,
                    "note sequence is empty",
                ));
            }
            let note_duration = self.duration / notes.len() as f64;
            return Ok(match &self.retro {
                Some(profile) => Recipe::RetroMelody {
                    notes: notes.clone(),
                    note_duration,
                    arpeggio: profile.arpeggio,
                },
                None => Recipe::Melody {
                    notes: notes.clone(),
                    note_duration,
                },
            });
        }

        let duration = self.duration;
        let recipe = match (self.frequency, &self.retro) {
            (Some(frequency), None) if self.is_noise() => Recipe::Noise {
                frequency,
                duration,
            },
            (Some(frequency), None) => Recipe::Tone {
                frequency,
                duration,
                waveform: self.wave_type.unwrap_or(Waveform::Sine),
            },
            (Some(frequency), Some(_)) if self.is_noise() => Recipe::RetroNoise {
                frequency,
                duration,
                noise_type: NoiseType::Retro,
            },
            (Some(frequency), Some(profile)) => Recipe::RetroTone {
                frequency,
                duration,
                waveform: profile.chip_type.waveform(),
                pitch_bend: profile.pitch_bend,
            },
            (None, None) => Recipe::Tone {
                frequency: FALLBACK_FREQUENCY,
                duration,
                waveform: Waveform::Sine,
            },
            (None, Some(_)) => Recipe::RetroTone {
                frequency: FALLBACK_FREQUENCY,
                duration,
                waveform: Waveform::Square,
                pitch_bend: false,
            },
        };
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Category, ChipType, RetroProfile, RetroStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_notes_take_precedence() {
        let mut desc = SoundDescriptor::melody("win.mp3", vec![523.0, 659.0, 784.0, 1047.0], 1.2);
        desc.frequency = Some(300.0);

        let recipe = desc.recipe().unwrap();
        match recipe {
            Recipe::Melody {
                notes,
                note_duration,
            } => {
                assert_eq!(notes.len(), 4);
                assert!((note_duration - 0.3).abs() < 1e-12);
            }
            other => panic!("expected melody, got {:?}", other),
        }
    }

    #[test]
    fn test_tone_defaults_to_sine() {
        let recipe = SoundDescriptor::tone("draw.mp3", 440.0, 0.6)
            .recipe()
            .unwrap();
        assert_eq!(
            recipe,
            Recipe::Tone {
                frequency: 440.0,
                duration: 0.6,
                waveform: Waveform::Sine,
            }
        );
    }

    #[test]
    fn test_ambient_frequency_selects_noise() {
        let recipe = SoundDescriptor::tone("hum.mp3", 60.0, 10.0)
            .category(Category::Ambient)
            .wave(Waveform::Sine)
            .recipe()
            .unwrap();
        assert_eq!(
            recipe,
            Recipe::Noise {
                frequency: 60.0,
                duration: 10.0,
            }
        );
    }

    #[test]
    fn test_fallback_tones() {
        let mut modern = SoundDescriptor::tone("blank.mp3", 1.0, 0.5);
        modern.frequency = None;
        assert_eq!(
            modern.recipe().unwrap(),
            Recipe::Tone {
                frequency: FALLBACK_FREQUENCY,
                duration: 0.5,
                waveform: Waveform::Sine,
            }
        );

        let retro = modern
            .clone()
            .retro(RetroProfile::new(ChipType::Square1, RetroStyle::Arcade));
        assert_eq!(
            retro.recipe().unwrap(),
            Recipe::RetroTone {
                frequency: FALLBACK_FREQUENCY,
                duration: 0.5,
                waveform: Waveform::Square,
                pitch_bend: false,
            }
        );
    }

    #[test]
    fn test_retro_selection() {
        let tone = SoundDescriptor::tone("gameDraw.mp3", 330.0, 1.8)
            .wave(Waveform::Sine)
            .retro(RetroProfile::new(ChipType::Triangle, RetroStyle::Nes).with_pitch_bend());
        assert_eq!(
            tone.recipe().unwrap(),
            Recipe::RetroTone {
                frequency: 330.0,
                duration: 1.8,
                waveform: Waveform::Triangle,
                pitch_bend: true,
            }
        );

        let noise = SoundDescriptor::tone("lose.mp3", 200.0, 0.8)
            .retro(RetroProfile::new(ChipType::Noise, RetroStyle::Nes));
        assert_eq!(
            noise.recipe().unwrap(),
            Recipe::RetroNoise {
                frequency: 200.0,
                duration: 0.8,
                noise_type: NoiseType::Retro,
            }
        );

        let melody = SoundDescriptor::melody("gameStart.mp3", vec![392.0, 523.0, 659.0], 1.5)
            .retro(RetroProfile::new(ChipType::Square1, RetroStyle::Nes).with_arpeggio());
        match melody.recipe().unwrap() {
            Recipe::RetroMelody { arpeggio, .. } => assert!(arpeggio),
            other => panic!("expected retro melody, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_notes_rejected() {
        let desc = SoundDescriptor::melody("silent.mp3", vec![], 1.0);
        let err = desc.recipe().unwrap_err();
        assert!(err.to_string().contains("silent.mp3"));

        let mut with_frequency = SoundDescriptor::melody("silent.mp3", vec![], 1.0);
        with_frequency.frequency = Some(440.0);
        assert!(with_frequency.recipe().is_err());
    }

    #[test]
    fn test_total_duration_and_kind() {
        let recipe = Recipe::RetroMelody {
            notes: vec![220.0, 277.0, 330.0, 370.0],
            note_duration: 5.0,
            arpeggio: false,
        };
        assert_eq!(recipe.kind(), "retro_melody");
        assert_eq!(recipe.total_duration(), 20.0);
        assert!(!recipe.uses_rng());
        assert!(Recipe::Noise {
            frequency: 60.0,
            duration: 1.0
        }
        .uses_rng());
    }

    #[test]
    fn test_recipe_json_tagging() {
        let recipe = Recipe::RetroNoise {
            frequency: 200.0,
            duration: 15.0,
            noise_type: NoiseType::Pink,
        };
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["type"], "retro_noise");
        assert_eq!(json["noise_type"], "pink");
        let back: Recipe = serde_json::from_value(json).unwrap();
        assert_eq!(back, recipe);
    }
}
