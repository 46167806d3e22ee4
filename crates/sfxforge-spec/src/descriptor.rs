//! Sound descriptor types.
//!
//! A [`SoundDescriptor`] is one static catalog entry: what the sound is for,
//! how long it lasts, and the parameters that pick and drive a generator.

use serde::{Deserialize, Serialize};

use crate::recipe::Waveform;

/// Catalog category of a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// One-shot sound effect.
    #[default]
    Standard,
    /// Background atmosphere, usually looped.
    Ambient,
}

impl Category {
    /// Returns the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Ambient => "ambient",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sound chip channel emulated by a retro sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipType {
    /// First pulse/square channel.
    Square1,
    /// Second pulse/square channel.
    Square2,
    /// Triangle channel.
    Triangle,
    /// Noise channel.
    Noise,
    /// Generic pulse channel.
    Pulse,
}

impl ChipType {
    /// Returns the chip channel as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChipType::Square1 => "square1",
            ChipType::Square2 => "square2",
            ChipType::Triangle => "triangle",
            ChipType::Noise => "noise",
            ChipType::Pulse => "pulse",
        }
    }

    /// Waveform the chip channel renders with.
    ///
    /// The noise channel has no tonal waveform; sawtooth is the closest
    /// approximation when a noise-channel sound is rendered as a tone.
    pub fn waveform(&self) -> Waveform {
        match self {
            ChipType::Square1 | ChipType::Square2 | ChipType::Pulse => Waveform::Square,
            ChipType::Triangle => Waveform::Triangle,
            ChipType::Noise => Waveform::Sawtooth,
        }
    }
}

impl std::fmt::Display for ChipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Console family a retro sound imitates. Only used for documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetroStyle {
    /// Nintendo Entertainment System.
    Nes,
    /// Game Boy.
    Gameboy,
    /// Commodore 64.
    C64,
    /// Arcade cabinet.
    Arcade,
}

impl RetroStyle {
    /// Returns the style as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RetroStyle::Nes => "nes",
            RetroStyle::Gameboy => "gameboy",
            RetroStyle::C64 => "c64",
            RetroStyle::Arcade => "arcade",
        }
    }
}

impl std::fmt::Display for RetroStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Chip-emulation settings of a retro sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetroProfile {
    /// Emulated chip channel.
    pub chip_type: ChipType,
    /// Console family.
    pub style: RetroStyle,
    /// Slow vibrato on single tones.
    #[serde(default)]
    pub pitch_bend: bool,
    /// Major-triad arpeggio on every other melody note.
    #[serde(default)]
    pub arpeggio: bool,
    /// Pulse duty cycle label (e.g. "25%"); documentation only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_cycle: Option<String>,
}

impl RetroProfile {
    /// Creates a profile with no effects enabled.
    pub fn new(chip_type: ChipType, style: RetroStyle) -> Self {
        Self {
            chip_type,
            style,
            pitch_bend: false,
            arpeggio: false,
            duty_cycle: None,
        }
    }

    /// Enables pitch bend.
    pub fn with_pitch_bend(mut self) -> Self {
        self.pitch_bend = true;
        self
    }

    /// Enables arpeggio.
    pub fn with_arpeggio(mut self) -> Self {
        self.arpeggio = true;
        self
    }

    /// Sets the duty cycle label.
    pub fn with_duty_cycle(mut self, duty: impl Into<String>) -> Self {
        self.duty_cycle = Some(duty.into());
        self
    }

    /// Effect tags for documentation ("Pitch Bend", "Arpeggio", "Duty Cycle 25%").
    pub fn effect_tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if self.pitch_bend {
            tags.push("Pitch Bend".to_string());
        }
        if self.arpeggio {
            tags.push("Arpeggio".to_string());
        }
        if let Some(duty) = &self.duty_cycle {
            tags.push(format!("Duty Cycle {}", duty));
        }
        tags
    }
}

/// A single catalog entry describing one sound to synthesize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundDescriptor {
    /// Nominal filename (e.g. "click.mp3"); exported with a `.wav` suffix.
    pub filename: String,
    /// Catalog category.
    #[serde(default)]
    pub category: Category,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Where the sound is used.
    #[serde(default)]
    pub usage: String,
    /// Total rendered length in seconds.
    pub duration: f64,
    /// Whether the sound is meant to loop.
    #[serde(default)]
    pub is_loop: bool,
    /// Primary tone frequency in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Melody note frequencies in Hz; takes precedence over `frequency`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<f64>>,
    /// Oscillator shape for tones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_type: Option<Waveform>,
    /// Chip-emulation settings; present for retro sounds only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retro: Option<RetroProfile>,
}

impl SoundDescriptor {
    /// Creates a single-tone descriptor.
    pub fn tone(filename: impl Into<String>, frequency: f64, duration: f64) -> Self {
        Self {
            filename: filename.into(),
            category: Category::Standard,
            description: String::new(),
            usage: String::new(),
            duration,
            is_loop: false,
            frequency: Some(frequency),
            notes: None,
            wave_type: None,
            retro: None,
        }
    }

    /// Creates a melody descriptor.
    pub fn melody(filename: impl Into<String>, notes: Vec<f64>, duration: f64) -> Self {
        Self {
            frequency: None,
            notes: Some(notes),
            ..Self::tone(filename, 0.0, duration)
        }
    }

    /// Sets the category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets description and usage.
    pub fn describe(mut self, description: impl Into<String>, usage: impl Into<String>) -> Self {
        self.description = description.into();
        self.usage = usage.into();
        self
    }

    /// Sets the oscillator shape.
    pub fn wave(mut self, wave_type: Waveform) -> Self {
        self.wave_type = Some(wave_type);
        self
    }

    /// Marks the sound as a loop.
    pub fn looped(mut self) -> Self {
        self.is_loop = true;
        self
    }

    /// Attaches a retro profile.
    pub fn retro(mut self, profile: RetroProfile) -> Self {
        self.retro = Some(profile);
        self
    }

    /// Returns true if the sound uses chip emulation.
    pub fn is_retro(&self) -> bool {
        self.retro.is_some()
    }

    /// Returns true if the sound is rendered by a noise-based generator.
    ///
    /// Modern sounds are noise-based when ambient or when the filename marks
    /// them as wind or chaos; retro sounds when ambient or on the noise channel.
    pub fn is_noise(&self) -> bool {
        if self.category == Category::Ambient {
            return true;
        }
        match &self.retro {
            Some(profile) => profile.chip_type == ChipType::Noise,
            None => self.filename.contains("wind") || self.filename.contains("chaos"),
        }
    }

    /// Returns the filename without its extension.
    pub fn stem(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.filename)
    }
}
