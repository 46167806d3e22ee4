//! Sound catalogs.
//!
//! A catalog is the static list of descriptors exported together. Two
//! catalogs ship with the crate (see [`Catalog::builtin`]); custom catalogs
//! are loaded from JSON.

mod builtin;

use serde::{Deserialize, Serialize};

use crate::descriptor::{Category, SoundDescriptor};
use crate::error::SpecError;

/// Catalog edition: plain synthesized sounds or chip-emulated variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    /// Oscillator, melody and noise sounds.
    Modern,
    /// Chip-emulated variants.
    Retro,
}

impl Edition {
    /// Returns the edition as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Edition::Modern => "modern",
            Edition::Retro => "retro",
        }
    }

    /// Returns all editions.
    pub fn all() -> &'static [Edition] {
        &[Edition::Modern, Edition::Retro]
    }
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Edition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modern" => Ok(Edition::Modern),
            "retro" => Ok(Edition::Retro),
            _ => Err(format!("unknown edition: {}", s)),
        }
    }
}

/// An ordered list of sound descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Project title used in generated documentation.
    pub title: String,
    /// Catalog edition.
    pub edition: Edition,
    /// Sounds in export order.
    pub sounds: Vec<SoundDescriptor>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new(title: impl Into<String>, edition: Edition) -> Self {
        Self {
            title: title.into(),
            edition,
            sounds: Vec::new(),
        }
    }

    /// Returns the built-in catalog for an edition.
    pub fn builtin(edition: Edition) -> Self {
        match edition {
            Edition::Modern => builtin::modern(),
            Edition::Retro => builtin::retro(),
        }
    }

    /// Parses a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the catalog to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts the catalog to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Adds a sound.
    pub fn push(&mut self, sound: SoundDescriptor) {
        self.sounds.push(sound);
    }

    /// Finds a sound by filename, with or without extension.
    pub fn find(&self, name: &str) -> Option<&SoundDescriptor> {
        self.sounds
            .iter()
            .find(|s| s.filename == name || s.stem() == name)
    }

    /// Sounds of one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &SoundDescriptor> {
        self.sounds.iter().filter(move |s| s.category == category)
    }

    /// Number of sounds.
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Returns true if the catalog has no sounds.
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}
