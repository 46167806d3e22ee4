//! SfxForge Sound Descriptor Library
//!
//! This crate provides the static side of SfxForge: sound descriptors, the
//! recipe each descriptor selects, the built-in catalogs, validation, export
//! file layout, and canonical hashing.
//!
//! # Overview
//!
//! A [`SoundDescriptor`] declares one sound (frequency or melody notes,
//! duration, waveform, optional retro chip profile). [`SoundDescriptor::recipe`]
//! picks exactly one generator for it and returns a [`Recipe`] carrying only
//! that generator's parameters. Rendering recipes to audio is the job of the
//! audio backend crate.
//!
//! # Example
//!
//! ```
//! use sfxforge_spec::{Catalog, Edition, Recipe};
//! use sfxforge_spec::validation::validate_catalog;
//!
//! let catalog = Catalog::builtin(Edition::Modern);
//! assert!(validate_catalog(&catalog).is_ok());
//!
//! let click = catalog.find("click.mp3").unwrap();
//! assert!(matches!(click.recipe().unwrap(), Recipe::Tone { .. }));
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Catalog type and the built-in sound sets
//! - [`descriptor`]: Sound descriptor and retro profile types
//! - [`error`]: Error and warning types
//! - [`hash`]: Canonical hashing and per-sound seed derivation
//! - [`layout`]: Export file naming
//! - [`recipe`]: Generator recipes and selection policy
//! - [`validation`]: Descriptor and catalog validation

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod hash;
pub mod layout;
pub mod recipe;
pub mod validation;

/// Sample rate used when the caller does not choose one.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, Edition};
pub use descriptor::{Category, ChipType, RetroProfile, RetroStyle, SoundDescriptor};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{catalog_hash, derive_sound_seed};
pub use recipe::{NoiseType, Recipe, Waveform, FALLBACK_FREQUENCY};
pub use validation::{
    is_safe_filename, validate_catalog, validate_descriptor, MAX_DURATION_SECONDS,
};
