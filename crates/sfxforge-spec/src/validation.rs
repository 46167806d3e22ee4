//! Descriptor and catalog validation.
//!
//! Validation is advisory: generation checks its own numeric inputs, but a
//! catalog that validates cleanly is guaranteed to render every sound.

use std::collections::HashSet;

use crate::catalog::{Catalog, Edition};
use crate::descriptor::SoundDescriptor;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::DEFAULT_SAMPLE_RATE;

/// Longest sound, in seconds, a descriptor may ask for.
///
/// Fits a 16-bit stereo WAV at every supported sample rate.
pub const MAX_DURATION_SECONDS: f64 = 600.0;

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Checks if a filename is a plain file name that stays inside its directory.
pub fn is_safe_filename(filename: &str) -> bool {
    filename_safety_errors(filename).is_empty()
}

/// Reasons a filename could escape the directory it is written to.
pub fn filename_safety_errors(filename: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if filename.starts_with('/') || filename.starts_with('\\') {
        errors.push(format!(
            "filename must be relative, not absolute: '{}'",
            filename
        ));
    }

    if filename.contains(':') {
        errors.push(format!(
            "filename must not contain ':' or a drive letter: '{}'",
            filename
        ));
    }

    if filename.contains('/') || filename.contains('\\') {
        errors.push(format!(
            "filename must not contain path separators: '{}'",
            filename
        ));
    }

    if filename.split(|c| c == '/' || c == '\\').any(|segment| segment == "..") {
        errors.push(format!("filename must not contain '..': '{}'", filename));
    }

    errors
}

/// Validates a single descriptor.
///
/// `path` prefixes field paths in the reported errors (e.g. "sounds\[2\]").
pub fn validate_descriptor(sound: &SoundDescriptor, path: &str) -> ValidationResult {
    let mut result = ValidationResult::success();

    if sound.filename.is_empty()
        || !(sound.filename.ends_with(".mp3") || sound.filename.ends_with(".wav"))
    {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFilename,
            format!(
                "filename '{}' must end with .mp3 or .wav",
                sound.filename
            ),
            format!("{}.filename", path),
        ));
    }

    for message in filename_safety_errors(&sound.filename) {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsafeFilename,
            message,
            format!("{}.filename", path),
        ));
    }

    if !is_positive_finite(sound.duration) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            format!("duration must be positive, got {}", sound.duration),
            format!("{}.duration", path),
        ));
    } else if sound.duration > MAX_DURATION_SECONDS {
        result.add_error(ValidationError::with_path(
            ErrorCode::DurationTooLong,
            format!(
                "duration must be at most {} seconds, got {}",
                MAX_DURATION_SECONDS, sound.duration
            ),
            format!("{}.duration", path),
        ));
    }

    if let Some(frequency) = sound.frequency {
        if !is_positive_finite(frequency) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidFrequency,
                format!("frequency must be positive, got {}", frequency),
                format!("{}.frequency", path),
            ));
        } else if frequency > DEFAULT_SAMPLE_RATE as f64 / 2.0 {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::AboveNyquist,
                format!(
                    "frequency {} Hz aliases at {} Hz",
                    frequency, DEFAULT_SAMPLE_RATE
                ),
                format!("{}.frequency", path),
            ));
        }
    }

    if let Some(notes) = &sound.notes {
        if notes.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyNotes,
                "note sequence is empty",
                format!("{}.notes", path),
            ));
        }
        for (i, &note) in notes.iter().enumerate() {
            if !is_positive_finite(note) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidNote,
                    format!("note frequency must be positive, got {}", note),
                    format!("{}.notes[{}]", path, i),
                ));
            }
        }
        if sound.frequency.is_some() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::IgnoredFrequency,
                "frequency is ignored when notes are present",
                format!("{}.frequency", path),
            ));
        }
    }

    if sound.is_retro() && sound.wave_type.is_some() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::IgnoredWaveType,
            "retro sounds take their waveform from the chip channel",
            format!("{}.wave_type", path),
        ));
    }

    if sound.description.trim().is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingDescription,
            "description is empty",
            format!("{}.description", path),
        ));
    }
    if sound.usage.trim().is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingUsage,
            "usage is empty",
            format!("{}.usage", path),
        ));
    }

    result
}

/// Validates a whole catalog: every descriptor plus catalog-level rules.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::success();

    if catalog.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyCatalog,
            "catalog has no sounds",
            "sounds",
        ));
        return result;
    }

    let mut seen = HashSet::new();
    for (i, sound) in catalog.sounds.iter().enumerate() {
        let path = format!("sounds[{}]", i);

        if !seen.insert(sound.filename.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateFilename,
                format!("duplicate filename '{}'", sound.filename),
                format!("{}.filename", path),
            ));
        }

        let retro_expected = catalog.edition == Edition::Retro;
        if sound.is_retro() != retro_expected {
            result.add_error(ValidationError::with_path(
                ErrorCode::EditionMismatch,
                format!(
                    "'{}' {} a retro profile in a {} catalog",
                    sound.filename,
                    if sound.is_retro() { "has" } else { "lacks" },
                    catalog.edition
                ),
                format!("{}.retro", path),
            ));
        }

        result.merge(validate_descriptor(sound, &path));
    }

    result
}
