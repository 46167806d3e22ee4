//! Export file naming.
//!
//! Exported files use a `.wav` suffix in place of `.mp3`. Modern sounds live
//! under `assets/audio/`, retro sounds under `assets/retro/`, and ambient
//! sounds of either edition in an `ambient/` sub-directory.

use crate::catalog::Edition;
use crate::descriptor::{Category, SoundDescriptor};

/// Root directory for modern sounds.
pub const MODERN_ROOT: &str = "assets/audio";

/// Root directory for retro sounds.
pub const RETRO_ROOT: &str = "assets/retro";

/// Prefix for single-file retro downloads.
pub const RETRO_PREFIX: &str = "retro_";

/// Replaces a trailing `.mp3` with `.wav`.
///
/// Names without an `.mp3` suffix are returned unchanged.
pub fn wav_name(filename: &str) -> String {
    match filename.strip_suffix(".mp3") {
        Some(stem) => format!("{}.wav", stem),
        None => filename.to_string(),
    }
}

/// Root directory for an edition.
pub fn edition_root(edition: Edition) -> &'static str {
    match edition {
        Edition::Modern => MODERN_ROOT,
        Edition::Retro => RETRO_ROOT,
    }
}

/// Directory a sound is exported to, relative to the export root.
pub fn sound_dir(edition: Edition, category: Category) -> String {
    match category {
        Category::Standard => edition_root(edition).to_string(),
        Category::Ambient => format!("{}/ambient", edition_root(edition)),
    }
}

/// Archive path of an exported sound (e.g. `assets/retro/ambient/hum.wav`).
pub fn export_path(edition: Edition, sound: &SoundDescriptor) -> String {
    format!(
        "{}/{}",
        sound_dir(edition, sound.category),
        wav_name(&sound.filename)
    )
}

/// Name of a single downloaded file (e.g. `retro_click.wav`).
pub fn download_name(edition: Edition, sound: &SoundDescriptor) -> String {
    let name = wav_name(&sound.filename);
    match edition {
        Edition::Modern => name,
        Edition::Retro => format!("{}{}", RETRO_PREFIX, name),
    }
}

/// Name of the manifest document for an edition.
pub fn manifest_name(edition: Edition) -> &'static str {
    match edition {
        Edition::Modern => "README.md",
        Edition::Retro => "retro_README.md",
    }
}
