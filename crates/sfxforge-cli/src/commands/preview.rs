//! Preview command implementation
//!
//! Renders one sound at its playback mix level and reports the resulting
//! peak and RMS, so levels can be checked without an audio device.

use anyhow::{Context, Result};
use colored::Colorize;
use sfxforge_backend_audio::{apply_gain, generate_descriptor, MixLevels, WavResult};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::reporting;
use crate::input::{default_output, find_sound, load_catalogs, EditionSelection, RenderOptions};

/// Result of a preview render.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub gain: f64,
    pub peak: f64,
    pub rms: f64,
    pub wav: WavResult,
}

/// Renders the named sound scaled by its category gain and writes it out.
///
/// The default output name is the download name prefixed with `preview_`.
pub fn preview_to_file(
    catalog_path: Option<&Path>,
    selection: EditionSelection,
    name: &str,
    output: Option<&Path>,
    options: &RenderOptions,
    levels: &MixLevels,
) -> Result<PreviewFile> {
    let catalogs = load_catalogs(catalog_path, selection)?;
    let (catalog, sound) = find_sound(&catalogs, name)?;
    let ctx = options.context()?;

    let buffer = generate_descriptor(sound, &ctx, options.seed)
        .with_context(|| format!("Failed to render '{}'", sound.filename))?;
    let gain = levels.gain_for(sound.category);
    let mixed = apply_gain(&buffer, gain);
    let wav = WavResult::from_buffer(&mixed)
        .with_context(|| format!("Failed to encode '{}'", sound.filename))?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output(catalog, sound, "preview_")?,
    };
    reporting::write_file(&path, &wav.wav_data)?;

    Ok(PreviewFile {
        path,
        gain,
        peak: mixed.peak(),
        rms: mixed.rms(),
        wav,
    })
}

/// Run the preview command
///
/// # Arguments
/// * `catalog_path` - Optional catalog JSON file
/// * `selection` - Built-in editions to search when no file is given
/// * `name` - Sound filename or stem
/// * `output` - Output WAV path
/// * `options` - Sample rate and seed
/// * `levels` - Mix levels applied to the sound
pub fn run(
    catalog_path: Option<&Path>,
    selection: EditionSelection,
    name: &str,
    output: Option<&Path>,
    options: &RenderOptions,
    levels: &MixLevels,
) -> Result<ExitCode> {
    println!("{} {}", "Previewing:".cyan().bold(), name);
    println!(
        "{} master {:.2}, sfx {:.2}, ambient {:.2}",
        "Levels:".dimmed(),
        levels.master(),
        levels.sfx(),
        levels.ambient()
    );

    let preview = preview_to_file(catalog_path, selection, name, output, options, levels)?;

    println!("{} {:.4}", "Gain:".dimmed(), preview.gain);
    println!("{} {:.4}", "Peak:".dimmed(), preview.peak);
    println!("{} {:.4}", "RMS:".dimmed(), preview.rms);
    println!(
        "\n{} Wrote {} ({})",
        "SUCCESS".green().bold(),
        preview.path.display(),
        reporting::format_bytes(preview.wav.wav_data.len())
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfxforge_spec::{Catalog, Edition};
    use tempfile::tempdir;

    #[test]
    fn test_preview_scales_by_category() {
        let dir = tempdir().unwrap();
        let options = RenderOptions {
            sample_rate: 8000,
            seed: 42,
        };
        let levels = MixLevels::new(0.5, 1.0, 0.2);

        let preview = preview_to_file(
            None,
            EditionSelection::Modern,
            "draw",
            Some(&dir.path().join("draw.wav")),
            &options,
            &levels,
        )
        .unwrap();
        assert_eq!(preview.gain, 0.5);

        let catalog = Catalog::builtin(Edition::Modern);
        let sound = catalog.find("draw").unwrap();
        let raw = generate_descriptor(sound, &options.context().unwrap(), 42).unwrap();
        assert!((preview.peak - raw.peak() * 0.5).abs() < 1e-12);
        assert!((preview.rms - raw.rms() * 0.5).abs() < 1e-12);
        assert!(dir.path().join("draw.wav").exists());
    }

    #[test]
    fn test_preview_ambient_uses_ambient_level() {
        let dir = tempdir().unwrap();
        let options = RenderOptions {
            sample_rate: 8000,
            seed: 42,
        };
        let preview = preview_to_file(
            None,
            EditionSelection::Modern,
            "hum",
            Some(&dir.path().join("hum.wav")),
            &options,
            &MixLevels::default(),
        )
        .unwrap();
        assert!((preview.gain - 0.3).abs() < 1e-12);
    }
}
