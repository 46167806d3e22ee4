//! Generate command implementation
//!
//! Renders a single catalog sound to a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use sfxforge_backend_audio::{generate_descriptor, WavResult};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::reporting;
use crate::input::{default_output, find_sound, load_catalogs, EditionSelection, RenderOptions};

/// Result of rendering one sound to disk.
#[derive(Debug)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub kind: &'static str,
    pub wav: WavResult,
}

/// Renders the named sound and writes it to `output`, or to the sound's
/// download name in the current directory.
pub fn generate_to_file(
    catalog_path: Option<&Path>,
    selection: EditionSelection,
    name: &str,
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<GeneratedFile> {
    let catalogs = load_catalogs(catalog_path, selection)?;
    let (catalog, sound) = find_sound(&catalogs, name)?;
    let ctx = options.context()?;

    let kind = sound
        .recipe()
        .with_context(|| format!("Cannot render '{}'", sound.filename))?
        .kind();
    let buffer = generate_descriptor(sound, &ctx, options.seed)
        .with_context(|| format!("Failed to render '{}'", sound.filename))?;
    let wav = WavResult::from_buffer(&buffer)
        .with_context(|| format!("Failed to encode '{}'", sound.filename))?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output(catalog, sound, "")?,
    };
    reporting::write_file(&path, &wav.wav_data)?;

    Ok(GeneratedFile { path, kind, wav })
}

/// Run the generate command
///
/// # Arguments
/// * `catalog_path` - Optional catalog JSON file
/// * `selection` - Built-in editions to search when no file is given
/// * `name` - Sound filename or stem
/// * `output` - Output WAV path
/// * `options` - Sample rate and seed
pub fn run(
    catalog_path: Option<&Path>,
    selection: EditionSelection,
    name: &str,
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Generating:".cyan().bold(), name);

    let generated = generate_to_file(catalog_path, selection, name, output, options)?;
    let duration_ms = start.elapsed().as_millis();

    println!("{} {}", "Generator:".dimmed(), generated.kind);
    println!(
        "{} {} Hz, {} channel(s), {:.3}s",
        "Format:".dimmed(),
        generated.wav.sample_rate,
        generated.wav.channels,
        generated.wav.duration_seconds()
    );
    println!("{} {}", "PCM hash:".dimmed(), generated.wav.pcm_hash);
    println!(
        "\n{} Wrote {} ({}, {}ms)",
        "SUCCESS".green().bold(),
        generated.path.display(),
        reporting::format_bytes(generated.wav.wav_data.len()),
        duration_ms
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_generate_click() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("click.wav");
        let generated = generate_to_file(
            None,
            EditionSelection::Modern,
            "click",
            Some(&out),
            &RenderOptions::default(),
        )
        .unwrap();

        assert_eq!(generated.kind, "tone");
        assert_eq!(generated.wav.num_samples, 4410);
        let bytes = fs::read(&out).unwrap();
        assert_eq!(bytes.len(), 44 + 4410 * 4);
        assert_eq!(bytes, generated.wav.wav_data);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let dir = tempdir().unwrap();
        let options = RenderOptions {
            sample_rate: 22050,
            seed: 7,
        };
        let a = generate_to_file(
            None,
            EditionSelection::Retro,
            "chaos.mp3",
            Some(&dir.path().join("a.wav")),
            &options,
        )
        .unwrap();
        let b = generate_to_file(
            None,
            EditionSelection::Retro,
            "chaos.mp3",
            Some(&dir.path().join("b.wav")),
            &options,
        )
        .unwrap();
        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
    }

    #[test]
    fn test_unknown_sound() {
        let dir = tempdir().unwrap();
        let err = generate_to_file(
            None,
            EditionSelection::All,
            "nope",
            Some(&dir.path().join("x.wav")),
            &RenderOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("no sound named 'nope'"));
    }
}
