//! Export command implementation
//!
//! Renders every sound of the selected catalogs into the export directory
//! tree, writes a Markdown manifest per catalog and a JSON summary report.

use anyhow::{bail, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use sfxforge_backend_audio::generate_catalog;
use sfxforge_spec::layout::{export_path, manifest_name};
use sfxforge_spec::{catalog_hash, validate_catalog, BackendError, Catalog, ErrorCode};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::reporting;
use crate::input::{load_catalogs, EditionSelection, RenderOptions};
use crate::manifest;

/// File name of the summary report, written at the export root.
pub const SUMMARY_FILE: &str = "export_summary.json";

/// Export result of a single sound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundResult {
    /// Catalog edition
    pub edition: String,
    /// Source filename
    pub filename: String,
    /// Path relative to the export root
    pub path: String,
    /// Generator that rendered the sound
    pub kind: Option<String>,
    /// Whether rendering succeeded
    pub success: bool,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: Option<String>,
    /// Size of the WAV file in bytes
    pub bytes: Option<usize>,
    /// Error message if failed
    pub error: Option<String>,
    /// Stable error code if failed (e.g. "AUDIO_002")
    pub error_code: Option<String>,
}

/// Export result of one catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    /// Catalog title
    pub title: String,
    /// Catalog edition
    pub edition: String,
    /// BLAKE3 hash of the canonical catalog JSON
    pub catalog_hash: String,
    /// Manifest path relative to the export root
    pub manifest: String,
    /// Sounds in the catalog
    pub total: usize,
    /// Sounds written
    pub successful: usize,
    /// Sounds that failed
    pub failed: usize,
}

/// Summary report for an export run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Base seed for noise sounds
    pub seed: u32,
    /// Per-catalog results
    pub catalogs: Vec<CatalogSummary>,
    /// Per-sound results, in export order
    pub sounds: Vec<SoundResult>,
    /// Sounds written across all catalogs
    pub successful: usize,
    /// Sounds that failed across all catalogs
    pub failed: usize,
}

impl ExportSummary {
    /// Returns true if every sound was written.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Errors that would make export write outside the root or overwrite a file.
const LAYOUT_ERRORS: &[ErrorCode] = &[
    ErrorCode::InvalidFilename,
    ErrorCode::UnsafeFilename,
    ErrorCode::DuplicateFilename,
];

/// Fails if any filename in the catalog cannot be laid out safely.
///
/// Other validation errors are left to the renderer, which records them as
/// failed sounds.
pub fn check_layout(catalog: &Catalog) -> Result<()> {
    let errors: Vec<String> = validate_catalog(catalog)
        .errors
        .iter()
        .filter(|e| LAYOUT_ERRORS.contains(&e.code))
        .map(|e| e.to_string())
        .collect();

    if !errors.is_empty() {
        bail!(
            "catalog '{}' ({}) cannot be exported:\n  {}",
            catalog.title,
            catalog.edition,
            errors.join("\n  ")
        );
    }
    Ok(())
}

/// Exports one catalog under `out_root` and returns its per-sound results.
///
/// Nothing is written if a filename is unsafe or repeated. Failing sounds
/// are recorded; the rest of the catalog is still written.
pub fn export_catalog(
    catalog: &Catalog,
    out_root: &Path,
    options: &RenderOptions,
) -> Result<(CatalogSummary, Vec<SoundResult>)> {
    check_layout(catalog)?;
    let ctx = options.context()?;
    let edition = catalog.edition;
    let outcome = generate_catalog(&catalog.sounds, &ctx, options.seed);

    let mut results = Vec::with_capacity(outcome.total());

    for rendered in &outcome.rendered {
        let sound = &catalog.sounds[rendered.index];
        let rel_path = export_path(edition, sound);
        reporting::write_file(&out_root.join(&rel_path), &rendered.wav.wav_data)?;
        results.push((
            rendered.index,
            SoundResult {
                edition: edition.to_string(),
                filename: rendered.filename.clone(),
                path: rel_path,
                kind: Some(rendered.kind.to_string()),
                success: true,
                pcm_hash: Some(rendered.wav.pcm_hash.clone()),
                bytes: Some(rendered.wav.wav_data.len()),
                error: None,
                error_code: None,
            },
        ));
    }

    for failure in &outcome.failures {
        let sound = &catalog.sounds[failure.index];
        results.push((
            failure.index,
            SoundResult {
                edition: edition.to_string(),
                filename: failure.filename.clone(),
                path: export_path(edition, sound),
                kind: sound.recipe().ok().map(|r| r.kind().to_string()),
                success: false,
                pcm_hash: None,
                bytes: None,
                error: Some(failure.error.to_string()),
                error_code: Some(failure.error.code().to_string()),
            },
        ));
    }

    results.sort_by_key(|(index, _)| *index);
    let results: Vec<SoundResult> = results.into_iter().map(|(_, r)| r).collect();

    let manifest_file = manifest_name(edition);
    reporting::write_file(
        &out_root.join(manifest_file),
        manifest::render(catalog, options.sample_rate).as_bytes(),
    )?;

    let summary = CatalogSummary {
        title: catalog.title.clone(),
        edition: edition.to_string(),
        catalog_hash: catalog_hash(catalog)?,
        manifest: manifest_file.to_string(),
        total: outcome.total(),
        successful: outcome.rendered.len(),
        failed: outcome.failures.len(),
    };

    tracing::info!(
        edition = %edition,
        written = summary.successful,
        failed = summary.failed,
        "exported catalog"
    );

    Ok((summary, results))
}

/// Exports every catalog and writes the summary report.
pub fn export_all(
    catalogs: &[Catalog],
    out_root: &Path,
    options: &RenderOptions,
) -> Result<ExportSummary> {
    for catalog in catalogs {
        check_layout(catalog)?;
    }

    let mut summary = ExportSummary {
        sample_rate: options.sample_rate,
        seed: options.seed,
        catalogs: Vec::new(),
        sounds: Vec::new(),
        successful: 0,
        failed: 0,
    };

    for catalog in catalogs {
        let (catalog_summary, results) = export_catalog(catalog, out_root, options)?;
        summary.successful += catalog_summary.successful;
        summary.failed += catalog_summary.failed;
        summary.catalogs.push(catalog_summary);
        summary.sounds.extend(results);
    }

    let json = serde_json::to_string_pretty(&summary)?;
    reporting::write_file(&out_root.join(SUMMARY_FILE), json.as_bytes())?;

    Ok(summary)
}

/// Run the export command
///
/// # Arguments
/// * `catalog_path` - Optional catalog JSON file
/// * `selection` - Built-in editions to export when no file is given
/// * `out_root` - Export root directory
/// * `options` - Sample rate and seed
///
/// # Returns
/// Exit code: 0 if every sound was written, 1 otherwise
pub fn run(
    catalog_path: Option<&Path>,
    selection: EditionSelection,
    out_root: &Path,
    options: &RenderOptions,
) -> Result<ExitCode> {
    let start = Instant::now();
    let catalogs = load_catalogs(catalog_path, selection)?;
    for catalog in &catalogs {
        check_layout(catalog)?;
    }

    reporting::print_banner("SfxForge Export");
    println!("{} {}", "Output directory:".blue().bold(), out_root.display());
    println!(
        "{} {} Hz, seed {}",
        "Render settings:".blue().bold(),
        options.sample_rate,
        options.seed
    );
    for catalog in &catalogs {
        println!(
            "{} {} sound(s) from {} ({})",
            "INFO".blue().bold(),
            catalog.len(),
            catalog.title,
            catalog.edition
        );
    }
    println!();

    let summary = export_all(&catalogs, out_root, options)?;
    let duration_ms = start.elapsed().as_millis();

    print_summary(&summary, duration_ms);
    println!("{} {}", "Outputs saved to:".blue().bold(), out_root.display());
    println!(
        "{} {}",
        "Summary report:".blue().bold(),
        out_root.join(SUMMARY_FILE).display()
    );

    if summary.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_summary(summary: &ExportSummary, duration_ms: u128) {
    reporting::print_banner("Export Summary");
    println!(
        "{} {}",
        "Total sounds:".bold(),
        summary.successful + summary.failed
    );
    println!("{} {}", "Successful:".green().bold(), summary.successful);
    println!("{} {}", "Failed:".red().bold(), summary.failed);
    println!("{} {}ms", "Duration:".bold(), duration_ms);
    println!();

    let written: Vec<&SoundResult> = summary.sounds.iter().filter(|s| s.success).collect();
    if !written.is_empty() {
        println!("{}", "Exported sounds with BLAKE3 PCM hashes:".green().bold());
        for sound in written {
            let hash = sound.pcm_hash.as_deref().unwrap_or("");
            println!(
                "  {} {} {}",
                "SUCCESS".green(),
                sound.path,
                hash.get(..16).unwrap_or(hash).dimmed()
            );
        }
        println!();
    }

    let failed: Vec<&SoundResult> = summary.sounds.iter().filter(|s| !s.success).collect();
    if !failed.is_empty() {
        println!("{}", "Failed sounds:".red().bold());
        for sound in failed {
            println!(
                "  {} {} ({}) [{}]: {}",
                "FAILED".red(),
                sound.filename,
                sound.edition,
                sound.error_code.as_deref().unwrap_or("?"),
                sound.error.as_deref().unwrap_or("unknown error")
            );
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sfxforge_spec::{Category, Edition, SoundDescriptor};
    use std::fs;
    use tempfile::tempdir;

    fn options() -> RenderOptions {
        RenderOptions {
            sample_rate: 8000,
            seed: 42,
        }
    }

    #[test]
    fn test_partial_failure_keeps_going() {
        let mut catalog = Catalog::new("Mixed", Edition::Modern);
        catalog.push(SoundDescriptor::tone("ok.mp3", 440.0, 0.1));
        catalog.push(SoundDescriptor::tone("broken.mp3", 440.0, 0.0));
        catalog.push(
            SoundDescriptor::tone("bed.mp3", 60.0, 0.2)
                .category(Category::Ambient)
                .looped(),
        );

        let dir = tempdir().unwrap();
        let (summary, results) = export_catalog(&catalog, dir.path(), &options()).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.successful, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            results.iter().map(|r| r.filename.as_str()).collect::<Vec<_>>(),
            vec!["ok.mp3", "broken.mp3", "bed.mp3"]
        );
        assert!(!results[1].success);
        assert!(results[1].error.as_deref().unwrap().contains("invalid duration"));
        assert_eq!(results[1].kind.as_deref(), Some("tone"));
        assert_eq!(results[1].error_code.as_deref(), Some("AUDIO_002"));

        assert!(dir.path().join("assets/audio/ok.wav").exists());
        assert!(dir.path().join("assets/audio/ambient/bed.wav").exists());
        assert!(!dir.path().join("assets/audio/broken.wav").exists());
        assert!(dir.path().join("README.md").exists());
    }

    #[test]
    fn test_summary_file_round_trips() {
        let mut catalog = Catalog::new("Tiny", Edition::Modern);
        catalog.push(SoundDescriptor::tone("beep.mp3", 880.0, 0.05));

        let dir = tempdir().unwrap();
        let summary = export_all(std::slice::from_ref(&catalog), dir.path(), &options()).unwrap();
        assert!(summary.is_complete());

        let json = fs::read_to_string(dir.path().join(SUMMARY_FILE)).unwrap();
        let parsed: ExportSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
        assert_eq!(parsed.sounds[0].bytes, Some(44 + 400 * 4));
        assert_eq!(parsed.catalogs[0].catalog_hash, catalog_hash(&catalog).unwrap());
    }

    #[test]
    fn test_escaping_filename_writes_nothing() {
        let mut catalog = Catalog::new("Hostile", Edition::Modern);
        catalog.push(SoundDescriptor::tone("ok.mp3", 440.0, 0.1));
        catalog.push(SoundDescriptor::tone("../../../escaped.mp3", 440.0, 0.1));

        let parent = tempdir().unwrap();
        let out_root = parent.path().join("a/b/c");
        let err = export_all(std::slice::from_ref(&catalog), &out_root, &options()).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("E006"), "{}", message);
        assert!(message.contains("sounds[1].filename"), "{}", message);
        assert!(!parent.path().join("a").exists());
        assert!(!parent.path().join("escaped.wav").exists());
    }

    #[test]
    fn test_duplicate_filenames_rejected() {
        let mut catalog = Catalog::new("Twice", Edition::Modern);
        catalog.push(SoundDescriptor::tone("beep.mp3", 440.0, 0.1));
        catalog.push(SoundDescriptor::tone("beep.mp3", 880.0, 0.1));

        let dir = tempdir().unwrap();
        let err = export_catalog(&catalog, dir.path(), &options()).unwrap_err();
        assert!(err.to_string().contains("E011"), "{}", err);
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_check_layout_ignores_render_errors() {
        let mut catalog = Catalog::new("Odd", Edition::Modern);
        catalog.push(SoundDescriptor::tone("silent.mp3", 440.0, 0.0));
        catalog.push(SoundDescriptor::tone("huge.mp3", 440.0, 1e300));
        assert!(check_layout(&catalog).is_ok());

        let dir = tempdir().unwrap();
        let (summary, results) = export_catalog(&catalog, dir.path(), &options()).unwrap();
        assert_eq!(summary.failed, 2);
        assert_eq!(results[1].error_code.as_deref(), Some("AUDIO_002"));
    }
}
