//! Catalog loading and render options shared by the commands.
//!
//! A catalog comes either from a JSON file (`--catalog`) or from the
//! built-in sets selected with `--edition`.

use anyhow::{bail, Context, Result};
use sfxforge_backend_audio::RenderContext;
use sfxforge_spec::layout::download_name;
use sfxforge_spec::{is_safe_filename, Catalog, Edition, SoundDescriptor, DEFAULT_SAMPLE_RATE};
use std::fs;
use std::path::{Path, PathBuf};

/// Default base seed for noise sounds.
pub const DEFAULT_SEED: u32 = 42;

/// Built-in edition selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EditionSelection {
    /// Modern sounds only.
    #[default]
    Modern,
    /// Retro sounds only.
    Retro,
    /// Both editions, modern first.
    All,
}

impl EditionSelection {
    /// Editions covered by this selection.
    pub fn editions(&self) -> &'static [Edition] {
        match self {
            EditionSelection::Modern => &[Edition::Modern],
            EditionSelection::Retro => &[Edition::Retro],
            EditionSelection::All => Edition::all(),
        }
    }
}

/// Rendering settings taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Base seed for noise sounds.
    pub seed: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: DEFAULT_SEED,
        }
    }
}

impl RenderOptions {
    /// Builds the stereo render context, rejecting unsupported sample rates.
    pub fn context(&self) -> Result<RenderContext> {
        RenderContext::new(self.sample_rate)
            .with_context(|| format!("cannot render at {} Hz", self.sample_rate))
    }
}

/// Loads a catalog from a JSON file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        edition = %catalog.edition,
        sounds = catalog.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Resolves the catalogs a command works on.
///
/// A catalog file wins over the edition selection.
pub fn load_catalogs(path: Option<&Path>, selection: EditionSelection) -> Result<Vec<Catalog>> {
    match path {
        Some(path) => Ok(vec![load_catalog_file(path)?]),
        None => Ok(selection
            .editions()
            .iter()
            .map(|&edition| Catalog::builtin(edition))
            .collect()),
    }
}

/// Finds a sound by filename or stem, searching catalogs in order.
pub fn find_sound<'a>(catalogs: &'a [Catalog], name: &str) -> Result<(&'a Catalog, &'a SoundDescriptor)> {
    catalogs
        .iter()
        .find_map(|catalog| catalog.find(name).map(|sound| (catalog, sound)))
        .with_context(|| format!("no sound named '{}' in the selected catalog", name))
}

/// Output path for a sound when none is given: its download name with
/// `prefix`, in the current directory.
pub fn default_output(catalog: &Catalog, sound: &SoundDescriptor, prefix: &str) -> Result<PathBuf> {
    if !is_safe_filename(&sound.filename) {
        bail!(
            "filename '{}' is not a plain file name; pass --output instead",
            sound.filename
        );
    }
    Ok(PathBuf::from(format!(
        "{}{}",
        prefix,
        download_name(catalog.edition, sound)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_edition_selection() {
        assert_eq!(EditionSelection::Modern.editions(), &[Edition::Modern]);
        assert_eq!(
            EditionSelection::All.editions(),
            &[Edition::Modern, Edition::Retro]
        );
    }

    #[test]
    fn test_builtin_catalogs() {
        let catalogs = load_catalogs(None, EditionSelection::All).unwrap();
        assert_eq!(catalogs.len(), 2);
        assert_eq!(catalogs[0].edition, Edition::Modern);
        assert_eq!(catalogs[1].edition, Edition::Retro);
    }

    #[test]
    fn test_catalog_file_overrides_selection() {
        let mut catalog = Catalog::new("Custom", Edition::Retro);
        catalog.push(SoundDescriptor::tone("beep.mp3", 440.0, 0.2));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(catalog.to_json_pretty().unwrap().as_bytes())
            .unwrap();

        let loaded = load_catalogs(Some(file.path()), EditionSelection::Modern).unwrap();
        assert_eq!(loaded, vec![catalog]);
    }

    #[test]
    fn test_bad_catalog_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = load_catalog_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));

        assert!(load_catalog_file(Path::new("/nonexistent/catalog.json")).is_err());
    }

    #[test]
    fn test_find_sound_by_stem_across_catalogs() {
        let catalogs = load_catalogs(None, EditionSelection::All).unwrap();
        let (catalog, sound) = find_sound(&catalogs, "click").unwrap();
        assert_eq!(catalog.edition, Edition::Modern);
        assert_eq!(sound.filename, "click.mp3");
        assert!(find_sound(&catalogs, "missing").is_err());
    }

    #[test]
    fn test_render_options_context() {
        let options = RenderOptions::default();
        let ctx = options.context().unwrap();
        assert_eq!(ctx.sample_rate(), 44100);
        assert_eq!(ctx.channel_count(), 2);

        let bad = RenderOptions {
            sample_rate: 100,
            seed: 1,
        };
        assert!(bad.context().is_err());
    }

    #[test]
    fn test_default_output() {
        let catalogs = load_catalogs(None, EditionSelection::Retro).unwrap();
        let (catalog, sound) = find_sound(&catalogs, "click").unwrap();
        assert_eq!(
            default_output(catalog, sound, "").unwrap(),
            PathBuf::from("retro_click.wav")
        );
        assert_eq!(
            default_output(catalog, sound, "preview_").unwrap(),
            PathBuf::from("preview_retro_click.wav")
        );

        let escaping = SoundDescriptor::tone("../../escaped.mp3", 440.0, 0.1);
        let err = default_output(catalog, &escaping, "").unwrap_err();
        assert!(err.to_string().contains("not a plain file name"));
    }
}
