//! List command implementation
//!
//! Prints the sounds of the selected catalogs and the generator each one
//! maps to, or dumps the catalogs as JSON for editing.

use anyhow::Result;
use colored::Colorize;
use sfxforge_spec::{Catalog, SoundDescriptor};
use std::path::Path;
use std::process::ExitCode;

use crate::input::{load_catalogs, EditionSelection};

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub filename: String,
    pub category: &'static str,
    pub kind: String,
    pub duration: f64,
    pub is_loop: bool,
}

impl ListRow {
    fn from_sound(sound: &SoundDescriptor) -> Self {
        let kind = match sound.recipe() {
            Ok(recipe) => recipe.kind().to_string(),
            Err(_) => "invalid".to_string(),
        };
        Self {
            filename: sound.filename.clone(),
            category: sound.category.as_str(),
            kind,
            duration: sound.duration,
            is_loop: sound.is_loop,
        }
    }
}

/// Builds the table rows of a catalog, in catalog order.
pub fn rows(catalog: &Catalog) -> Vec<ListRow> {
    catalog.sounds.iter().map(ListRow::from_sound).collect()
}

/// Serializes catalogs for `--dump`: one object, or an array for several.
pub fn dump_json(catalogs: &[Catalog]) -> Result<String> {
    match catalogs {
        [single] => Ok(single.to_json_pretty()?),
        many => Ok(serde_json::to_string_pretty(many)?),
    }
}

/// Run the list command
///
/// # Arguments
/// * `catalog_path` - Optional catalog JSON file
/// * `selection` - Built-in editions to list when no file is given
/// * `dump` - Print JSON instead of a table
pub fn run(catalog_path: Option<&Path>, selection: EditionSelection, dump: bool) -> Result<ExitCode> {
    let catalogs = load_catalogs(catalog_path, selection)?;

    if dump {
        println!("{}", dump_json(&catalogs)?);
        return Ok(ExitCode::SUCCESS);
    }

    for catalog in &catalogs {
        println!(
            "{} {} ({}, {} sounds)",
            "Catalog:".cyan().bold(),
            catalog.title,
            catalog.edition,
            catalog.len()
        );
        println!(
            "  {:<20} {:<10} {:<13} {:>9}",
            "FILENAME".dimmed(),
            "CATEGORY".dimmed(),
            "GENERATOR".dimmed(),
            "DURATION".dimmed()
        );
        for row in rows(catalog) {
            let kind = if row.kind == "invalid" {
                row.kind.red().to_string()
            } else {
                row.kind.clone()
            };
            let loop_tag = if row.is_loop { " (loop)" } else { "" };
            println!(
                "  {:<20} {:<10} {:<13} {:>8}s{}",
                row.filename, row.category, kind, row.duration, loop_tag
            );
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sfxforge_spec::{Category, Edition};

    #[test]
    fn test_rows_show_generator_kind() {
        let mut catalog = Catalog::new("T", Edition::Modern);
        catalog.push(SoundDescriptor::tone("click.mp3", 800.0, 0.1));
        catalog.push(
            SoundDescriptor::melody("loop.mp3", vec![220.0, 330.0], 4.0)
                .category(Category::Ambient)
                .looped(),
        );
        catalog.push(SoundDescriptor::melody("bad.mp3", vec![], 1.0));

        assert_eq!(
            rows(&catalog),
            vec![
                ListRow {
                    filename: "click.mp3".into(),
                    category: "standard",
                    kind: "tone".into(),
                    duration: 0.1,
                    is_loop: false,
                },
                ListRow {
                    filename: "loop.mp3".into(),
                    category: "ambient",
                    kind: "melody".into(),
                    duration: 4.0,
                    is_loop: true,
                },
                ListRow {
                    filename: "bad.mp3".into(),
                    category: "standard",
                    kind: "invalid".into(),
                    duration: 1.0,
                    is_loop: false,
                },
            ]
        );
    }

    #[test]
    fn test_dump_round_trips() {
        let modern = Catalog::builtin(Edition::Modern);
        let json = dump_json(std::slice::from_ref(&modern)).unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), modern);

        let both = vec![modern, Catalog::builtin(Edition::Retro)];
        let json = dump_json(&both).unwrap();
        let parsed: Vec<Catalog> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, both);
    }
}
