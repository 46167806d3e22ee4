//! Validate command implementation
//!
//! Validates the selected catalogs and prints errors and warnings.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use sfxforge_spec::{catalog_hash, validate_catalog, Catalog, ValidationResult};
use std::path::Path;
use std::process::ExitCode;

use crate::input::{load_catalogs, EditionSelection};

/// One diagnostic in JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonDiagnostic {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Validation outcome of one catalog in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub title: String,
    pub edition: String,
    pub ok: bool,
    pub catalog_hash: Option<String>,
    pub errors: Vec<JsonDiagnostic>,
    pub warnings: Vec<JsonDiagnostic>,
}

impl CatalogReport {
    /// Validates a catalog and collects the report.
    pub fn build(catalog: &Catalog) -> Self {
        let result = validate_catalog(catalog);
        Self {
            title: catalog.title.clone(),
            edition: catalog.edition.to_string(),
            ok: result.is_ok(),
            catalog_hash: catalog_hash(catalog).ok(),
            errors: result
                .errors
                .iter()
                .map(|e| JsonDiagnostic {
                    code: e.code.to_string(),
                    message: e.message.clone(),
                    path: e.path.clone(),
                })
                .collect(),
            warnings: result
                .warnings
                .iter()
                .map(|w| JsonDiagnostic {
                    code: w.code.to_string(),
                    message: w.message.clone(),
                    path: w.path.clone(),
                })
                .collect(),
        }
    }
}

/// Run the validate command
///
/// # Arguments
/// * `catalog_path` - Optional catalog JSON file
/// * `selection` - Built-in editions to validate when no file is given
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if every catalog is valid, 1 otherwise
pub fn run(
    catalog_path: Option<&Path>,
    selection: EditionSelection,
    json_output: bool,
) -> Result<ExitCode> {
    let catalogs = load_catalogs(catalog_path, selection)?;

    let all_ok = if json_output {
        let reports: Vec<CatalogReport> = catalogs.iter().map(CatalogReport::build).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        reports.iter().all(|r| r.ok)
    } else {
        let mut all_ok = true;
        for catalog in &catalogs {
            println!(
                "{} {} ({})",
                "Validating:".cyan().bold(),
                catalog.title,
                catalog.edition
            );
            let result = validate_catalog(catalog);
            print_validation_results(&result);

            if result.is_ok() {
                println!(
                    "{} {} sound(s) valid\n",
                    "SUCCESS".green().bold(),
                    catalog.len()
                );
            } else {
                println!(
                    "{} Catalog has {} error(s)\n",
                    "FAILED".red().bold(),
                    result.errors.len()
                );
                all_ok = false;
            }
        }
        all_ok
    };

    if all_ok {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Print validation errors and warnings.
fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("{}", "Errors:".red().bold());
        for error in &result.errors {
            println!("  {} {}", "x".red(), error);
        }
    }

    if !result.warnings.is_empty() {
        println!("{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfxforge_spec::{Edition, SoundDescriptor};

    #[test]
    fn test_builtin_catalogs_report_ok() {
        for &edition in Edition::all() {
            let report = CatalogReport::build(&Catalog::builtin(edition));
            assert!(report.ok, "{:?}", report.errors);
            assert_eq!(report.edition, edition.as_str());
            assert_eq!(report.catalog_hash.as_ref().map(String::len), Some(64));
        }
    }

    #[test]
    fn test_report_collects_codes() {
        let mut catalog = Catalog::new("Broken", Edition::Modern);
        catalog.push(SoundDescriptor::tone("a.mp3", 440.0, 0.0));
        catalog.push(SoundDescriptor::tone("a.mp3", 440.0, 1.0));

        let report = CatalogReport::build(&catalog);
        assert!(!report.ok);
        let codes: Vec<&str> = report.errors.iter().map(|e| e.code.as_str()).collect();
        assert!(codes.contains(&"E001"));
        assert!(codes.contains(&"E011"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["edition"], "modern");
    }
}
