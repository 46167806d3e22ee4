use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

const BANNER: &str = "======================================";

/// Prints a cyan banner with a title line.
pub(crate) fn print_banner(title: &str) {
    println!("{}", BANNER.cyan());
    println!("{}", format!("  {}", title).cyan());
    println!("{}", BANNER.cyan());
    println!();
}

/// Writes a file, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, data).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Formats a byte count for console output.
pub(crate) fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
