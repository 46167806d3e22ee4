//! SfxForge CLI - Command-line interface for procedural game sound effects
//!
//! This binary lists, validates, renders and exports the sounds of a
//! catalog as 16-bit PCM WAV files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use sfxforge_backend_audio::MixLevels;
use sfxforge_cli::commands;
use sfxforge_cli::input::{EditionSelection, RenderOptions, DEFAULT_SEED};
use sfxforge_cli::logging;
use sfxforge_spec::DEFAULT_SAMPLE_RATE;

/// SfxForge - Procedural Game Sound Effects
#[derive(Parser)]
#[command(name = "sfxforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Catalog JSON file (default: built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Built-in catalog edition to use
    #[arg(long, global = true, value_enum, default_value_t = EditionSelection::Modern)]
    edition: EditionSelection,

    /// Output sample rate in Hz
    #[arg(long, global = true, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Base seed for noise sounds
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog sounds and the generator each one uses
    List {
        /// Print the catalog as JSON instead of a table
        #[arg(long)]
        dump: bool,
    },

    /// Validate a catalog
    Validate {
        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render one sound to a WAV file
    Generate {
        /// Sound filename or stem (e.g. "click" or "click.mp3")
        name: String,

        /// Output WAV path (default: download name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a whole catalog into an asset directory tree
    Export {
        /// Export root directory
        #[arg(short = 'o', long, default_value = "export")]
        out_root: PathBuf,
    },

    /// Render one sound at its playback mix level
    Preview {
        /// Sound filename or stem
        name: String,

        /// Output WAV path (default: preview_<name>.wav)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Master volume in [0, 1]
        #[arg(long, default_value_t = MixLevels::default().master())]
        master: f64,

        /// Sound effect volume in [0, 1]
        #[arg(long, default_value_t = MixLevels::default().sfx())]
        sfx: f64,

        /// Ambient volume in [0, 1]
        #[arg(long, default_value_t = MixLevels::default().ambient())]
        ambient: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let catalog = cli.catalog.as_deref();
    let options = RenderOptions {
        sample_rate: cli.sample_rate,
        seed: cli.seed,
    };

    let result = match cli.command {
        Commands::List { dump } => commands::list::run(catalog, cli.edition, dump),
        Commands::Validate { json } => commands::validate::run(catalog, cli.edition, json),
        Commands::Generate { name, output } => {
            commands::generate::run(catalog, cli.edition, &name, output.as_deref(), &options)
        }
        Commands::Export { out_root } => {
            commands::export::run(catalog, cli.edition, &out_root, &options)
        }
        Commands::Preview {
            name,
            output,
            master,
            sfx,
            ambient,
        } => {
            let levels = MixLevels::new(master, sfx, ambient);
            commands::preview::run(
                catalog,
                cli.edition,
                &name,
                output.as_deref(),
                &options,
                &levels,
            )
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_defaults() {
        let cli = Cli::try_parse_from(["sfxforge", "list"]).unwrap();
        assert_eq!(cli.sample_rate, 44100);
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.edition, EditionSelection::Modern);
        assert!(cli.catalog.is_none());
        assert!(matches!(cli.command, Commands::List { dump: false }));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sfxforge",
            "export",
            "--edition",
            "all",
            "--sample-rate",
            "22050",
            "-o",
            "out",
        ])
        .unwrap();
        assert_eq!(cli.edition, EditionSelection::All);
        assert_eq!(cli.sample_rate, 22050);
        match cli.command {
            Commands::Export { out_root } => assert_eq!(out_root, PathBuf::from("out")),
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_preview_levels() {
        let cli = Cli::try_parse_from(["sfxforge", "preview", "hum", "--master", "0.5"]).unwrap();
        match cli.command {
            Commands::Preview {
                name,
                master,
                sfx,
                ambient,
                ..
            } => {
                assert_eq!(name, "hum");
                assert_eq!(master, 0.5);
                assert_eq!(sfx, 0.85);
                assert_eq!(ambient, 0.4);
            }
            _ => panic!("expected preview"),
        }
    }

    #[test]
    fn test_rejects_unknown_edition() {
        assert!(Cli::try_parse_from(["sfxforge", "list", "--edition", "future"]).is_err());
    }
}
