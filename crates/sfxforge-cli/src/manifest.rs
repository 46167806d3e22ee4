//! Markdown manifest for an exported catalog.
//!
//! The manifest is derived from the catalog alone, so exporting the same
//! catalog twice produces the same text.

use sfxforge_spec::layout::{edition_root, wav_name};
use sfxforge_spec::{Catalog, Category, Edition, SoundDescriptor};

/// Renders the manifest for a catalog exported at `sample_rate`.
pub fn render(catalog: &Catalog, sample_rate: u32) -> String {
    let edition = catalog.edition;
    let root = edition_root(edition);
    let standard: Vec<&SoundDescriptor> = catalog.by_category(Category::Standard).collect();
    let ambient: Vec<&SoundDescriptor> = catalog.by_category(Category::Ambient).collect();

    let mut lines = Vec::new();

    match edition {
        Edition::Modern => {
            lines.push(format!("# {} - Audio Assets", catalog.title));
            lines.push(String::new());
            lines.push(format!(
                "This package contains all audio files required for {}.",
                catalog.title
            ));
        }
        Edition::Retro => {
            lines.push(format!("# {} - Retro Audio Assets", catalog.title));
            lines.push(String::new());
            lines.push(format!(
                "This package contains retro arcade-style versions of the audio files for {}.",
                catalog.title
            ));
        }
    }
    lines.push(String::new());

    lines.push("## Overview".to_string());
    lines.push(String::new());
    lines.push(match edition {
        Edition::Modern => format!(
            "This collection provides {} procedurally generated sound effects.",
            catalog.len()
        ),
        Edition::Retro => format!(
            "This collection provides {} retro 8-bit/16-bit sound effects imitating classic \
             sound chips. Durations and usage match the modern set.",
            catalog.len()
        ),
    });
    lines.push(String::new());

    lines.push("## File Structure".to_string());
    lines.push(String::new());
    lines.push("```".to_string());
    lines.extend(file_tree(root, &standard, &ambient));
    lines.push("```".to_string());
    lines.push(String::new());

    let (standard_heading, ambient_heading) = match edition {
        Edition::Modern => ("Standard Sound Effects", "Ambient Loops"),
        Edition::Retro => ("Retro Sound Effects", "Retro Ambient Loops"),
    };

    lines.push(format!("## {} (/{}/)", standard_heading, root));
    lines.push(String::new());
    for sound in &standard {
        lines.extend(sound_section(edition, sound));
        lines.push(String::new());
    }

    lines.push(format!("## {} (/{}/ambient/)", ambient_heading, root));
    lines.push(String::new());
    for sound in &ambient {
        lines.extend(sound_section(edition, sound));
        lines.push(String::new());
    }

    if edition == Edition::Retro {
        lines.extend(chip_specifications());
        lines.push(String::new());
    }

    lines.push("## File Specifications".to_string());
    lines.push(String::new());
    lines.push("- **Format**: WAV (RIFF, PCM)".to_string());
    lines.push(format!("- **Sample Rate**: {} Hz", sample_rate));
    lines.push("- **Bit Depth**: 16-bit".to_string());
    lines.push("- **Channels**: Stereo".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn file_tree(root: &str, standard: &[&SoundDescriptor], ambient: &[&SoundDescriptor]) -> Vec<String> {
    let (parent, leaf) = root.split_once('/').unwrap_or(("", root));
    let mut lines = Vec::new();
    let indent = if parent.is_empty() {
        ""
    } else {
        lines.push(format!("{}/", parent));
        lines.push(format!("└── {}/", leaf));
        "    "
    };

    for (i, sound) in standard.iter().enumerate() {
        let last = ambient.is_empty() && i + 1 == standard.len();
        let branch = if last { "└──" } else { "├──" };
        lines.push(format!("{}{} {}", indent, branch, wav_name(&sound.filename)));
    }
    if !ambient.is_empty() {
        lines.push(format!("{}└── ambient/", indent));
        for (i, sound) in ambient.iter().enumerate() {
            let branch = if i + 1 == ambient.len() { "└──" } else { "├──" };
            lines.push(format!("{}    {} {}", indent, branch, wav_name(&sound.filename)));
        }
    }
    lines
}

fn sound_section(edition: Edition, sound: &SoundDescriptor) -> Vec<String> {
    let loop_tag = if sound.is_loop { " (Loop)" } else { "" };
    let mut lines = vec![
        format!("### {}", wav_name(&sound.filename)),
        format!("- **Description**: {}", sound.description),
        format!("- **Usage**: {}", sound.usage),
        format!("- **Duration**: {}s{}", sound.duration, loop_tag),
    ];

    match (edition, &sound.retro) {
        (Edition::Retro, Some(profile)) => {
            lines.push(format!(
                "- **Retro Style**: {}",
                profile.style.as_str().to_uppercase()
            ));
            lines.push(format!(
                "- **Chip Channel**: {}",
                profile.chip_type.as_str().to_uppercase()
            ));
            let tags = profile.effect_tags();
            let effects = if tags.is_empty() {
                "None".to_string()
            } else {
                tags.join(", ")
            };
            lines.push(format!("- **Effects**: {}", effects));
        }
        _ => {
            let category = match sound.category {
                Category::Standard => "Standard SFX",
                Category::Ambient => "Ambient Background",
            };
            lines.push(format!("- **Category**: {}", category));
        }
    }
    lines
}

fn chip_specifications() -> Vec<String> {
    [
        "## Sound Chip Specifications",
        "",
        "### NES (Nintendo Entertainment System)",
        "- 2 Square wave channels (duty cycles: 12.5%, 25%, 50%, 75%)",
        "- 1 Triangle wave channel",
        "- 1 Noise channel",
        "",
        "### Game Boy",
        "- 2 Square wave channels with volume envelope",
        "- 1 Wave pattern channel",
        "- 1 Noise channel",
        "",
        "### C64 (Commodore 64)",
        "- 3 Oscillators (square, triangle, sawtooth, noise)",
        "- Filter with cutoff and resonance",
        "",
        "### Arcade",
        "- Multiple sound channels",
        "- Sharp attack/decay envelopes",
        "- High-frequency square waves",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
