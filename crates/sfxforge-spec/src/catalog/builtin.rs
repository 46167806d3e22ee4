//! Built-in catalogs for the Rock Paper Scissors Battle sound set.

use crate::descriptor::{Category, ChipType, RetroProfile, RetroStyle, SoundDescriptor};
use crate::recipe::Waveform;

use super::{Catalog, Edition};

const TITLE: &str = "Rock Paper Scissors Battle";

/// The modern sound set.
pub(super) fn modern() -> Catalog {
    let mut catalog = Catalog::new(TITLE, Edition::Modern);
    for sound in modern_sounds() {
        catalog.push(sound);
    }
    catalog
}

/// The retro sound set: the modern set re-voiced for chip channels.
pub(super) fn retro() -> Catalog {
    use ChipType::*;
    use RetroStyle::*;

    let profiles = [
        ("click.mp3", RetroProfile::new(Pulse, Nes).with_duty_cycle("12.5%")),
        ("win.mp3", RetroProfile::new(Square1, Nes).with_arpeggio()),
        ("lose.mp3", RetroProfile::new(Triangle, Gameboy).with_pitch_bend()),
        ("draw.mp3", RetroProfile::new(Square2, Gameboy).with_duty_cycle("50%")),
        ("gameStart.mp3", RetroProfile::new(Square1, Nes).with_arpeggio()),
        ("gameWin.mp3", RetroProfile::new(Square1, Arcade).with_arpeggio()),
        ("gameLose.mp3", RetroProfile::new(Triangle, Nes).with_pitch_bend()),
        ("gameDraw.mp3", RetroProfile::new(Square2, Gameboy).with_duty_cycle("25%")),
        ("countdown.mp3", RetroProfile::new(Pulse, Arcade).with_duty_cycle("25%")),
        ("tick.mp3", RetroProfile::new(Pulse, Nes).with_duty_cycle("12.5%")),
        ("timeUp.mp3", RetroProfile::new(Square1, Arcade).with_pitch_bend()),
        ("bonusRound.mp3", RetroProfile::new(Square2, C64).with_arpeggio()),
        ("chaos.mp3", RetroProfile::new(Noise, C64)),
        ("hum.mp3", RetroProfile::new(Triangle, Gameboy)),
        ("wind.mp3", RetroProfile::new(Noise, Nes)),
        ("lo-fi-loop.mp3", RetroProfile::new(Triangle, C64)),
    ];

    let mut catalog = Catalog::new(TITLE, Edition::Retro);
    for (sound, (filename, profile)) in modern_sounds().into_iter().zip(profiles) {
        debug_assert_eq!(sound.filename, filename);
        let mut sound = sound.retro(profile);
        // The chip channel decides the waveform of retro tones.
        sound.wave_type = None;
        catalog.push(sound);
    }
    catalog
}

fn modern_sounds() -> Vec<SoundDescriptor> {
    use Category::Ambient;
    use Waveform::*;

    vec![
        SoundDescriptor::tone("click.mp3", 800.0, 0.1)
            .wave(Square)
            .describe("Button click sound", "Triggered on all button interactions"),
        SoundDescriptor::melody("win.mp3", vec![523.0, 659.0, 784.0, 1047.0], 1.2)
            .describe("Round victory sound", "Player wins a single round"),
        SoundDescriptor::tone("lose.mp3", 200.0, 0.8)
            .wave(Sawtooth)
            .describe("Round defeat sound", "Player loses a single round"),
        SoundDescriptor::tone("draw.mp3", 440.0, 0.6)
            .wave(Sine)
            .describe("Round tie sound", "Round ends in a tie"),
        SoundDescriptor::melody("gameStart.mp3", vec![392.0, 523.0, 659.0], 1.5)
            .describe("Game initialization", "When new game session begins"),
        SoundDescriptor::melody(
            "gameWin.mp3",
            vec![523.0, 659.0, 784.0, 1047.0, 1319.0],
            2.5,
        )
        .describe("Complete game victory", "Player wins the entire game"),
        SoundDescriptor::tone("gameLose.mp3", 150.0, 2.0)
            .wave(Sawtooth)
            .describe("Complete game defeat", "Player loses the entire game"),
        SoundDescriptor::tone("gameDraw.mp3", 330.0, 1.8)
            .wave(Triangle)
            .describe("Game ends in tie", "Game ends with no winner"),
        SoundDescriptor::tone("countdown.mp3", 1000.0, 3.0)
            .wave(Sine)
            .describe("Countdown ticking", "During countdown sequences"),
        SoundDescriptor::tone("tick.mp3", 800.0, 0.1)
            .wave(Square)
            .describe("Per-second tick", "Each second during countdown"),
        SoundDescriptor::tone("timeUp.mp3", 600.0, 1.0)
            .wave(Triangle)
            .describe("Countdown ends", "When time runs out"),
        SoundDescriptor::melody("bonusRound.mp3", vec![659.0, 784.0, 880.0, 1047.0], 2.0)
            .describe("Bonus round begins", "Special bonus round activation"),
        SoundDescriptor::tone("chaos.mp3", 100.0, 1.5)
            .wave(Sawtooth)
            .describe("Chaos mode activation", "When chaos mode is triggered"),
        SoundDescriptor::tone("hum.mp3", 60.0, 10.0)
            .wave(Sine)
            .category(Ambient)
            .looped()
            .describe("Electric ambient hum", "Background atmosphere during gameplay"),
        SoundDescriptor::tone("wind.mp3", 200.0, 15.0)
            .wave(Sine)
            .category(Ambient)
            .looped()
            .describe(
                "Ambient wind sound",
                "Atmospheric wind during dramatic moments",
            ),
        SoundDescriptor::melody("lo-fi-loop.mp3", vec![220.0, 277.0, 330.0, 370.0], 20.0)
            .category(Ambient)
            .looped()
            .describe("Retro lo-fi music", "Background music for relaxed gameplay"),
    ]
}
