//! Playback mix levels.
//!
//! A [`MixLevels`] value replaces global volume knobs: callers own it and
//! pass it to whatever plays or previews sounds.

use sfxforge_spec::Category;

use crate::buffer::SampleBuffer;

/// Master, effect and ambient volume, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixLevels {
    master: f64,
    sfx: f64,
    ambient: f64,
}

impl Default for MixLevels {
    fn default() -> Self {
        Self {
            master: 0.75,
            sfx: 0.85,
            ambient: 0.4,
        }
    }
}

impl MixLevels {
    /// Creates levels, clamping each into [0, 1].
    pub fn new(master: f64, sfx: f64, ambient: f64) -> Self {
        Self {
            master: clamp_level(master),
            sfx: clamp_level(sfx),
            ambient: clamp_level(ambient),
        }
    }

    pub fn master(&self) -> f64 {
        self.master
    }

    pub fn sfx(&self) -> f64 {
        self.sfx
    }

    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    pub fn set_master(&mut self, level: f64) {
        self.master = clamp_level(level);
    }

    pub fn set_sfx(&mut self, level: f64) {
        self.sfx = clamp_level(level);
    }

    pub fn set_ambient(&mut self, level: f64) {
        self.ambient = clamp_level(level);
    }

    /// Effective gain for a sound category: master × category level.
    pub fn gain_for(&self, category: Category) -> f64 {
        let level = match category {
            Category::Standard => self.sfx,
            Category::Ambient => self.ambient,
        };
        self.master * level
    }
}

fn clamp_level(level: f64) -> f64 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}

/// Returns a copy of `buffer` scaled by `gain`.
pub fn apply_gain(buffer: &SampleBuffer, gain: f64) -> SampleBuffer {
    let channels = buffer
        .channels
        .iter()
        .map(|channel| channel.iter().map(|s| s * gain).collect())
        .collect();
    SampleBuffer::new(buffer.sample_rate, channels)
}
