//! Amplitude envelopes used by the generators.
//!
//! Envelopes are stateless functions of time, evaluated per sample.

/// Exponential decay `exp(-rate · t)`.
#[inline]
pub fn exp_decay(t: f64, rate: f64) -> f64 {
    (-rate * t).exp()
}

/// Attack time of the retro tone envelope in seconds.
pub const RETRO_ATTACK: f64 = 0.02;

/// Fraction of the duration spent in the retro tone release.
pub const RETRO_RELEASE_FRACTION: f64 = 0.3;

/// Progress point after which a retro melody note fades out.
pub const NOTE_RELEASE_START: f64 = 0.8;

/// Length of a retro melody note release, as a fraction of the note.
pub const NOTE_RELEASE_LENGTH: f64 = 0.2;

/// Length of the fade in and fade out of retro noise, in seconds.
pub const NOISE_FADE: f64 = 0.1;

/// Linear attack / sustain / release envelope for retro tones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetroEnvelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Release time in seconds.
    pub release: f64,
    /// Total duration in seconds.
    pub duration: f64,
}

impl RetroEnvelope {
    /// Envelope for a tone of the given duration.
    pub fn for_duration(duration: f64) -> Self {
        Self {
            attack: RETRO_ATTACK,
            release: duration * RETRO_RELEASE_FRACTION,
            duration,
        }
    }

    /// Envelope level at time `t`.
    ///
    /// The attack takes priority over the release when they overlap.
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        if t < self.attack {
            t / self.attack
        } else if t > self.duration - self.release {
            (self.duration - t) / self.release
        } else {
            1.0
        }
    }
}

/// Level of a retro melody note at `progress` (0..1 through the note).
#[inline]
pub fn note_release(progress: f64) -> f64 {
    if progress > NOTE_RELEASE_START {
        (1.0 - progress) / NOTE_RELEASE_LENGTH
    } else {
        1.0
    }
}

/// Symmetric linear fade in and out, clamped to [0, 1].
#[inline]
pub fn edge_fade(t: f64, duration: f64, fade: f64) -> f64 {
    let fade_in = (t / fade).min(1.0);
    let fade_out = ((duration - t) / fade).min(1.0);
    fade_in.min(fade_out).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_decay() {
        assert_eq!(exp_decay(0.0, 2.0), 1.0);
        assert!((exp_decay(1.0, 2.0) - (-2.0_f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_retro_envelope_shape() {
        let env = RetroEnvelope::for_duration(1.0);
        assert_eq!(env.at(0.0), 0.0);
        assert!((env.at(0.01) - 0.5).abs() < 1e-12);
        assert_eq!(env.at(0.5), 1.0);
        assert!((env.at(0.85) - 0.5).abs() < 1e-9);
        assert!(env.at(0.9999) < 0.001);
    }

    #[test]
    fn test_note_release() {
        assert_eq!(note_release(0.0), 1.0);
        assert_eq!(note_release(0.8), 1.0);
        assert!((note_release(0.9) - 0.5).abs() < 1e-9);
        assert!(note_release(0.999) < 0.01);
    }

    #[test]
    fn test_edge_fade() {
        assert_eq!(edge_fade(0.0, 1.0, 0.1), 0.0);
        assert!((edge_fade(0.05, 1.0, 0.1) - 0.5).abs() < 1e-12);
        assert_eq!(edge_fade(0.5, 1.0, 0.1), 1.0);
        assert!((edge_fade(0.95, 1.0, 0.1) - 0.5).abs() < 1e-9);
        // Shorter than two fades: never reaches full level.
        assert!(edge_fade(0.05, 0.1, 0.1) <= 0.5 + 1e-12);
    }
}
