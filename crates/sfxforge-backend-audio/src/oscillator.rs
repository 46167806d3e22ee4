//! Basic waveform functions.
//!
//! All oscillators here are evaluated from absolute time rather than an
//! accumulated phase, so a sample at index `i` depends only on `i`.

use std::f64::consts::PI;

use sfxforge_spec::Waveform;

/// 2π constant.
pub const TWO_PI: f64 = 2.0 * PI;

/// Sign function with `sign(0) = 0`.
///
/// `f64::signum` maps `+0.0` to `1.0`, which would turn the silent zero
/// crossings of a square wave into full-scale samples.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Sine wave at frequency `freq` and time `t` seconds.
#[inline]
pub fn sine(freq: f64, t: f64) -> f64 {
    (TWO_PI * freq * t).sin()
}

/// Square wave: the sign of the sine.
#[inline]
pub fn square(freq: f64, t: f64) -> f64 {
    sign(sine(freq, t))
}

/// Sawtooth wave: `2(tf - floor(tf + 0.5))`.
#[inline]
pub fn sawtooth(freq: f64, t: f64) -> f64 {
    let x = t * freq;
    2.0 * (x - (x + 0.5).floor())
}

/// Triangle wave: `2|saw| - 1`.
#[inline]
pub fn triangle(freq: f64, t: f64) -> f64 {
    2.0 * sawtooth(freq, t).abs() - 1.0
}

/// Evaluates a waveform at time `t`.
#[inline]
pub fn waveform(shape: Waveform, freq: f64, t: f64) -> f64 {
    match shape {
        Waveform::Sine => sine(freq, t),
        Waveform::Square => square(freq, t),
        Waveform::Sawtooth => sawtooth(freq, t),
        Waveform::Triangle => triangle(freq, t),
    }
}

/// Rounds `x` to the nearest multiple of `1 / steps`.
#[inline]
pub fn quantize(x: f64, steps: f64) -> f64 {
    (x * steps).round() / steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(1e-300), 1.0);
        assert_eq!(sign(-2.5), -1.0);
    }

    #[test]
    fn test_square_starts_silent() {
        assert_eq!(square(440.0, 0.0), 0.0);
        assert_eq!(square(1.0, 0.25), 1.0);
        assert_eq!(square(1.0, 0.75), -1.0);
    }

    #[test]
    fn test_sawtooth_values() {
        assert_eq!(sawtooth(1.0, 0.0), 0.0);
        assert!((sawtooth(1.0, 0.25) - 0.5).abs() < 1e-12);
        assert!((sawtooth(1.0, 0.75) + 0.5).abs() < 1e-12);
        // Wraps at the half period.
        assert!((sawtooth(1.0, 0.5) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_values() {
        assert_eq!(triangle(1.0, 0.0), -1.0);
        assert!((triangle(1.0, 0.25) - 0.0).abs() < 1e-12);
        assert!((triangle(1.0, 0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_waveform_dispatch() {
        let t = 0.0013;
        assert_eq!(waveform(Waveform::Sine, 300.0, t), sine(300.0, t));
        assert_eq!(waveform(Waveform::Square, 300.0, t), square(300.0, t));
        assert_eq!(waveform(Waveform::Sawtooth, 300.0, t), sawtooth(300.0, t));
        assert_eq!(waveform(Waveform::Triangle, 300.0, t), triangle(300.0, t));
    }

    #[test]
    fn test_all_waveforms_bounded() {
        for shape in [
            Waveform::Sine,
            Waveform::Square,
            Waveform::Sawtooth,
            Waveform::Triangle,
        ] {
            for i in 0..2000 {
                let v = waveform(shape, 523.25, i as f64 / 44100.0);
                assert!((-1.0..=1.0).contains(&v), "{} out of range: {}", shape, v);
            }
        }
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.5, 15.0), 8.0 / 15.0);
        assert_eq!(quantize(1.0, 15.0), 1.0);
        assert_eq!(quantize(-0.04, 7.0), 0.0);
    }
}
