//! Range mapping, interpolation and soft limiting.
//!
//! # Pot Mapping
//!
//! Front-panel pots arrive as a normalized 0.0..1.0 value. Musical
//! parameters rarely want that range directly:
//!
//!   linear(pot, a, b)   a + pot * (b - a)
//!   cubic(pot, a, b)    linear(pot³, a, b)
//!
//! The cubic curve spends most of the knob travel at the low end, which is
//! where the ear wants resolution for frequencies. `pot_frequency` maps a
//! pot onto 220 Hz..6.46 kHz with the centre detent landing near 1 kHz:
//!
//!   220 + 0.5³ * (6460 - 220) = 220 + 780 = 1000 Hz
//!
//! # Soft Limiting
//!
//!   f(x) = x / (1 + |x|)
//!
//! Smooth, monotonic, never reaches ±1. Small signals pass nearly unchanged
//! (slope 1 at the origin), large ones are squashed toward the rails.

/// Lowest frequency reachable from [`pot_frequency`].
pub const POT_FREQUENCY_MIN: f32 = 220.0;
/// Highest frequency reachable from [`pot_frequency`].
pub const POT_FREQUENCY_MAX: f32 = 6460.0;

/// Linear interpolation: `a` at `t = 0.0`, `b` at `t = 1.0`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map a 0..1 pot linearly onto `a..b`.
#[inline]
pub fn linear(pot: f32, a: f32, b: f32) -> f32 {
    lerp(a, b, pot)
}

/// Map a 0..1 pot onto `a..b` along a cubic curve.
#[inline]
pub fn cubic(pot: f32, a: f32, b: f32) -> f32 {
    linear(pot * pot * pot, a, b)
}

/// "Reasonable frequency range": 220 Hz - 6.46 kHz, pot centre at 1 kHz.
#[inline]
pub fn pot_frequency(pot: f32) -> f32 {
    cubic(pot, POT_FREQUENCY_MIN, POT_FREQUENCY_MAX)
}

/// Smoothly limit `x` to the open interval (-1, 1).
#[inline]
pub fn limit_value(x: f32) -> f32 {
    x / (1.0 + x.abs())
}

/// Apply [`limit_value`] to an entire buffer in place.
pub fn limit_buffer(buffer: &mut [f32]) {
    for sample in buffer.iter_mut() {
        *sample = limit_value(*sample);
    }
}
