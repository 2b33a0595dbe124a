//! Normalized float <-> 32-bit fixed-point conversion.
//!
//! A fraction in `[0.0, 1.0)` maps onto the full `u32` range with a scale of
//! 2^32, so phase accumulators can run in integer arithmetic and wrap for
//! free on overflow.

pub const TWO_POW_32: f32 = 4_294_967_296.0;

/// Convert a 32-bit fixed-point fraction back to a float.
///
/// Values within half an `f32` ulp of 2^32 round up to exactly 1.0.
#[inline]
pub fn fixed_to_fraction(val: u32) -> f32 {
    ((1.0 / TWO_POW_32 as f64) * val as f64) as f32
}

/// Scale a `[0.0, 1.0)` fraction onto the full `u32` range.
///
/// Out-of-range inputs saturate: negatives become 0, 1.0 and above become
/// `u32::MAX`.
#[inline]
pub fn fraction_to_fixed(val: f32) -> u32 {
    (val * TWO_POW_32) as u32
}
