//! Quarter-wave sine table.
//!
//! Holds `sin(θ)` sampled at `steps` uniform intervals over `[0, π/2]`,
//! both endpoints included, so the table is `steps + 1` entries long. The
//! extra entry lets the lookup interpolate into the last step without a
//! bounds special case.
//!
//! The table is either generated here at startup or supplied from outside
//! (e.g. baked into flash by a build script) and validated on the way in.

use std::f64::consts::FRAC_PI_2;

use crate::QUARTER_SINE_STEP_SHIFT;

/// Largest supported resolution: 65536 steps.
pub const MAX_STEP_SHIFT: u32 = 16;

/// First and last entries must be within this of 0.0 and 1.0.
const ENDPOINT_TOLERANCE: f32 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct QuarterSineTable {
    values: Box<[f32]>,
    shift: u32,
}

impl QuarterSineTable {
    /// Generate a table with `1 << shift` steps.
    pub fn generate(shift: u32) -> Result<Self, TableError> {
        if shift > MAX_STEP_SHIFT {
            return Err(TableError::ShiftOutOfRange { shift });
        }
        Ok(Self::build(shift))
    }

    /// Accept an externally generated table.
    ///
    /// The length must be a power of two plus one, every value finite, and
    /// the endpoints must be sin(0) and sin(π/2).
    pub fn from_values(values: impl Into<Vec<f32>>) -> Result<Self, TableError> {
        let values = values.into();
        let len = values.len();

        let steps = len.saturating_sub(1);
        if !steps.is_power_of_two() || steps > 1 << MAX_STEP_SHIFT {
            return Err(TableError::Length { len });
        }

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(TableError::NonFinite { index, value });
        }

        let first = values[0];
        let last = values[steps];
        if first.abs() > ENDPOINT_TOLERANCE || (last - 1.0).abs() > ENDPOINT_TOLERANCE {
            return Err(TableError::Endpoints { first, last });
        }

        Ok(Self {
            values: values.into_boxed_slice(),
            shift: steps.trailing_zeros(),
        })
    }

    fn build(shift: u32) -> Self {
        let steps = 1usize << shift;
        let values = (0..=steps)
            .map(|i| (i as f64 * FRAC_PI_2 / steps as f64).sin() as f32)
            .collect();

        Self { values, shift }
    }

    /// Number of interpolation steps (table length minus one).
    #[inline]
    pub fn steps(&self) -> usize {
        1 << self.shift
    }

    #[inline]
    pub fn shift(&self) -> u32 {
        self.shift
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

impl Default for QuarterSineTable {
    fn default() -> Self {
        Self::build(QUARTER_SINE_STEP_SHIFT)
    }
}

/// Errors from validating a quarter-sine table
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Requested resolution is above [`MAX_STEP_SHIFT`]
    ShiftOutOfRange { shift: u32 },
    /// Table length is not `2^k + 1`
    Length { len: usize },
    /// Table contains NaN or infinity
    NonFinite { index: usize, value: f32 },
    /// Table does not start at sin(0) or end at sin(π/2)
    Endpoints { first: f32, last: f32 },
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::ShiftOutOfRange { shift } => {
                write!(
                    f,
                    "Table step shift {} out of range (max {})",
                    shift, MAX_STEP_SHIFT
                )
            }
            TableError::Length { len } => {
                write!(
                    f,
                    "Table length {} is not a power of two plus one (max {} entries)",
                    len,
                    (1usize << MAX_STEP_SHIFT) + 1
                )
            }
            TableError::NonFinite { index, value } => {
                write!(f, "Table entry {} is not finite: {}", index, value)
            }
            TableError::Endpoints { first, last } => {
                write!(
                    f,
                    "Table must span sin(0)..sin(pi/2): got first {}, last {}",
                    first, last
                )
            }
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_shape() {
        let table = QuarterSineTable::default();
        assert_eq!(table.steps(), crate::QUARTER_SINE_STEPS);
        assert_eq!(table.as_slice().len(), 257);
        assert_eq!(table.as_slice()[0], 0.0);
        assert_eq!(table.as_slice()[256], 1.0);
    }

    #[test]
    fn test_generated_midpoint() {
        let table = QuarterSineTable::generate(4).unwrap();
        // step 8 of 16 is π/4
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((table.as_slice()[8] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_generated_is_monotonic() {
        let table = QuarterSineTable::generate(6).unwrap();
        for pair in table.as_slice().windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_generate_rejects_huge_shift() {
        assert_eq!(
            QuarterSineTable::generate(17),
            Err(TableError::ShiftOutOfRange { shift: 17 })
        );
    }

    #[test]
    fn test_from_values_accepts_generated() {
        let generated = QuarterSineTable::generate(5).unwrap();
        let table = QuarterSineTable::from_values(generated.as_slice()).unwrap();
        assert_eq!(table.shift(), 5);
        assert_eq!(table, generated);
    }

    #[test]
    fn test_from_values_rejects_bad_length() {
        let result = QuarterSineTable::from_values(vec![0.0, 0.5, 0.9, 1.0]);
        assert_eq!(result, Err(TableError::Length { len: 4 }));

        let result = QuarterSineTable::from_values(Vec::new());
        assert_eq!(result, Err(TableError::Length { len: 0 }));
    }

    #[test]
    fn test_from_values_rejects_nan() {
        let result = QuarterSineTable::from_values(vec![0.0, f32::NAN, 1.0]);
        assert!(matches!(result, Err(TableError::NonFinite { index: 1, .. })));
    }

    #[test]
    fn test_from_values_rejects_wrong_domain() {
        // A full-wave table squeezed into quarter-wave length
        let result = QuarterSineTable::from_values(vec![0.0, 1.0, 0.0]);
        assert!(matches!(result, Err(TableError::Endpoints { .. })));
    }

    #[test]
    fn test_error_messages() {
        let err = TableError::Length { len: 4 };
        assert!(err.to_string().contains("power of two"));
    }
}
