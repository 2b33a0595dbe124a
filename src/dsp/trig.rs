//! Table-based fast sine/cosine.

/*
Quarter-Wave Sine/Cosine
========================

We calculate sin and cos at the same time from one quarter-wave table. It's
good enough for audio: with 256 steps the result is good to about 5.3
decimal digits, which is far below anything an oscillator or LFO can
expose. Don't use this for real work.


Phase
-----

Phase is measured in cycles: 0.0 is 0°, 0.25 is 90°, 1.0 is a full turn.
Only non-negative phases are accepted.


Step 1: Quadrant
----------------

    phase * 4  =  quadrant + frac

       quadrant 0      quadrant 1      quadrant 2      quadrant 3
      [0.00, 0.25)    [0.25, 0.50)    [0.50, 0.75)    [0.75, 1.00)

Only the low two bits of the quadrant matter, so phases past one cycle
wrap naturally. Precision falls off as phase grows (f32 has fewer bits left
for the fraction), so keep accumulators in [0, 1).


Step 2: Table Lookup
--------------------

    frac * STEPS  =  idx + w

    x = lerp(table[idx],         table[idx + 1],         w)     sin(frac·90°)
    y = lerp(table[STEPS - idx], table[STEPS - idx - 1], w)     cos(frac·90°)

The cosine reads the same table mirrored: cos(θ) = sin(90° - θ).


Step 3: Symmetry
----------------

Rotating by 90° maps (sin, cos) to (cos, -sin). Applying that rotation
quadrant-many times gives the full circle:

    quadrant   sin     cos
       0        x       y
       1        y      -x
       2       -x      -y
       3       -y       x

See `Quadrant::apply`.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::shape::lerp;
use crate::dsp::table::QuarterSineTable;

/// A sine/cosine pair for the same phase.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SinCos {
    pub sin: f32,
    pub cos: f32,
}

/// Which quarter of the cycle a phase falls in.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// 0° - 90°
    First,
    /// 90° - 180°
    Second,
    /// 180° - 270°
    Third,
    /// 270° - 360°
    Fourth,
}

impl Quadrant {
    /// Quadrant for an integer quarter-turn count; whole turns are discarded.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match index & 3 {
            0 => Quadrant::First,
            1 => Quadrant::Second,
            2 => Quadrant::Third,
            _ => Quadrant::Fourth,
        }
    }

    /// Rotate a first-quadrant `(sin, cos)` pair into this quadrant.
    #[inline]
    pub fn apply(self, x: f32, y: f32) -> SinCos {
        let (sin, cos) = match self {
            Quadrant::First => (x, y),
            Quadrant::Second => (y, -x),
            Quadrant::Third => (-x, -y),
            Quadrant::Fourth => (-y, x),
        };
        SinCos { sin, cos }
    }
}

#[derive(Debug, Clone)]
pub struct FastTrig {
    table: QuarterSineTable,
}

impl FastTrig {
    /// Evaluator backed by the default 256-step table.
    pub fn new() -> Self {
        Self::with_table(QuarterSineTable::default())
    }

    pub fn with_table(table: QuarterSineTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &QuarterSineTable {
        &self.table
    }

    /// Approximate sine and cosine of `phase` cycles.
    ///
    /// `phase` must be non-negative. Negative phases trip a debug assertion
    /// and give meaningless output in release builds.
    #[inline]
    pub fn evaluate(&self, phase: f32) -> SinCos {
        debug_assert!(phase >= 0.0, "negative phase: {phase}");

        let table = self.table.as_slice();
        let steps = self.table.steps();

        let phase = phase * 4.0;
        let quadrant = phase as usize;
        let phase = (phase - quadrant as f32) * steps as f32;

        // Rounding can land exactly on `steps` for fractions just under 1.0
        let idx = (phase as usize).min(steps - 1);
        let w = phase - idx as f32;

        let x = lerp(table[idx], table[idx + 1], w);
        let mirrored = steps - idx;
        let y = lerp(table[mirrored], table[mirrored - 1], w);

        Quadrant::from_index(quadrant).apply(x, y)
    }

    #[inline]
    pub fn sin(&self, phase: f32) -> f32 {
        self.evaluate(phase).sin
    }

    #[inline]
    pub fn cos(&self, phase: f32) -> f32 {
        self.evaluate(phase).cos
    }
}

impl Default for FastTrig {
    fn default() -> Self {
        Self::new()
    }
}
