pub mod dsp;
pub mod graph; // Block-based effects and sources built on the dsp primitives

pub use dsp::delay::DelayLine;
pub use dsp::table::{QuarterSineTable, TableError};
pub use dsp::trig::{FastTrig, Quadrant, SinCos};

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Delay line capacity in samples. Max ~1.25s of history at ~52kHz.
pub const SAMPLE_ARRAY_SIZE: usize = 65536;
pub const SAMPLE_ARRAY_MASK: usize = SAMPLE_ARRAY_SIZE - 1;

/// Default quarter-sine resolution: 1 << 8 = 256 steps over [0, π/2].
pub const QUARTER_SINE_STEP_SHIFT: u32 = 8;
pub const QUARTER_SINE_STEPS: usize = 1 << QUARTER_SINE_STEP_SHIFT;

const _: () = assert!(SAMPLE_ARRAY_SIZE.is_power_of_two());
